use serde::{Deserialize, Serialize};

/// Participant (or bookkeeping role) behind an order or an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Actor {
    /// Initial quote seeding
    Init,
    /// Retail participant posting a limit buy
    Human,
    /// Quoting algorithm under surveillance
    Algo,
    /// Passive third-party liquidity
    Other,
    /// Checkpoints taken by the script
    Check,
    /// Terminal outcome of a benign run
    Result,
}

impl Actor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Actor::Init => "INIT",
            Actor::Human => "HUMAN",
            Actor::Algo => "ALGO",
            Actor::Other => "OTHER",
            Actor::Check => "CHECK",
            Actor::Result => "RESULT",
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
