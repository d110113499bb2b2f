use serde::{Deserialize, Serialize};
use vigil_core::Price;

/// Kind of pattern found in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertType {
    /// ALGO ask posted at the elevated threshold price
    ElevatedPostAsk,
    /// ALGO quotes reverted right after the elevated sell
    FastRevert,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::ElevatedPostAsk => "elevated post-ask",
            AlertType::FastRevert => "fast revert",
        }
    }
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Surveillance alert (one per pattern, not per matching event)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveillanceAlert {
    /// Alert type
    pub alert_type: AlertType,
    /// Sequence number of the first matching event
    pub t: u64,
    /// Price of the first matching event
    pub price: Option<Price>,
    /// Description
    pub description: String,
}

impl SurveillanceAlert {
    pub fn elevated_post_ask(t: u64, threshold: Price) -> Self {
        Self {
            alert_type: AlertType::ElevatedPostAsk,
            t,
            price: Some(threshold),
            description: format!(
                "Elevated post-ask: ALGO posted an ask at the sell threshold {threshold} (t={t})"
            ),
        }
    }

    pub fn fast_revert(t: u64, price: Option<Price>) -> Self {
        Self {
            alert_type: AlertType::FastRevert,
            t,
            price,
            description: format!(
                "Fast revert: ALGO reverted its quotes right after the elevated sell (t={t})"
            ),
        }
    }
}

impl std::fmt::Display for SurveillanceAlert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}
