//! Simulation - one full run
//!
//! Ties together:
//! - Configuration validation
//! - The scripted scenario
//! - Surveillance over the finished log

use serde::Serialize;
use vigil_core::{EventLog, Price};
use vigil_order_book::BookSnapshot;
use vigil_scenario::{Branch, ScenarioConfig, ScenarioEngine, ScenarioParams};
use vigil_surveillance::{QuoteSurveillance, SurveillanceAlert};

use crate::error::Result;

/// Everything a run hands back to its caller
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    /// Validated parameters the run used
    pub params: ScenarioParams,
    /// Sell threshold the decision compared against
    pub threshold: Price,
    /// Branch the decision step took
    pub branch: Branch,
    /// Event log, ordered by t
    pub events: EventLog,
    /// Final book, bids descending and asks ascending
    pub book: BookSnapshot,
    /// Surveillance findings; empty when no pattern was detected
    pub flags: Vec<SurveillanceAlert>,
}

impl RunResult {
    /// Flags as plain strings, in detection order
    pub fn flag_messages(&self) -> Vec<String> {
        self.flags.iter().map(|f| f.description.clone()).collect()
    }

    pub fn pattern_detected(&self) -> bool {
        !self.flags.is_empty()
    }
}

/// Validate `config`, run the script and scan the resulting log.
///
/// Fails only on invalid configuration, before any step executes.
pub fn simulate(config: &ScenarioConfig) -> Result<RunResult> {
    let mut engine = ScenarioEngine::from_config(config)?;
    let outcome = engine.run();

    let surveillance =
        QuoteSurveillance::new(outcome.params.fair_price, outcome.params.threshold_pct);
    let flags = surveillance.scan(outcome.events.as_slice());

    Ok(RunResult {
        params: outcome.params,
        threshold: outcome.threshold(),
        branch: outcome.branch,
        book: outcome.book.snapshot(),
        events: outcome.events,
        flags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RunnerError;

    #[test]
    fn test_simulate_defaults() {
        let result = simulate(&ScenarioConfig::default()).unwrap();

        assert_eq!(result.branch, Branch::Benign);
        assert_eq!(result.events.len(), 14);
        assert!(!result.pattern_detected());
        assert!(result.flag_messages().is_empty());
    }

    #[test]
    fn test_simulate_rejects_invalid_config() {
        let config = ScenarioConfig {
            threshold_pct: 150,
            ..Default::default()
        };
        let err = simulate(&config).unwrap_err();
        assert!(matches!(err, RunnerError::Config(_)));
    }
}
