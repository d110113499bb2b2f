//! Scenario Script Engine
//!
//! Runs the fixed script over a fresh state and hands back the final book
//! and the event log. Parameters are validated before anything runs.

use serde::Serialize;
use vigil_core::{EventLog, Price};
use vigil_order_book::OrderBook;

use crate::config::{ScenarioConfig, ScenarioParams};
use crate::error::Result;
use crate::state::{Branch, ScenarioState};
use crate::steps::ScriptStep;

/// What a completed script leaves behind
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub params: ScenarioParams,
    pub book: OrderBook,
    pub events: EventLog,
    pub branch: Branch,
}

impl ScenarioOutcome {
    /// Threshold the decision step compared against
    pub fn threshold(&self) -> Price {
        self.params.threshold()
    }
}

/// Per-step trace of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepTrace {
    pub step: ScriptStep,
    /// First sequence number recorded by the step
    pub first_t: u64,
    pub emitted: usize,
}

/// Runs the scripted scenario
pub struct ScenarioEngine {
    params: ScenarioParams,
    trace: Vec<StepTrace>,
}

impl ScenarioEngine {
    pub fn new(params: ScenarioParams) -> Self {
        Self {
            params,
            trace: Vec::with_capacity(ScriptStep::ALL.len()),
        }
    }

    /// Validate `config` and build an engine for it
    pub fn from_config(config: &ScenarioConfig) -> Result<Self> {
        Ok(Self::new(config.validate()?))
    }

    /// Steps executed by the last `run`
    pub fn trace(&self) -> &[StepTrace] {
        &self.trace
    }

    /// Run the whole script to completion
    pub fn run(&mut self) -> ScenarioOutcome {
        log::info!(
            "Running scenario: fair={} bid={} ask={} human={} steps={} threshold={}%",
            self.params.fair_price,
            self.params.algo_bid,
            self.params.algo_ask,
            self.params.human_buy,
            self.params.steps,
            self.params.threshold_pct
        );

        self.trace.clear();
        let mut state = ScenarioState::new();

        for step in ScriptStep::ALL {
            let first_t = state.next_t();
            let emitted = step.apply(&mut state, &self.params);
            log::debug!("Step {} recorded {} event(s) from t={}", step, emitted, first_t);
            self.trace.push(StepTrace {
                step,
                first_t,
                emitted,
            });
        }

        let (book, events, branch) = state.into_parts();
        // Decision always sets the branch
        let branch = branch.unwrap_or(Branch::Benign);

        log::info!(
            "Scenario finished: {} events, {:?} branch, {} orders resting",
            events.len(),
            branch,
            book.order_count()
        );

        ScenarioOutcome {
            params: self.params,
            book,
            events,
            branch,
        }
    }
}

/// Validate `config` and run the script once
pub fn run_scenario(config: &ScenarioConfig) -> Result<ScenarioOutcome> {
    Ok(ScenarioEngine::from_config(config)?.run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_trace_covers_every_step() {
        let mut engine = ScenarioEngine::new(ScenarioParams::default());
        let outcome = engine.run();

        let steps: Vec<_> = engine.trace().iter().map(|t| t.step).collect();
        assert_eq!(steps, ScriptStep::ALL.to_vec());

        let emitted: usize = engine.trace().iter().map(|t| t.emitted).sum();
        assert_eq!(emitted, outcome.events.len());

        // Steps start where the previous one stopped
        let mut next = 0;
        for trace in engine.trace() {
            assert_eq!(trace.first_t, next);
            next += trace.emitted as u64;
        }
    }

    #[test]
    fn test_rerun_starts_fresh() {
        let mut engine = ScenarioEngine::new(ScenarioParams::default());
        let first = engine.run();
        let second = engine.run();

        assert_eq!(first.events, second.events);
        assert_eq!(first.book, second.book);
        assert_eq!(engine.trace().len(), ScriptStep::ALL.len());
    }

    #[test]
    fn test_invalid_config_fails_before_running() {
        let config = ScenarioConfig {
            steps: 42,
            ..Default::default()
        };
        let err = run_scenario(&config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidConfiguration { field: "steps", .. }
        ));
    }
}
