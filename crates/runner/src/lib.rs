//! Vigil Runner - one full run of the quote-manipulation scenario
//!
//! Wires the scripted scenario to surveillance and export:
//!
//! - **Simulation**: validate config, run the script, scan the log
//! - **Export**: CSV event log or JSON run result
//! - **Report**: short text summary for the console
//! - **CLI**: argument parsing for the `vigil` binary
//!
//! ## Architecture
//!
//! ```text
//!   ScenarioConfig (JSON / defaults)
//!            │ validate
//!            ▼
//!   ┌───────────────────┐   events   ┌──────────────────────┐
//!   │  ScenarioEngine   │──────────▶│  QuoteSurveillance   │
//!   │  (scripted steps) │            │  (log heuristics)    │
//!   └─────────┬─────────┘            └──────────┬───────────┘
//!             │ book + log                      │ flags
//!             └───────────────┬─────────────────┘
//!                             ▼
//!                       ┌───────────┐
//!                       │ RunResult │──▶ CSV / JSON / summary
//!                       └───────────┘
//! ```

pub mod cli;
pub mod error;
pub mod export;
pub mod report;
pub mod simulation;

// Re-export main types
pub use cli::{CliCommand, CliOptions, OutputFormat, USAGE, parse_args};
pub use error::{ExportError, Result, RunnerError};
pub use export::{
    DEFAULT_DELIMITER, EVENT_LOG_HEADER, event_log_to_string, run_result_to_json, write_event_log,
};
pub use report::{DISCLAIMER, summary};
pub use simulation::{RunResult, simulate};
