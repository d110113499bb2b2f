//! Vigil Scenario - scripted quote-manipulation run
//!
//! A fixed, deterministic script of actor actions against a
//! [`vigil_order_book::OrderBook`]:
//!
//! ```text
//!  INIT ──► HUMAN_POST ──► ALGO_REGAIN ──► LIQUIDITY_LOOP (x steps) ──► CHECK ──► DECISION
//!                                                                                   │
//!                                                   mid >= threshold ┌──────────────┴───────────┐ otherwise
//!                                                                    ▼                          ▼
//!                                               post ask ► fill ► remove ► revert x2     no predatory sell
//! ```
//!
//! - **Config**: external configuration and validation into parameters
//! - **Recorder**: event log with top-of-book snapshots
//! - **Steps**: the named step functions, each testable on its own
//! - **Engine**: runs the script over a fresh state

pub mod config;
pub mod engine;
pub mod error;
pub mod recorder;
pub mod state;
pub mod steps;

// Re-export main types
pub use config::{ScenarioConfig, ScenarioParams};
pub use engine::{ScenarioEngine, ScenarioOutcome, StepTrace, run_scenario};
pub use error::{ConfigError, Result};
pub use recorder::Recorder;
pub use state::{Branch, ScenarioState};
pub use steps::{ScriptStep, expected_event_count};
