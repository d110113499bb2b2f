//! Vigil Surveillance
//!
//! Scans a completed event log for the quote-manipulation pattern:
//!
//! - **Elevated post-ask**: ALGO posts an ask exactly at the sell threshold
//! - **Fast revert**: ALGO requotes with a revert note
//!
//! This is a literal match on event tags and prices, not a statistical
//! test. A log that words or prices things differently is not flagged.

pub mod alert;
pub mod heuristic;

pub use alert::{AlertType, SurveillanceAlert};
pub use heuristic::{
    ElevatedPostAskDetector, EventSurveillance, FastRevertDetector, QuoteSurveillance, detect,
    threshold_price,
};
