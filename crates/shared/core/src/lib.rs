//! Vigil Core Domain
//!
//! Pure domain types shared by the order book, the scripted scenario and
//! the surveillance heuristic.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Actor, Event, EventAction, EventLog, EventNote, Order, Side};
pub use values::{PRICE_TOLERANCE, Price, Size, prices_match};
