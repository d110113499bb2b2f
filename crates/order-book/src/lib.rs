//! Vigil Order Book
//!
//! A deliberately simple two-sided book:
//!
//! - Orders are kept per side in insertion order (no price-level sorting)
//! - Best bid / best ask are resolved by scanning the side
//! - Nothing ever crosses: a bid at or above the best ask just rests there
//!
//! Lookups that drive the scripted scenario go through [`OrderFilter`],
//! which compares prices with an absolute tolerance.

mod book;
mod filter;
mod snapshot;

pub use book::OrderBook;
pub use filter::OrderFilter;
pub use snapshot::BookSnapshot;
