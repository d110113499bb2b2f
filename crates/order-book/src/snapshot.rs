use serde::Serialize;
use vigil_core::Order;

/// Immutable snapshot of order book state
///
/// Bids are sorted descending by price, asks ascending. Orders at the same
/// price keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSnapshot {
    pub bids: Vec<Order>,
    pub asks: Vec<Order>,
}

impl BookSnapshot {
    pub fn best_bid(&self) -> Option<&Order> {
        self.bids.first()
    }

    pub fn best_ask(&self) -> Option<&Order> {
        self.asks.first()
    }
}
