use rust_decimal::Decimal;
use vigil_core::{Order, Price, Side};

use crate::snapshot::BookSnapshot;

/// Two-sided order book without matching
///
/// Each side is a plain sequence in insertion order. Queries scan the side;
/// the books this crate serves hold a handful of orders.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct OrderBook {
    bids: Vec<Order>,
    asks: Vec<Order>,
}

impl std::fmt::Debug for OrderBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderBook")
            .field("bids_count", &self.bids.len())
            .field("asks_count", &self.asks.len())
            .field("best_bid", &self.best_bid().map(|o| o.price))
            .field("best_ask", &self.best_ask().map(|o| o.price))
            .finish()
    }
}

impl OrderBook {
    /// Create an empty order book
    pub fn new() -> Self {
        Self::default()
    }

    fn side(&self, side: Side) -> &Vec<Order> {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut Vec<Order> {
        match side {
            Side::Bid => &mut self.bids,
            Side::Ask => &mut self.asks,
        }
    }

    pub fn bids(&self) -> &[Order] {
        &self.bids
    }

    pub fn asks(&self) -> &[Order] {
        &self.asks
    }

    /// Append an order to the end of a side
    pub fn insert(&mut self, side: Side, order: Order) {
        self.side_mut(side).push(order);
    }

    /// First order on `side` satisfying `predicate`
    pub fn first_match<F>(&self, side: Side, predicate: F) -> Option<&Order>
    where
        F: Fn(&Order) -> bool,
    {
        self.side(side).iter().find(|o| predicate(o))
    }

    /// Replace the first order satisfying `predicate` with a copy at `new_price`.
    ///
    /// The replacement keeps the original's position, size and owner.
    /// Returns the order that was replaced, or `None` (and leaves the book
    /// untouched) when nothing matches.
    pub fn replace_first_match<F>(&mut self, side: Side, predicate: F, new_price: Price) -> Option<Order>
    where
        F: Fn(&Order) -> bool,
    {
        let orders = self.side_mut(side);
        let pos = orders.iter().position(|o| predicate(o))?;
        let old = orders[pos];
        orders[pos] = old.with_price(new_price);
        Some(old)
    }

    /// Remove every order on `side` satisfying `predicate`, returning them
    pub fn remove_all<F>(&mut self, side: Side, predicate: F) -> Vec<Order>
    where
        F: Fn(&Order) -> bool,
    {
        let orders = self.side_mut(side);
        let mut removed = Vec::new();
        orders.retain(|o| {
            if predicate(o) {
                removed.push(*o);
                false
            } else {
                true
            }
        });
        removed
    }

    /// Best bid (highest price; earliest order wins ties)
    pub fn best_bid(&self) -> Option<&Order> {
        self.bids
            .iter()
            .reduce(|best, o| if o.price > best.price { o } else { best })
    }

    /// Best ask (lowest price; earliest order wins ties)
    pub fn best_ask(&self) -> Option<&Order> {
        self.asks
            .iter()
            .reduce(|best, o| if o.price < best.price { o } else { best })
    }

    /// Mid price between best bid and ask
    pub fn mid_price(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => bid
                .price
                .checked_add(ask.price)
                .map(|sum| sum / Decimal::TWO),
            _ => None,
        }
    }

    /// Get full depth snapshot, bids descending and asks ascending
    pub fn snapshot(&self) -> BookSnapshot {
        let mut bids = self.bids.clone();
        let mut asks = self.asks.clone();
        // Stable sorts: equal prices keep insertion order
        bids.sort_by(|a, b| b.price.cmp(&a.price));
        asks.sort_by(|a, b| a.price.cmp(&b.price));
        BookSnapshot { bids, asks }
    }

    /// Number of orders in the book
    pub fn order_count(&self) -> usize {
        self.bids.len() + self.asks.len()
    }

    /// Check if book is empty
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
