use serde::{Deserialize, Serialize};

use super::Actor;
use crate::values::{Price, Size};

/// Resting limit order.
///
/// Orders are values: a requote produces a new `Order` via [`Order::with_price`]
/// that replaces the old one in the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub price: Price,
    pub size: Size,
    pub owner: Actor,
}

impl Order {
    pub fn new(price: Price, size: Size, owner: Actor) -> Self {
        Self { price, size, owner }
    }

    /// Same size and owner, new price
    pub fn with_price(&self, price: Price) -> Self {
        Self {
            price,
            size: self.size,
            owner: self.owner,
        }
    }

    pub fn is_owned_by(&self, actor: Actor) -> bool {
        self.owner == actor
    }
}
