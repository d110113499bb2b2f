use rust_decimal::Decimal;
use vigil_core::{Actor, Order, Price, prices_match};

/// Order predicate used for replace/remove lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderFilter {
    /// Only orders from this owner
    pub owner: Option<Actor>,
    /// Only orders within `tolerance` of this price
    pub price: Option<Price>,
    pub tolerance: Decimal,
}

impl OrderFilter {
    /// Match every order from `owner`
    pub fn owned_by(owner: Actor) -> Self {
        Self {
            owner: Some(owner),
            ..Self::default()
        }
    }

    /// Restrict to orders priced approximately at `price`
    pub fn near(mut self, price: Price, tolerance: Decimal) -> Self {
        self.price = Some(price);
        self.tolerance = tolerance;
        self
    }

    pub fn matches(&self, order: &Order) -> bool {
        if let Some(owner) = self.owner {
            if !order.is_owned_by(owner) {
                return false;
            }
        }
        match self.price {
            Some(target) => prices_match(order.price, target, self.tolerance),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use vigil_core::PRICE_TOLERANCE;

    #[test]
    fn test_owner_and_price_must_both_match() {
        let filter = OrderFilter::owned_by(Actor::Algo).near(dec!(20), PRICE_TOLERANCE);

        assert!(filter.matches(&Order::new(dec!(20.0000001), 100, Actor::Algo)));
        assert!(!filter.matches(&Order::new(dec!(20), 100, Actor::Human)));
        assert!(!filter.matches(&Order::new(dec!(22), 100, Actor::Algo)));
    }

    #[test]
    fn test_owner_only_ignores_price() {
        let filter = OrderFilter::owned_by(Actor::Other);
        assert!(filter.matches(&Order::new(dec!(1), 1, Actor::Other)));
        assert!(filter.matches(&Order::new(dec!(1000), 5, Actor::Other)));
        assert!(!filter.matches(&Order::new(dec!(1), 1, Actor::Algo)));
    }
}
