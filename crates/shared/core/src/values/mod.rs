use rust_decimal::Decimal;

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Order size in whole units
pub type Size = u64;

/// Default absolute tolerance for price lookups (0.000001)
pub const PRICE_TOLERANCE: Price = Decimal::from_parts(1, 0, 0, false, 6);

/// Returns true when `price` is within `tolerance` of `target`
pub fn prices_match(price: Price, target: Price, tolerance: Price) -> bool {
    (price - target).abs() <= tolerance
}
