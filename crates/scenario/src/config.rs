//! Scenario configuration
//!
//! `ScenarioConfig` is the external, loosely typed form (plain floats and
//! integers, as a form or JSON file would supply them). `validate` checks
//! every field and converts it into `ScenarioParams`, the only form the
//! script engine accepts.

use crate::error::{ConfigError, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::path::Path;
use vigil_core::{PRICE_TOLERANCE, Price, Size};

use crate::steps::REGAIN_OFFSET;

/// Largest number of liquidity-loop iterations
pub const MAX_STEPS: i64 = 10;

/// Largest sell threshold above fair price, in percent
pub const MAX_THRESHOLD_PCT: i64 = 100;

/// Largest accepted price magnitude
///
/// Keeps every derived price (threshold, regained bid, loop bids, mid)
/// well inside `Decimal` range.
pub const MAX_PRICE: f64 = 1e12;

/// Root configuration for one scripted run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Reference fair price of the instrument
    #[serde(default = "default_fair_price")]
    pub fair_price: f64,

    /// ALGO's initial (wide) bid
    #[serde(default = "default_algo_bid")]
    pub algo_bid: f64,

    /// ALGO's initial (wide) ask
    #[serde(default = "default_algo_ask")]
    pub algo_ask: f64,

    /// HUMAN limit buy price
    #[serde(default = "default_human_buy")]
    pub human_buy: f64,

    /// Liquidity-loop iterations (0..=10)
    #[serde(default = "default_steps")]
    pub steps: i64,

    /// Sell threshold above fair price, in percent (0..=100)
    #[serde(default = "default_threshold_pct")]
    pub threshold_pct: i64,

    /// Size of every ALGO quote
    #[serde(default = "default_size_algo")]
    pub size_algo: i64,

    /// Size of the HUMAN bid and of the elevated ALGO ask
    #[serde(default = "default_size_human")]
    pub size_human: i64,

    /// Absolute tolerance for price lookups
    #[serde(default = "default_price_tolerance")]
    pub price_tolerance: f64,
}

fn default_fair_price() -> f64 {
    40.0
}

fn default_algo_bid() -> f64 {
    20.0
}

fn default_algo_ask() -> f64 {
    100.0
}

fn default_human_buy() -> f64 {
    21.0
}

fn default_steps() -> i64 {
    4
}

fn default_threshold_pct() -> i64 {
    20
}

fn default_size_algo() -> i64 {
    100
}

fn default_size_human() -> i64 {
    10
}

fn default_price_tolerance() -> f64 {
    PRICE_TOLERANCE.to_f64().unwrap_or(0.000001)
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            fair_price: default_fair_price(),
            algo_bid: default_algo_bid(),
            algo_ask: default_algo_ask(),
            human_buy: default_human_buy(),
            steps: default_steps(),
            threshold_pct: default_threshold_pct(),
            size_algo: default_size_algo(),
            size_human: default_size_human(),
            price_tolerance: default_price_tolerance(),
        }
    }
}

impl ScenarioConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check every field and convert to engine parameters.
    ///
    /// Fails on the first field outside its constraint.
    pub fn validate(&self) -> Result<ScenarioParams> {
        if self.fair_price <= 0.0 {
            return Err(ConfigError::invalid(
                "fair_price",
                format!("must be greater than 0, got {}", self.fair_price),
            ));
        }
        let fair_price = to_price("fair_price", self.fair_price)?;
        let algo_bid = to_price("algo_bid", self.algo_bid)?;
        let algo_ask = to_price("algo_ask", self.algo_ask)?;
        let human_buy = to_price("human_buy", self.human_buy)?;

        if !(0..=MAX_STEPS).contains(&self.steps) {
            return Err(ConfigError::invalid(
                "steps",
                format!("must be between 0 and {MAX_STEPS}, got {}", self.steps),
            ));
        }
        if !(0..=MAX_THRESHOLD_PCT).contains(&self.threshold_pct) {
            return Err(ConfigError::invalid(
                "threshold_pct",
                format!(
                    "must be between 0 and {MAX_THRESHOLD_PCT}, got {}",
                    self.threshold_pct
                ),
            ));
        }

        let size_algo = to_size("size_algo", self.size_algo)?;
        let size_human = to_size("size_human", self.size_human)?;

        if self.price_tolerance < 0.0 {
            return Err(ConfigError::invalid(
                "price_tolerance",
                "must not be negative",
            ));
        }
        let price_tolerance = to_price("price_tolerance", self.price_tolerance)?;

        // Derived prices must be representable before any step runs
        fair_price
            .checked_mul(threshold_factor(self.threshold_pct as u32))
            .ok_or_else(|| ConfigError::invalid("fair_price", "threshold overflows"))?;
        algo_bid
            .checked_add(REGAIN_OFFSET)
            .ok_or_else(|| ConfigError::invalid("algo_bid", "regained bid overflows"))?;

        Ok(ScenarioParams {
            fair_price,
            algo_bid,
            algo_ask,
            human_buy,
            // Range-checked above
            steps: self.steps as u32,
            threshold_pct: self.threshold_pct as u32,
            size_algo,
            size_human,
            price_tolerance,
        })
    }
}

fn to_price(field: &'static str, value: f64) -> Result<Price> {
    if !value.is_finite() {
        return Err(ConfigError::invalid(
            field,
            format!("must be finite, got {value}"),
        ));
    }
    if value.abs() > MAX_PRICE {
        return Err(ConfigError::invalid(
            field,
            format!("magnitude must not exceed {MAX_PRICE:e}, got {value}"),
        ));
    }
    let price = Decimal::from_f64(value)
        .ok_or_else(|| ConfigError::invalid(field, format!("{value} is out of range")))?;
    // Decimal keeps at most 28 fractional digits
    if price.is_zero() && value != 0.0 {
        return Err(ConfigError::invalid(
            field,
            format!("{value} is below supported precision"),
        ));
    }
    Ok(price)
}

fn threshold_factor(threshold_pct: u32) -> Decimal {
    Decimal::ONE + Decimal::from(threshold_pct) / Decimal::ONE_HUNDRED
}

fn to_size(field: &'static str, value: i64) -> Result<Size> {
    if value <= 0 {
        return Err(ConfigError::invalid(
            field,
            format!("must be greater than 0, got {value}"),
        ));
    }
    Ok(value as Size)
}

/// Validated scenario parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioParams {
    pub fair_price: Price,
    pub algo_bid: Price,
    pub algo_ask: Price,
    pub human_buy: Price,
    pub steps: u32,
    pub threshold_pct: u32,
    pub size_algo: Size,
    pub size_human: Size,
    pub price_tolerance: Decimal,
}

impl ScenarioParams {
    /// Sell trigger: fair price scaled by `1 + threshold_pct / 100`
    pub fn threshold(&self) -> Price {
        self.fair_price
            .saturating_mul(threshold_factor(self.threshold_pct))
    }
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            fair_price: Decimal::from(40),
            algo_bid: Decimal::from(20),
            algo_ask: Decimal::from(100),
            human_buy: Decimal::from(21),
            steps: 4,
            threshold_pct: 20,
            size_algo: 100,
            size_human: 10,
            price_tolerance: PRICE_TOLERANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_validate() {
        let params = ScenarioConfig::default().validate().unwrap();
        assert_eq!(params, ScenarioParams::default());
        assert_eq!(params.threshold(), dec!(48.0));
    }

    #[test]
    fn test_threshold_at_bounds() {
        let mut params = ScenarioParams::default();
        params.threshold_pct = 0;
        assert_eq!(params.threshold(), dec!(40));
        params.threshold_pct = 100;
        assert_eq!(params.threshold(), dec!(80));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = ScenarioConfig::from_json(r#"{"steps": 0, "threshold_pct": 100}"#).unwrap();
        assert_eq!(config.steps, 0);
        assert_eq!(config.threshold_pct, 100);
        assert_eq!(config.fair_price, 40.0);
        assert_eq!(config.size_human, 10);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = ScenarioConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let err = ScenarioConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_rejects_non_finite_prices() {
        let config = ScenarioConfig {
            algo_ask: f64::INFINITY,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field(), Some("algo_ask"));

        let config = ScenarioConfig {
            human_buy: f64::NAN,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field(), Some("human_buy"));
    }

    #[test]
    fn test_rejects_non_positive_fair_price() {
        for fair_price in [0.0, -1.0] {
            let config = ScenarioConfig {
                fair_price,
                ..Default::default()
            };
            assert_eq!(config.validate().unwrap_err().field(), Some("fair_price"));
        }
    }

    #[test]
    fn test_rejects_huge_prices() {
        let config = ScenarioConfig {
            fair_price: 5e28,
            algo_ask: 7.9e28,
            threshold_pct: 100,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field(), Some("fair_price"));

        let config = ScenarioConfig {
            algo_bid: -2e12,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field(), Some("algo_bid"));

        let config = ScenarioConfig {
            fair_price: MAX_PRICE,
            threshold_pct: MAX_THRESHOLD_PCT,
            ..Default::default()
        };
        let params = config.validate().unwrap();
        assert_eq!(params.threshold(), Decimal::from(2_000_000_000_000u64));
    }

    #[test]
    fn test_rejects_prices_below_precision() {
        let config = ScenarioConfig {
            fair_price: 1e-30,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field(), Some("fair_price"));
        assert!(err.to_string().contains("below supported precision"));

        let config = ScenarioConfig {
            price_tolerance: 1e-30,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().field(), Some("price_tolerance"));

        // Exact zero is still a valid tolerance
        let config = ScenarioConfig {
            price_tolerance: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap().price_tolerance, Decimal::ZERO);
    }

    #[test]
    fn test_rejects_out_of_range_integers() {
        let cases = [
            (ScenarioConfig { steps: -1, ..Default::default() }, "steps"),
            (ScenarioConfig { steps: 11, ..Default::default() }, "steps"),
            (ScenarioConfig { threshold_pct: -5, ..Default::default() }, "threshold_pct"),
            (ScenarioConfig { threshold_pct: 101, ..Default::default() }, "threshold_pct"),
            (ScenarioConfig { size_algo: 0, ..Default::default() }, "size_algo"),
            (ScenarioConfig { size_human: -10, ..Default::default() }, "size_human"),
            (ScenarioConfig { price_tolerance: -0.1, ..Default::default() }, "price_tolerance"),
        ];
        for (config, field) in cases {
            assert_eq!(config.validate().unwrap_err().field(), Some(field));
        }
    }

    #[test]
    fn test_accepts_range_edges() {
        let config = ScenarioConfig {
            steps: 10,
            threshold_pct: 0,
            size_algo: 1,
            size_human: 1,
            algo_bid: -5.0,
            ..Default::default()
        };
        let params = config.validate().unwrap();
        assert_eq!(params.steps, 10);
        assert_eq!(params.algo_bid, dec!(-5));
    }
}
