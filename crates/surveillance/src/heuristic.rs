//! Detection Heuristic
//!
//! Each detector looks for one pattern and raises at most one alert.
//! `QuoteSurveillance` runs them in a fixed order, so the alert list is
//! ordered elevated post-ask first, fast revert second.

use rust_decimal::Decimal;
use vigil_core::{Actor, Event, EventAction, EventNote, Price};

use crate::alert::SurveillanceAlert;

/// Trait for log-based surveillance
pub trait EventSurveillance: Send + Sync {
    /// Scan a completed log, returning an alert if the pattern is present
    fn scan(&self, events: &[Event]) -> Option<SurveillanceAlert>;

    /// Get the name of the detector
    fn name(&self) -> &str;
}

/// Sell trigger: `fair_price * (1 + threshold_pct / 100)`
///
/// Recomputed from the run parameters; never read back from the log.
pub fn threshold_price(fair_price: Price, threshold_pct: u32) -> Price {
    fair_price.saturating_mul(Decimal::ONE + Decimal::from(threshold_pct) / Decimal::ONE_HUNDRED)
}

/// ALGO `post ask` priced exactly at the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatedPostAskDetector {
    threshold: Price,
}

impl ElevatedPostAskDetector {
    pub fn new(threshold: Price) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> Price {
        self.threshold
    }
}

impl EventSurveillance for ElevatedPostAskDetector {
    fn scan(&self, events: &[Event]) -> Option<SurveillanceAlert> {
        events
            .iter()
            .find(|e| {
                e.is_by(Actor::Algo)
                    && e.action == EventAction::PostAsk
                    && e.price == Some(self.threshold)
            })
            .map(|e| SurveillanceAlert::elevated_post_ask(e.t, self.threshold))
    }

    fn name(&self) -> &str {
        "elevated-post-ask"
    }
}

/// ALGO requote (`replace bid` / `replace ask`) noted as a revert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FastRevertDetector;

impl EventSurveillance for FastRevertDetector {
    fn scan(&self, events: &[Event]) -> Option<SurveillanceAlert> {
        events
            .iter()
            .find(|e| {
                e.is_by(Actor::Algo)
                    && e.action.is_replace()
                    && e.note == Some(EventNote::Revert)
            })
            .map(|e| SurveillanceAlert::fast_revert(e.t, e.price))
    }

    fn name(&self) -> &str {
        "fast-revert"
    }
}

/// Runs every detector over a log
pub struct QuoteSurveillance {
    detectors: Vec<Box<dyn EventSurveillance>>,
}

impl QuoteSurveillance {
    /// Standard detector set for a run with these parameters
    pub fn new(fair_price: Price, threshold_pct: u32) -> Self {
        let threshold = threshold_price(fair_price, threshold_pct);
        Self {
            detectors: vec![
                Box::new(ElevatedPostAskDetector::new(threshold)),
                Box::new(FastRevertDetector),
            ],
        }
    }

    /// Scan `events`; an empty result means no pattern was detected
    pub fn scan(&self, events: &[Event]) -> Vec<SurveillanceAlert> {
        let alerts: Vec<_> = self
            .detectors
            .iter()
            .filter_map(|d| {
                let alert = d.scan(events);
                log::debug!("Detector {}: {}", d.name(), if alert.is_some() { "hit" } else { "clear" });
                alert
            })
            .collect();

        if alerts.is_empty() {
            log::info!("Surveillance: no pattern detected in {} events", events.len());
        }
        for alert in &alerts {
            log::info!("Surveillance alert [{}]: {}", alert.alert_type, alert.description);
        }

        alerts
    }
}

/// Scan a completed log with the standard detectors
pub fn detect(events: &[Event], fair_price: Price, threshold_pct: u32) -> Vec<SurveillanceAlert> {
    QuoteSurveillance::new(fair_price, threshold_pct).scan(events)
}
