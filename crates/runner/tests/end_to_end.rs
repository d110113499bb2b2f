//! End-to-End Run Tests
//!
//! Full pipeline per configuration: validation, script, surveillance
//! and export.

use rust_decimal_macros::dec;
use vigil_core::{Actor, EventAction};
use vigil_runner::{DEFAULT_DELIMITER, RunnerError, event_log_to_string, simulate};
use vigil_scenario::{Branch, ScenarioConfig};
use vigil_surveillance::AlertType;

fn predatory_config() -> ScenarioConfig {
    ScenarioConfig {
        threshold_pct: 10,
        ..Default::default()
    }
}

fn benign_config() -> ScenarioConfig {
    ScenarioConfig {
        steps: 0,
        threshold_pct: 100,
        ..Default::default()
    }
}

#[test]
fn test_predatory_run_raises_both_flags() {
    let _ = env_logger::try_init();

    let result = simulate(&predatory_config()).unwrap();
    assert_eq!(result.branch, Branch::Predatory);
    assert_eq!(result.threshold, dec!(44.0));

    let types: Vec<_> = result.flags.iter().map(|f| f.alert_type).collect();
    assert_eq!(types, vec![AlertType::ElevatedPostAsk, AlertType::FastRevert]);

    // Flags point at the events that triggered them
    let elevated = &result.events.as_slice()[result.flags[0].t as usize];
    assert_eq!(elevated.actor, Actor::Algo);
    assert_eq!(elevated.action, EventAction::PostAsk);
    let revert = &result.events.as_slice()[result.flags[1].t as usize];
    assert_eq!(revert.action, EventAction::ReplaceBid);

    let messages = result.flag_messages();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].starts_with("Elevated post-ask"));
    assert!(messages[1].starts_with("Fast revert"));
}

#[test]
fn test_benign_run_has_no_flags() {
    let _ = env_logger::try_init();

    let result = simulate(&benign_config()).unwrap();
    assert_eq!(result.branch, Branch::Benign);
    assert_eq!(result.events.len(), 6);
    assert!(!result.pattern_detected());

    assert_eq!(result.book.best_bid().map(|o| o.price), Some(dec!(22)));
    assert_eq!(result.book.best_ask().map(|o| o.price), Some(dec!(100)));
}

#[test]
fn test_csv_export_is_deterministic() {
    for config in [ScenarioConfig::default(), predatory_config(), benign_config()] {
        let first = simulate(&config).unwrap();
        let second = simulate(&config).unwrap();

        assert_eq!(
            event_log_to_string(&first.events, DEFAULT_DELIMITER).unwrap(),
            event_log_to_string(&second.events, DEFAULT_DELIMITER).unwrap()
        );
    }
}

#[test]
fn test_config_file_drives_the_run() {
    let path = std::env::temp_dir().join(format!("vigil-e2e-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "threshold_pct": 10, "steps": 4 }"#).unwrap();

    let config = ScenarioConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config, predatory_config());
    let result = simulate(&config).unwrap();
    assert_eq!(result.events.len(), 5 + 2 * 4 + 5);
}

#[test]
fn test_extreme_prices_fail_validation_instead_of_panicking() {
    let _ = env_logger::try_init();

    let huge = ScenarioConfig {
        fair_price: 5e28,
        algo_ask: 7.9e28,
        threshold_pct: 100,
        ..Default::default()
    };
    let err = simulate(&huge).unwrap_err();
    assert!(matches!(err, RunnerError::Config(_)));
    assert!(err.to_string().contains("fair_price"));

    let tiny = ScenarioConfig {
        fair_price: 1e-30,
        ..Default::default()
    };
    let err = simulate(&tiny).unwrap_err();
    assert!(err.to_string().contains("below supported precision"));
}

#[test]
fn test_largest_accepted_prices_run_to_completion() {
    let config = ScenarioConfig {
        fair_price: 1e12,
        algo_bid: 1e12,
        algo_ask: 1e12,
        human_buy: 1e12,
        steps: 10,
        threshold_pct: 100,
        ..Default::default()
    };
    let result = simulate(&config).unwrap();
    assert_eq!(result.events.len(), 5 + 2 * 10 + 1);
    assert!(result.events.iter().all(|e| e.mid.is_some()));
}

#[test]
fn test_invalid_config_fails_before_running() {
    let config = ScenarioConfig {
        size_algo: -1,
        ..Default::default()
    };
    let err = simulate(&config).unwrap_err();
    assert!(matches!(err, RunnerError::Config(_)));
    assert!(err.to_string().contains("size_algo"));
}
