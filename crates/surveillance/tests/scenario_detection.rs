//! Detection against full scripted runs

use rust_decimal_macros::dec;
use vigil_scenario::{Branch, ScenarioConfig, run_scenario};
use vigil_surveillance::{AlertType, detect};

#[test]
fn test_predatory_run_raises_both_flags() {
    let config = ScenarioConfig {
        threshold_pct: 10,
        ..Default::default()
    };
    let outcome = run_scenario(&config).unwrap();
    assert_eq!(outcome.branch, Branch::Predatory);

    let alerts = detect(
        outcome.events.as_slice(),
        outcome.params.fair_price,
        outcome.params.threshold_pct,
    );

    let types: Vec<_> = alerts.iter().map(|a| a.alert_type).collect();
    assert_eq!(types, vec![AlertType::ElevatedPostAsk, AlertType::FastRevert]);
    assert_eq!(alerts[0].price, Some(dec!(44.0)));
}

#[test]
fn test_benign_run_raises_nothing() {
    let config = ScenarioConfig {
        steps: 0,
        threshold_pct: 100,
        ..Default::default()
    };
    let outcome = run_scenario(&config).unwrap();
    assert_eq!(outcome.branch, Branch::Benign);

    let alerts = detect(outcome.events.as_slice(), dec!(40), 100);
    assert!(alerts.iter().all(|a| a.alert_type != AlertType::ElevatedPostAsk));
    assert!(alerts.is_empty());
}

#[test]
fn test_mismatched_threshold_is_a_false_negative() {
    let config = ScenarioConfig {
        threshold_pct: 10,
        ..Default::default()
    };
    let outcome = run_scenario(&config).unwrap();

    // Scanning with another threshold misses the elevated ask; the revert
    // tag still matches
    let alerts = detect(outcome.events.as_slice(), dec!(40), 11);
    let types: Vec<_> = alerts.iter().map(|a| a.alert_type).collect();
    assert_eq!(types, vec![AlertType::FastRevert]);
}
