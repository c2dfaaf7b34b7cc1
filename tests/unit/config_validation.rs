//! Tests for experiment parameter validation.
//!
//! These tests verify that out-of-range parameters are rejected at the
//! planning boundary with a typed error, before any row is computed.

use mde_planner::{plan, Experiment, ParameterError};

// =============================================================================
// PROBABILITY RANGES
// =============================================================================

#[test]
fn significance_zero_rejected() {
    let experiment = Experiment::new().with_significance_level(0.0);
    assert_eq!(
        plan(&experiment),
        Err(ParameterError::InvalidSignificance(0.0))
    );
}

#[test]
fn significance_one_rejected() {
    let experiment = Experiment::new().with_significance_level(1.0);
    assert_eq!(
        plan(&experiment),
        Err(ParameterError::InvalidSignificance(1.0))
    );
}

#[test]
fn significance_negative_rejected() {
    let experiment = Experiment::new().with_significance_level(-0.05);
    assert!(plan(&experiment).is_err());
}

#[test]
fn significance_tiny_valid() {
    let experiment = Experiment::new().with_significance_level(1e-6);
    assert!(plan(&experiment).is_ok());
}

#[test]
fn power_zero_rejected() {
    let experiment = Experiment::new().with_power(0.0);
    assert_eq!(plan(&experiment), Err(ParameterError::InvalidPower(0.0)));
}

#[test]
fn power_one_rejected() {
    let experiment = Experiment::new().with_power(1.0);
    assert_eq!(plan(&experiment), Err(ParameterError::InvalidPower(1.0)));
}

#[test]
fn power_above_one_rejected() {
    let experiment = Experiment::new().with_power(1.2);
    assert_eq!(plan(&experiment), Err(ParameterError::InvalidPower(1.2)));
}

#[test]
fn baseline_zero_rejected() {
    let experiment = Experiment::new().with_baseline_rate(0.0);
    assert_eq!(
        plan(&experiment),
        Err(ParameterError::InvalidBaselineRate(0.0))
    );
}

#[test]
fn baseline_one_rejected() {
    let experiment = Experiment::new().with_baseline_rate(1.0);
    assert_eq!(
        plan(&experiment),
        Err(ParameterError::InvalidBaselineRate(1.0))
    );
}

#[test]
fn baseline_small_valid() {
    let experiment = Experiment::new().with_baseline_rate(0.001);
    assert!(plan(&experiment).is_ok());
}

// =============================================================================
// COUNT RANGES
// =============================================================================

#[test]
fn zero_traffic_rejected() {
    let experiment = Experiment::new().with_daily_traffic(0);
    assert_eq!(plan(&experiment), Err(ParameterError::ZeroTraffic));
}

#[test]
fn one_visitor_per_day_valid() {
    let experiment = Experiment::new().with_daily_traffic(1);
    let table = plan(&experiment).unwrap();
    assert_eq!(table.rows()[0].sample_size_per_variation, 1);
}

#[test]
fn zero_horizon_rejected() {
    let experiment = Experiment::new().with_horizon_days(0);
    assert_eq!(plan(&experiment), Err(ParameterError::ZeroHorizon));
}

#[test]
fn one_day_horizon_valid() {
    let experiment = Experiment::new().with_horizon_days(1);
    assert_eq!(plan(&experiment).unwrap().len(), 1);
}

// =============================================================================
// ERROR REPORTING
// =============================================================================

#[test]
fn first_violation_wins() {
    // Multiple bad fields: validation reports the significance level first.
    let experiment = Experiment::new()
        .with_significance_level(2.0)
        .with_power(0.0)
        .with_daily_traffic(0);
    assert_eq!(
        plan(&experiment),
        Err(ParameterError::InvalidSignificance(2.0))
    );
}

#[test]
fn error_messages_name_the_range() {
    let err = plan(&Experiment::new().with_power(1.5)).unwrap_err();
    assert!(err.to_string().contains("(0, 1)"));

    let err = plan(&Experiment::new().with_daily_traffic(0)).unwrap_err();
    assert!(err.to_string().contains("at least 1"));
}
