//! Experiment parameters for MDE projection.

use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

/// Parameters describing the experiment to plan, immutable per run.
///
/// The defaults mirror a typical add-to-cart experiment: 10% significance,
/// 80% power, an 11.59% baseline conversion rate, 7,989 visitors per
/// variation per day, and a three-week horizon.
///
/// The fields are public and the builder methods do not clamp or reject;
/// validation happens once, via [`Experiment::validate`], at the planning
/// boundary. This keeps construction infallible while guaranteeing that no
/// projection is ever computed from out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    /// Significance level (alpha): probability of a false positive.
    ///
    /// Must be strictly between 0 and 1. Default: 0.1.
    pub significance_level: f64,

    /// Statistical power: probability of detecting a true effect.
    ///
    /// Must be strictly between 0 and 1. Default: 0.8.
    pub power: f64,

    /// Baseline conversion rate of the control variation.
    ///
    /// Must be strictly between 0 and 1. Default: 0.1159 (11.59%).
    pub baseline_rate: f64,

    /// Users assigned to one variation per day.
    ///
    /// Must be at least 1. Default: 7989.
    pub daily_traffic: u64,

    /// Number of days to project into the future.
    ///
    /// Must be at least 1. Default: 21.
    pub horizon_days: u64,
}

impl Default for Experiment {
    fn default() -> Self {
        Self {
            significance_level: 0.1,
            power: 0.8,
            baseline_rate: 0.1159,
            daily_traffic: 7989,
            horizon_days: 21,
        }
    }
}

impl Experiment {
    /// Create an experiment with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the significance level (alpha).
    pub fn with_significance_level(mut self, alpha: f64) -> Self {
        self.significance_level = alpha;
        self
    }

    /// Set the desired statistical power.
    pub fn with_power(mut self, power: f64) -> Self {
        self.power = power;
        self
    }

    /// Set the baseline conversion rate.
    pub fn with_baseline_rate(mut self, rate: f64) -> Self {
        self.baseline_rate = rate;
        self
    }

    /// Set the daily traffic per variation.
    pub fn with_daily_traffic(mut self, traffic: u64) -> Self {
        self.daily_traffic = traffic;
        self
    }

    /// Set the projection horizon in days.
    pub fn with_horizon_days(mut self, days: u64) -> Self {
        self.horizon_days = days;
        self
    }

    /// Check all parameters against their valid ranges.
    ///
    /// Returns the first violation found. Probabilities must lie strictly
    /// inside (0, 1); traffic and horizon must be at least 1. A NaN
    /// probability fails its range check and is rejected like any other
    /// out-of-range value.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(self.significance_level > 0.0 && self.significance_level < 1.0) {
            return Err(ParameterError::InvalidSignificance(self.significance_level));
        }
        if !(self.power > 0.0 && self.power < 1.0) {
            return Err(ParameterError::InvalidPower(self.power));
        }
        if !(self.baseline_rate > 0.0 && self.baseline_rate < 1.0) {
            return Err(ParameterError::InvalidBaselineRate(self.baseline_rate));
        }
        if self.daily_traffic == 0 {
            return Err(ParameterError::ZeroTraffic);
        }
        if self.horizon_days == 0 {
            return Err(ParameterError::ZeroHorizon);
        }
        Ok(())
    }
}
