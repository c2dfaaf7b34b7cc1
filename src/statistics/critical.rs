//! Standard-normal critical values for significance and power targets.
//!
//! The two-proportion MDE formula needs two quantiles of the standard
//! normal distribution:
//!
//! - `z_alpha`: the two-sided critical value at level alpha, i.e. the z such
//!   that the doubled upper-tail area equals alpha. This is the quantile at
//!   `1 - alpha/2`.
//! - `z_beta`: the one-sided quantile at the power target, i.e. the z such
//!   that the cumulative probability up to z equals `power`.
//!
//! Both are undefined (infinite) when their probability input sits at 0 or
//! 1, so those boundaries are rejected up front rather than letting an
//! infinite critical value propagate into every projection row.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::ParameterError;

/// The pair of standard-normal critical values for one parameter set.
///
/// Derived once per planning run; a pure, deterministic function of the
/// significance level and power, so there is nothing to cache and no
/// staleness to worry about.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalValues {
    /// Two-sided critical value at the significance level.
    pub z_alpha: f64,
    /// One-sided critical value at the power target.
    pub z_beta: f64,
}

impl CriticalValues {
    /// Sum of the two critical values, the multiplier in the MDE formula.
    pub fn sum(&self) -> f64 {
        self.z_alpha + self.z_beta
    }
}

/// Convert a significance level and power target to critical values.
///
/// # Arguments
///
/// * `alpha` - Significance level, strictly inside (0, 1)
/// * `power` - Statistical power, strictly inside (0, 1)
///
/// # Errors
///
/// Returns [`ParameterError::InvalidSignificance`] or
/// [`ParameterError::InvalidPower`] when the corresponding input is at or
/// beyond the {0, 1} boundary (including NaN), where the normal quantile is
/// undefined.
///
/// # Example
///
/// ```
/// use mde_planner::critical_values;
///
/// let critical = critical_values(0.1, 0.8).unwrap();
/// assert!((critical.z_alpha - 1.6449).abs() < 1e-3);
/// assert!((critical.z_beta - 0.8416).abs() < 1e-3);
/// ```
pub fn critical_values(alpha: f64, power: f64) -> Result<CriticalValues, ParameterError> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(ParameterError::InvalidSignificance(alpha));
    }
    if !(power > 0.0 && power < 1.0) {
        return Err(ParameterError::InvalidPower(power));
    }

    // Unit normal construction cannot fail.
    let normal = Normal::new(0.0, 1.0).unwrap();
    let z_alpha = normal.inverse_cdf(1.0 - alpha / 2.0);
    let z_beta = normal.inverse_cdf(power);

    // An alpha small enough that 1 - alpha/2 rounds to 1.0 pushes the
    // quantile to infinity even though alpha itself passed the range check.
    if !z_alpha.is_finite() {
        return Err(ParameterError::InvalidSignificance(alpha));
    }
    if !z_beta.is_finite() {
        return Err(ParameterError::InvalidPower(power));
    }

    Ok(CriticalValues { z_alpha, z_beta })
}
