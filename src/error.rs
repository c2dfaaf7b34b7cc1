//! Error types for experiment parameter validation.

/// Error returned when an experiment parameter is out of range.
///
/// Validation happens once, at the planning boundary, before any projection
/// row is computed. An invalid parameter set produces zero rows and one of
/// these errors, never a partially computed table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterError {
    /// Significance level (alpha) outside the open interval (0, 1).
    ///
    /// The two-sided critical value is the standard-normal quantile at
    /// `1 - alpha/2`, which is undefined (infinite) at the boundary, so
    /// alpha must be strictly between 0 and 1.
    InvalidSignificance(f64),

    /// Statistical power outside the open interval (0, 1).
    ///
    /// The one-sided critical value is the standard-normal quantile at
    /// `power`, undefined at 0 and 1.
    InvalidPower(f64),

    /// Baseline conversion rate outside the open interval (0, 1).
    ///
    /// The MDE is expressed relative to the baseline, so a baseline of 0
    /// (or a degenerate 1) has no meaningful detectable effect.
    InvalidBaselineRate(f64),

    /// Daily traffic per variation is zero.
    ///
    /// With no traffic the sample size never grows and no effect is ever
    /// detectable.
    ZeroTraffic,

    /// Projection horizon is zero days.
    ZeroHorizon,
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSignificance(alpha) => write!(
                f,
                "significance level must be in (0, 1), got {}",
                alpha
            ),
            Self::InvalidPower(power) => {
                write!(f, "statistical power must be in (0, 1), got {}", power)
            }
            Self::InvalidBaselineRate(rate) => {
                write!(f, "baseline rate must be in (0, 1), got {}", rate)
            }
            Self::ZeroTraffic => write!(f, "daily traffic per variation must be at least 1"),
            Self::ZeroHorizon => write!(f, "projection horizon must be at least 1 day"),
        }
    }
}

impl std::error::Error for ParameterError {}
