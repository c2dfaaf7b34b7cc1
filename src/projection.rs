//! Day-indexed MDE projection.
//!
//! This module sweeps a day horizon, computing for each day the smallest
//! relative effect a two-proportion test could detect at that day's
//! accumulated sample size. Per day `d`:
//!
//! ```text
//! n    = d * daily_traffic
//! mde% = (z_alpha + z_beta) * sqrt(2 * p * (1 - p) / n) / p * 100
//! ```
//!
//! This is the normal-approximation sample-size formula for a two-proportion
//! test, solved for the detectable effect instead of the required sample
//! size. Since sample size grows linearly with the day while MDE scales as
//! `1/sqrt(n)`, the projected MDE is strictly decreasing over the horizon.

use serde::{Deserialize, Serialize};

use crate::statistics::CriticalValues;

/// One day of the projection, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    /// Day number, starting at 1.
    pub day: u64,
    /// Accumulated sample size in one variation: `day * daily_traffic`.
    pub sample_size_per_variation: u64,
    /// Accumulated sample size across both variations (control + treatment).
    pub total_sample_size: u64,
    /// Minimum detectable effect as a percentage of the baseline rate.
    ///
    /// `f64::INFINITY` means no effect is detectable at this sample size
    /// (zero traffic reached the formula); it is a sentinel, not an error.
    pub mde_percent: f64,
}

/// An ordered projection over a day horizon.
///
/// Rows are strictly increasing in `day` (the contiguous sequence `1..=H`)
/// and, for positive traffic, strictly decreasing in `mde_percent`. A table
/// is built fresh for each parameter set and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionTable {
    rows: Vec<ProjectionRow>,
}

impl ProjectionTable {
    /// All rows, ordered by day ascending.
    pub fn rows(&self) -> &[ProjectionRow] {
        &self.rows
    }

    /// Number of rows (equal to the projected horizon in days).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The MDE at the end of the horizon, the best this plan achieves.
    pub fn final_mde(&self) -> Option<f64> {
        self.rows.last().map(|row| row.mde_percent)
    }

    /// First day whose projected MDE is at or below `target_percent`.
    ///
    /// This answers the planning question in its natural direction: "how
    /// many days until an effect of this size is detectable?" Returns
    /// `None` when the horizon never reaches the target.
    pub fn first_day_at_or_below(&self, target_percent: f64) -> Option<u64> {
        self.rows
            .iter()
            .find(|row| row.mde_percent <= target_percent)
            .map(|row| row.day)
    }
}

impl<'a> IntoIterator for &'a ProjectionTable {
    type Item = &'a ProjectionRow;
    type IntoIter = std::slice::Iter<'a, ProjectionRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Project the MDE across a day horizon.
///
/// Applies the per-day formula independently for each day in
/// `1..=horizon_days`, using critical values computed once by the caller.
/// Pure and deterministic: identical inputs always yield an identical table.
///
/// This function performs no range validation; callers that accept external
/// parameters go through [`crate::plan`], which validates first. A zero
/// `daily_traffic` reaching this function yields `f64::INFINITY` for every
/// row rather than a division error, per the degenerate-sample-size policy.
///
/// # Arguments
///
/// * `critical` - Critical values from [`crate::critical_values`]
/// * `baseline_rate` - Control-group conversion probability
/// * `daily_traffic` - Users per variation per day
/// * `horizon_days` - Number of days to project
pub fn project(
    critical: CriticalValues,
    baseline_rate: f64,
    daily_traffic: u64,
    horizon_days: u64,
) -> ProjectionTable {
    let rows = (1..=horizon_days)
        .map(|day| {
            let sample_size = day * daily_traffic;
            ProjectionRow {
                day,
                sample_size_per_variation: sample_size,
                total_sample_size: 2 * sample_size,
                mde_percent: mde_percent(critical, baseline_rate, sample_size),
            }
        })
        .collect();

    ProjectionTable { rows }
}

/// MDE (as a percentage of the baseline) at one sample size.
///
/// Returns `f64::INFINITY` when `baseline_rate <= 0` or `sample_size == 0`,
/// signaling "cannot detect any effect here" without aborting the sweep.
fn mde_percent(critical: CriticalValues, baseline_rate: f64, sample_size: u64) -> f64 {
    if baseline_rate <= 0.0 || sample_size == 0 {
        return f64::INFINITY;
    }

    let n = sample_size as f64;
    let variance_term = (2.0 * baseline_rate * (1.0 - baseline_rate) / n).sqrt();
    critical.sum() * variance_term / baseline_rate * 100.0
}
