//! Planning entry point: validate, convert, sweep.

use crate::config::Experiment;
use crate::error::ParameterError;
use crate::projection::{project, ProjectionTable};
use crate::statistics::critical_values;

/// Project the MDE horizon for an experiment.
///
/// This is the single orchestration seam of the crate. It:
/// 1. Validates the parameter set once, at the boundary
/// 2. Converts significance level and power to critical values, once
/// 3. Sweeps the day horizon, one MDE evaluation per day
///
/// # Errors
///
/// Returns a [`ParameterError`] when any parameter is out of range; no
/// partial table is produced.
///
/// # Example
///
/// ```
/// use mde_planner::{plan, Experiment};
///
/// let table = plan(&Experiment::default()).unwrap();
/// assert_eq!(table.len(), 21);
/// ```
pub fn plan(experiment: &Experiment) -> Result<ProjectionTable, ParameterError> {
    experiment.validate()?;

    let critical = critical_values(experiment.significance_level, experiment.power)?;
    tracing::debug!(
        z_alpha = critical.z_alpha,
        z_beta = critical.z_beta,
        "computed critical values"
    );

    Ok(project(
        critical,
        experiment.baseline_rate,
        experiment.daily_traffic,
        experiment.horizon_days,
    ))
}
