//! # mde-planner
//!
//! Answer the pre-experiment question "how long must I run this A/B test
//! before an effect of a given size becomes detectable?"
//!
//! Given a baseline conversion rate, daily traffic per variation, a
//! significance level, and a desired statistical power, this crate projects
//! the Minimum Detectable Effect (MDE) for each day of a planning horizon.
//! The projection uses the standard normal-approximation formula for a
//! two-proportion test, solved for the detectable effect rather than for the
//! required sample size, so the x-axis becomes calendar days instead of an
//! abstract sample count.
//!
//! The computation is a pure function of its five inputs: no I/O, no
//! randomness, no shared state. Presentation concerns (terminal tables, CSV,
//! JSON) live in swappable adapters under [`output`] that all consume the
//! same [`ProjectionTable`] value.
//!
//! ## Quick Start
//!
//! ```
//! use mde_planner::{plan, Experiment};
//!
//! let experiment = Experiment::new()
//!     .with_baseline_rate(0.05)
//!     .with_daily_traffic(10_000)
//!     .with_horizon_days(21);
//!
//! let table = plan(&experiment).unwrap();
//! for row in table.rows() {
//!     println!("day {}: n={} per variation, MDE {:.2}%",
//!              row.day, row.sample_size_per_variation, row.mde_percent);
//! }
//! ```
//!
//! An `mde_percent` of `f64::INFINITY` in a row is a sentinel meaning "no
//! effect is detectable at this sample size" (zero traffic reaching the
//! formula), not an error. Out-of-range parameters are rejected up front
//! with a [`ParameterError`] before any row is computed.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod error;
mod planner;
mod projection;

// Functional modules
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use config::Experiment;
pub use error::ParameterError;
pub use planner::plan;
pub use projection::{project, ProjectionRow, ProjectionTable};
pub use statistics::{critical_values, CriticalValues};
