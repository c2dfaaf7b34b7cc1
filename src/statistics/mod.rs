//! Statistical primitives for MDE projection.
//!
//! Currently this is the critical-value converter: the mapping from a
//! significance level and a power target to their standard-normal quantiles.

mod critical;

pub use critical::{critical_values, CriticalValues};
