//! JSON serialization for projection tables.

use crate::projection::ProjectionTable;

/// Serialize a projection table to a compact JSON string.
///
/// An infinite MDE (degenerate sample size) serializes as JSON `null`,
/// since JSON has no representation for non-finite numbers.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for a table).
pub fn to_json(table: &ProjectionTable) -> Result<String, serde_json::Error> {
    serde_json::to_string(table)
}

/// Serialize a projection table to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for a table).
pub fn to_json_pretty(table: &ProjectionTable) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(table)
}
