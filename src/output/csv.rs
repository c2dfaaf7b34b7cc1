//! CSV export for projection tables.

use std::fmt::Write;

use crate::projection::ProjectionTable;

/// Serialize a projection table as CSV: a header line plus one row per day.
///
/// Columns: `day`, `sample_size_per_variation`, `total_sample_size`,
/// `mde_percent`. The MDE is rendered with two decimal places; an infinite
/// MDE (degenerate sample size) is rendered as `inf` so it stays visibly
/// distinct from a numeric zero or a blank field.
pub fn to_csv(table: &ProjectionTable) -> String {
    let mut out = String::from("day,sample_size_per_variation,total_sample_size,mde_percent\n");

    for row in table.rows() {
        let mde = if row.mde_percent.is_finite() {
            format!("{:.2}", row.mde_percent)
        } else {
            "inf".to_string()
        };
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{},{},{},{}",
            row.day, row.sample_size_per_variation, row.total_sample_size, mde
        );
    }

    out
}
