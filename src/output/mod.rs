//! Presentation adapters over a projection table.
//!
//! The core returns real numbers only; every formatting policy (percentage
//! strings, thousands separators, how to draw an infinite MDE) lives here.
//! Each adapter consumes the same [`crate::ProjectionTable`] value:
//!
//! - Terminal: human-readable table with colors and box drawing
//! - CSV: delimited export, one row per day
//! - JSON: machine-readable serialization

mod csv;
mod json;
mod terminal;

pub use csv::to_csv;
pub use json::{to_json, to_json_pretty};
pub use terminal::format_table;
