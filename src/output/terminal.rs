//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::config::Experiment;
use crate::projection::ProjectionTable;

/// Format a projection table for human-readable terminal output.
///
/// Renders a boxed table with one line per day: the accumulated sample
/// sizes (thousands-separated) and the MDE to two decimal places. A
/// subtitle line restates the parameters the projection was built from.
/// An infinite MDE is drawn as a dash, visibly distinct from any number.
pub fn format_table(experiment: &Experiment, table: &ProjectionTable) -> String {
    let mut output = String::new();

    let title = "Minimum Detectable Effect by Day".bold().to_string();
    let subtitle = format!(
        "baseline {:.2}%, {}/day per variation, {:.0}% power, alpha {}",
        experiment.baseline_rate * 100.0,
        group_thousands(experiment.daily_traffic),
        experiment.power * 100.0,
        experiment.significance_level
    )
    .dimmed()
    .to_string();

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&title));
    output.push_str(&format_box_line(&subtitle));
    output.push_str(&format_box_separator());

    let header = format!(
        "{:>6}  {:>14}  {:>14}  {:>8}",
        "Day", "n/variation", "n total", "MDE"
    )
    .bold()
    .to_string();
    output.push_str(&format_box_line(&header));

    for row in table.rows() {
        let mde = if row.mde_percent.is_finite() {
            format!("{:>7.2}%", row.mde_percent)
        } else {
            format!("{:>8}", "\u{2014}").red().to_string()
        };
        let line = format!(
            "{:>6}  {:>14}  {:>14}  {}",
            row.day,
            group_thousands(row.sample_size_per_variation),
            group_thousands(row.total_sample_size),
            mde
        );
        output.push_str(&format_box_line(&line));
    }

    output.push_str(&format_box_bottom());
    output
}

/// Render an integer with comma thousands separators.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

// Box drawing helpers

const BOX_WIDTH: usize = 72;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    // Strip ANSI codes for length calculation
    let visible_len = strip_ansi_codes(content).chars().count();
    let padding = if visible_len < BOX_WIDTH - 2 {
        BOX_WIDTH - 2 - visible_len
    } else {
        0
    };
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

/// Strip ANSI escape codes for accurate length calculation.
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of ANSI sequence)
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}
