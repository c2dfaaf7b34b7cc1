//! Tests for the presentation adapters.
//!
//! All three adapters consume the same table value; these tests check the
//! formatting policies stay out of the core (the table itself carries real
//! numbers only).

use mde_planner::output::{format_table, to_csv, to_json};
use mde_planner::{plan, Experiment};

fn default_plan() -> (Experiment, mde_planner::ProjectionTable) {
    let experiment = Experiment::default();
    let table = plan(&experiment).unwrap();
    (experiment, table)
}

#[test]
fn csv_has_header_plus_row_per_day() {
    let (_, table) = default_plan();
    let csv = to_csv(&table);
    assert_eq!(csv.lines().count(), table.len() + 1);
    assert!(csv.starts_with("day,"));
}

#[test]
fn csv_values_match_table() {
    let (_, table) = default_plan();
    let csv = to_csv(&table);

    for (line, row) in csv.lines().skip(1).zip(table.rows()) {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields[0].parse::<u64>().unwrap(), row.day);
        assert_eq!(
            fields[1].parse::<u64>().unwrap(),
            row.sample_size_per_variation
        );
        assert_eq!(fields[2].parse::<u64>().unwrap(), row.total_sample_size);

        let mde: f64 = fields[3].parse().unwrap();
        assert!((mde - row.mde_percent).abs() < 0.005, "rounding drifted");
    }
}

#[test]
fn json_round_trips_the_table() {
    let (_, table) = default_plan();
    let json = to_json(&table).unwrap();
    let parsed: mde_planner::ProjectionTable = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, table);
}

#[test]
fn terminal_table_renders_every_day() {
    let (experiment, table) = default_plan();
    let rendered = format_table(&experiment, &table);

    // 21 data rows plus framing; every sample size appears with separators.
    assert!(rendered.contains("7,989"));
    assert!(rendered.contains("167,769")); // day 21 per variation
    assert!(rendered.contains("Minimum Detectable Effect by Day"));
}

#[test]
fn adapters_agree_on_the_numbers() {
    let (experiment, table) = default_plan();
    let csv = to_csv(&table);
    let rendered = format_table(&experiment, &table);

    let day1_csv_mde = csv.lines().nth(1).unwrap().split(',').nth(3).unwrap();
    assert!(rendered.contains(day1_csv_mde));
}
