//! Integration tests for the full discretization driver

use binsect::pipeline::*;
use polars::prelude::*;

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_driver_replaces_values_with_interval_labels() {
    let df = create_clustered_dataframe();

    let result = discretize_dataset(&df, "class", 2).unwrap();

    assert_eq!(result.discretized_count(), 1);
    assert_eq!(result.total_splits(), 1);

    let age = result.df.column("age").unwrap();
    let labels: Vec<String> = age
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap().to_string())
        .collect();

    assert_eq!(&labels[..4], &["(-inf; 7]"; 4]);
    assert_eq!(&labels[4..], &["(7; inf)"; 4]);
}

#[test]
fn test_driver_keeps_decision_column_last() {
    let df = create_mixed_dataframe();

    let result = discretize_dataset(&df, "class", 3).unwrap();

    let names: Vec<String> = result
        .df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(names.last().unwrap(), "class");
    assert_eq!(result.df.width(), df.width());
}

#[test]
fn test_driver_passes_non_numeric_through() {
    let df = create_mixed_dataframe();

    let result = discretize_dataset(&df, "class", 3).unwrap();

    let text_report = result
        .attributes
        .iter()
        .find(|a| a.name == "text_column")
        .unwrap();
    assert!(!text_report.discretized);
    assert!(text_report.skip_reason.is_some());

    // Original values survive untouched
    let text = result.df.column("text_column").unwrap();
    assert_eq!(text.str().unwrap().get(0), Some("x"));
}

#[test]
fn test_driver_constant_column_gets_single_interval() {
    let df = create_mixed_dataframe();

    let result = discretize_dataset(&df, "class", 3).unwrap();

    let constant = result
        .attributes
        .iter()
        .find(|a| a.name == "constant")
        .unwrap();
    assert!(constant.discretized);
    assert!(constant.outcome.splits.is_empty());
    assert_eq!(constant.bin_labels, vec!["(-inf; inf)"]);

    let col = result.df.column("constant").unwrap();
    assert_eq!(col.str().unwrap().get(0), Some("(-inf; inf)"));
}

#[test]
fn test_driver_labels_null_values_as_missing() {
    let df = create_mixed_dataframe();

    let result = discretize_dataset(&df, "class", 2).unwrap();

    let col = result.df.column("with_nulls").unwrap();
    let values: Vec<&str> = col
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap())
        .collect();
    assert_eq!(values[1], MISSING_LABEL);
    assert_eq!(values[5], MISSING_LABEL);
    assert!(values[0].starts_with("(-inf;"));
}

#[test]
fn test_driver_rejects_unknown_decision_column() {
    let df = create_clustered_dataframe();

    let result = discretize_dataset(&df, "nope", 2);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("nope"));
}

#[test]
fn test_driver_rejects_decision_only_dataset() {
    let df = df! {
        "class" => ["A", "B", "A"],
    }
    .unwrap();

    let result = discretize_dataset(&df, "class", 2);
    assert!(result.is_err());
}

#[test]
fn test_driver_noop_bins_keeps_every_row_in_one_interval() {
    let df = create_clustered_dataframe();

    let result = discretize_dataset(&df, "class", 1).unwrap();

    assert_eq!(result.total_splits(), 0);
    let age = result.df.column("age").unwrap();
    for v in age.str().unwrap().into_iter() {
        assert_eq!(v, Some("(-inf; inf)"));
    }
}

#[test]
fn test_driver_numeric_decision_column() {
    let df = df! {
        "attr" => [1.0f64, 2.0, 3.0, 10.0, 11.0, 12.0],
        "label" => [0i32, 0, 0, 1, 1, 1],
    }
    .unwrap();

    let result = discretize_dataset(&df, "label", 2).unwrap();

    assert_eq!(result.total_splits(), 1);
    let report = &result.attributes[0];
    assert_eq!(report.outcome.splits, vec![6.5]);
    assert_eq!(report.outcome.chosen[0].gain, 9);
}

#[test]
fn test_driver_null_decision_rows_are_still_labeled() {
    let df = df! {
        "attr" => [1.0f64, 2.0, 3.0, 10.0, 11.0, 12.0],
        "label" => [Some("A"), Some("A"), None, Some("B"), Some("B"), Some("B")],
    }
    .unwrap();

    let result = discretize_dataset(&df, "label", 2).unwrap();

    let col = result.df.column("attr").unwrap();
    // Row 2 had no decision but still receives an interval label
    let third = col.str().unwrap().get(2).unwrap();
    assert!(third.starts_with('('), "expected interval label, got {}", third);
}

#[test]
fn test_driver_round_trip_through_csv() {
    let mut df = create_clustered_dataframe();
    let (_temp_dir, csv_path) = create_temp_csv(&mut df);

    let df = load_dataset(&csv_path, 100).unwrap();
    let result = discretize_dataset(&df, "class", 2).unwrap();

    assert_has_columns(&result.df, &["age", "class"]);
    assert_eq!(result.total_splits(), 1);
}

#[test]
fn test_driver_large_dataset_completes() {
    let df = create_large_dataframe(300, 10);

    let result = discretize_dataset(&df, "class", 4).unwrap();

    assert_eq!(result.attributes.len(), 10);
    for report in &result.attributes {
        assert!(report.outcome.splits.len() <= 3);
        for pair in report.outcome.splits.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
