//! Shared test utilities and fixture generators

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Two well-separated value clusters with perfectly aligned labels.
///
/// The best first cut is the midpoint 6.5 with gain 16 (4x4 cross pairs,
/// none matching).
pub fn create_clustered_dataframe() -> DataFrame {
    df! {
        "age" => [1.0f64, 2.0, 3.0, 4.0, 10.0, 11.0, 12.0, 13.0],
        "class" => ["A", "A", "A", "A", "B", "B", "B", "B"],
    }
    .unwrap()
}

/// A dataset with a mix of numeric, non-numeric, and degenerate columns
pub fn create_mixed_dataframe() -> DataFrame {
    df! {
        "numeric_good" => [1.0f64, 2.0, 3.0, 4.0, 10.0, 11.0, 12.0, 13.0],
        "text_column" => ["x", "y", "x", "y", "x", "y", "x", "y"],
        "constant" => [5.0f64; 8],
        "with_nulls" => [Some(1.0f64), None, Some(3.0), Some(4.0), Some(10.0), None, Some(12.0), Some(13.0)],
        "class" => ["A", "A", "A", "A", "B", "B", "B", "B"],
    }
    .unwrap()
}

/// Random numeric features against a random two-class decision
pub fn create_large_dataframe(rows: usize, cols: usize) -> DataFrame {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    let mut columns: Vec<Column> = Vec::with_capacity(cols + 1);

    for i in 0..cols {
        let values: Vec<f64> = (0..rows).map(|_| rng.gen::<f64>() * 100.0).collect();
        columns.push(Column::new(format!("attr_{}", i).into(), values));
    }

    let decision: Vec<&str> = (0..rows)
        .map(|_| if rng.gen_bool(0.5) { "yes" } else { "no" })
        .collect();
    columns.push(Column::new("class".into(), decision));

    DataFrame::new(columns).unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("test_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Assert that a DataFrame contains specific columns
pub fn assert_has_columns(df: &DataFrame, expected_cols: &[&str]) {
    let actual_cols: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in expected_cols {
        assert!(
            actual_cols.contains(&col.to_string()),
            "Missing expected column: '{}'. Actual columns: {:?}",
            col,
            actual_cols
        );
    }
}
