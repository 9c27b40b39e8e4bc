//! Per-attribute discretization driver over a DataFrame
//!
//! Attributes are independent given the decision column, so they are
//! discretized in parallel and the resulting label columns collected back
//! in the original column order. Non-numeric attributes and attributes
//! that fail to analyze are passed through unchanged with a recorded
//! reason; one bad column never aborts the run.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use polars::prelude::*;
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::discretize::{discretize_attribute, DiscretizeOutcome};
use super::intervals::{bin_label, labels_for_splits};

/// Label given to rows whose attribute value is null.
pub const MISSING_LABEL: &str = "MISSING";

/// Diagnostics for one attribute column.
#[derive(Debug, Clone)]
pub struct AttributeReport {
    pub name: String,
    /// False when the column was passed through unchanged.
    pub discretized: bool,
    pub outcome: DiscretizeOutcome,
    /// Bin labels left to right, e.g. `(-inf; 6.5]`, `(6.5; inf)`.
    pub bin_labels: Vec<String>,
    /// Why the column was passed through, when it was.
    pub skip_reason: Option<String>,
}

/// Discretized table plus per-attribute diagnostics.
#[derive(Debug)]
pub struct DatasetDiscretization {
    pub df: DataFrame,
    pub attributes: Vec<AttributeReport>,
}

impl DatasetDiscretization {
    pub fn discretized_count(&self) -> usize {
        self.attributes.iter().filter(|a| a.discretized).count()
    }

    pub fn passed_through_count(&self) -> usize {
        self.attributes.iter().filter(|a| !a.discretized).count()
    }

    pub fn total_splits(&self) -> usize {
        self.attributes.iter().map(|a| a.outcome.splits.len()).sum()
    }
}

/// Discretize every attribute of `df` against the decision column.
///
/// Each numeric attribute is replaced by its interval label strings; the
/// decision column is appended last. Rows with a null decision are
/// excluded from split selection but still labeled.
pub fn discretize_dataset(
    df: &DataFrame,
    decision: &str,
    n_bins: usize,
) -> Result<DatasetDiscretization> {
    let decision_col = df
        .column(decision)
        .with_context(|| format!("Decision column '{}' not found", decision))?;
    let labels = column_to_string_vec(decision_col)?;

    let attribute_names: Vec<String> = df
        .get_column_names()
        .iter()
        .filter(|name| name.as_str() != decision)
        .map(|name| name.to_string())
        .collect();

    if attribute_names.is_empty() {
        anyhow::bail!("Dataset must have at least one attribute besides the decision column");
    }

    let pb = ProgressBar::new(attribute_names.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "   Discretizing [{bar:40.cyan/blue}] {pos}/{len} attributes ({percent}%) [{eta}]",
            )
            .unwrap()
            .progress_chars("=>-"),
    );

    let progress_counter = Arc::new(AtomicU64::new(0));

    // Indexed parallel collect preserves the original attribute order.
    let results: Vec<(Column, AttributeReport)> = attribute_names
        .par_iter()
        .map(|name| {
            let result = discretize_column(df, name, &labels, n_bins);

            let count = progress_counter.fetch_add(1, Ordering::Relaxed);
            pb.set_position(count + 1);

            match result {
                Ok(pair) => pair,
                Err(e) => pass_through(df, name, e.to_string()),
            }
        })
        .collect();

    pb.finish_with_message(format!(
        "   [OK] Processed {} attributes",
        attribute_names.len()
    ));

    let mut columns: Vec<Column> = Vec::with_capacity(results.len() + 1);
    let mut attributes: Vec<AttributeReport> = Vec::with_capacity(results.len());
    for (column, report) in results {
        columns.push(column);
        attributes.push(report);
    }
    columns.push(decision_col.clone());

    let df = DataFrame::new(columns).context("Failed to assemble discretized DataFrame")?;

    Ok(DatasetDiscretization { df, attributes })
}

/// Discretize a single attribute column into a label column.
fn discretize_column(
    df: &DataFrame,
    name: &str,
    labels: &[Option<String>],
    n_bins: usize,
) -> Result<(Column, AttributeReport)> {
    let col = df.column(name)?;

    if !col.dtype().is_primitive_numeric() {
        return Ok(pass_through(df, name, "not a numeric column".to_string()));
    }

    let float_col = col.cast(&DataType::Float64)?;
    let values = float_col.f64()?;

    // Null-decision rows carry no label information for the split search.
    let samples: Vec<(f64, String)> = values
        .iter()
        .zip(labels.iter())
        .filter_map(|(v, l)| match (v, l) {
            (Some(value), Some(label)) => Some((value, label.clone())),
            _ => None,
        })
        .collect();

    let outcome = discretize_attribute(&samples, n_bins);

    let labeled: Vec<String> = values
        .iter()
        .map(|v| match v {
            Some(value) => bin_label(value, &outcome.splits),
            None => MISSING_LABEL.to_string(),
        })
        .collect();

    let bin_labels = labels_for_splits(&outcome.splits);

    Ok((
        Column::new(name.into(), labeled),
        AttributeReport {
            name: name.to_string(),
            discretized: true,
            outcome,
            bin_labels,
            skip_reason: None,
        },
    ))
}

/// Keep a column unchanged and record why.
fn pass_through(df: &DataFrame, name: &str, reason: String) -> (Column, AttributeReport) {
    let column = df
        .column(name)
        .map(|c| c.clone())
        .unwrap_or_else(|_| Column::new(name.into(), Vec::<String>::new()));

    (
        column,
        AttributeReport {
            name: name.to_string(),
            discretized: false,
            outcome: DiscretizeOutcome::default(),
            bin_labels: Vec::new(),
            skip_reason: Some(reason),
        },
    )
}

/// Convert a column to Option<String> values for use as decision labels.
fn column_to_string_vec(col: &Column) -> Result<Vec<Option<String>>> {
    let values: Vec<Option<String>> = match col.dtype() {
        DataType::String => col
            .str()?
            .into_iter()
            .map(|v| v.map(|s| s.to_string()))
            .collect(),
        DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64 => {
            let cast = col.cast(&DataType::Int64)?;
            cast.i64()?
                .into_iter()
                .map(|v| v.map(|n| n.to_string()))
                .collect()
        }
        DataType::UInt8 | DataType::UInt16 | DataType::UInt32 | DataType::UInt64 => {
            let cast = col.cast(&DataType::UInt64)?;
            cast.u64()?
                .into_iter()
                .map(|v| v.map(|n| n.to_string()))
                .collect()
        }
        DataType::Float32 | DataType::Float64 => {
            let cast = col.cast(&DataType::Float64)?;
            cast.f64()?
                .into_iter()
                .map(|v| v.map(|n| format!("{}", n)))
                .collect()
        }
        DataType::Boolean => col
            .bool()?
            .into_iter()
            .map(|v| v.map(|b| b.to_string()))
            .collect(),
        _ => {
            let cast = col.cast(&DataType::String)?;
            cast.str()?
                .into_iter()
                .map(|v| v.map(|s| s.to_string()))
                .collect()
        }
    };

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_labels_from_string_column() {
        let df = df! {
            "d" => ["yes", "no", "yes"],
        }
        .unwrap();
        let labels = column_to_string_vec(df.column("d").unwrap()).unwrap();
        assert_eq!(
            labels,
            vec![
                Some("yes".to_string()),
                Some("no".to_string()),
                Some("yes".to_string())
            ]
        );
    }

    #[test]
    fn test_decision_labels_from_int_column_with_nulls() {
        let df = df! {
            "d" => [Some(1i32), None, Some(0)],
        }
        .unwrap();
        let labels = column_to_string_vec(df.column("d").unwrap()).unwrap();
        assert_eq!(
            labels,
            vec![Some("1".to_string()), None, Some("0".to_string())]
        );
    }
}
