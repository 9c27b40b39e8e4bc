//! Splits report export functionality

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::AttributeReport;

/// Metadata about the discretization run
#[derive(Serialize)]
pub struct RunMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// Binsect version
    pub binsect_version: String,
    /// Input file path
    pub input_file: String,
    /// Decision column name
    pub decision_column: String,
    /// Requested number of bins per attribute
    pub n_bins: usize,
}

/// Summary statistics of the run
#[derive(Serialize)]
pub struct RunStats {
    pub attributes_total: usize,
    pub discretized: usize,
    pub passed_through: usize,
    pub total_splits: usize,
}

/// A single attribute's split list with diagnostics
#[derive(Serialize)]
pub struct AttributeEntry {
    pub name: String,
    pub discretized: bool,
    /// Final split points, sorted ascending
    pub splits: Vec<f64>,
    /// Gains in greedy acceptance order
    pub gains: Vec<u64>,
    /// Bin labels left to right
    pub bin_labels: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<String>,
}

/// Complete splits export with metadata
#[derive(Serialize)]
pub struct SplitsExport {
    pub metadata: RunMetadata,
    pub stats: RunStats,
    pub attributes: Vec<AttributeEntry>,
}

/// Parameters for the splits export metadata
pub struct ExportParams<'a> {
    pub input_file: &'a str,
    pub decision_column: &'a str,
    pub n_bins: usize,
}

/// Export per-attribute split lists and diagnostics to a JSON file
pub fn export_splits(
    reports: &[AttributeReport],
    output_path: &Path,
    params: &ExportParams,
) -> Result<()> {
    let entries: Vec<AttributeEntry> = reports
        .iter()
        .map(|report| AttributeEntry {
            name: report.name.clone(),
            discretized: report.discretized,
            splits: report.outcome.splits.clone(),
            gains: report.outcome.chosen.iter().map(|c| c.gain).collect(),
            bin_labels: report.bin_labels.clone(),
            warnings: report
                .outcome
                .warnings
                .iter()
                .map(|w| w.to_string())
                .collect(),
            skip_reason: report.skip_reason.clone(),
        })
        .collect();

    let discretized = reports.iter().filter(|r| r.discretized).count();
    let total_splits = reports.iter().map(|r| r.outcome.splits.len()).sum();

    let export = SplitsExport {
        metadata: RunMetadata {
            timestamp: Utc::now().to_rfc3339(),
            binsect_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: params.input_file.to_string(),
            decision_column: params.decision_column.to_string(),
            n_bins: params.n_bins,
        },
        stats: RunStats {
            attributes_total: reports.len(),
            discretized,
            passed_through: reports.len() - discretized,
            total_splits,
        },
        attributes: entries,
    };

    let json =
        serde_json::to_string_pretty(&export).context("Failed to serialize splits report to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write splits report to {}", output_path.display()))?;

    Ok(())
}
