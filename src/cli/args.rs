//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Binsect - Replace numeric attributes with supervised interval bins
#[derive(Parser, Debug)]
#[command(name = "binsect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Decision (label) column name.
    /// Defaults to the last column of the dataset.
    #[arg(short, long)]
    pub decision: Option<String>,

    /// Target number of bins per attribute.
    /// Values below 2 are a valid no-op request: attributes keep a single
    /// unbounded interval.
    #[arg(short = 'b', long, default_value = "3")]
    pub bins: usize,

    /// Output file path (CSV or Parquet, determined by extension).
    /// Defaults to the input directory with a '_disc' suffix
    /// (e.g., data.csv -> data_disc.csv).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path for the JSON splits report.
    /// Defaults to the input directory with a '_splits.json' suffix.
    #[arg(long)]
    pub splits_report: Option<PathBuf>,

    /// Skip the splits report entirely
    #[arg(long, default_value = "false")]
    pub no_report: bool,

    /// Skip interactive confirmation prompts
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for a full table scan (slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

impl Cli {
    /// Get the output path, deriving from the input if not explicitly
    /// provided: same directory, '_disc' suffix, same extension.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let parent = self
                .input
                .parent()
                .unwrap_or_else(|| std::path::Path::new("."));
            let stem = self
                .input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("output");
            let extension = self
                .input
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("csv");
            parent.join(format!("{}_disc.{}", stem, extension))
        })
    }

    /// Get the splits report path, derived from the input file.
    pub fn splits_report_path(&self) -> PathBuf {
        self.splits_report.clone().unwrap_or_else(|| {
            let parent = self
                .input
                .parent()
                .unwrap_or_else(|| std::path::Path::new("."));
            let stem = self
                .input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("output");
            parent.join(format!("{}_splits.json", stem))
        })
    }
}
