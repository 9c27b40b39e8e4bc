//! Binsect: Supervised Discretization CLI Tool
//!
//! A command-line tool that replaces numeric attribute columns with
//! half-open interval labels chosen to maximize pairwise label separation
//! against a decision column.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use binsect::cli::{confirm_overwrite, Cli};
use binsect::pipeline::{discretize_dataset, load_dataset, save_dataset, DiscretizeWarning};
use binsect::report::{export_splits, ExportParams, RunSummary};
use binsect::utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_count, print_info, print_step_header, print_step_time, print_success, print_warning,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output_path = cli.output_path();

    print_banner(env!("CARGO_PKG_VERSION"));

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");

    let step_start = Instant::now();
    let spinner = create_spinner("Loading dataset...");
    let df = load_dataset(&cli.input, cli.infer_schema_length)?;
    finish_with_success(&spinner, "Dataset loaded");

    if df.height() == 0 {
        print_warning("Input dataset is empty. Nothing to discretize.");
        return Ok(());
    }

    let (rows, cols) = df.shape();
    println!("\n    {} Dataset Statistics:", style("::").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);

    if cols < 2 {
        anyhow::bail!("Dataset must have at least one attribute and one decision column");
    }

    // Decision column defaults to the last column of the dataset
    let column_names: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    let decision = match &cli.decision {
        Some(name) => {
            if !column_names.contains(name) {
                anyhow::bail!(
                    "Decision column '{}' not found in dataset. Available columns: {:?}",
                    name,
                    column_names
                );
            }
            name.clone()
        }
        None => column_names
            .last()
            .expect("non-empty dataset has columns")
            .clone(),
    };

    print_config(&cli.input, &decision, &output_path, cli.bins);

    let mut summary = RunSummary::new(cols - 1);
    let load_elapsed = step_start.elapsed();
    summary.set_load_time(load_elapsed);
    print_step_time(load_elapsed);

    if cli.bins < 2 {
        print_warning("Fewer than 2 bins requested - attributes will keep a single interval");
    }

    // Step 2: Discretize attributes
    print_step_header(2, "Discretize Attributes");

    let step_start = Instant::now();
    println!(); // Blank line before progress bar
    let result = discretize_dataset(&df, &decision, cli.bins)?;
    print_success("Attribute discretization complete");

    print_count("attribute(s) discretized", result.discretized_count(), None);
    print_count("split point(s) placed", result.total_splits(), None);

    let passed_through: Vec<_> = result.attributes.iter().filter(|a| !a.discretized).collect();
    if !passed_through.is_empty() {
        print_warning(&format!(
            "{} attribute(s) passed through unchanged:",
            passed_through.len()
        ));
        for report in &passed_through {
            println!(
                "        {} {} ({})",
                style("•").dim(),
                report.name,
                style(report.skip_reason.as_deref().unwrap_or("unknown")).dim()
            );
        }
    }

    let stopped_early = result
        .attributes
        .iter()
        .filter(|a| {
            a.outcome
                .warnings
                .contains(&DiscretizeWarning::NoInformativeSplit)
        })
        .count();
    if stopped_early > 0 {
        print_info(&format!(
            "{} attribute(s) ran out of informative splits before reaching {} bins",
            stopped_early, cli.bins
        ));
    }

    summary.set_results(
        result.discretized_count(),
        result.passed_through_count(),
        result.total_splits(),
    );
    let discretize_elapsed = step_start.elapsed();
    summary.set_discretize_time(discretize_elapsed);
    print_step_time(discretize_elapsed);

    // Step 3: Save results
    print_step_header(3, "Save Results");

    if output_path.exists() && !cli.no_confirm && !confirm_overwrite(&output_path)? {
        println!("Cancelled by user.");
        return Ok(());
    }

    let step_start = Instant::now();
    let spinner = create_spinner("Writing output file...");
    let mut out_df = result.df;
    save_dataset(&mut out_df, &output_path)?;
    finish_with_success(&spinner, &format!("Saved to {}", output_path.display()));

    if !cli.no_report {
        let report_path = cli.splits_report_path();
        export_splits(
            &result.attributes,
            &report_path,
            &ExportParams {
                input_file: &cli.input.display().to_string(),
                decision_column: &decision,
                n_bins: cli.bins,
            },
        )?;
        print_success(&format!("Splits report written to {}", report_path.display()));
    }

    let save_elapsed = step_start.elapsed();
    summary.set_save_time(save_elapsed);
    print_step_time(save_elapsed);

    // Display summary
    summary.display();
    print_completion();

    Ok(())
}
