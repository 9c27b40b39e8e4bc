//! Run summary report generation

use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Summary of a discretization run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub attributes_total: usize,
    pub discretized: usize,
    pub passed_through: usize,
    pub total_splits: usize,
    pub load_time: Option<Duration>,
    pub discretize_time: Option<Duration>,
    pub save_time: Option<Duration>,
}

impl RunSummary {
    pub fn new(attributes_total: usize) -> Self {
        Self {
            attributes_total,
            ..Default::default()
        }
    }

    pub fn set_results(&mut self, discretized: usize, passed_through: usize, total_splits: usize) {
        self.discretized = discretized;
        self.passed_through = passed_through;
        self.total_splits = total_splits;
    }

    pub fn set_load_time(&mut self, d: Duration) {
        self.load_time = Some(d);
    }

    pub fn set_discretize_time(&mut self, d: Duration) {
        self.discretize_time = Some(d);
    }

    pub fn set_save_time(&mut self, d: Duration) {
        self.save_time = Some(d);
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("::").cyan(),
            style("DISCRETIZATION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("Attributes"),
            Cell::new(self.attributes_total),
        ]);

        table.add_row(vec![
            Cell::new("Discretized"),
            Cell::new(self.discretized)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("Passed through"),
            Cell::new(self.passed_through).fg(if self.passed_through == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        table.add_row(vec![
            Cell::new("Split points placed"),
            Cell::new(self.total_splits),
        ]);

        if let Some(total) = self.total_time() {
            table.add_row(vec![
                Cell::new("Total time"),
                Cell::new(format!("{:.2}s", total.as_secs_f64())),
            ]);
        }

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }

    fn total_time(&self) -> Option<Duration> {
        match (self.load_time, self.discretize_time, self.save_time) {
            (Some(a), Some(b), Some(c)) => Some(a + b + c),
            _ => None,
        }
    }
}
