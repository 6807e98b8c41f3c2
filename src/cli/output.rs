//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying progress spinners,
//! formatted run summaries, and error messages to the user.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::core::pipeline::PrepareReport;

/// Create a spinner for operations with unknown duration
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";
}

/// Print a run summary, either human-readable or as JSON.
pub fn print_report(report: &PrepareReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    if let (Some(bytes), Some(output)) = (report.schema_bytes, report.schema_output.as_ref()) {
        println!(
            "{} Compiled schema ({bytes} bytes) -> {}",
            status::SUCCESS,
            output.display()
        );
    }

    if !report.persisted.is_empty() {
        println!("{} Fetched {} asset(s):", status::SUCCESS, report.persisted.len());
        for file in &report.persisted {
            println!(
                "    {}/{} -> {}",
                file.family,
                file.filename,
                file.dest.display()
            );
        }
    }

    Ok(())
}

/// Display an error and its cause chain on stderr.
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("    caused by: {cause}");
    }
}
