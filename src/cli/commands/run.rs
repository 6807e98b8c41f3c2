//! CLI implementation for `nyx-prepare run`
//!
//! Runs the whole preparation pipeline: schema compilation, then every
//! asset family in order.

use anyhow::{Context, Result};

use crate::cli::output::{self, print_report};
use crate::core::pipeline;
use crate::core::plan::PreparePlan;
use crate::infra::fetch::Fetcher;

/// Execute the run command
pub async fn execute(plan: &PreparePlan, json: bool, quiet: bool) -> Result<()> {
    let fetcher = Fetcher::new();

    let spinner = (!json && !quiet).then(|| output::create_spinner("Preparing assets..."));
    let result = pipeline::run(plan, &fetcher).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let report = result.with_context(|| "Preparation failed")?;
    print_report(&report, json)
}
