//! CLI implementation for `nyx-prepare fetch`
//!
//! Fetches, patches, and persists one or all asset families.

use anyhow::{Context, Result};

use crate::cli::output::{self, print_report};
use crate::core::pipeline::{self, PrepareReport};
use crate::core::plan::PreparePlan;
use crate::error::PrepareError;
use crate::infra::fetch::Fetcher;

/// Execute the fetch command
pub async fn execute(
    plan: &PreparePlan,
    family: Option<&str>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let fetcher = Fetcher::new();

    let spinner = (!json && !quiet).then(|| output::create_spinner("Fetching assets..."));
    let result = fetch_selected(plan, family, &fetcher).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let report = result.with_context(|| "Fetch failed")?;
    print_report(&report, json)
}

async fn fetch_selected(
    plan: &PreparePlan,
    family: Option<&str>,
    fetcher: &Fetcher,
) -> Result<PrepareReport, PrepareError> {
    match family {
        Some(name) => {
            let family = plan
                .family(name)
                .ok_or_else(|| PrepareError::UnknownFamily {
                    name: name.to_string(),
                })?;
            pipeline::fetch_family(family, fetcher).await
        }
        None => {
            let mut report = PrepareReport::default();
            for family in &plan.families {
                let partial = pipeline::fetch_family(family, fetcher).await?;
                report.persisted.extend(partial.persisted);
            }
            Ok(report)
        }
    }
}
