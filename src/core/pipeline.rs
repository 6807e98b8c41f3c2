//! Preparation pipeline driver
//!
//! Runs the schema compilation and every asset family strictly in plan
//! order, one resource at a time. The first failure aborts the run;
//! files persisted by earlier steps are left in place, and re-running
//! converges because every step is idempotent for unchanged inputs.

use std::path::PathBuf;

use serde::Serialize;

use crate::core::plan::{AssetFamily, PreparePlan};
use crate::core::schema;
use crate::error::PrepareError;
use crate::infra::fetch::Fetcher;
use crate::infra::filesystem;

/// One asset persisted during a run
#[derive(Debug, Clone, Serialize)]
pub struct PersistedFile {
    /// Asset family the resource belongs to
    pub family: String,
    /// Remote filename
    pub filename: String,
    /// Local destination
    pub dest: PathBuf,
}

/// Summary of a preparation run
#[derive(Debug, Default, Serialize)]
pub struct PrepareReport {
    /// Byte length of the compiled schema, when the schema step ran
    pub schema_bytes: Option<usize>,
    /// Generated header path, when the schema step ran
    pub schema_output: Option<PathBuf>,
    /// Assets persisted by fetch steps, in completion order
    pub persisted: Vec<PersistedFile>,
}

/// Run the full pipeline: schema first, then every family in order.
pub async fn run(plan: &PreparePlan, fetcher: &Fetcher) -> Result<PrepareReport, PrepareError> {
    let mut report = PrepareReport::default();

    let bytes = schema::compile(&plan.schema)?;
    report.schema_bytes = Some(bytes);
    report.schema_output = Some(plan.schema.output.clone());

    for family in &plan.families {
        fetch_family_into(family, fetcher, &mut report).await?;
    }

    Ok(report)
}

/// Fetch, patch, and persist a single asset family.
pub async fn fetch_family(
    family: &AssetFamily,
    fetcher: &Fetcher,
) -> Result<PrepareReport, PrepareError> {
    let mut report = PrepareReport::default();
    fetch_family_into(family, fetcher, &mut report).await?;
    Ok(report)
}

async fn fetch_family_into(
    family: &AssetFamily,
    fetcher: &Fetcher,
    report: &mut PrepareReport,
) -> Result<(), PrepareError> {
    for resource in &family.resources {
        let url = family.url_for(&resource.filename);
        tracing::info!("Fetching {url}");

        let body = fetcher.fetch_text(&url, &resource.filename).await?;
        let patched = resource.rule.apply(&resource.filename, &body);
        filesystem::write_text(&resource.dest, &patched)?;

        report.persisted.push(PersistedFile {
            family: family.name.clone(),
            filename: resource.filename.clone(),
            dest: resource.dest.clone(),
        });
    }
    Ok(())
}
