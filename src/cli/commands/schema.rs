//! CLI implementation for `nyx-prepare schema`
//!
//! Compiles the binary schema into the embeddable header without touching
//! the network.

use anyhow::{Context, Result};

use crate::cli::output::print_report;
use crate::core::pipeline::PrepareReport;
use crate::core::plan::PreparePlan;
use crate::core::schema;

/// Execute the schema command
pub fn execute(plan: &PreparePlan, json: bool) -> Result<()> {
    let bytes = schema::compile(&plan.schema).with_context(|| "Schema compilation failed")?;

    let report = PrepareReport {
        schema_bytes: Some(bytes),
        schema_output: Some(plan.schema.output.clone()),
        persisted: Vec::new(),
    };
    print_report(&report, json)
}
