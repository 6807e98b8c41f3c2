//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::core::plan::PreparePlan;
use commands::Commands;

/// Nyx-prepare - Pre-build asset preparation for the Nyx node library
///
/// Compile the schema into an embeddable header and fetch the pinned
/// vendored sources and documentation theme.
#[derive(Parser, Debug)]
#[command(name = "nyx-prepare")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project root containing src/ and .doxygen/
    #[arg(long, default_value = ".", global = true)]
    pub root: PathBuf,

    /// Replace the upstream raw-content host (e.g. an internal mirror)
    #[arg(long, env = "NYX_PREPARE_MIRROR", global = true)]
    pub mirror: Option<String>,

    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output the run summary in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the CLI command. Without a subcommand the full pipeline runs,
    /// matching the tool's pre-build invocation.
    pub async fn run(self) -> Result<()> {
        let plan = match self.mirror.as_deref() {
            Some(host) => PreparePlan::with_host(&self.root, host.trim_end_matches('/')),
            None => PreparePlan::standard(&self.root),
        };

        match self.command {
            Some(Commands::Schema) => commands::schema::execute(&plan, self.json),
            Some(Commands::Fetch { family }) => {
                commands::fetch::execute(&plan, family.as_deref(), self.json, self.quiet).await
            }
            Some(Commands::Run) | None => commands::run::execute(&plan, self.json, self.quiet).await,
        }
    }
}
