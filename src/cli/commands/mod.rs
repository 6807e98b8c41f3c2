//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod fetch;
pub mod run;
pub mod schema;

use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full preparation pipeline (schema + all asset families)
    Run,

    /// Compile the binary schema into the embeddable header
    Schema,

    /// Fetch, patch, and persist remote asset families
    Fetch {
        /// Fetch only the named family (all families if not specified)
        #[arg(short, long)]
        family: Option<String>,
    },
}
