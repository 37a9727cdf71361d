//! CLI command dispatch and execution

use anyhow::Result;
use clap::{Parser, Subcommand};

mod get;
mod show;

/// perfconf - resolved configuration for GoCD performance-test tooling
#[derive(Parser, Debug)]
#[command(
    name = "perfconf",
    version,
    about = "Resolved configuration for GoCD performance-test tooling",
    long_about = "Reads the documented environment overrides, applies defaults, and prints \
                  the resolved values consumed by the install scripts and the load generator"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show every resolved value
    Show(show::ShowArgs),

    /// Print a single resolved value, script-friendly
    Get(get::GetArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Show(args) => show::execute(args),
            Commands::Get(args) => get::execute(args),
        }
    }
}
