//! perfconf - resolved configuration for GoCD performance-test tooling
//!
//! A thin CLI over `perfconf-core`, letting install scripts and test
//! orchestrators read resolved values from the shell.

use clap::Parser;

mod commands;

use commands::Cli;

fn main() {
    perfconf_core::logging::init();

    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
