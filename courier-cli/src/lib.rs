//! Command-line interface for the courier batch-delivery simulator.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod report;
mod run;

pub use error::CliError;
use run::{RunArgs, run_simulation};

pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_CAPACITY: &str = "capacity";
pub(crate) const ARG_ALLOW_REPEAT_VISITS: &str = "allow-repeat-visits";
pub(crate) const ARG_MAX_ITERATIONS: &str = "max-iterations";
pub(crate) const ARG_OUTPUT_DIR: &str = "output-dir";
pub(crate) const ARG_OUTPUT_FILE: &str = "output-file";

/// Run the courier CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Run(args) => run_simulation(args),
    }
}

/// Dispatch an already parsed command line, writing output to `writer`.
#[cfg(test)]
fn run_with(cli: Cli, writer: &mut dyn std::io::Write) -> Result<(), CliError> {
    match cli.command {
        Command::Run(args) => run::run_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "courier",
    about = "Batch-delivery courier simulator",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Simulate a delivery day and write the routes as GeoJSON.
    Run(RunArgs),
}

#[cfg(test)]
mod tests;
