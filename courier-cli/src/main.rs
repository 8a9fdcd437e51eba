//! Entry point for the `courier` command-line interface.
#![forbid(unsafe_code)]

use courier_cli::CliError;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    match courier_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("courier: {err}");
            std::process::exit(1);
        }
    }
}

/// Install a `tracing` subscriber that also receives `log` records from the
/// library crates. `RUST_LOG` overrides the default `info` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
