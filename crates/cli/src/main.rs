//! envmap - resolve schema-driven configuration from environment variables.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build an env provider from a schema or options file.
//! - Print variable names or the resolved configuration tree.
//!
//! Does NOT handle:
//! - Name derivation, conversion, or merging (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod provider_context;

use args::{Cli, LogFormat};
use clap::Parser;
use dispatch::run_command;
use envmap_config::load_dotenv;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();
    init_logging(cli.log_format);

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::from_default_env();
    match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}
