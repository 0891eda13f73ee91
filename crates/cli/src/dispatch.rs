//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Build the provider each command needs.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit code mapping (see `error` module).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::provider_context::ProviderSource;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let output_format = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.command.default_output().to_string());
    let source =
        ProviderSource::from_args(cli.schema.as_deref(), cli.options.as_deref(), &cli.prefix)?;

    match cli.command {
        Commands::Vars => {
            let provider = source.build(None)?;
            commands::vars::run(&provider, &output_format, cli.output_file.as_ref())?;
        }
        Commands::Resolve {
            no_enforce,
            existing,
        } => {
            let provider = source.build(no_enforce.then_some(false))?;
            commands::resolve::run(
                &provider,
                existing.as_deref(),
                &output_format,
                cli.output_file.as_ref(),
            )?;
        }
    }

    Ok(())
}
