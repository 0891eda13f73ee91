//! `vars` command: list the environment variables a schema reads.
//!
//! Performs no lookups; the output is the same whatever the environment holds.

use std::path::PathBuf;

use anyhow::{Context, Result};
use envmap_config::EnvProvider;

use crate::formatters::{OutputFormat, get_formatter, output_result};

pub fn run(
    provider: &EnvProvider,
    output_format: &str,
    output_file: Option<&PathBuf>,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let vars = provider.env_vars().context("Failed to compute variable names")?;

    tracing::debug!(count = vars.len(), "listing environment variables");

    let output = get_formatter(format).format_vars(&vars)?;
    output_result(&output, format, output_file)
}
