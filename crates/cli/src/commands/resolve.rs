//! `resolve` command: load configuration from the environment and print it.
//!
//! Responsibilities:
//! - Read the existing tree (if any), apply the provider, print the merged tree.
//!
//! Does NOT handle:
//! - Writing the merged tree back over `--existing`; use `--output-file`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use envmap_config::{ConfigStore, EnvProvider, Table, read_tree_file};

use crate::formatters::{OutputFormat, get_formatter, output_result};

pub fn run(
    provider: &EnvProvider,
    existing: Option<&Path>,
    output_format: &str,
    output_file: Option<&PathBuf>,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;

    let tree = match existing {
        Some(path) => read_tree_file(path).with_context(|| {
            format!("Failed to load existing configuration from {}", path.display())
        })?,
        None => Table::new(),
    };

    let mut store = ConfigStore::from_tree(tree);
    store
        .apply(provider)
        .context("Failed to resolve configuration from environment")?;

    let output = get_formatter(format).format_tree(store.tree())?;
    output_result(&output, format, output_file)
}
