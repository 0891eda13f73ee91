//! Provider construction from CLI arguments.
//!
//! Responsibilities:
//! - Build an `EnvProvider` from `--options`, or from `--schema` plus `--prefix`.
//! - Apply the `--no-enforce` override.
//!
//! Does NOT handle:
//! - Running loads (see `commands`).
//!
//! Invariants:
//! - Exactly one of `--schema` and `--options` is used; clap rejects both.
//! - `--prefix` only applies to `--schema`; clap rejects it next to `--options`.
//! - Option documents go through the same validation as library callers.

use std::path::Path;

use anyhow::{Context, Result};
use envmap_config::{
    EnvProvider, Options, SchemaRegistry, Segment, read_options_file, read_schema_file,
};

use crate::error::UsageError;

/// Where the provider's definition comes from.
pub(crate) enum ProviderSource<'a> {
    Options(&'a Path),
    Schema { path: &'a Path, prefix: &'a str },
}

impl<'a> ProviderSource<'a> {
    pub(crate) fn from_args(
        schema: Option<&'a Path>,
        options: Option<&'a Path>,
        prefix: &'a str,
    ) -> Result<Self> {
        match (options, schema) {
            (Some(path), _) => Ok(ProviderSource::Options(path)),
            (None, Some(path)) => Ok(ProviderSource::Schema { path, prefix }),
            (None, None) => Err(UsageError::MissingSchema.into()),
        }
    }

    /// Read the backing file and build the provider.
    ///
    /// `enforce_override` replaces the enforcement flag when set.
    pub(crate) fn build(&self, enforce_override: Option<bool>) -> Result<EnvProvider> {
        let provider = match self {
            ProviderSource::Options(path) => read_options_file(path, &SchemaRegistry::new())
                .with_context(|| format!("Failed to load options from {}", path.display()))?,
            ProviderSource::Schema { path, prefix } => {
                let schema = read_schema_file(path)
                    .with_context(|| format!("Failed to load schema from {}", path.display()))?;
                EnvProvider::init(Options::new(Segment::parse(prefix), schema))
            }
        };

        Ok(match enforce_override {
            Some(enforce) => provider.with_enforce(enforce),
            None => provider,
        })
    }
}
