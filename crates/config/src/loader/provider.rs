//! The provider entry point: `init` once, `load` at startup.
//!
//! Responsibilities:
//! - Hold validated options between `init` and `load`.
//! - Run walk + merge against the process environment or a given source.
//! - List the variable names a provider reads.
//!
//! Does NOT handle:
//! - Owning the host configuration (see `store::ConfigStore`).
//!
//! Invariants:
//! - A load either returns the fully merged tree or an error; the existing
//!   tree is never returned half-updated.
//! - Deferred schemas are computed once per load.

use serde_json::Value as JsonValue;
use tracing::{debug, info};

use super::env::{EnvSource, ProcessEnv};
use super::error::{LoadError, OptionsError};
use super::merge::merge;
use super::naming::env_var_names;
use super::options::{Options, SchemaRegistry, SchemaSource};
use super::walker::SchemaWalker;
use crate::types::{Segment, Table};

/// Environment-backed configuration provider.
#[derive(Debug, Clone)]
pub struct EnvProvider {
    prefix: Segment,
    env_map: SchemaSource,
    enforce: bool,
}

impl EnvProvider {
    /// Create a provider from typed options.
    pub fn init(options: Options) -> Self {
        let Options {
            prefix,
            env_map,
            enforce,
        } = options;
        debug!(prefix = %prefix, enforce, "initialized env provider");
        Self {
            prefix,
            env_map,
            enforce,
        }
    }

    /// Create a provider from an options document, validating it eagerly.
    pub fn init_from_value(
        options: &JsonValue,
        registry: &SchemaRegistry,
    ) -> Result<Self, OptionsError> {
        Options::from_value(options, registry).map(Self::init)
    }

    pub fn prefix(&self) -> &Segment {
        &self.prefix
    }

    pub fn enforce(&self) -> bool {
        self.enforce
    }

    /// Override the enforcement flag chosen at `init`.
    pub fn with_enforce(mut self, enforce: bool) -> Self {
        self.enforce = enforce;
        self
    }

    /// Resolve against the process environment and merge into `existing`.
    pub fn load(&self, existing: Table) -> Result<Table, LoadError> {
        self.load_with_env(existing, &ProcessEnv)
    }

    /// Resolve against `env` and merge into `existing`.
    pub fn load_with_env(&self, existing: Table, env: &dyn EnvSource) -> Result<Table, LoadError> {
        let incoming = self.resolve_with_env(env)?;
        Ok(merge(existing, incoming))
    }

    /// Resolve against `env` without merging.
    pub fn resolve_with_env(&self, env: &dyn EnvSource) -> Result<Table, LoadError> {
        let schema = self.env_map.resolve()?;
        let tree = SchemaWalker::new(&self.prefix, self.enforce, env).walk(&schema)?;
        info!(
            prefix = %self.prefix,
            apps = tree.len(),
            "resolved configuration from environment"
        );
        Ok(tree)
    }

    /// Every variable name this provider reads, in schema order.
    pub fn env_vars(&self) -> Result<Vec<String>, LoadError> {
        let schema = self.env_map.resolve()?;
        Ok(env_var_names(&schema, &self.prefix))
    }
}
