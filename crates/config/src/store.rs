//! Explicit host configuration store.
//!
//! Responsibilities:
//! - Hold an application configuration tree between loads.
//! - Apply a provider as one read-then-write transaction.
//!
//! Does NOT handle:
//! - Locking. Callers sharing a store across threads serialize access.
//!
//! Invariants:
//! - A failed `apply` leaves the store untouched.

use crate::loader::{EnvProvider, EnvSource, LoadError, ProcessEnv, merge_into};
use crate::types::{Table, Value, get_path};

/// Application configuration keyed by application name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    tree: Table,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tree(tree: Table) -> Self {
        Self { tree }
    }

    /// Configuration of one application.
    pub fn get(&self, app: &str) -> Option<&Value> {
        self.tree.get(app)
    }

    /// Value at `path`, application first.
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        get_path(&self.tree, path)
    }

    /// Deep-merge `incoming` into the store.
    pub fn merge(&mut self, incoming: Table) {
        merge_into(&mut self.tree, incoming);
    }

    /// Resolve `provider` against the process environment and merge the result.
    pub fn apply(&mut self, provider: &EnvProvider) -> Result<(), LoadError> {
        self.apply_with_env(provider, &ProcessEnv)
    }

    /// Resolve `provider` against `env` and merge the result.
    pub fn apply_with_env(
        &mut self,
        provider: &EnvProvider,
        env: &dyn EnvSource,
    ) -> Result<(), LoadError> {
        let incoming = provider.resolve_with_env(env)?;
        self.merge(incoming);
        Ok(())
    }

    pub fn tree(&self) -> &Table {
        &self.tree
    }

    pub fn into_tree(self) -> Table {
        self.tree
    }
}
