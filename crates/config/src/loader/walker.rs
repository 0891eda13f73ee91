//! Schema traversal that resolves every leaf against the environment.
//!
//! Responsibilities:
//! - Walk a schema depth-first in schema order.
//! - For each leaf: derive its variable name, read it, fall back to the
//!   default, enforce presence, convert, and bind the value.
//! - Reassemble resolved leaves into a tree shaped like the schema.
//!
//! Does NOT handle:
//! - Merging with an existing tree (see merge.rs).
//! - Resolving deferred schema functions (see options.rs).
//!
//! Invariants:
//! - An unresolved leaf is omitted when not enforcing; no placeholder value
//!   is written, so merges keep whatever the existing tree holds.
//! - An interior node always binds a table, possibly empty.
//! - The first failure aborts the walk; nothing is partially returned.

use indexmap::IndexMap;
use tracing::{debug, warn};

use super::convert::convert_str;
use super::env::{EnvSource, lookup};
use super::error::LoadError;
use super::naming::resolve;
use crate::types::{LeafSpec, Schema, SchemaNode, Segment, Table, Value};

/// Resolves a schema against one environment snapshot.
pub struct SchemaWalker<'a> {
    prefix: &'a Segment,
    enforce: bool,
    env: &'a dyn EnvSource,
}

impl<'a> SchemaWalker<'a> {
    pub fn new(prefix: &'a Segment, enforce: bool, env: &'a dyn EnvSource) -> Self {
        Self {
            prefix,
            enforce,
            env,
        }
    }

    /// Resolve the whole schema into a fresh tree keyed by application.
    pub fn walk(&self, schema: &Schema) -> Result<Table, LoadError> {
        let mut path = Vec::new();
        self.walk_children(schema.apps(), &mut path)
    }

    fn walk_children(
        &self,
        children: &IndexMap<Segment, SchemaNode>,
        path: &mut Vec<Segment>,
    ) -> Result<Table, LoadError> {
        let mut table = Table::with_capacity(children.len());
        for (key, node) in children {
            path.push(key.clone());
            let resolved = match node {
                SchemaNode::Leaf(leaf) => self.resolve_leaf(leaf, path),
                SchemaNode::Interior(nested) => {
                    self.walk_children(nested, path).map(|t| Some(Value::Table(t)))
                }
            };
            path.pop();
            if let Some(value) = resolved? {
                table.insert(key.as_str().to_string(), value);
            }
        }
        Ok(table)
    }

    fn resolve_leaf(&self, leaf: &LeafSpec, path: &[Segment]) -> Result<Option<Value>, LoadError> {
        let var = resolve(self.prefix, path);

        let raw = match lookup(self.env, &var) {
            Some(raw) => {
                debug!(var = %var, "resolved from environment");
                Some(raw)
            }
            None => match leaf.default.as_deref() {
                Some(default) if !default.is_empty() || !self.enforce => {
                    debug!(var = %var, "using schema default");
                    Some(default.to_string())
                }
                _ => None,
            },
        };

        let Some(raw) = raw else {
            if self.enforce {
                return Err(LoadError::MissingRequired { var });
            }
            warn!(var = %var, "variable not set and no default; leaving unset");
            return Ok(None);
        };

        convert_str(&raw, &leaf.type_spec)
            .map(Some)
            .map_err(|source| LoadError::Conversion { var, source })
    }
}

/// Resolve `schema` against `env`.
pub fn walk(
    schema: &Schema,
    prefix: &Segment,
    enforce: bool,
    env: &dyn EnvSource,
) -> Result<Table, LoadError> {
    SchemaWalker::new(prefix, enforce, env).walk(schema)
}
