//! Schema trees describing which configuration leaves exist.
//!
//! Responsibilities:
//! - Model a schema as a tree of leaf descriptors and interior nodes.
//! - Decode schemas from their JSON form with path-qualified errors.
//! - Enumerate leaves in schema order.
//!
//! Does NOT handle:
//! - Variable naming or environment lookups (see `loader`).
//!
//! Invariants:
//! - The root is always a mapping of application names to nodes.
//! - A decoded JSON object is a leaf iff it has a `type` key. A child that is
//!   literally named `type` is therefore read as a type descriptor, which
//!   usually fails decoding. This mirrors the loader's long-standing behavior
//!   and is kept as is.
//! - Child order is the order of the source document.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::segment::Segment;
use super::type_spec::TypeSpec;
use crate::constants::{LEAF_DEFAULT_KEY, LEAF_TYPE_KEY};

/// Errors produced while decoding a schema document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("schema node at `{path}` must be an object, got {found}")]
    NotAnObject { path: String, found: String },

    #[error("invalid type descriptor at `{path}`: {message}")]
    InvalidType { path: String, message: String },

    #[error("default at `{path}` must be a string, got {found}")]
    InvalidDefault { path: String, found: String },

    #[error("unknown key `{key}` in leaf descriptor at `{path}`")]
    UnknownLeafKey { path: String, key: String },
}

/// A terminal schema node.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafSpec {
    pub type_spec: TypeSpec,
    /// Fallback in the same string form a variable would carry.
    pub default: Option<String>,
}

impl LeafSpec {
    pub fn new(type_spec: TypeSpec) -> Self {
        Self {
            type_spec,
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// A node in a schema tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Leaf(LeafSpec),
    Interior(IndexMap<Segment, SchemaNode>),
}

impl SchemaNode {
    /// Leaf of the given type without a default.
    pub fn leaf(type_spec: TypeSpec) -> Self {
        SchemaNode::Leaf(LeafSpec::new(type_spec))
    }

    /// Leaf of the given type with a default.
    pub fn leaf_with_default(type_spec: TypeSpec, default: impl Into<String>) -> Self {
        SchemaNode::Leaf(LeafSpec::new(type_spec).with_default(default))
    }

    /// Interior node built from `(key, child)` pairs, keeping their order.
    pub fn interior<K, I>(children: I) -> Self
    where
        K: Into<Segment>,
        I: IntoIterator<Item = (K, SchemaNode)>,
    {
        SchemaNode::Interior(
            children
                .into_iter()
                .map(|(key, node)| (key.into(), node))
                .collect(),
        )
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, SchemaNode::Leaf(_))
    }
}

impl From<LeafSpec> for SchemaNode {
    fn from(leaf: LeafSpec) -> Self {
        SchemaNode::Leaf(leaf)
    }
}

/// Root of a schema: application name to node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    apps: IndexMap<Segment, SchemaNode>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schema from `(app, node)` pairs.
    pub fn from_apps<K, I>(apps: I) -> Self
    where
        K: Into<Segment>,
        I: IntoIterator<Item = (K, SchemaNode)>,
    {
        Self {
            apps: apps.into_iter().map(|(key, node)| (key.into(), node)).collect(),
        }
    }

    /// Add or replace an application subtree.
    pub fn with_app(mut self, app: impl Into<Segment>, node: SchemaNode) -> Self {
        self.apps.insert(app.into(), node);
        self
    }

    pub fn apps(&self) -> &IndexMap<Segment, SchemaNode> {
        &self.apps
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// Decode a schema from its JSON form.
    pub fn from_json(value: &JsonValue) -> Result<Self, SchemaError> {
        let map = expect_object(value, "")?;
        let mut apps = IndexMap::with_capacity(map.len());
        for (key, child) in map {
            apps.insert(Segment::parse(key), decode_node(child, key)?);
        }
        Ok(Self { apps })
    }

    /// Every leaf with its full path (application first), in schema order.
    pub fn leaves(&self) -> Vec<(Vec<Segment>, &LeafSpec)> {
        let mut out = Vec::new();
        let mut path = Vec::new();
        collect_leaves(&self.apps, &mut path, &mut out);
        out
    }
}

fn collect_leaves<'a>(
    children: &'a IndexMap<Segment, SchemaNode>,
    path: &mut Vec<Segment>,
    out: &mut Vec<(Vec<Segment>, &'a LeafSpec)>,
) {
    for (key, node) in children {
        path.push(key.clone());
        match node {
            SchemaNode::Leaf(leaf) => out.push((path.clone(), leaf)),
            SchemaNode::Interior(nested) => collect_leaves(nested, path, out),
        }
        path.pop();
    }
}

fn decode_node(value: &JsonValue, path: &str) -> Result<SchemaNode, SchemaError> {
    let map = expect_object(value, path)?;

    let Some(type_value) = map.get(LEAF_TYPE_KEY) else {
        let mut children = IndexMap::with_capacity(map.len());
        for (key, child) in map {
            children.insert(Segment::parse(key), decode_node(child, &join_path(path, key))?);
        }
        return Ok(SchemaNode::Interior(children));
    };

    if let Some(key) = map
        .keys()
        .find(|key| key.as_str() != LEAF_TYPE_KEY && key.as_str() != LEAF_DEFAULT_KEY)
    {
        return Err(SchemaError::UnknownLeafKey {
            path: path.to_string(),
            key: key.clone(),
        });
    }

    let type_spec = serde_json::from_value::<TypeSpec>(type_value.clone()).map_err(|e| {
        SchemaError::InvalidType {
            path: path.to_string(),
            message: e.to_string(),
        }
    })?;

    let default = match map.get(LEAF_DEFAULT_KEY) {
        None => None,
        Some(JsonValue::String(default)) => Some(default.clone()),
        Some(other) => {
            return Err(SchemaError::InvalidDefault {
                path: path.to_string(),
                found: describe(other),
            });
        }
    };

    Ok(SchemaNode::Leaf(LeafSpec { type_spec, default }))
}

fn expect_object<'a>(
    value: &'a JsonValue,
    path: &str,
) -> Result<&'a serde_json::Map<String, JsonValue>, SchemaError> {
    value.as_object().ok_or_else(|| SchemaError::NotAnObject {
        path: path.to_string(),
        found: describe(value),
    })
}

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Short description of a JSON value for error messages.
pub(crate) fn describe(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => "null".to_string(),
        JsonValue::Bool(b) => format!("boolean {b}"),
        JsonValue::Number(n) => format!("number {n}"),
        JsonValue::String(s) => format!("string {s:?}"),
        JsonValue::Array(_) => format!("array {value}"),
        JsonValue::Object(_) => format!("object {value}"),
    }
}
