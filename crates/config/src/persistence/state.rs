//! Reading schema, options, and configuration tree files.
//!
//! Responsibilities:
//! - Define config file errors (`ConfigFileError`).
//! - Read and decode JSON documents into schemas, providers, and trees.
//!
//! Does NOT handle:
//! - Writing files (see `persistence::write_tree_file`).
//!
//! Invariants:
//! - Every error carries the path of the offending file.
//! - `null` entries in tree files are dropped, never stored.

use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;

use crate::loader::{ConfigError, EnvProvider, SchemaRegistry};
use crate::types::{Schema, SchemaError, Table, describe, table_from_json_map};

/// Errors reading or writing envmap files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize JSON for {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid schema in {path}: {source}")]
    Schema { path: PathBuf, source: SchemaError },

    #[error("Expected a JSON object at the top of {path}, got {found}")]
    NotATable { path: PathBuf, found: String },

    #[error("Failed to write file at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a file and parse it as JSON.
pub(crate) fn read_json_file(path: &Path) -> Result<JsonValue, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read a schema document.
pub fn read_schema_file(path: &Path) -> Result<Schema, ConfigFileError> {
    let json = read_json_file(path)?;
    Schema::from_json(&json).map_err(|e| ConfigFileError::Schema {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read an options document and initialize a provider from it.
pub fn read_options_file(
    path: &Path,
    registry: &SchemaRegistry,
) -> Result<EnvProvider, ConfigError> {
    let json = read_json_file(path)?;
    Ok(EnvProvider::init_from_value(&json, registry)?)
}

/// Read an existing configuration tree.
pub fn read_tree_file(path: &Path) -> Result<Table, ConfigFileError> {
    match read_json_file(path)? {
        JsonValue::Object(map) => Ok(table_from_json_map(map)),
        other => Err(ConfigFileError::NotATable {
            path: path.to_path_buf(),
            found: describe(&other),
        }),
    }
}
