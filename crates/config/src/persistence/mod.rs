//! File persistence for schemas, options, and configuration trees.
//!
//! Responsibilities:
//! - Read schema and options documents supplied by operators.
//! - Read existing configuration trees and write merged ones back.
//!
//! Does NOT handle:
//! - Resolving or merging configuration (see `loader`).
//!
//! Invariants:
//! - Tree writes are atomic: content goes to a temporary sibling first and is
//!   renamed over the target.
//! - Written trees are pretty-printed JSON in tree order.

use std::path::Path;

mod state;

pub use state::{ConfigFileError, read_options_file, read_schema_file, read_tree_file};

use crate::types::Table;

/// Write a configuration tree to `path`, replacing it atomically.
pub fn write_tree_file(path: &Path, tree: &Table) -> Result<(), ConfigFileError> {
    let write_err = |source: std::io::Error| ConfigFileError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let content = serde_json::to_string_pretty(tree).map_err(|e| ConfigFileError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, content).map_err(write_err)?;
    std::fs::rename(&temp_path, path).map_err(write_err)?;

    tracing::debug!(path = %path.display(), "wrote configuration tree");
    Ok(())
}
