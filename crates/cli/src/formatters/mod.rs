//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide text, JSON, and YAML output for variable lists and resolved trees.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings; see `output_result`).
//!
//! Invariants:
//! - Every formatter output ends with a newline.
//! - Machine formats (JSON, YAML) keep tree keys in document order.
//!
//! ## Empty-State Handling
//!
//! | Format | No variables | Empty tree |
//! |--------|--------------|------------|
//! | Text | empty output | empty output |
//! | JSON | `[]` | `{}` |
//! | YAML | `[]` | `{}` |

use anyhow::Result;
use envmap_config::Table;

use crate::error::UsageError;

mod common;
mod json;
mod text;
mod yaml;

pub use common::{output_result, write_to_file};
pub use json::JsonFormatter;
pub use text::TextFormatter;
pub use yaml::YamlFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(UsageError::InvalidOutputFormat(s.to_string()).into()),
        }
    }
}

/// Formatter trait for the two things envmap prints.
pub trait Formatter {
    /// Format derived variable names, in schema order.
    fn format_vars(&self, vars: &[String]) -> Result<String>;

    /// Format a resolved configuration tree.
    fn format_tree(&self, tree: &Table) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
    }
}
