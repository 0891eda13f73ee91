//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format variable lists and trees as pretty-printed JSON.

use anyhow::Result;
use envmap_config::Table;

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_vars(&self, vars: &[String]) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(vars)?))
    }

    fn format_tree(&self, tree: &Table) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(tree)?))
    }
}
