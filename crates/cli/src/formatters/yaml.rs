//! YAML formatter implementation.
//!
//! Responsibilities:
//! - Format variable lists and trees as YAML.
//! - Human-friendly configuration export format.

use anyhow::Result;
use envmap_config::Table;

use crate::formatters::Formatter;

/// YAML formatter.
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format_vars(&self, vars: &[String]) -> Result<String> {
        Ok(serde_yaml::to_string(vars)?)
    }

    fn format_tree(&self, tree: &Table) -> Result<String> {
        Ok(serde_yaml::to_string(tree)?)
    }
}
