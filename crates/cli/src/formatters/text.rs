//! Plain text formatter implementation.
//!
//! Responsibilities:
//! - One variable name per line.
//! - Trees flattened to `app.key.path=value` lines in tree order.
//!
//! Does NOT handle:
//! - Quoting. Values are printed as-is, collections comma-joined.

use std::fmt::Write;

use anyhow::Result;
use envmap_config::{Table, Value};

use crate::formatters::Formatter;

/// Plain text formatter.
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_vars(&self, vars: &[String]) -> Result<String> {
        let mut output = String::new();
        for var in vars {
            writeln!(output, "{var}")?;
        }
        Ok(output)
    }

    fn format_tree(&self, tree: &Table) -> Result<String> {
        let mut output = String::new();
        let mut path = Vec::new();
        flatten(tree, &mut path, &mut output)?;
        Ok(output)
    }
}

fn flatten<'a>(table: &'a Table, path: &mut Vec<&'a str>, output: &mut String) -> Result<()> {
    for (key, value) in table {
        path.push(key);
        match value {
            Value::Table(nested) if !nested.is_empty() => flatten(nested, path, output)?,
            other => writeln!(output, "{}={}", path.join("."), other)?,
        }
        path.pop();
    }
    Ok(())
}
