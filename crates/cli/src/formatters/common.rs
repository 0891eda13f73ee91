//! Common utilities for formatters.
//!
//! Responsibilities:
//! - Route formatted output to stdout or a file.
//! - Atomic file writing.

use anyhow::{Context, Result};

/// Write formatted output to `output_file`, or to stdout when `None`.
pub fn output_result(
    output: &str,
    format: crate::formatters::OutputFormat,
    output_file: Option<&std::path::PathBuf>,
) -> Result<()> {
    if let Some(path) = output_file {
        write_to_file(output, path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        eprintln!(
            "Results written to {} ({:?} format)",
            path.display(),
            format
        );
    } else {
        print!("{}", output);
    }
    Ok(())
}

/// Write formatted output to a file atomically.
///
/// Creates parent directories if needed, writes to temp file then renames
/// for atomicity. Returns error with helpful context on failure.
pub fn write_to_file(content: &str, path: &std::path::Path) -> Result<()> {
    use std::fs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // If path has no parent (e.g., just "results.json"), use current directory
    let parent_dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
    let parent_dir = if parent_dir.as_os_str().is_empty() {
        std::path::Path::new(".")
    } else {
        parent_dir
    };

    if parent_dir != std::path::Path::new(".") {
        fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;
    }

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| "Failed to write to temp file")?;
    temp_file
        .flush()
        .with_context(|| "Failed to flush temp file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
