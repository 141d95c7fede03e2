//! Common utilities for formatters.
//!
//! Responsibilities:
//! - Route formatted output to stdout or a file.
//! - Atomic file writing.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use super::OutputFormat;

/// Write formatted output to `output_file`, or to stdout when it is `None`.
///
/// A note naming the file goes to stderr so stdout stays clean for pipes.
pub fn output_result(output: &str, format: OutputFormat, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        write_to_file(output, path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        eprintln!("Results written to {} ({} format)", path.display(), format);
    } else {
        print!("{}", output);
    }
    Ok(())
}

/// Write formatted output to a file atomically.
///
/// Creates parent directories if needed, writes to a temp file in the same
/// directory, then renames it over `path`.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    // A bare file name has an empty parent; use the current directory
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    if parent_dir != Path::new(".") {
        std::fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;
    }

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
