//! Writes the generated HTML documents to disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Writes an HTML document to the given path, creating parent directories as
/// needed. An existing file is overwritten unconditionally.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// written.
pub fn write_html(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write HTML: {}", path.display()))?;
    Ok(())
}
