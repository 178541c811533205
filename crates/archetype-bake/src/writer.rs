//! JSON output with atomic replacement.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

/// Renders `value` as 2-space indented JSON.
///
/// Non-ASCII text is written as-is, and there is no trailing newline.
pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize document to JSON")
}

/// Writes `contents` to `path`, replacing any existing file.
///
/// Data goes to a sibling `.tmp` file first and is renamed into place, so
/// readers see either the old file or the complete new one. The parent
/// directory must already exist.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let temp_path = temp_path_for(path);

    // Write to temp file
    if let Err(e) = fs::write(&temp_path, contents) {
        let _ = fs::remove_file(&temp_path);
        return Err(e).with_context(|| format!("Failed to write {}", temp_path.display()));
    }

    // Atomic rename
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e).with_context(|| {
            format!(
                "Failed to move {} into place at {}",
                temp_path.display(),
                path.display()
            )
        });
    }

    tracing::debug!("Saved {}", path.display());

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
