use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

/// `<notes_dir>/*.md`, minus hidden files and anything whose name contains an
/// exclude marker, sorted so the output order is reproducible.
pub fn discover_class_files(notes_dir: &Path, excludes: &[String]) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(notes_dir)
        .with_context(|| format!("Failed to read notes directory {}", notes_dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", notes_dir.display()))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if name.starts_with('.') || !name.ends_with(".md") {
            continue;
        }
        if let Some(marker) = excludes.iter().find(|m| name.contains(m.as_str())) {
            debug!(file = %name, marker = %marker, "excluded");
            continue;
        }
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        files.push(entry.path());
    }

    files.sort();
    info!("Found {} class notes in {}", files.len(), notes_dir.display());
    Ok(files)
}
