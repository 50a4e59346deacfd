//! Source file discovery.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Collect every file under `source_dir` with the given extension.
///
/// Hidden files and directories are skipped. Symlinked directories are not
/// descended into; a symlink to a file counts as a source. The result is
/// sorted so the compiler sees the same argument list on every run. A
/// missing `source_dir` yields an empty list.
pub fn discover_sources(source_dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !source_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut sources = Vec::new();
    for entry in WalkDir::new(source_dir)
        .follow_links(false)
        .into_iter()
        .filter_entry(|ent| ent.depth() == 0 || !is_hidden(ent))
    {
        let entry = entry.with_context(|| {
            format!("walking source directory '{}'", source_dir.display())
        })?;
        let file_type = entry.file_type();
        let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }
        if entry.path().extension().and_then(|ext| ext.to_str()) == Some(extension) {
            sources.push(entry.into_path());
        }
    }
    sources.sort();
    Ok(sources)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
