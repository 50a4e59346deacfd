//! Removal of compiler byproducts that must not ship.
//!
//! esbuild compiles type-only modules (`types.ts`, `generated/*-types.ts`)
//! into empty runtime modules. They have no executable content, so they
//! and their maps are deleted from the compiled tree.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory under the compiled tree holding generated modules.
pub const GENERATED_DIR: &str = "generated";

const TYPES_MODULE_NAMES: &[&str] = &["types.js", "types.js.map"];
const GENERATED_TYPES_SUFFIXES: &[&str] = &["-types.js", "-types.js.map"];

/// Whether `rel_path` (relative to the compiled tree) is a type marker.
///
/// Matches `**/types.js`, `**/types.js.map`, `generated/*-types.js` and
/// `generated/*-types.js.map`.
pub fn is_type_marker(rel_path: &Path) -> bool {
    let Some(name) = rel_path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if TYPES_MODULE_NAMES.contains(&name) {
        return true;
    }
    if name.starts_with('.') {
        return false;
    }
    rel_path.parent() == Some(Path::new(GENERATED_DIR))
        && GENERATED_TYPES_SUFFIXES
            .iter()
            .any(|suffix| name.ends_with(suffix))
}

/// Delete every type marker under `compiled_dir` and return what was removed.
///
/// A missing `compiled_dir` (nothing was compiled) removes nothing.
pub fn remove_type_markers(compiled_dir: &Path) -> Result<Vec<PathBuf>> {
    if !compiled_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut markers = Vec::new();
    for entry in WalkDir::new(compiled_dir).sort_by_file_name() {
        let entry = entry.with_context(|| {
            format!("walking compiled directory '{}'", compiled_dir.display())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(compiled_dir)
            .unwrap_or(entry.path());
        if is_type_marker(rel) {
            markers.push(entry.into_path());
        }
    }

    for marker in &markers {
        fs::remove_file(marker)
            .with_context(|| format!("removing type marker '{}'", marker.display()))?;
        tracing::debug!(path = %marker.display(), "removed type marker");
    }
    Ok(markers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_is_type_marker() {
        assert!(is_type_marker(Path::new("types.js")));
        assert!(is_type_marker(Path::new("types.js.map")));
        assert!(is_type_marker(Path::new("deep/nested/types.js")));
        assert!(is_type_marker(Path::new("generated/endpoints-types.js")));
        assert!(is_type_marker(Path::new("generated/endpoints-types.js.map")));
        assert!(is_type_marker(Path::new("generated/-types.js")));

        assert!(!is_type_marker(Path::new("index.js")));
        assert!(!is_type_marker(Path::new("mytypes.js")));
        assert!(!is_type_marker(Path::new("types.ts")));
        assert!(!is_type_marker(Path::new("endpoints-types.js")));
        assert!(!is_type_marker(Path::new("other/generated/endpoints-types.js")));
        assert!(!is_type_marker(Path::new("generated/sub/endpoints-types.js")));
        assert!(!is_type_marker(Path::new("generated/endpoints.js")));
    }

    #[test]
    fn test_remove_type_markers() {
        let temp = TempDir::new().unwrap();
        let dist = temp.path().join("dist-src");
        for rel in [
            "index.js",
            "index.js.map",
            "types.js",
            "types.js.map",
            "methods/types.js",
            "generated/endpoints.js",
            "generated/endpoints-types.js",
            "generated/endpoints-types.js.map",
        ] {
            touch(&dist, rel);
        }

        let removed = remove_type_markers(&dist).unwrap();

        assert_eq!(removed.len(), 5);
        assert!(dist.join("index.js").exists());
        assert!(dist.join("index.js.map").exists());
        assert!(dist.join("generated/endpoints.js").exists());
        assert!(!dist.join("types.js").exists());
        assert!(!dist.join("types.js.map").exists());
        assert!(!dist.join("methods/types.js").exists());
        assert!(!dist.join("generated/endpoints-types.js").exists());
        assert!(!dist.join("generated/endpoints-types.js.map").exists());
    }

    #[test]
    fn test_remove_type_markers_noop() {
        let temp = TempDir::new().unwrap();
        let dist = temp.path().join("dist-src");
        touch(&dist, "index.js");

        assert!(remove_type_markers(&dist).unwrap().is_empty());
        assert!(remove_type_markers(&temp.path().join("missing"))
            .unwrap()
            .is_empty());
        assert!(dist.join("index.js").exists());
    }
}
