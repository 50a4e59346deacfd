//! Copies the license and readme into the package root.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::{PackageLayout, LICENSE_FILE, README_FILE};

/// Copy the license and readme into `layout.output_dir()`, overwriting.
pub fn copy_metadata_files(layout: &PackageLayout) -> Result<()> {
    let output_dir = layout.output_dir();
    copy_file(&layout.license(), &output_dir.join(LICENSE_FILE))?;
    copy_file(&layout.readme(), &output_dir.join(README_FILE))?;
    Ok(())
}

/// Copy one file. A missing `src` fails with the underlying
/// `NotFound` error kept in the chain.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory '{}'", parent.display()))?;
    }
    fs::copy(src, dst).with_context(|| {
        format!(
            "copying required file '{}' -> '{}'",
            src.display(),
            dst.display()
        )
    })?;
    tracing::debug!(from = %src.display(), to = %dst.display(), "copied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project_with_metadata() -> (TempDir, PackageLayout) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("LICENSE"), "MIT License").unwrap();
        fs::write(temp.path().join("README.md"), "# lib\n").unwrap();
        let layout = PackageLayout::new(temp.path());
        (temp, layout)
    }

    #[test]
    fn test_copies_license_and_readme() {
        let (_temp, layout) = project_with_metadata();

        copy_metadata_files(&layout).unwrap();

        let out = layout.output_dir();
        assert_eq!(fs::read_to_string(out.join("LICENSE")).unwrap(), "MIT License");
        assert_eq!(fs::read_to_string(out.join("README.md")).unwrap(), "# lib\n");
    }

    #[test]
    fn test_overwrites_existing_copy() {
        let (_temp, layout) = project_with_metadata();
        let out = layout.output_dir();
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("README.md"), "stale").unwrap();

        copy_metadata_files(&layout).unwrap();

        assert_eq!(fs::read_to_string(out.join("README.md")).unwrap(), "# lib\n");
    }

    #[test]
    fn test_missing_readme_fails() {
        let (temp, layout) = project_with_metadata();
        fs::remove_file(temp.path().join("README.md")).unwrap();

        let err = copy_metadata_files(&layout).unwrap_err();

        assert!(err.to_string().contains("README.md"));
        let io = err.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
        assert!(!layout.output_dir().join("README.md").exists());
    }
}
