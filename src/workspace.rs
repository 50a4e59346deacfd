use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Remove whatever sits at `output_dir`, then recreate it as an empty
/// directory.
///
/// A plain file or symlink (dangling or not) at that path is removed
/// without touching its target. A missing path is not an error, so running
/// this twice in a row is the same as running it once.
pub fn reset_output_dir(output_dir: &Path) -> Result<()> {
    match fs::symlink_metadata(output_dir) {
        Ok(meta) if meta.is_dir() => {
            fs::remove_dir_all(output_dir).with_context(|| {
                format!(
                    "removing existing output directory '{}'",
                    output_dir.display()
                )
            })?;
        }
        Ok(_) => {
            fs::remove_file(output_dir).with_context(|| {
                format!("removing existing output path '{}'", output_dir.display())
            })?;
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("inspecting output path '{}'", output_dir.display()))
        }
    }
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory '{}'", output_dir.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reset_removes_previous_contents() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("pkg");
        fs::create_dir_all(out.join("dist-src/nested")).unwrap();
        fs::write(out.join("dist-src/nested/stale.js"), "old").unwrap();
        fs::write(out.join("package.json"), "{}").unwrap();

        reset_output_dir(&out).unwrap();

        assert!(out.is_dir());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn test_reset_missing_dir_is_ok() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("pkg");

        reset_output_dir(&out).unwrap();
        reset_output_dir(&out).unwrap();

        assert!(out.is_dir());
    }

    #[test]
    fn test_reset_replaces_plain_file() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("pkg");
        fs::write(&out, "stale").unwrap();

        reset_output_dir(&out).unwrap();

        assert!(out.is_dir());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn test_reset_replaces_dangling_symlink() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("pkg");
        std::os::unix::fs::symlink(temp.path().join("gone"), &out).unwrap();

        reset_output_dir(&out).unwrap();

        assert!(!out.is_symlink());
        assert!(out.is_dir());
        assert!(!temp.path().join("gone").exists());
    }

    #[test]
    fn test_reset_symlink_leaves_target_alone() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("elsewhere");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("keep.txt"), "keep").unwrap();
        let out = temp.path().join("pkg");
        std::os::unix::fs::symlink(&target, &out).unwrap();

        reset_output_dir(&out).unwrap();

        assert!(!out.is_symlink());
        assert!(out.is_dir());
        assert_eq!(fs::read_to_string(target.join("keep.txt")).unwrap(), "keep");
    }
}
