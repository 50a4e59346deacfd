//! Preflight checks for external tools.
//!
//! Resolves the executables the pipeline shells out to before any output
//! is touched, so a missing tool fails with an install hint instead of a
//! bare "No such file or directory".
//!
//! # Example
//!
//! ```rust
//! use dist_packager::preflight::locate_tool;
//! use std::path::Path;
//!
//! let local = Path::new("node_modules/.bin/esbuild");
//! if let Err(e) = locate_tool("esbuild", "esbuild", local) {
//!     eprintln!("{}", e);
//! }
//! ```

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Locate a tool, preferring a project-local install over PATH.
///
/// `local` is typically `node_modules/.bin/<tool>`. When neither location
/// has the tool the error names `package` as the thing to install.
pub fn locate_tool(tool: &str, package: &str, local: &Path) -> Result<PathBuf> {
    if local.is_file() {
        return Ok(local.to_path_buf());
    }
    match which::which(tool) {
        Ok(path) => Ok(path),
        Err(_) => bail!(
            "Missing required tool:\n  {} (install: {}; looked in '{}' and PATH)",
            tool,
            package,
            local.display()
        ),
    }
}
