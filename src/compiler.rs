//! Source compiler boundary.
//!
//! The pipeline only needs "turn these sources into modules under this
//! directory". [`Compiler`] is that contract; [`Esbuild`] fulfils it by
//! running the esbuild CLI. Transpilation itself is entirely esbuild's
//! business.

use anyhow::{bail, Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::{CompilerOptions, PackageLayout};
use crate::preflight::locate_tool;

/// Something that compiles source files into an output directory.
///
/// Implementations must write one module (and, when enabled, one map) per
/// input, at the input's path relative to `source_root`.
pub trait Compiler {
    /// Human-readable name for logs.
    fn name(&self) -> &str;

    fn compile(
        &self,
        sources: &[PathBuf],
        source_root: &Path,
        out_dir: &Path,
        options: &CompilerOptions,
    ) -> Result<()>;
}

/// The esbuild command-line compiler.
#[derive(Debug, Clone)]
pub struct Esbuild {
    program: PathBuf,
    working_dir: PathBuf,
}

impl Esbuild {
    pub fn new(program: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            working_dir: working_dir.into(),
        }
    }

    /// Find esbuild for a project: `node_modules/.bin/esbuild` first,
    /// then PATH.
    pub fn locate(layout: &PackageLayout) -> Result<Self> {
        let program = locate_tool("esbuild", "esbuild", &layout.local_esbuild())?;
        Ok(Self::new(program, layout.root()))
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Compiler for Esbuild {
    fn name(&self) -> &str {
        "esbuild"
    }

    fn compile(
        &self,
        sources: &[PathBuf],
        source_root: &Path,
        out_dir: &Path,
        options: &CompilerOptions,
    ) -> Result<()> {
        let args = esbuild_args(sources, source_root, out_dir, options);
        tracing::debug!(program = %self.program.display(), ?args, "running esbuild");

        let output = Command::new(&self.program)
            .args(&args)
            .current_dir(&self.working_dir)
            .output()
            .with_context(|| format!("running esbuild '{}'", self.program.display()))?;

        if output.status.success() {
            return Ok(());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "esbuild failed compiling {} source file(s) into '{}' ({}): {}\n{}",
            sources.len(),
            out_dir.display(),
            output.status,
            stdout.trim(),
            stderr.trim()
        )
    }
}

/// Translate options into an esbuild argument list.
///
/// `--outbase` pins the mirrored layout to `source_root`; without it
/// esbuild uses the lowest common ancestor of the entry points.
pub fn esbuild_args(
    sources: &[PathBuf],
    source_root: &Path,
    out_dir: &Path,
    options: &CompilerOptions,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = sources.iter().map(|s| s.clone().into_os_string()).collect();

    args.push(path_flag("--outdir=", out_dir));
    args.push(path_flag("--outbase=", source_root));
    args.push(format!("--format={}", options.format).into());
    args.push(format!("--platform={}", options.platform).into());
    args.push(format!("--target={}", options.target).into());
    if options.bundle {
        args.push("--bundle".into());
    }
    if options.minify {
        args.push("--minify".into());
    }
    if options.external_packages {
        args.push("--packages=external".into());
    }
    if options.sourcemap {
        args.push("--sourcemap".into());
        args.push(format!("--sources-content={}", options.sources_content).into());
    }
    if options.allow_overwrite {
        args.push("--allow-overwrite".into());
    }
    args.push("--log-level=warning".into());
    args
}

fn path_flag(flag: &str, path: &Path) -> OsString {
    let mut arg = OsString::from(flag);
    arg.push(path.as_os_str());
    arg
}
