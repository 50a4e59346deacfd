//! Fixed paths and compiler settings for a packaging run.
//!
//! Nothing here is read from the environment or the command line. A
//! [`PackageLayout`] is rooted at a project directory and every other path
//! is derived from it.

use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "package.json";
pub const LICENSE_FILE: &str = "LICENSE";
pub const README_FILE: &str = "README.md";
pub const SOURCE_DIR: &str = "src";
pub const SOURCE_EXTENSION: &str = "ts";
pub const OUTPUT_DIR: &str = "pkg";
pub const COMPILED_SUBDIR: &str = "dist-src";

/// Input and output paths for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLayout {
    root: PathBuf,
}

impl PackageLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    pub fn license(&self) -> PathBuf {
        self.root.join(LICENSE_FILE)
    }

    pub fn readme(&self) -> PathBuf {
        self.root.join(README_FILE)
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root.join(SOURCE_DIR)
    }

    /// `pkg/`, the directory that gets published.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR)
    }

    /// `pkg/dist-src/`, mirrors `src/` with compiled modules and maps.
    pub fn compiled_dir(&self) -> PathBuf {
        self.output_dir().join(COMPILED_SUBDIR)
    }

    pub fn output_manifest(&self) -> PathBuf {
        self.output_dir().join(MANIFEST_FILE)
    }

    /// Project-local esbuild installed by the package manager.
    pub fn local_esbuild(&self) -> PathBuf {
        self.root.join("node_modules").join(".bin").join("esbuild")
    }
}

/// Options passed to the source compiler.
///
/// The defaults are what every run uses; the struct exists so the
/// argument translation in [`crate::compiler`] has one place to read from.
#[derive(Debug, Clone)]
pub struct CompilerOptions<'a> {
    /// Module syntax of the output, e.g. "esm".
    pub format: &'a str,

    /// Runtime the output assumes, e.g. "neutral".
    pub platform: &'a str,

    /// Language baseline, e.g. "es2022".
    pub target: &'a str,

    /// One output per input when false.
    pub bundle: bool,
    pub minify: bool,

    /// Leave bare package imports unresolved.
    pub external_packages: bool,

    /// Write a `.map` next to every output module.
    pub sourcemap: bool,

    /// Embed original source text in each map.
    pub sources_content: bool,
    pub allow_overwrite: bool,
}

impl Default for CompilerOptions<'_> {
    fn default() -> Self {
        Self {
            format: "esm",
            platform: "neutral",
            target: "es2022",
            bundle: false,
            minify: false,
            external_packages: true,
            sourcemap: true,
            sources_content: true,
            allow_overwrite: true,
        }
    }
}
