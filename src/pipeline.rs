//! The packaging pipeline.
//!
//! Five steps, strictly in order. Any error aborts the run and leaves the
//! output directory as it was at that point; the next run's reset clears it.
//!
//! ```text
//! reset pkg/ ─► compile src/ ─► drop type markers ─► copy LICENSE, README ─► rewrite package.json
//! ```

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::artifacts::remove_type_markers;
use crate::compiler::Compiler;
use crate::config::{CompilerOptions, PackageLayout, SOURCE_EXTENSION};
use crate::manifest::rewrite_manifest_file;
use crate::metadata::copy_metadata_files;
use crate::sources::discover_sources;
use crate::workspace::reset_output_dir;

/// What a successful run produced.
#[derive(Debug, Clone, Default)]
pub struct PackageReport {
    /// Sources handed to the compiler.
    pub sources: Vec<PathBuf>,
    /// Type markers deleted from the compiled tree.
    pub removed_markers: Vec<PathBuf>,
    pub output_manifest: PathBuf,
}

/// Package the project at `layout` using `compiler`.
pub fn run_pipeline(
    layout: &PackageLayout,
    compiler: &dyn Compiler,
    options: &CompilerOptions,
) -> Result<PackageReport> {
    let output_dir = layout.output_dir();
    tracing::info!(dir = %output_dir.display(), "resetting output directory");
    reset_output_dir(&output_dir)?;

    let source_dir = layout.source_dir();
    let sources = discover_sources(&source_dir, SOURCE_EXTENSION)?;
    if sources.is_empty() {
        tracing::info!(dir = %source_dir.display(), "no sources found; skipping compile");
    } else {
        tracing::info!(count = sources.len(), compiler = compiler.name(), "compiling sources");
        compiler
            .compile(&sources, &source_dir, &layout.compiled_dir(), options)
            .with_context(|| format!("compiling sources under '{}'", source_dir.display()))?;
    }

    let removed_markers = remove_type_markers(&layout.compiled_dir())?;
    tracing::info!(count = removed_markers.len(), "removed type markers");

    copy_metadata_files(layout)?;
    tracing::info!("copied license and readme");

    let output_manifest = layout.output_manifest();
    rewrite_manifest_file(&layout.manifest(), &output_manifest)?;
    tracing::info!(path = %output_manifest.display(), "wrote package manifest");

    Ok(PackageReport {
        sources,
        removed_markers,
        output_manifest,
    })
}
