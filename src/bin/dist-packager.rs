use anyhow::{bail, Context, Result};
use dist_packager::{run_pipeline, CompilerOptions, Esbuild, PackageLayout};
use tracing_subscriber::EnvFilter;

fn usage() -> &'static str {
    "Usage:\n  dist-packager\n\nPackages the project in the current directory into ./pkg"
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        bail!(usage());
    }

    let cwd = std::env::current_dir().context("resolving current directory")?;
    let layout = PackageLayout::new(cwd);
    let esbuild = Esbuild::locate(&layout)?;

    let report = run_pipeline(&layout, &esbuild, &CompilerOptions::default())?;
    tracing::info!(
        sources = report.sources.len(),
        manifest = %report.output_manifest.display(),
        "package ready"
    );
    Ok(())
}
