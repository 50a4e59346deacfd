//! Packages a TypeScript library into a publishable `pkg/` directory.
//!
//! The build is a straight line of filesystem steps:
//!
//! - **Workspace reset** - [`workspace`] clears `pkg/`
//! - **Compile** - [`compiler`] runs esbuild over [`sources`], one module per file
//! - **Artifact filter** - [`artifacts`] drops type-only modules esbuild emits anyway
//! - **Metadata** - [`metadata`] copies `LICENSE` and `README.md`
//! - **Manifest** - [`manifest`] rewrites `package.json` for consumers
//!
//! # Layout
//!
//! ```text
//! project/                    pkg/
//!   package.json   ──────►      package.json   (rewritten)
//!   LICENSE        ──────►      LICENSE
//!   README.md      ──────►      README.md
//!   src/**/*.ts    ──────►      dist-src/**/*.js, *.js.map
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use dist_packager::{run_pipeline, CompilerOptions, Esbuild, PackageLayout};
//!
//! let layout = PackageLayout::new(std::env::current_dir()?);
//! let esbuild = Esbuild::locate(&layout)?;
//! run_pipeline(&layout, &esbuild, &CompilerOptions::default())?;
//! ```

pub mod artifacts;
pub mod compiler;
pub mod config;
pub mod manifest;
pub mod metadata;
pub mod pipeline;
pub mod preflight;
pub mod sources;
pub mod workspace;

pub use compiler::{Compiler, Esbuild};
pub use config::{CompilerOptions, PackageLayout};
pub use pipeline::{run_pipeline, PackageReport};
