//! `package.json` rewriting for the published package.
//!
//! Development-only keys are dropped and the distribution entry points are
//! injected. Key order follows object-spread semantics: surviving keys keep
//! their place, an injected key that already existed is overwritten in
//! place, and new injected keys are appended.

use anyhow::{bail, Context, Result};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;

/// Keys only meaningful inside the source repository.
pub const REMOVED_KEYS: &[&str] = &["scripts", "prettier", "release", "jest"];

/// Glob list shipped as `files`: only the built `dist-*` directories.
pub const FILES_GLOB: &str = "dist-*/**";
pub const MODULE_ENTRY: &str = "./dist-src/index.js";
pub const TYPES_ENTRY: &str = "./dist-types/index.d.ts";

/// Keys added to (or overwritten in) every rewritten manifest, in order.
pub fn injected_fields() -> Vec<(&'static str, Value)> {
    vec![
        ("files", json!([FILES_GLOB])),
        ("types", json!(TYPES_ENTRY)),
        (
            "exports",
            // "default" duplicates "import"; resolvers that ignore
            // conditions fail without it.
            json!({
                ".": {
                    "import": MODULE_ENTRY,
                    "types": TYPES_ENTRY,
                    "default": MODULE_ENTRY,
                }
            }),
        ),
        ("sideEffects", json!(false)),
    ]
}

/// Rewrite a parsed manifest for publication.
pub fn rewrite_manifest(manifest: Map<String, Value>) -> Map<String, Value> {
    let mut rewritten: Map<String, Value> = manifest
        .into_iter()
        .filter(|(key, _)| !REMOVED_KEYS.contains(&key.as_str()))
        .collect();
    for (key, value) in injected_fields() {
        rewritten.insert(key.to_string(), value);
    }
    rewritten
}

/// Parse manifest text. The top level must be a JSON object.
///
/// Stricter than `JSON.parse`: lone surrogate escapes (`"\ud800"`) and
/// numbers outside the `f64` range (`1e400`) are rejected. Floats keep
/// their fractional form on output, so `1.0` is written back as `1.0`.
pub fn parse_manifest(text: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        other => bail!(
            "manifest must be a JSON object, found {}",
            json_kind(&other)
        ),
    }
}

/// Serialize with two-space indentation and no trailing newline.
pub fn render_manifest(manifest: &Map<String, Value>) -> Result<String> {
    Ok(serde_json::to_string_pretty(manifest)?)
}

/// Read `src`, rewrite it, and write the result to `dst`.
pub fn rewrite_manifest_file(src: &Path, dst: &Path) -> Result<Map<String, Value>> {
    let text = fs::read_to_string(src)
        .with_context(|| format!("reading manifest '{}'", src.display()))?;
    let manifest =
        parse_manifest(&text).with_context(|| format!("parsing manifest '{}'", src.display()))?;

    let rewritten = rewrite_manifest(manifest);
    let rendered = render_manifest(&rewritten)
        .with_context(|| format!("serializing manifest for '{}'", dst.display()))?;
    fs::write(dst, rendered)
        .with_context(|| format!("writing manifest '{}'", dst.display()))?;
    Ok(rewritten)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
