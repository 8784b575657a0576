use std::env;
use std::fs;
use std::path::Path;

/// Captures the pinned candle-core version from the workspace manifest so
/// the smoke test can print which library build it exercised.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../../Cargo.toml");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_default();
    let workspace_manifest = Path::new(&manifest_dir).join("../../Cargo.toml");
    let version = fs::read_to_string(workspace_manifest)
        .ok()
        .and_then(|text| candle_version(&text))
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=ACCELSMOKE_CANDLE_VERSION={version}");
}

/// Pulls the quoted version out of the `candle-core` dependency line,
/// accepting both `candle-core = "x.y"` and the braced table form.
fn candle_version(manifest: &str) -> Option<String> {
    let line = manifest
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with("candle-core"))?;
    let after = match line.find("version") {
        Some(idx) => &line[idx + "version".len()..],
        None => &line[line.find('=')? + 1..],
    };
    let start = after.find('"')? + 1;
    let end = start + after[start..].find('"')?;
    Some(after[start..end].to_string())
}
