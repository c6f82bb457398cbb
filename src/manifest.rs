use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::domain::Version;
use crate::error::{ChannelBumpError, Result};

/// Extracts the `version` string from manifest JSON text.
///
/// The document must be a JSON object with a string `version` field.
/// Other fields are ignored.
pub fn parse_manifest_version(contents: &str) -> Result<String> {
    let json: Value = serde_json::from_str(contents)?;
    let manifest = json
        .as_object()
        .ok_or_else(|| ChannelBumpError::manifest("manifest is not a JSON object"))?;

    match manifest.get("version") {
        Some(Value::String(version)) => Ok(version.clone()),
        Some(_) => Err(ChannelBumpError::manifest("`version` field is not a string")),
        None => Err(ChannelBumpError::manifest("missing `version` field")),
    }
}

/// Reads the manifest at `path` and returns its raw `version` field.
///
/// # Returns
/// * `Ok(String)` - The version string, unvalidated
/// * `Err(Manifest)` - If the file cannot be read, is not JSON, or lacks a string `version`
pub fn read_manifest_version(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ChannelBumpError::manifest(format!("Failed to read {}: {}", path.display(), e))
    })?;

    parse_manifest_version(&contents)
        .map_err(|e| ChannelBumpError::manifest(format!("{}: {}", path.display(), e)))
}

/// Reads and parses the manifest version.
pub fn load_version(path: &Path) -> Result<Version> {
    let raw = read_manifest_version(path)?;
    debug!(manifest = %path.display(), version = %raw, "read manifest version");
    Version::parse(&raw)
}
