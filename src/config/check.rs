//! Detect and fill in configuration keys missing from an older file.

use super::Config;
use crate::errors::AppResult;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Top-level keys written by the current version.
pub const KNOWN_KEYS: [&str; 6] = [
    "endpoint",
    "spreadsheet_url",
    "department",
    "timeout_secs",
    "page_size",
    "form_links",
];

/// Return the known keys absent from the YAML file at `path`.
/// A missing file reports every key.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(KNOWN_KEYS.to_vec());
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    let missing = match yaml.as_mapping() {
        Some(map) => KNOWN_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(Value::String((*k).to_string())))
            .collect(),
        None => KNOWN_KEYS.to_vec(),
    };

    Ok(missing)
}

/// Rewrite the file with every key present, keeping the stored values.
/// Returns `true` when the file changed.
pub fn migrate(path: &Path) -> AppResult<bool> {
    if missing_fields(path)?.is_empty() {
        return Ok(false);
    }

    let cfg = Config::load_from(path)?;
    cfg.save_to(path)?;
    log::info!("configuration migrated: {}", path.display());
    Ok(true)
}
