use anyhow::{Context, Result};
use std::path::Path;

use super::model::ConfigOverrides;

/// Read an override document, TOML or JSON by file extension.
pub fn read_overrides(path: &Path) -> Result<ConfigOverrides> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read override document {}", path.display()))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&content)
            .with_context(|| format!("Failed to parse {} as TOML", path.display())),
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {} as JSON", path.display())),
        _ => anyhow::bail!(
            "Unsupported override document {} (expected a .toml or .json file)",
            path.display()
        ),
    }
}
