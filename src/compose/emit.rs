use anyhow::{Context, Result};
use std::path::Path;

use crate::config::OutputFormat;

use super::model::BuildConfig;

/// Serialize the resolved configuration as a bundler-facing document.
pub fn render(config: &BuildConfig, format: OutputFormat) -> Result<String> {
    let mut document = match format {
        OutputFormat::Json => serde_json::to_string_pretty(config)
            .context("Failed to serialize configuration as JSON")?,
        OutputFormat::Toml => {
            toml::to_string_pretty(config).context("Failed to serialize configuration as TOML")?
        }
    };
    if !document.ends_with('\n') {
        document.push('\n');
    }
    Ok(document)
}

/// Write the document to `out`, or stdout when no path is given.
pub fn write(document: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("  Wrote resolved configuration to {}", path.display());
        }
        None => print!("{}", document),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::env::MapEnv;
    use crate::compose::merge::compose;
    use crate::compose::model::ConfigOverrides;

    #[test]
    fn json_document_has_every_field() {
        let config = compose(ConfigOverrides::default(), &MapEnv::empty());
        let document = render(&config, OutputFormat::Json).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&document).unwrap();
        let object = parsed.as_object().unwrap();
        for key in [
            "entryPath",
            "outputDirectory",
            "assetsDirectory",
            "indexTemplatePath",
            "devServerPort",
            "proxyRules",
        ] {
            assert!(object.contains_key(key), "missing key {}", key);
        }
    }

    #[test]
    fn toml_document_round_trips_port() {
        let config = compose(ConfigOverrides::default(), &MapEnv::empty());
        let document = render(&config, OutputFormat::Toml).unwrap();

        let parsed: toml::Value = toml::from_str(&document).unwrap();
        assert_eq!(parsed["devServerPort"].as_integer(), Some(8080));
    }
}
