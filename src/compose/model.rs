//! The configuration records and their documented defaults.
//!
//! This module is the single source of truth for what a resolved bundler
//! configuration contains. `BuildConfig` is the bundler-facing document
//! (camelCase keys, every field always present); `ConfigOverrides` is the
//! partial record a project supplies, with every field optional.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Documented defaults used when an override omits a field.
pub mod defaults {
    /// Entry script the bundler traces module dependencies from.
    pub const ENTRY_PATH: &str = "./src/index.js";
    /// Destination for emitted bundle artifacts.
    pub const OUTPUT_DIRECTORY: &str = "./dist";
    /// Source directory for static assets copied verbatim.
    pub const ASSETS_DIRECTORY: &str = "./public";
    /// HTML template the bundler injects script/style tags into.
    pub const INDEX_TEMPLATE_PATH: &str = "./src/index.html";
    /// Port the local development server binds to.
    pub const DEV_SERVER_PORT: u16 = 8080;

    /// Environment variable overriding the proxy target port.
    pub const PROXY_PORT_ENV: &str = "SERVER_PROXY_PORT";
    /// Proxy target port used when the variable is unset.
    pub const PROXY_PORT: &str = "8085";
}

/// A fully resolved build configuration, ready to hand to the bundler.
///
/// Constructed once per invocation by the composer and never mutated
/// afterwards. Paths are passed through unvalidated; the bundler checks
/// existence when it runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    pub entry_path: PathBuf,
    pub output_directory: PathBuf,
    pub assets_directory: PathBuf,
    pub index_template_path: PathBuf,
    pub dev_server_port: u16,
    pub proxy_rules: BTreeMap<String, ProxyRule>,
}

/// A resolved dev-server forwarding instruction, keyed by a path-glob pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRule {
    /// Base URL matching requests are forwarded to.
    pub target: String,
    /// Rewrite the forwarded Host header to match the target.
    pub change_origin: bool,
    /// Apply this rule to WebSocket upgrade requests as well.
    #[serde(rename = "upgradeToWebSocket")]
    pub upgrade_to_websocket: bool,
}

/// Partial configuration: supply only what differs from the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub entry_path: Option<PathBuf>,
    pub output_directory: Option<PathBuf>,
    pub assets_directory: Option<PathBuf>,
    pub index_template_path: Option<PathBuf>,
    pub dev_server_port: Option<u16>,
    #[serde(default)]
    pub proxy_rules: BTreeMap<String, ProxyRuleOverrides>,
}

/// Partial proxy rule. Omitting `target` resolves it to the local API server
/// via the proxy-port environment variable (see [`defaults::PROXY_PORT_ENV`]).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProxyRuleOverrides {
    pub target: Option<String>,
    #[serde(default)]
    pub change_origin: bool,
    #[serde(default)]
    pub upgrade_to_websocket: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_parse_from_toml() {
        let doc = r#"
            entry_path = "./src/Client/output/App.js"
            dev_server_port = 8080

            [proxy_rules."/api/**"]
            change_origin = true

            [proxy_rules."/socket/**"]
            upgrade_to_websocket = true
        "#;

        let overrides: ConfigOverrides = toml::from_str(doc).unwrap();
        assert_eq!(
            overrides.entry_path,
            Some(PathBuf::from("./src/Client/output/App.js"))
        );
        assert_eq!(overrides.dev_server_port, Some(8080));
        assert!(overrides.output_directory.is_none());

        let api = &overrides.proxy_rules["/api/**"];
        assert!(api.change_origin);
        assert!(!api.upgrade_to_websocket);
        assert!(api.target.is_none());

        let socket = &overrides.proxy_rules["/socket/**"];
        assert!(socket.upgrade_to_websocket);
    }

    #[test]
    fn overrides_reject_unknown_fields() {
        let doc = r#"entry = "./App.js""#;
        assert!(toml::from_str::<ConfigOverrides>(doc).is_err());
    }

    #[test]
    fn resolved_config_uses_bundler_facing_keys() {
        let mut proxy_rules = BTreeMap::new();
        proxy_rules.insert(
            "/socket/**".to_string(),
            ProxyRule {
                target: "http://localhost:8085".to_string(),
                change_origin: false,
                upgrade_to_websocket: true,
            },
        );
        let config = BuildConfig {
            entry_path: PathBuf::from(defaults::ENTRY_PATH),
            output_directory: PathBuf::from(defaults::OUTPUT_DIRECTORY),
            assets_directory: PathBuf::from(defaults::ASSETS_DIRECTORY),
            index_template_path: PathBuf::from(defaults::INDEX_TEMPLATE_PATH),
            dev_server_port: defaults::DEV_SERVER_PORT,
            proxy_rules,
        };

        let doc: serde_json::Value = serde_json::to_value(&config).unwrap();
        assert_eq!(doc["entryPath"], "./src/index.js");
        assert_eq!(doc["outputDirectory"], "./dist");
        assert_eq!(doc["assetsDirectory"], "./public");
        assert_eq!(doc["indexTemplatePath"], "./src/index.html");
        assert_eq!(doc["devServerPort"], 8080);
        assert_eq!(
            doc["proxyRules"]["/socket/**"]["upgradeToWebSocket"],
            true
        );
        assert_eq!(doc["proxyRules"]["/socket/**"]["changeOrigin"], false);
    }
}
