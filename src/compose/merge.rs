//! The composer: merge a partial record onto the documented defaults.

use std::path::PathBuf;

use super::env::EnvSource;
use super::model::{BuildConfig, ConfigOverrides, ProxyRule, ProxyRuleOverrides, defaults};

/// Compose a fully resolved build configuration.
///
/// Pure data merging: fields present in `overrides` pass through unchanged,
/// absent fields take their documented default. No filesystem or network
/// access, no validation, no failure paths — bad paths and malformed targets
/// are the bundler's problem. Deterministic given `overrides` and the `env`
/// snapshot.
pub fn compose(overrides: ConfigOverrides, env: &dyn EnvSource) -> BuildConfig {
    let proxy_rules = overrides
        .proxy_rules
        .into_iter()
        .map(|(pattern, rule)| (pattern, resolve_proxy_rule(rule, env)))
        .collect();

    BuildConfig {
        entry_path: overrides
            .entry_path
            .unwrap_or_else(|| PathBuf::from(defaults::ENTRY_PATH)),
        output_directory: overrides
            .output_directory
            .unwrap_or_else(|| PathBuf::from(defaults::OUTPUT_DIRECTORY)),
        assets_directory: overrides
            .assets_directory
            .unwrap_or_else(|| PathBuf::from(defaults::ASSETS_DIRECTORY)),
        index_template_path: overrides
            .index_template_path
            .unwrap_or_else(|| PathBuf::from(defaults::INDEX_TEMPLATE_PATH)),
        dev_server_port: overrides
            .dev_server_port
            .unwrap_or(defaults::DEV_SERVER_PORT),
        proxy_rules,
    }
}

fn resolve_proxy_rule(rule: ProxyRuleOverrides, env: &dyn EnvSource) -> ProxyRule {
    ProxyRule {
        target: rule.target.unwrap_or_else(|| local_target(env)),
        change_origin: rule.change_origin,
        upgrade_to_websocket: rule.upgrade_to_websocket,
    }
}

/// Target for rules that forward to the local API server. The port comes from
/// the environment when set, substituted verbatim as the original does with
/// string concatenation.
fn local_target(env: &dyn EnvSource) -> String {
    let port = env
        .var(defaults::PROXY_PORT_ENV)
        .unwrap_or_else(|| defaults::PROXY_PORT.to_string());
    format!("http://localhost:{}", port)
}
