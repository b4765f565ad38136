use anyhow::{Context, Result};
use std::path::Path;

use crate::config::BundleKind;

/// Write a commented starter override document for the given bundle.
pub fn write_starter(kind: BundleKind, out: &Path) -> Result<()> {
    if out.exists() {
        anyhow::bail!("{} already exists, not overwriting it", out.display());
    }
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    std::fs::write(out, starter_document(kind))
        .with_context(|| format!("Failed to write {}", out.display()))?;
    eprintln!("  Wrote {} starter overrides to {}", kind, out.display());
    Ok(())
}

/// Starter content per bundle. Only the fields that differ from the defaults
/// need to appear; everything else is filled in at compose time.
fn starter_document(kind: BundleKind) -> &'static str {
    match kind {
        BundleKind::App => {
            r#"# Overrides for the application bundle.
# Omitted fields take the composer's documented defaults.

# The HTML template emitted script/style tags are injected into.
index_template_path = "./src/client/index.html"
entry_path = "./src/client/output/app.js"
output_directory = "./deploy/public"
assets_directory = "./src/client/public"
dev_server_port = 8080

# Dev-server forwarding rules. A rule with no explicit `target` forwards to
# http://localhost:$SERVER_PROXY_PORT (default 8085).

# Redirect requests that start with /api/ to the API server.
[proxy_rules."/api/**"]
change_origin = true

# Redirect websocket requests that start with /socket/ to the same server.
[proxy_rules."/socket/**"]
upgrade_to_websocket = true
"#
        }
        BundleKind::Tests => {
            r#"# Overrides for the test bundle.
# Omitted fields take the composer's documented defaults.

index_template_path = "./tests/client/index.html"
entry_path = "./tests/client/output/app.test.js"
output_directory = "./tests/client/dist"
assets_directory = "./src/client/public"
dev_server_port = 8080
"#
        }
    }
}
