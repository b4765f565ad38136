use anyhow::{Context, Result};

use crate::config::ComposeConfig;

mod emit;
mod env;
pub mod init;
mod load;
mod merge;
pub mod model;

use env::ProcessEnv;
use model::ConfigOverrides;

/// Main compose orchestrator
pub fn run(config: ComposeConfig) -> Result<()> {
    // Phase 1: Load the override document (or start from empty overrides)
    // Progress goes to stderr so stdout stays a clean document.
    let overrides = match &config.overrides {
        Some(path) => {
            eprintln!("Composing from overrides in {}...", path.display());
            load::read_overrides(path)?
        }
        None => {
            eprintln!("Composing from defaults (no overrides given)...");
            ConfigOverrides::default()
        }
    };

    // Phase 2: Merge onto the documented defaults against the process env
    let resolved = merge::compose(overrides, &ProcessEnv);

    // Phase 3: Emit the bundler-facing document
    let document =
        emit::render(&resolved, config.format).context("Failed to render configuration")?;
    emit::write(&document, config.out.as_deref())?;

    Ok(())
}
