use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod compose;
mod config;

use config::{BundleKind, OutputFormat};

#[derive(Parser)]
#[command(name = "bundle-compose")]
#[command(about = "A tool that composes resolved bundler configurations from partial overrides")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a resolved build configuration for an external bundler
    Compose {
        /// Path to the override document (.toml or .json) [default: compose pure defaults]
        #[arg(long)]
        overrides: Option<PathBuf>,

        /// Serialization format for the emitted document
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Where to write the document [default: stdout]
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Write a starter override document for a bundle
    Init {
        /// Which bundle the starter document targets
        #[arg(long, value_enum, default_value_t = BundleKind::App)]
        kind: BundleKind,

        /// Path for the starter document [default: ./bundle.<kind>.toml]
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compose {
            overrides,
            format,
            out,
        } => {
            let config = config::ComposeConfig {
                overrides,
                format,
                out,
            };
            compose::run(config)?;
        }
        Commands::Init { kind, out } => {
            let out = out.unwrap_or_else(|| PathBuf::from(format!("./bundle.{}.toml", kind)));
            compose::init::write_starter(kind, &out)?;
        }
    }

    Ok(())
}
