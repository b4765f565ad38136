use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the compose command
#[derive(Debug)]
pub struct ComposeConfig {
    pub overrides: Option<PathBuf>,
    pub format: OutputFormat,
    pub out: Option<PathBuf>,
}

/// Serialization format for the emitted document
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Toml => write!(f, "toml"),
        }
    }
}

/// Which bundle a starter override document targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BundleKind {
    /// The main application bundle
    App,
    /// The test bundle
    Tests,
}

impl fmt::Display for BundleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::App => write!(f, "app"),
            Self::Tests => write!(f, "tests"),
        }
    }
}
