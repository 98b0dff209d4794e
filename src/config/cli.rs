use crate::config::toml_config::TomlConfig;
use crate::core::catalog::DEFAULT_DOCUMENT_PATH;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SOURCE: &str = ".";

#[derive(Debug, Clone, Parser)]
#[command(name = "concert-catalog")]
#[command(about = "Query a static concert catalog document")]
pub struct CliConfig {
    /// Base URL (http/https) or directory the document is served from [default: .]
    #[arg(long)]
    pub source: Option<String>,

    /// Path of the catalog document under the source [default: /db.json]
    #[arg(long)]
    pub document_path: Option<String>,

    #[arg(long, help = "HTTP request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    /// TOML file supplying values for flags not given on the command line
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List every concert in the catalog
    List,
    /// Show the concert with the given id
    Get { id: String },
    /// List concerts whose artist name contains NAME (case-insensitive)
    Artist { name: String },
}

impl CliConfig {
    /// Fills unset flags from the `--config` file, if one was given.
    pub fn apply_config_file(&mut self) -> Result<()> {
        let Some(path) = self.config.clone() else {
            return Ok(());
        };

        tracing::debug!("Loading config file: {}", path.display());
        let file = TomlConfig::from_file(&path)?;
        self.merge(file);
        Ok(())
    }

    fn merge(&mut self, file: TomlConfig) {
        let source = file.source;
        if self.source.is_none() {
            self.source = Some(source.location);
        }
        if self.document_path.is_none() {
            self.document_path = source.document_path;
        }
        if self.timeout_seconds.is_none() {
            self.timeout_seconds = source.timeout_seconds;
        }
    }
}

impl ConfigProvider for CliConfig {
    fn source_location(&self) -> &str {
        self.source.as_deref().unwrap_or(DEFAULT_SOURCE)
    }

    fn document_path(&self) -> &str {
        self.document_path.as_deref().unwrap_or(DEFAULT_DOCUMENT_PATH)
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_source_location("source", self.source_location())?;
        validation::validate_path("document_path", self.document_path())?;
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
