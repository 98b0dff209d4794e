use crate::core::catalog::DEFAULT_DOCUMENT_PATH;
use crate::core::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Catalog settings read from a TOML file:
///
/// ```toml
/// [source]
/// location = "https://concerts.example.com"
/// document_path = "/db.json"
/// timeout_seconds = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub location: String,
    pub document_path: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| CatalogError::Config {
            message: format!("Cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CatalogError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl ConfigProvider for TomlConfig {
    fn source_location(&self) -> &str {
        &self.source.location
    }

    fn document_path(&self) -> &str {
        self.source
            .document_path
            .as_deref()
            .unwrap_or(DEFAULT_DOCUMENT_PATH)
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.source.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_source_location("source.location", &self.source.location)?;
        validation::validate_path("source.document_path", self.document_path())?;
        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_positive_number("source.timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
