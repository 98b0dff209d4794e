pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::TomlConfig;

pub use adapters::{HttpSource, LocalSource, Source};
pub use crate::core::catalog::{extract_concerts, CatalogReader, DEFAULT_DOCUMENT_PATH};
pub use domain::model::{Artist, Concert};
pub use domain::ports::{ConcertRepository, ConfigProvider, DocumentSource};
pub use utils::error::{CatalogError, Operation, Result};
