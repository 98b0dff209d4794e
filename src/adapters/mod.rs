// Adapters layer: concrete document sources behind the DocumentSource port.

pub mod http;
pub mod local;

use crate::core::{ConfigProvider, DocumentSource};
use crate::utils::error::Result;
use crate::utils::validation::is_http_location;

pub use http::HttpSource;
pub use local::LocalSource;

/// Source picked at runtime from configuration.
#[derive(Debug, Clone)]
pub enum Source {
    Http(HttpSource),
    Local(LocalSource),
}

impl Source {
    /// `http://` and `https://` locations are fetched over HTTP, anything
    /// else is read as a local directory.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let location = config.source_location();
        if is_http_location(location) {
            tracing::debug!("Using HTTP source: {}", location);
            Ok(Source::Http(HttpSource::with_timeout(
                location,
                config.request_timeout(),
            )?))
        } else {
            tracing::debug!("Using local source: {}", location);
            Ok(Source::Local(LocalSource::new(location)))
        }
    }
}

impl DocumentSource for Source {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        match self {
            Source::Http(source) => source.fetch(path).await,
            Source::Local(source) => source.fetch(path).await,
        }
    }
}
