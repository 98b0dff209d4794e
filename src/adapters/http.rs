use crate::core::DocumentSource;
use crate::utils::error::{CatalogError, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Fetches documents over HTTP. Paths are resolved against `base_url` the way
/// a browser resolves links: `/db.json` replaces the base path, `db.json`
/// is appended to a base ending in `/`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: Url,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|e| CatalogError::InvalidConfigValue {
            field: "source".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: parsed,
        })
    }

    pub fn resolve(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| CatalogError::InvalidConfigValue {
                field: "document_path".to_string(),
                value: path.to_string(),
                reason: format!("Cannot resolve against {}: {}", self.base_url, e),
            })
    }
}

impl DocumentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.resolve(path)?;
        tracing::debug!("Making request to: {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(CatalogError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
