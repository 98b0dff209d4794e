use crate::core::DocumentSource;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Reads documents from a directory, treating it as the web root: the
/// document path `/db.json` maps to `<base_dir>/db.json`.
#[derive(Debug, Clone)]
pub struct LocalSource {
    base_dir: PathBuf,
}

impl LocalSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_dir.join(path.trim_start_matches('/'))
    }
}

impl DocumentSource for LocalSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        tracing::debug!("Reading file: {}", full_path.display());
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }
}
