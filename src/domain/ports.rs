use crate::domain::model::Concert;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Turns a document path into raw bytes.
pub trait DocumentSource: Send + Sync {
    fn fetch(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_location(&self) -> &str;
    fn document_path(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
}

/// CRUD-shaped access to concerts. Read-only backends reject the mutators.
#[async_trait]
pub trait ConcertRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Concert>>;
    async fn get_by_id(&self, id: &str) -> Result<Option<Concert>>;
    async fn get_by_artist_name(&self, name: &str) -> Result<Vec<Concert>>;

    fn create(&self, concert: Concert) -> Result<Concert>;
    fn update(&self, id: &str, concert: Concert) -> Result<Concert>;
    fn delete(&self, id: &str) -> Result<()>;
}
