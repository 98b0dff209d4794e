use crate::core::{Concert, ConcertRepository, DocumentSource};
use crate::utils::error::{CatalogError, Operation, Result};
use serde_json::Value;

pub const DEFAULT_DOCUMENT_PATH: &str = "/db.json";

/// Read-only concert catalog backed by a static JSON document shaped as
/// `{ "concerts": { "data": [ ... ] } }`.
///
/// Nothing is cached: every read fetches and parses the document again.
pub struct CatalogReader<S: DocumentSource> {
    source: S,
    document_path: String,
}

impl<S: DocumentSource> CatalogReader<S> {
    pub fn new(source: S) -> Self {
        Self::with_document_path(source, DEFAULT_DOCUMENT_PATH)
    }

    pub fn with_document_path(source: S, document_path: impl Into<String>) -> Self {
        Self {
            source,
            document_path: document_path.into(),
        }
    }

    pub fn document_path(&self) -> &str {
        &self.document_path
    }

    async fn load_document(&self) -> Result<Value> {
        tracing::debug!("Fetching catalog document: {}", self.document_path);
        let bytes = self.source.fetch(&self.document_path).await?;
        tracing::debug!("Fetched {} bytes", bytes.len());
        let document = serde_json::from_slice(&bytes)?;
        Ok(document)
    }
}

/// Pulls the concert list out of `concerts.data`. Any other shape gives an
/// empty catalog; entries that are not objects are dropped.
pub fn extract_concerts(document: Value) -> Vec<Concert> {
    let data = match document {
        Value::Object(mut root) => match root.remove("concerts") {
            Some(Value::Object(mut concerts)) => concerts.remove("data"),
            _ => None,
        },
        _ => None,
    };

    let items = match data {
        Some(Value::Array(items)) => items,
        Some(other) => {
            tracing::warn!("concerts.data is not an array ({}), treating as empty", kind(&other));
            return Vec::new();
        }
        None => {
            tracing::debug!("Document has no concerts.data");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match Concert::try_from(item) {
            Ok(concert) => Some(concert),
            Err(other) => {
                tracing::warn!("Skipping concerts.data[{}]: expected object, got {}", index, kind(&other));
                None
            }
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait::async_trait]
impl<S: DocumentSource> ConcertRepository for CatalogReader<S> {
    async fn list(&self) -> Result<Vec<Concert>> {
        let document = self.load_document().await?;
        let concerts = extract_concerts(document);
        tracing::debug!("Catalog holds {} concerts", concerts.len());
        Ok(concerts)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Concert>> {
        let concerts = self.list().await?;
        // ids are not checked for uniqueness, first match wins
        Ok(concerts.into_iter().find(|concert| concert.id() == Some(id)))
    }

    async fn get_by_artist_name(&self, name: &str) -> Result<Vec<Concert>> {
        let needle = name.to_lowercase();
        let concerts = self.list().await?;
        let matches: Vec<Concert> = concerts
            .into_iter()
            .filter(|concert| concert.performed_by(&needle))
            .collect();
        tracing::debug!("{} concerts match artist '{}'", matches.len(), name);
        Ok(matches)
    }

    fn create(&self, _concert: Concert) -> Result<Concert> {
        tracing::warn!("Rejected create on read-only catalog");
        Err(CatalogError::unsupported(Operation::Create))
    }

    fn update(&self, id: &str, _concert: Concert) -> Result<Concert> {
        tracing::warn!("Rejected update of concert {} on read-only catalog", id);
        Err(CatalogError::unsupported(Operation::Update))
    }

    fn delete(&self, id: &str) -> Result<()> {
        tracing::warn!("Rejected delete of concert {} on read-only catalog", id);
        Err(CatalogError::unsupported(Operation::Delete))
    }
}
