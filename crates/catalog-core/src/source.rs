use std::path::PathBuf;

use async_trait::async_trait;
use catalog_models::ContentItem;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read catalog file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A materialized content source. The pipeline treats the returned sequence
/// as read-only; sources own fetching and normalization.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Vec<ContentItem>, SourceError>;
}

/// Catalog backed by a JSON dump on disk. Accepts either a bare array of
/// items or the content endpoint's envelope shape
/// (`{"success":true,"data":{"content":[...],"total":n}}`).
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Items(Vec<ContentItem>),
    Envelope { data: EnvelopeData },
    Flat { content: Vec<ContentItem> },
}

#[derive(Deserialize)]
struct EnvelopeData {
    content: Vec<ContentItem>,
}

impl CatalogFile {
    fn into_items(self) -> Vec<ContentItem> {
        match self {
            CatalogFile::Items(items) => items,
            CatalogFile::Envelope { data } => data.content,
            CatalogFile::Flat { content } => content,
        }
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    async fn fetch_catalog(&self) -> Result<Vec<ContentItem>, SourceError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| SourceError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        let file: CatalogFile =
            serde_json::from_slice(&bytes).map_err(|e| SourceError::Parse {
                path: self.path.clone(),
                source: e,
            })?;

        let items = file.into_items();
        debug!(path = %self.path.display(), count = items.len(), "loaded catalog");
        Ok(items)
    }
}

/// In-memory catalog, used in tests and demos where no file is involved.
pub struct MemorySource {
    items: Vec<ContentItem>,
}

impl MemorySource {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl CatalogSource for MemorySource {
    async fn fetch_catalog(&self) -> Result<Vec<ContentItem>, SourceError> {
        Ok(self.items.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BARE_ARRAY: &str = r#"[
        {"id": "1", "title": "One", "type": "movie", "rating": 8.1},
        {"id": 2, "title": "Two", "type": "series", "rating": "N/A"}
    ]"#;

    const ENVELOPE: &str = r#"{
        "success": true,
        "data": {
            "content": [{"id": "9", "title": "Nine", "type": "movie"}],
            "total": 1
        }
    }"#;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_loads_bare_array() {
        let file = write_temp(BARE_ARRAY);
        let source = JsonFileSource::new(file.path());

        let items = source.fetch_catalog().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].rating, Some(8.1));
        // Lenient ingestion: numeric id normalized, bad rating dropped
        assert_eq!(items[1].id, "2");
        assert_eq!(items[1].rating, None);
    }

    #[tokio::test]
    async fn test_loads_api_envelope() {
        let file = write_temp(ENVELOPE);
        let source = JsonFileSource::new(file.path());

        let items = source.fetch_catalog().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "9");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = JsonFileSource::new("/nonexistent/catalog.json");
        assert!(matches!(
            source.fetch_catalog().await,
            Err(SourceError::Io { .. })
        ));
    }

    #[tokio::test]
    async fn test_garbage_is_parse_error() {
        let file = write_temp("not json at all");
        let source = JsonFileSource::new(file.path());
        assert!(matches!(
            source.fetch_catalog().await,
            Err(SourceError::Parse { .. })
        ));
    }

    #[tokio::test]
    async fn test_memory_source_round_trip() {
        let items: Vec<ContentItem> = serde_json::from_str(BARE_ARRAY).unwrap();
        let source = MemorySource::new(items.clone());
        assert_eq!(source.fetch_catalog().await.unwrap(), items);
    }
}
