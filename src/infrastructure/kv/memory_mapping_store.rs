//! In-process Mapping Store.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// A Mapping Store held in process memory.
///
/// Used when no Redis URL is configured and by the handler tests. Contents are
/// lost on restart.
#[derive(Debug, Default)]
pub struct MemoryMappingStore {
    entries: DashMap<String, String>,
}

impl MemoryMappingStore {
    pub fn new() -> Self {
        debug!("Using in-memory mapping store");
        Self::default()
    }

    /// Number of stored slugs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl MappingStore for MemoryMappingStore {
    async fn get(&self, slug: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .entries
            .get(slug)
            .map(|entry| entry.value().clone())
            .filter(|url| !url.is_empty()))
    }

    async fn put(&self, slug: &str, original_url: &str) -> Result<(), AppError> {
        self.entries
            .insert(slug.to_string(), original_url.to_string());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
