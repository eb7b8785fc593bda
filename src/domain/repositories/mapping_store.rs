//! Store trait for slug → URL mappings.

use crate::error::AppError;
use async_trait::async_trait;

/// Flat key-value store holding one URL per slug.
///
/// The store has no notion of ownership or expiry: `put` always overwrites,
/// and nothing is ever deleted by the service.
///
/// # Implementations
///
/// - [`crate::infrastructure::kv::RedisMappingStore`] - Redis implementation
/// - [`crate::infrastructure::kv::MemoryMappingStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Looks up the URL stored under `slug`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if a value is stored
    /// - `Ok(None)` if the slug is unknown
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    async fn get(&self, slug: &str) -> Result<Option<String>, AppError>;

    /// Stores `original_url` under `slug`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the write is not acknowledged.
    async fn put(&self, slug: &str, original_url: &str) -> Result<(), AppError>;

    /// Checks if the store backend is reachable.
    async fn health_check(&self) -> bool;
}
