//! Redis-backed Mapping Store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisResult, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// Mapping Store keeping one Redis string per slug.
///
/// Uses `ConnectionManager` for automatic reconnection. Unlike a cache, every
/// error is propagated: the mapping write gates the response.
pub struct RedisMappingStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisMappingStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `key_prefix` - Namespace prepended to every slug; empty keeps the
    ///   flat slug key space
    ///
    /// # Errors
    ///
    /// Returns the Redis error if the URL is invalid, the connection cannot be
    /// established, or the PING fails.
    pub async fn connect(redis_url: &str, key_prefix: impl Into<String>) -> RedisResult<Self> {
        let client = Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        info!("✓ Connected to Redis mapping store");

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.into(),
        })
    }

    fn build_key(&self, slug: &str) -> String {
        format!("{}{}", self.key_prefix, slug)
    }
}

#[async_trait]
impl MappingStore for RedisMappingStore {
    async fn get(&self, slug: &str) -> Result<Option<String>, AppError> {
        let key = self.build_key(slug);
        let mut conn = self.client.clone();

        let value = conn.get::<_, Option<String>>(&key).await?;
        debug!(slug, hit = value.is_some(), "Mapping lookup");

        Ok(value.filter(|url| !url.is_empty()))
    }

    async fn put(&self, slug: &str, original_url: &str) -> Result<(), AppError> {
        let key = self.build_key(slug);
        let mut conn = self.client.clone();

        conn.set::<_, _, ()>(&key, original_url).await?;
        debug!("Mapping SET: {} -> {}", slug, original_url);

        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
