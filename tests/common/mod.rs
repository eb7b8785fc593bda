#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;
use slug_shortener::domain::analytics_queue::AnalyticsQueue;
use slug_shortener::domain::analytics_worker::run_analytics_worker;
use slug_shortener::domain::entities::{AnalyticsRow, NewAnalyticsRow};
use slug_shortener::domain::repositories::AnalyticsRepository;
use slug_shortener::error::AppError;
use slug_shortener::infrastructure::kv::MemoryMappingStore;
use slug_shortener::infrastructure::persistence::MemoryAnalyticsRepository;
use slug_shortener::routes::router;
use slug_shortener::state::AppState;

pub const TEST_TOKEN: &str = "test-token";
pub const BEARER: &str = "Bearer test-token";

pub struct TestApp {
    pub server: TestServer,
    pub mapping_store: Arc<MemoryMappingStore>,
    pub analytics_store: Arc<MemoryAnalyticsRepository>,
}

/// Analytics store whose inserts land only after `delay`, like a slow
/// database round-trip.
pub struct SlowInsertRepository {
    pub inner: Arc<MemoryAnalyticsRepository>,
    pub delay: Duration,
}

#[async_trait]
impl AnalyticsRepository for SlowInsertRepository {
    async fn insert_row(&self, row: NewAnalyticsRow) -> Result<(), AppError> {
        tokio::time::sleep(self.delay).await;
        self.inner.insert_row(row).await
    }

    async fn increment_clicks(&self, slug: &str) -> Result<u64, AppError> {
        self.inner.increment_clicks(slug).await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Vec<AnalyticsRow>, AppError> {
        self.inner.find_by_slug(slug).await
    }

    async fn health_check(&self) -> bool {
        self.inner.health_check().await
    }
}

/// Full router on in-memory stores with a running analytics worker.
pub fn spawn_app() -> TestApp {
    spawn_app_with_insert_delay(Duration::ZERO)
}

/// Like [`spawn_app`], but every analytics insert takes `delay`.
pub fn spawn_app_with_insert_delay(delay: Duration) -> TestApp {
    let mapping_store = Arc::new(MemoryMappingStore::new());
    let analytics_store = Arc::new(MemoryAnalyticsRepository::new());
    let repository: Arc<dyn AnalyticsRepository> = if delay.is_zero() {
        analytics_store.clone()
    } else {
        Arc::new(SlowInsertRepository {
            inner: analytics_store.clone(),
            delay,
        })
    };

    let (analytics, rx) = AnalyticsQueue::channel(100);
    tokio::spawn(run_analytics_worker(rx, repository.clone(), 4));

    let state = AppState::new(mapping_store.clone(), repository, analytics, TEST_TOKEN);

    TestApp {
        server: TestServer::new(router(state)).unwrap(),
        mapping_store,
        analytics_store,
    }
}

/// Polls `check` until it holds or two seconds pass.
pub async fn eventually<F: Fn() -> bool>(check: F) -> bool {
    for _ in 0..100 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    check()
}
