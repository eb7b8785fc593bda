//! HTTP server initialization and runtime setup.
//!
//! Handles store connections, worker spawning, and the Axum server lifecycle.

use crate::config::{Config, PoolConfig};
use crate::domain::analytics_queue::AnalyticsQueue;
use crate::domain::analytics_worker::run_analytics_worker;
use crate::domain::repositories::{AnalyticsRepository, MappingStore};
use crate::infrastructure::kv::{MemoryMappingStore, RedisMappingStore};
use crate::infrastructure::persistence::{MemoryAnalyticsRepository, PgAnalyticsRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Mapping Store (Redis, or in-memory when not configured)
/// - Analytics Store (PostgreSQL with migrations, or in-memory)
/// - Background analytics worker
/// - Axum HTTP server with graceful shutdown
///
/// After the server stops, waits for the analytics worker to drain what is
/// left in the queue.
///
/// # Errors
///
/// Returns an error if:
/// - A configured store cannot be reached
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let mapping_store = connect_mapping_store(&config).await?;
    let analytics_repository = connect_analytics_store(&config).await?;

    let (analytics, analytics_rx) = AnalyticsQueue::channel(config.analytics.queue_capacity);
    let worker = tokio::spawn(run_analytics_worker(
        analytics_rx,
        analytics_repository.clone(),
        config.analytics.worker_concurrency,
    ));

    let state = AppState::new(
        mapping_store,
        analytics_repository,
        analytics,
        &config.api_token,
    );

    let app = app_router(state);

    let addr = config.listen_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, draining analytics queue");
    worker.await.context("Analytics worker panicked")?;

    Ok(())
}

/// Connects the configured Mapping Store.
///
/// Without `REDIS_URL` the in-memory store is used and a warning is logged.
pub async fn connect_mapping_store(config: &Config) -> Result<Arc<dyn MappingStore>> {
    let Some(redis_url) = &config.redis_url else {
        tracing::warn!("REDIS_URL not set, using in-memory mapping store (data lost on restart)");
        return Ok(Arc::new(MemoryMappingStore::new()));
    };

    let store = RedisMappingStore::connect(redis_url, config.mapping_key_prefix.clone())
        .await
        .context("Failed to connect to Redis")?;

    Ok(Arc::new(store))
}

/// Connects the configured Analytics Store and applies pending migrations.
///
/// Without `DATABASE_URL` the in-memory store is used and a warning is logged.
pub async fn connect_analytics_store(config: &Config) -> Result<Arc<dyn AnalyticsRepository>> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!(
            "DATABASE_URL not set, using in-memory analytics store (data lost on restart)"
        );
        return Ok(Arc::new(MemoryAnalyticsRepository::new()));
    };

    let pool = connect_pool(&config.pool, database_url).await?;
    run_migrations(&pool).await?;

    Ok(Arc::new(PgAnalyticsRepository::new(Arc::new(pool))))
}

/// Opens a PostgreSQL pool with the configured limits.
pub async fn connect_pool(pool_config: &PoolConfig, database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(pool_config.max_connections)
        .acquire_timeout(pool_config.acquire_timeout)
        .idle_timeout(pool_config.idle_timeout)
        .max_lifetime(pool_config.max_lifetime)
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Applies the embedded migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;

    tracing::info!("Migrations applied");
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
