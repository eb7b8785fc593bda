//! PostgreSQL implementation of the analytics repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{AnalyticsRow, NewAnalyticsRow};
use crate::domain::repositories::AnalyticsRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `analytics` table.
///
/// Queries are checked at runtime so the crate builds without a live
/// database.
pub struct PgAnalyticsRepository {
    pool: Arc<PgPool>,
}

impl PgAnalyticsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalyticsRepository for PgAnalyticsRepository {
    async fn insert_row(&self, row: NewAnalyticsRow) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO analytics (slug, "real", clicks)
            VALUES ($1, $2, 0)
            "#,
        )
        .bind(&row.slug)
        .bind(&row.real)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn increment_clicks(&self, slug: &str) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE analytics
            SET clicks = clicks + 1
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Vec<AnalyticsRow>, AppError> {
        let rows = sqlx::query_as::<_, (String, String, i32)>(
            r#"
            SELECT slug, "real", clicks
            FROM analytics
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(slug, real, clicks)| AnalyticsRow::new(slug, real, i64::from(clicks)))
            .collect())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
