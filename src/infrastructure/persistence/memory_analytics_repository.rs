//! In-process implementation of the analytics repository.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::entities::{AnalyticsRow, NewAnalyticsRow};
use crate::domain::repositories::AnalyticsRepository;
use crate::error::AppError;

/// Analytics rows held in process memory, grouped by slug.
///
/// Mirrors the table semantics: inserts never deduplicate and a click bumps
/// every row of the slug.
#[derive(Debug, Default)]
pub struct MemoryAnalyticsRepository {
    rows: DashMap<String, Vec<AnalyticsRow>>,
}

impl MemoryAnalyticsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of clicks over every row of `slug`.
    pub fn total_clicks(&self, slug: &str) -> i64 {
        self.rows
            .get(slug)
            .map(|rows| rows.iter().map(|row| row.clicks).sum())
            .unwrap_or(0)
    }

    /// Number of rows stored for `slug`.
    pub fn row_count(&self, slug: &str) -> usize {
        self.rows.get(slug).map(|rows| rows.len()).unwrap_or(0)
    }
}

#[async_trait]
impl AnalyticsRepository for MemoryAnalyticsRepository {
    async fn insert_row(&self, row: NewAnalyticsRow) -> Result<(), AppError> {
        self.rows
            .entry(row.slug.clone())
            .or_default()
            .push(row.into());
        Ok(())
    }

    async fn increment_clicks(&self, slug: &str) -> Result<u64, AppError> {
        let Some(mut rows) = self.rows.get_mut(slug) else {
            return Ok(0);
        };

        for row in rows.iter_mut() {
            row.clicks += 1;
        }

        Ok(rows.len() as u64)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Vec<AnalyticsRow>, AppError> {
        Ok(self
            .rows
            .get(slug)
            .map(|rows| rows.value().clone())
            .unwrap_or_default())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
