//! Repository trait for the analytics table.

use crate::domain::entities::{AnalyticsRow, NewAnalyticsRow};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `analytics(slug, real, clicks)` table.
///
/// The table has no uniqueness constraint on `slug`: every insert adds a row,
/// and a click increments every row carrying the slug.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAnalyticsRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryAnalyticsRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Inserts a row with `clicks = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_row(&self, row: NewAnalyticsRow) -> Result<(), AppError>;

    /// Adds one click to every row for `slug`.
    ///
    /// Returns the number of rows touched; zero when the slug has no row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, slug: &str) -> Result<u64, AppError>;

    /// Lists the rows stored for `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Vec<AnalyticsRow>, AppError>;

    /// Checks if the database is reachable.
    async fn health_check(&self) -> bool;
}
