//! Analytics Store implementations.
//!
//! # Repositories
//!
//! - [`PgAnalyticsRepository`] - PostgreSQL `analytics` table
//! - [`MemoryAnalyticsRepository`] - In-process table for development and tests

pub mod memory_analytics_repository;
pub mod pg_analytics_repository;

pub use memory_analytics_repository::MemoryAnalyticsRepository;
pub use pg_analytics_repository::PgAnalyticsRepository;
