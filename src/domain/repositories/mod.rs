//! Store trait definitions for the domain layer.
//!
//! These traits abstract the two external stores the service depends on.
//! Concrete implementations live in `crate::infrastructure`; mocks are
//! generated with `mockall` for unit tests.
//!
//! # Available Stores
//!
//! - [`MappingStore`] - slug → original URL key-value store
//! - [`AnalyticsRepository`] - `analytics(slug, real, clicks)` table

pub mod analytics_repository;
pub mod mapping_store;

pub use analytics_repository::AnalyticsRepository;
pub use mapping_store::MappingStore;

#[cfg(test)]
pub use analytics_repository::MockAnalyticsRepository;
#[cfg(test)]
pub use mapping_store::MockMappingStore;
