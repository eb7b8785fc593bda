//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the store traits defined in
//! [`crate::domain::repositories`].
//!
//! # Modules
//!
//! - [`kv`] - Mapping Store implementations (Redis and in-memory)
//! - [`persistence`] - Analytics Store implementations (PostgreSQL and in-memory)

pub mod kv;
pub mod persistence;
