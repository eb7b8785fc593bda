//! Application layer services implementing the business rules.
//!
//! Services consume the store traits from [`crate::domain::repositories`] and
//! expose the operations the HTTP handlers and the admin CLI call.
//!
//! # Available Services
//!
//! - [`services::slug_service::SlugService`] - Random and premium slug writes
//! - [`services::redirect_service::RedirectService`] - Slug resolution and click counting
//! - [`services::auth_service::AuthService`] - Bearer token check

pub mod services;
