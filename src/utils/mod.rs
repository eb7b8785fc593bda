//! Utility functions used across the application:
//!
//! - [`slug_generator`] - Random slug generation
//! - [`url_validator`] - Syntactic URL validation

pub mod slug_generator;
pub mod url_validator;

pub use slug_generator::generate_slug;
pub use url_validator::is_valid_url;
