//! Data Transfer Objects for API requests and responses.
//!
//! Request fields are optional so that a missing field and an empty field
//! produce the same descriptive 400 instead of a generic deserialization
//! error. Each request validates itself in a fixed order and only then builds
//! domain values.

pub mod create;
pub mod health;
pub mod premium;

use crate::error::AppError;
use crate::utils::is_valid_url;

/// Validates an `originalUrl` field: present and non-empty, then well-formed.
pub(crate) fn validate_original_url(original_url: Option<String>) -> Result<String, AppError> {
    let original_url = original_url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::bad_request("No URL provided"))?;

    if !is_valid_url(&original_url) {
        return Err(AppError::bad_request("Invalid URL"));
    }

    Ok(original_url)
}
