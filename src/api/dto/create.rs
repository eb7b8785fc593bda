//! DTOs for the random slug endpoint.

use serde::{Deserialize, Serialize};

use super::validate_original_url;
use crate::error::AppError;

/// Request to shorten a URL under a generated slug.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlugRequest {
    pub original_url: Option<String>,
}

impl CreateSlugRequest {
    /// Returns the validated original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with `No URL provided` or `Invalid URL`.
    pub fn validate(self) -> Result<String, AppError> {
        validate_original_url(self.original_url)
    }
}

/// Response carrying the generated slug.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlugResponse {
    pub short_url: String,
}
