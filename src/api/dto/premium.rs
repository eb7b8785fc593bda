//! DTOs for the premium slug endpoints.

use serde::{Deserialize, Serialize};

use super::validate_original_url;
use crate::domain::entities::SlugMapping;
use crate::error::AppError;

/// Request to create or update a caller-chosen slug.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumSlugRequest {
    pub original_url: Option<String>,
    /// The requested slug.
    pub short_url: Option<String>,
}

impl PremiumSlugRequest {
    /// Validates the request and builds the mapping to write.
    ///
    /// Checks run in order and stop at the first failure:
    /// 1. `originalUrl` present and non-empty (`No URL provided`)
    /// 2. `originalUrl` well-formed (`Invalid URL`)
    /// 3. `shortUrl` present and non-empty (`No short URL provided`)
    pub fn validate(self) -> Result<SlugMapping, AppError> {
        let original_url = validate_original_url(self.original_url)?;

        let slug = self
            .short_url
            .filter(|slug| !slug.is_empty())
            .ok_or_else(|| AppError::bad_request("No short URL provided"))?;

        Ok(SlugMapping::new(slug, original_url))
    }
}

/// Response to a successful premium write.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumSlugResponse {
    pub message: String,
    pub short_url: String,
}
