//! Handler for random slug creation.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use super::json_body;
use crate::api::dto::create::{CreateSlugRequest, CreateSlugResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL under a freshly generated slug.
///
/// # Endpoint
///
/// `POST /api` (Bearer token required)
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// { "shortUrl": "aB3xK9" }
/// ```
///
/// # Errors
///
/// - **400**: `No URL provided`, `Invalid URL` or `Invalid JSON body`
/// - **500**: the Mapping Store failed
pub async fn create_slug_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateSlugRequest>, JsonRejection>,
) -> Result<Json<CreateSlugResponse>, AppError> {
    let original_url = json_body(payload)?.validate()?;

    let short_url = state.slug_service.create_slug(&original_url).await?;

    Ok(Json(CreateSlugResponse { short_url }))
}
