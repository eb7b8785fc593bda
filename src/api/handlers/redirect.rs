//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its original URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Request Flow
///
/// 1. Look the slug up in the Mapping Store
/// 2. Queue a click for the Analytics Store (fire-and-forget)
/// 3. Return 302 Found with the stored URL in `Location`
///
/// The click is never awaited; a full queue drops it and the redirect
/// still succeeds.
///
/// # Errors
///
/// - **400**: `No slug provided` (`GET /`, see [`empty_slug_handler`])
/// - **404**: `Item not found`
/// - **500**: Mapping Store failure, or a stored URL that cannot be sent as a
///   header value
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    redirect(&state, slug).await
}

/// `GET /`: a redirect request without a slug. Always 400.
pub async fn empty_slug_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    redirect(&state, String::new()).await
}

async fn redirect(state: &AppState, slug: String) -> Result<Response, AppError> {
    let original_url = state.redirect_service.resolve(&slug).await?;

    let location = HeaderValue::try_from(original_url.as_str()).map_err(|e| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "slug": slug, "reason": e.to_string() }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
