//! Handlers for caller-chosen ("premium") slugs.
//!
//! Create and update share one flow and differ only in [`PremiumMode`]:
//! create refuses an existing slug, update overwrites whatever is there.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use super::json_body;
use crate::api::dto::premium::{PremiumSlugRequest, PremiumSlugResponse};
use crate::domain::entities::PremiumMode;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a premium slug.
///
/// # Endpoint
///
/// `POST /pro` (Bearer token required)
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com/sale", "shortUrl": "summer-sale" }
/// ```
///
/// # Response
///
/// ```json
/// { "message": "Premium Route Created", "shortUrl": "summer-sale" }
/// ```
///
/// # Errors
///
/// - **400**: validation failure
/// - **409**: `Some Error creating rule` (slug taken or store failure)
pub async fn create_premium_handler(
    State(state): State<AppState>,
    payload: Result<Json<PremiumSlugRequest>, JsonRejection>,
) -> Result<Json<PremiumSlugResponse>, AppError> {
    write_premium(&state, payload, PremiumMode::Create).await
}

/// Points a premium slug at a new URL, creating it if absent.
///
/// # Endpoint
///
/// `PUT /pro` (Bearer token required)
///
/// # Errors
///
/// - **400**: validation failure
/// - **409**: `Some Error updating rule` (store failure)
pub async fn update_premium_handler(
    State(state): State<AppState>,
    payload: Result<Json<PremiumSlugRequest>, JsonRejection>,
) -> Result<Json<PremiumSlugResponse>, AppError> {
    write_premium(&state, payload, PremiumMode::Update).await
}

async fn write_premium(
    state: &AppState,
    payload: Result<Json<PremiumSlugRequest>, JsonRejection>,
    mode: PremiumMode,
) -> Result<Json<PremiumSlugResponse>, AppError> {
    let mapping = json_body(payload)?.validate()?;

    if let Err(e) = state.slug_service.write_premium_slug(&mapping, mode).await {
        match &e {
            AppError::Internal { .. } => {
                tracing::error!(slug = %mapping.slug, error = ?e, "Premium slug write failed")
            }
            _ => tracing::debug!(slug = %mapping.slug, "Premium slug rejected: {}", e),
        }
        return Err(AppError::conflict(mode.failure_message()));
    }

    Ok(Json(PremiumSlugResponse {
        message: mode.success_message().to_string(),
        short_url: mapping.slug,
    }))
}
