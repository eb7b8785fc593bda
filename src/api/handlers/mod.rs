//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod create;
pub mod health;
pub mod premium;
pub mod redirect;

pub use create::create_slug_handler;
pub use health::health_handler;
pub use premium::{create_premium_handler, update_premium_handler};
pub use redirect::{empty_slug_handler, redirect_handler};

use axum::{Json, extract::rejection::JsonRejection};

use crate::error::AppError;

/// Unwraps a JSON body, turning any rejection (bad syntax, wrong content
/// type, wrong field types) into a 400.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            Err(AppError::bad_request("Invalid JSON body"))
        }
    }
}
