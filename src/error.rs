//! Application error type and its HTTP mapping.
//!
//! Every failure on the request path is expressed as an [`AppError`] and
//! translated into a status code at the handler boundary. Client errors carry
//! a descriptive message; internal errors are logged and answered with a
//! generic message so no store detail reaches the caller.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Message returned for every internal error.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error body shared by all non-auth failures: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body returned by the auth gate.
#[derive(Debug, Serialize)]
struct UnauthorizedBody {
    success: bool,
    error: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing, empty, or malformed client input (400).
    #[error("{message}")]
    Validation { message: String },

    /// Missing or incorrect bearer token (401).
    #[error("Unauthorized")]
    Unauthorized,

    /// Unknown slug (404).
    #[error("{message}")]
    NotFound { message: String },

    /// Slug collision or rejected premium write (409).
    #[error("{message}")]
    Conflict { message: String },

    /// Unexpected store failure on an awaited path (500).
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            AppError::Unauthorized => {
                let mut response = (
                    status,
                    Json(UnauthorizedBody {
                        success: false,
                        error: "Unauthorized",
                    }),
                )
                    .into_response();
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
                response
            }
            AppError::Internal { message, details } => {
                tracing::error!(details = %details, "{}", message);
                (
                    status,
                    Json(ErrorBody {
                        error: INTERNAL_ERROR_MESSAGE.to_string(),
                    }),
                )
                    .into_response()
            }
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::Conflict { message } => {
                (status, Json(ErrorBody { error: message })).into_response()
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal("Analytics store error", json!({ "reason": e.to_string() }))
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::internal("Mapping store error", json!({ "reason": e.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_response() {
        let response = AppError::bad_request("No URL provided").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "No URL provided" }));
    }

    #[tokio::test]
    async fn test_unauthorized_response_has_challenge() {
        let response = AppError::unauthorized().into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
        assert_eq!(
            body_json(response).await,
            json!({ "success": false, "error": "Unauthorized" })
        );
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response = AppError::internal(
            "Mapping store error",
            json!({ "reason": "connection refused at 10.0.0.3" }),
        )
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], INTERNAL_ERROR_MESSAGE);
        assert!(!body.to_string().contains("10.0.0.3"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::not_found("Item not found").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::conflict("Short URL already in use").status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_display_uses_message() {
        assert_eq!(
            AppError::bad_request("Invalid URL").to_string(),
            "Invalid URL"
        );
        assert_eq!(AppError::unauthorized().to_string(), "Unauthorized");
    }
}
