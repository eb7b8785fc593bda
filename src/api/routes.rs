//! API route configuration.
//!
//! Every route here requires Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{create_premium_handler, create_slug_handler, update_premium_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Write routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST /api` - Shorten a URL under a generated slug
/// - `POST /pro` - Create a caller-chosen slug
/// - `PUT  /pro` - Point a caller-chosen slug at a new URL
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/api", post(create_slug_handler))
        .route(
            "/pro",
            post(create_premium_handler).put(update_premium_handler),
        )
}
