//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{slug}`      - Redirect to the original URL (public)
//! - `GET  /`            - Missing slug, 400 (public)
//! - `GET  /api/health`  - Health check: stores and analytics queue (public)
//! - `POST /api`         - Random slug (Bearer token required)
//! - `POST /pro`         - Create premium slug (Bearer token required)
//! - `PUT  /pro`         - Update premium slug (Bearer token required)
//!
//! Static routes win over `/{slug}`, so the slugs `api` and `pro` can be
//! stored but never redirected.
//!
//! # Middleware
//!
//! - **CORS** - Any origin, method and header
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer token on the write routes only
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{empty_slug_handler, health_handler, redirect_handler};
use crate::api::middleware::{auth, cors, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with every route and middleware, without path
/// normalization.
pub fn router(state: AppState) -> Router {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/", get(empty_slug_handler))
        .route("/{slug}", get(redirect_handler))
        .route("/api/health", get(health_handler))
        .merge(api_router)
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] wrapped so that a
/// trailing slash is ignored (`/api/` routes like `/api`).
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
