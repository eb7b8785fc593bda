//! Cross-origin resource sharing.

use tower_http::cors::{Any, CorsLayer};

/// Allows any origin, method and header on every route.
///
/// Preflight `OPTIONS` requests are answered by this layer before routing,
/// so they never reach the auth gate.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
