//! Handler for the health check.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::api::dto::health::{ComponentCheck, HealthChecks, HealthResponse, ServiceState};
use crate::state::AppState;

/// Reports whether both stores answer and the analytics worker is alive.
///
/// # Endpoint
///
/// `GET /api/health` (public)
///
/// # Response Codes
///
/// - **200 OK**: every component is ok
/// - **503 Service Unavailable**: at least one component failed; the body
///   says which
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "mapping_store": { "status": "ok", "message": "Connected" },
///     "analytics_store": { "status": "ok", "message": "Connected" },
///     "analytics_queue": { "status": "ok", "message": "Capacity: 10000" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (mapping_ok, analytics_ok) = tokio::join!(
        state.mapping_store.health_check(),
        state.analytics_repository.health_check()
    );

    let checks = HealthChecks {
        mapping_store: ComponentCheck::from_check(
            mapping_ok,
            "Connected",
            "Mapping store unreachable",
        ),
        analytics_store: ComponentCheck::from_check(
            analytics_ok,
            "Connected",
            "Analytics store unreachable",
        ),
        analytics_queue: ComponentCheck::from_check(
            !state.analytics.is_closed(),
            format!("Capacity: {}", state.analytics.capacity()),
            "Analytics queue is closed",
        ),
    };

    let status = checks.overall();
    let code = match status {
        ServiceState::Healthy => StatusCode::OK,
        ServiceState::Degraded => {
            tracing::warn!(?checks, "Health check degraded");
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }),
    )
}
