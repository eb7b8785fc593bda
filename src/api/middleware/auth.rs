//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Gate for the write routes: the request passes only if it carries
/// `Authorization: Bearer <API_TOKEN>`.
///
/// Mounted with `route_layer`, so it runs after routing but before any body
/// extractor; an unauthenticated request is answered with 401 whatever its
/// body contains.
///
/// # Errors
///
/// [`AppError::Unauthorized`] when the header is missing, uses another scheme,
/// or carries the wrong token. The response body is
/// `{"success": false, "error": "Unauthorized"}` with `WWW-Authenticate: Bearer`.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            tracing::debug!("Missing or malformed Authorization header");
            AppError::unauthorized()
        })?;

    st.auth_service.authenticate(&token)?;

    Ok(next.run(Request::from_parts(parts, body)).await)
}
