//! HTTP surface of the service.
//!
//! Handlers parse and validate JSON bodies into domain values, call the
//! application services and map their results onto status codes. Nothing
//! below this layer knows about HTTP.
//!
//! - [`dto`] - request/response bodies and their validation
//! - [`handlers`] - one module per endpoint group
//! - [`middleware`] - bearer auth, CORS, request tracing
//! - [`routes`] - the authenticated write routes

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
