//! Top-level router.
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Deadline** - per-request timeout, reported as an internal error
//! - **Path normalization** - trailing slash handling

use std::time::Duration;

use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::middleware::{deadline, tracing};
use crate::state::AppState;

/// All routes with request middleware, before path normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - deadline for a whole request, storage calls included
pub fn api_router(state: AppState, request_timeout: Duration) -> Router {
    api::routes::routes()
        .with_state(state)
        .layer(middleware::from_fn_with_state(
            request_timeout,
            deadline::layer,
        ))
        .layer(tracing::layer())
}

/// Constructs the application router served by [`crate::server::run`].
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state, request_timeout))
}
