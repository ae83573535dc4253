//! Whole-request deadline.

use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

/// Aborts the request once `timeout` elapses.
///
/// An elapsed deadline is an [`AppError::Internal`], so clients see the
/// usual `500 {"error": "internal server error"}`.
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/short", post(short_handler))
///     .layer(middleware::from_fn_with_state(timeout, deadline::layer));
/// ```
pub async fn layer(State(timeout): State<Duration>, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();

    match tokio::time::timeout(timeout, next.run(req)).await {
        Ok(response) => response,
        Err(elapsed) => {
            tracing::warn!(path = %path, ?timeout, "Request deadline exceeded");
            AppError::internal_with("request timed out", elapsed).into_response()
        }
    }
}
