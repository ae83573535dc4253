//! API route table.

use crate::api::handlers::{health_handler, long_handler, short_handler, statistics_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All service endpoints.
///
/// # Endpoints
///
/// - `POST /short`      - Issue a short URL
/// - `POST /long`       - Resolve a short URL
/// - `GET  /statistics` - Counts and median access times
/// - `GET  /health`     - Storage liveness
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/short", post(short_handler))
        .route("/long", post(long_handler))
        .route("/statistics", get(statistics_handler))
        .route("/health", get(health_handler))
}
