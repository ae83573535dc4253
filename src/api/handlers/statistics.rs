//! Handler for usage statistics endpoint.

use axum::{Json, extract::State};

use crate::api::dto::statistics::StatisticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns event counts and median access times for both operations.
///
/// # Endpoint
///
/// `GET /statistics`
///
/// # Response
///
/// ```json
/// {
///   "counts":  { "long": 3, "short": 2 },
///   "timings": { "long": "2020-11-10 12:00:05", "short": "2020-11-10 12:00:00" }
/// }
/// ```
///
/// # Errors
///
/// Returns 500 Internal Server Error if either aggregate cannot be fetched.
pub async fn statistics_handler(
    State(state): State<AppState>,
) -> Result<Json<StatisticsResponse>, AppError> {
    let stats = state.shortener.statistics().await?;
    Ok(Json(stats.into()))
}
