//! Handler for URL shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::url::{UrlRequest, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Issues a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /short`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.org/a" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "url": "http://example.com/3f2a9c01b7de" }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: malformed body, missing scheme or host, or a key
///   collision (resubmit)
/// - **500 Internal Server Error**: storage failure
pub async fn short_handler(
    State(state): State<AppState>,
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UrlResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let shortened = state.shortener.create_short_url(&payload.url).await?;

    Ok((StatusCode::CREATED, Json(UrlResponse::new(shortened.short_url))))
}
