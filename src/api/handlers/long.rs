//! Handler for short URL resolution endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::url::{UrlRequest, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a previously issued short URL to its long URL.
///
/// Each successful resolve refreshes the mapping's last access and so
/// extends its lifetime.
///
/// # Endpoint
///
/// `POST /long`
///
/// # Request Body
///
/// ```json
/// { "url": "http://example.com/3f2a9c01b7de" }
/// ```
///
/// # Response
///
/// ```json
/// { "url": "https://example.org/a" }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: malformed body or URL, or a scheme/host this
///   service does not issue
/// - **404 Not Found**: unknown key or expired mapping
/// - **500 Internal Server Error**: storage failure
pub async fn long_handler(
    State(state): State<AppState>,
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> Result<Json<UrlResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let long_url = state.shortener.get_long_url(&payload.url).await?;

    Ok(Json(UrlResponse::new(long_url)))
}
