//! Error-to-HTTP translation.
//!
//! Every error body is a flat `{"error": "<message>"}` object. Internal errors
//! never leak their details to clients; they are logged instead.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::{AppError, ErrorKind};

/// Body of every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Status code for each error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::BadParams => StatusCode::BAD_REQUEST,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let message = match kind {
            ErrorKind::Internal => {
                tracing::error!(error = ?self, "Request failed");
                "internal server error".to_string()
            }
            _ => self.to_string(),
        };

        (status_for(kind), Json(ErrorBody { error: message })).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_params_with("invalid request body", rejection)
    }
}
