//! Application error taxonomy.
//!
//! Every failure that crosses a layer boundary is one of three kinds:
//!
//! - [`AppError::NotFound`] - mapping absent or already expired
//! - [`AppError::BadParams`] - malformed URL, foreign scheme/host, key collision
//! - [`AppError::Internal`] - storage failure or timeout
//!
//! Storage errors are translated exactly once, at the repository boundary, via
//! [`map_sqlx_error`]. The HTTP status mapping lives in [`crate::api::response`].

use std::fmt;

/// Error kind used by the façade to pick an HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    BadParams,
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::BadParams => "bad_params",
            ErrorKind::Internal => "internal",
        };
        f.write_str(s)
    }
}

type Source = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    BadParams {
        message: String,
        #[source]
        source: Option<Source>,
    },

    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Source>,
    },
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn bad_params(message: impl Into<String>) -> Self {
        Self::BadParams {
            message: message.into(),
            source: None,
        }
    }

    pub fn bad_params_with(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::BadParams {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    pub fn internal_with(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound { .. } => ErrorKind::NotFound,
            AppError::BadParams { .. } => ErrorKind::BadParams,
            AppError::Internal { .. } => ErrorKind::Internal,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_params_with("invalid request body", e)
    }
}

/// Translates a database error into the application taxonomy.
///
/// - `RowNotFound` becomes [`AppError::NotFound`]
/// - unique and foreign-key violations become [`AppError::BadParams`]; for a
///   freshly derived key this means a collision and the client should resubmit
/// - anything else becomes [`AppError::Internal`]
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if matches!(e, sqlx::Error::RowNotFound) {
        return AppError::not_found("not found");
    }

    if let Some(db) = e.as_database_error()
        && (db.is_unique_violation() || db.is_foreign_key_violation())
    {
        return AppError::bad_params_with("short url already taken, please retry", e);
    }

    AppError::internal_with("database error", e)
}
