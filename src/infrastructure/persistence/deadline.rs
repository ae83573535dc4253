//! Per-call deadline for PostgreSQL repositories.

use std::future::Future;
use std::time::Duration;

use crate::error::{AppError, map_sqlx_error};

/// Runs a database call under `timeout`, translating both the timeout and
/// any `sqlx::Error` into [`AppError`].
pub(crate) async fn bounded<T, F>(timeout: Duration, call: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result.map_err(map_sqlx_error),
        Err(elapsed) => Err(AppError::internal_with("storage call timed out", elapsed)),
    }
}
