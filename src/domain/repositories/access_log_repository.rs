//! Repository trait for access logs and their statistics.

use crate::domain::entities::{AccessLog, Statistics};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for the two append-only access logs.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAccessLogRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryAccessLogRepository`] - in-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessLogRepository: Send + Sync {
    /// Appends an access event to `log`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors or timeout.
    async fn record(&self, log: AccessLog, at: DateTime<Utc>) -> Result<(), AppError>;

    /// Computes count and median timestamp of `log`.
    ///
    /// The median is the event at zero-indexed position `count / 2` in
    /// ascending timestamp order; an empty log yields `count = 0` and no
    /// median.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors or timeout.
    async fn statistics(&self, log: AccessLog) -> Result<Statistics, AppError>;
}
