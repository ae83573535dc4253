//! Repository trait for URL mapping data access.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for URL mappings.
///
/// Lookups only ever see active mappings; expired ones are tombstoned in place
/// and stay invisible. The expiration decision itself belongs to the caller
/// (see [`crate::domain::expiration::ExpirationPolicy`]).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadParams`] if the short key is already taken.
    /// Returns [`AppError::Internal`] on storage errors or timeout.
    async fn save(&self, mapping: NewUrlMapping) -> Result<(), AppError>;

    /// Finds a mapping that has not been tombstoned.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if an active mapping exists
    /// - `Ok(None)` if the key is unknown or already expired
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors or timeout.
    async fn find_active(&self, short_key: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Tombstones a mapping. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors or timeout.
    async fn mark_expired(&self, short_key: &str) -> Result<(), AppError>;

    /// Records a successful resolution at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors or timeout.
    async fn touch(&self, short_key: &str, at: DateTime<Utc>) -> Result<(), AppError>;
}
