//! Storage liveness probe.

use crate::error::AppError;
use async_trait::async_trait;

/// Cheap round-trip to the storage backend, used by the health endpoint.
#[async_trait]
pub trait StorageProbe: Send + Sync {
    /// Short backend name reported in health output.
    fn backend(&self) -> &'static str;

    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backend cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
