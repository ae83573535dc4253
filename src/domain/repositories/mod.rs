//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! `crate::infrastructure::persistence` (PostgreSQL and in-memory). Each call is
//! atomic on its own, nothing spans calls. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - mapping persistence and lifecycle updates
//! - [`AccessLogRepository`] - append-only access logs and their aggregates
//! - [`StorageProbe`] - liveness check used by `/health`
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod access_log_repository;
pub mod storage_probe;
pub mod url_repository;

pub use access_log_repository::AccessLogRepository;
pub use storage_probe::StorageProbe;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use access_log_repository::MockAccessLogRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
