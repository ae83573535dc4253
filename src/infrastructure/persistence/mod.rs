//! Repository implementations.
//!
//! PostgreSQL repositories use SQLx prepared statements; every call is bounded
//! by a per-call timeout and errors are translated once via
//! [`crate::error::map_sqlx_error`]. In-memory repositories keep state behind a
//! mutex and suit tests and single-process deployments.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] / [`MemoryUrlRepository`] - URL mappings
//! - [`PgAccessLogRepository`] / [`MemoryAccessLogRepository`] - access logs and statistics
//! - [`pg_pool`] - pool construction with connect retries and migrations

pub mod memory_access_log_repository;
pub mod memory_url_repository;
pub mod pg_access_log_repository;
pub mod pg_pool;
pub mod pg_url_repository;

mod deadline;

pub use memory_access_log_repository::MemoryAccessLogRepository;
pub use memory_url_repository::MemoryUrlRepository;
pub use pg_access_log_repository::PgAccessLogRepository;
pub use pg_url_repository::PgUrlRepository;
