//! Infrastructure layer for external integrations.
//!
//! This layer implements the storage contracts defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and in-memory repository implementations

pub mod persistence;
