//! Domain layer containing business entities and rules.
//!
//! This module is independent of infrastructure and presentation concerns.
//!
//! # Architecture
//!
//! - [`entities`] - URL mappings, access logs and statistics
//! - [`expiration`] - TTL-based staleness rule
//! - [`clock`] - time source injected into services
//! - [`repositories`] - storage contracts implemented by the infrastructure layer
//!
//! # Mapping Lifecycle
//!
//! 1. A mapping is created `Active` with `created_at = now`
//! 2. Every successful resolve refreshes `last_access`
//! 3. A resolve that finds the mapping stale tombstones it (`is_expired = true`)
//! 4. Tombstoned mappings are never served or reactivated again

pub mod clock;
pub mod entities;
pub mod expiration;
pub mod repositories;
