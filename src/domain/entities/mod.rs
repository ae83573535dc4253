//! Core domain entities.
//!
//! - [`UrlMapping`] - a persisted short key → long URL record
//! - [`NewUrlMapping`] - input for creating a mapping
//! - [`AccessLog`] - which of the two append-only access logs an event goes to
//! - [`Statistics`] / [`OverallStatistics`] - aggregates derived from access logs

pub mod access_log;
pub mod statistics;
pub mod url_mapping;

pub use access_log::AccessLog;
pub use statistics::{OverallStatistics, Statistics};
pub use url_mapping::{NewUrlMapping, UrlMapping};
