//! Leaf helpers shared across the application:
//!
//! - [`url_validator`] - URL parsing and scheme/host checks
//! - [`key_deriver`] - salted short key derivation
//! - [`duration_parser`] - human-friendly durations for configuration

pub mod duration_parser;
pub mod key_deriver;
pub mod url_validator;
