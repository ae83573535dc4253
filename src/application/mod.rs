//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain rules by coordinating validation, key
//! derivation, the expiration policy and repository calls. Services consume
//! repository traits and expose a clean API to HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - create, resolve and statistics

pub mod services;
