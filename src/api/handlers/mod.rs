//! HTTP request handlers for API endpoints.
//!
//! One module per endpoint.

pub mod health;
pub mod long;
pub mod short;
pub mod statistics;

pub use health::health_handler;
pub use long::long_handler;
pub use short::short_handler;
pub use statistics::statistics_handler;
