//! JSON façade over [`crate::application::services::UrlShortener`].
//!
//! Translates HTTP requests into service calls and service errors into
//! status codes.
//!
//! # Modules
//!
//! - [`dto`] - request/response bodies
//! - [`handlers`] - one handler per endpoint
//! - [`middleware`] - request tracing
//! - [`response`] - error kind to status table
//! - [`routes`] - route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
