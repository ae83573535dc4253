//! HTTP middleware for request processing.

pub mod deadline;
pub mod tracing;
