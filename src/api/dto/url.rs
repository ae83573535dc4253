//! DTOs for the `/short` and `/long` endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body shared by both endpoints.
#[derive(Debug, Deserialize, Validate)]
pub struct UrlRequest {
    /// A long URL for `/short`, an issued short URL for `/long`.
    #[validate(length(min = 1, message = "url can't be blank"))]
    pub url: String,
}

/// Response body shared by both endpoints.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UrlResponse {
    pub url: String,
}

impl UrlResponse {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
