mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use std::sync::Arc;

use simple_url_shortener::domain::clock::{Clock, ManualClock};
use simple_url_shortener::domain::entities::{NewUrlMapping, UrlMapping};
use simple_url_shortener::domain::repositories::{StorageProbe, UrlRepository};
use simple_url_shortener::error::AppError;
use simple_url_shortener::infrastructure::persistence::MemoryAccessLogRepository;
use simple_url_shortener::routes::api_router;
use simple_url_shortener::state::AppState;

/// URL store whose every call hangs well past the request deadline.
struct HangingUrlRepository;

impl HangingUrlRepository {
    async fn hang() {
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
    }
}

#[async_trait]
impl UrlRepository for HangingUrlRepository {
    async fn save(&self, _mapping: NewUrlMapping) -> Result<(), AppError> {
        Self::hang().await;
        Ok(())
    }

    async fn find_active(&self, _short_key: &str) -> Result<Option<UrlMapping>, AppError> {
        Self::hang().await;
        Ok(None)
    }

    async fn mark_expired(&self, _short_key: &str) -> Result<(), AppError> {
        Self::hang().await;
        Ok(())
    }

    async fn touch(&self, _short_key: &str, _at: DateTime<Utc>) -> Result<(), AppError> {
        Self::hang().await;
        Ok(())
    }
}

#[async_trait]
impl StorageProbe for HangingUrlRepository {
    fn backend(&self) -> &'static str {
        "hanging"
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

fn create_hanging_server() -> TestServer {
    let state = AppState::from_repositories(
        Arc::new(HangingUrlRepository),
        Arc::new(MemoryAccessLogRepository::new()),
        common::settings(Duration::hours(24)),
        Arc::new(ManualClock::new(common::start())) as Arc<dyn Clock>,
    );

    let app = api_router(state, std::time::Duration::from_millis(50));
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_request_deadline_on_short_is_internal_error() {
    let server = create_hanging_server();

    let response = server
        .post("/short")
        .json(&json!({ "url": "https://example.org/a" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "internal server error" }));
}

#[tokio::test]
async fn test_request_deadline_on_long_is_internal_error() {
    let server = create_hanging_server();

    let response = server
        .post("/long")
        .json(&json!({ "url": "http://example.com/0123456789ab" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "internal server error" }));
}

#[tokio::test]
async fn test_fast_requests_pass_the_deadline() {
    let (state, ..) = common::create_test_state(Duration::hours(24));
    let server = TestServer::new(api_router(state, std::time::Duration::from_secs(5))).unwrap();

    let response = server
        .post("/short")
        .json(&json!({ "url": "https://example.org/a" }))
        .await;

    response.assert_status(StatusCode::CREATED);
}
