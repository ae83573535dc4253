#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Arc;

use simple_url_shortener::api::routes::routes;
use simple_url_shortener::application::services::ShortenerSettings;
use simple_url_shortener::domain::clock::{Clock, ManualClock};
use simple_url_shortener::infrastructure::persistence::{
    MemoryAccessLogRepository, MemoryUrlRepository,
};
use simple_url_shortener::state::AppState;

pub const HOST: &str = "example.com";
pub const SCHEME: &str = "http";

/// 2020-11-10 12:00:00 UTC, the instant every test clock starts at.
pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 11, 10, 12, 0, 0).unwrap()
}

pub fn settings(ttl: Duration) -> ShortenerSettings {
    ShortenerSettings::new(SCHEME, HOST, ttl).unwrap()
}

/// Service wired over the in-memory backend with a manual clock.
pub struct TestApp {
    pub server: TestServer,
    pub clock: Arc<ManualClock>,
    pub urls: Arc<MemoryUrlRepository>,
    pub access_logs: Arc<MemoryAccessLogRepository>,
}

pub fn create_test_state(
    ttl: Duration,
) -> (
    AppState,
    Arc<ManualClock>,
    Arc<MemoryUrlRepository>,
    Arc<MemoryAccessLogRepository>,
) {
    let clock = Arc::new(ManualClock::new(start()));
    let urls = Arc::new(MemoryUrlRepository::new());
    let access_logs = Arc::new(MemoryAccessLogRepository::new());

    let state = AppState::from_repositories(
        urls.clone(),
        access_logs.clone(),
        settings(ttl),
        clock.clone() as Arc<dyn Clock>,
    );

    (state, clock, urls, access_logs)
}

pub fn create_test_app(ttl: Duration) -> TestApp {
    let (state, clock, urls, access_logs) = create_test_state(ttl);
    let app: Router = routes().with_state(state);

    TestApp {
        server: TestServer::new(app).unwrap(),
        clock,
        urls,
        access_logs,
    }
}

/// Creates a short URL through the API and returns it.
pub async fn shorten(server: &TestServer, long_url: &str) -> String {
    let response = server
        .post("/short")
        .json(&serde_json::json!({ "url": long_url }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["url"]
        .as_str()
        .unwrap()
        .to_string()
}
