mod common;

use axum::http::StatusCode;
use chrono::Duration;
use serde_json::json;

#[tokio::test]
async fn test_long_resolves_to_original_url() {
    let app = common::create_test_app(Duration::hours(24));
    let short_url = common::shorten(&app.server, "https://example.org/a").await;

    app.clock.advance(Duration::minutes(5));
    let response = app.server.post("/long").json(&json!({ "url": short_url })).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "url": "https://example.org/a" }));

    let key = short_url.rsplit('/').next().unwrap();
    let mapping = app.urls.get(key).unwrap().unwrap();
    assert_eq!(mapping.last_access, Some(common::start() + Duration::minutes(5)));
}

#[tokio::test]
async fn test_long_explicit_default_port_matches() {
    let app = common::create_test_app(Duration::hours(24));
    let short_url = common::shorten(&app.server, "https://example.org/a").await;
    let with_port = short_url.replace("example.com", "example.com:80");

    let response = app.server.post("/long").json(&json!({ "url": with_port })).await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_long_foreign_host() {
    let app = common::create_test_app(Duration::hours(24));
    let short_url = common::shorten(&app.server, "https://example.org/a").await;
    let foreign = short_url.replace("example.com", "evil.example");

    let response = app.server.post("/long").json(&json!({ "url": foreign })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "invalid scheme or host name" }));
}

#[tokio::test]
async fn test_long_foreign_scheme() {
    let app = common::create_test_app(Duration::hours(24));
    let short_url = common::shorten(&app.server, "https://example.org/a").await;
    let foreign = short_url.replace("http://", "https://");

    let response = app.server.post("/long").json(&json!({ "url": foreign })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_long_unknown_key() {
    let app = common::create_test_app(Duration::hours(24));

    let response = app
        .server
        .post("/long")
        .json(&json!({ "url": "http://example.com/000000000000" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": "url not found" }));
}

#[tokio::test]
async fn test_long_missing_host() {
    let app = common::create_test_app(Duration::hours(24));

    let response = app
        .server
        .post("/long")
        .json(&json!({ "url": "mailto:someone@example.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "host can't be blank" }));
}

#[tokio::test]
async fn test_long_expiry_is_terminal() {
    let app = common::create_test_app(Duration::hours(1));
    let short_url = common::shorten(&app.server, "https://example.org/a").await;

    app.clock.advance(Duration::hours(1) + Duration::seconds(1));
    let response = app.server.post("/long").json(&json!({ "url": short_url })).await;
    response.assert_status(StatusCode::NOT_FOUND);

    let key = short_url.rsplit('/').next().unwrap();
    assert!(app.urls.get(key).unwrap().unwrap().is_expired);

    app.clock.set(common::start());
    let response = app.server.post("/long").json(&json!({ "url": short_url })).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_long_boundary_is_not_expired() {
    let app = common::create_test_app(Duration::hours(1));
    let short_url = common::shorten(&app.server, "https://example.org/a").await;

    app.clock.advance(Duration::hours(1));
    let response = app.server.post("/long").json(&json!({ "url": short_url })).await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_long_access_extends_lifetime() {
    let app = common::create_test_app(Duration::hours(1));
    let short_url = common::shorten(&app.server, "https://example.org/a").await;

    for _ in 0..3 {
        app.clock.advance(Duration::minutes(50));
        let response = app.server.post("/long").json(&json!({ "url": short_url })).await;
        response.assert_status_ok();
    }

    app.clock.advance(Duration::minutes(61));
    let response = app.server.post("/long").json(&json!({ "url": short_url })).await;
    response.assert_status(StatusCode::NOT_FOUND);
}
