mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use shortly::api::handlers::shorten_handler;

fn shorten_app(state: shortly::AppState) -> Router {
    Router::new()
        .route("/rest/shorten", post(shorten_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_shorten_success() {
    let state = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/rest/shorten")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let code = body["code"].as_str().unwrap();

    assert_eq!(code.len(), 8);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(body["target_url"], "https://example.com/page");
    assert_eq!(
        body["short_url"].as_str().unwrap(),
        format!("http://s.test.com/{code}/")
    );
}

#[tokio::test]
async fn test_shorten_is_idempotent() {
    let state = common::create_test_state();
    let server = TestServer::new(shorten_app(state.clone())).unwrap();

    let first = server
        .post("/rest/shorten")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;
    let second = server
        .post("/rest/shorten")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;

    first.assert_status_ok();
    second.assert_status_ok();

    let code1 = first.json::<serde_json::Value>()["code"]
        .as_str()
        .unwrap()
        .to_string();
    let code2 = second.json::<serde_json::Value>()["code"]
        .as_str()
        .unwrap()
        .to_string();

    assert_eq!(code1, code2);
    assert_eq!(state.link_service.link_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_distinct_urls_get_distinct_codes() {
    let state = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let first = server
        .post("/rest/shorten")
        .json(&json!({ "url": "https://example.com/one" }))
        .await;
    let second = server
        .post("/rest/shorten")
        .json(&json!({ "url": "https://example.com/two" }))
        .await;

    let code1 = first.json::<serde_json::Value>()["code"]
        .as_str()
        .unwrap()
        .to_string();
    let code2 = second.json::<serde_json::Value>()["code"]
        .as_str()
        .unwrap()
        .to_string();

    assert_ne!(code1, code2);
}

#[tokio::test]
async fn test_shorten_invalid_url_leaves_table_unchanged() {
    let state = common::create_test_state();
    let server = TestServer::new(shorten_app(state.clone())).unwrap();

    let response = server
        .post("/rest/shorten")
        .json(&json!({ "url": "not-a-valid-url" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(state.link_service.link_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_rejects_empty_url() {
    let state = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/rest/shorten")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_rejects_non_http_scheme() {
    let state = common::create_test_state();
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/rest/shorten")
        .json(&json!({ "url": "ftp://example.com/file.txt" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_includes_configured_port_in_short_url() {
    let state = common::create_test_state_with_base("localhost", Some(8080));
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/rest/shorten")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let code = body["code"].as_str().unwrap();
    assert_eq!(
        body["short_url"].as_str().unwrap(),
        format!("http://localhost:8080/{code}/")
    );
}
