mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use shortly::web::handlers::{home_handler, shorten_form_handler};

fn web_app(state: shortly::AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/shorten", post(shorten_form_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_landing_page_renders_form() {
    let state = common::create_test_state();
    let server = TestServer::new(web_app(state)).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("<form action=\"/shorten\" method=\"post\">"));
    assert!(body.contains("name=\"url\""));
}

#[tokio::test]
async fn test_form_shorten_renders_result_page() {
    let state = common::create_test_state();
    let server = TestServer::new(web_app(state.clone())).unwrap();

    let response = server
        .post("/shorten")
        .form(&[("url", "https://example.com/page")])
        .await;

    response.assert_status_ok();

    // Shortening is idempotent, so this returns the code the form just minted.
    let link = state
        .link_service
        .shorten("https://example.com/page")
        .await
        .unwrap();

    let body = response.text();
    assert!(body.contains(&format!("http://s.test.com/{}/", link.code)));
    assert_eq!(state.link_service.link_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_form_shorten_malformed_url_renders_error_page() {
    let state = common::create_test_state();
    let server = TestServer::new(web_app(state.clone())).unwrap();

    let response = server
        .post("/shorten")
        .form(&[("url", "not a url")])
        .await;

    response.assert_status_bad_request();
    assert!(response.text().contains("The requested URL is malformed"));
    assert_eq!(state.link_service.link_count().await.unwrap(), 0);
}
