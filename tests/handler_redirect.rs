mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::{Router, routing::get};
use axum_test::TestServer;
use shortly::web::handlers::redirect_handler;
use tower::{Layer, ServiceExt};
use tower_http::normalize_path::NormalizePathLayer;

fn redirect_app(state: shortly::AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_redirect_to_target() {
    let state = common::create_test_state();
    let link = state
        .link_service
        .shorten("https://example.com/page")
        .await
        .unwrap();

    let server = TestServer::new(redirect_app(state)).unwrap();

    let response = server.get(&format!("/{}", link.code)).await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);

    let location = response.headers().get(header::LOCATION).cloned().unwrap();
    assert_eq!(location.to_str().unwrap(), "https://example.com/page");
}

#[tokio::test]
async fn test_redirect_unknown_code_renders_not_found_page() {
    let state = common::create_test_state();
    let server = TestServer::new(redirect_app(state)).unwrap();

    let response = server.get("/zzzzzzzz").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(
        response
            .text()
            .contains("The requested URL is not registered with this service")
    );
}

#[tokio::test]
async fn test_redirect_with_trailing_slash() {
    let state = common::create_test_state();
    let link = state
        .link_service
        .shorten("https://example.com/page")
        .await
        .unwrap();

    // The public router trims trailing slashes, so `/{code}/` and
    // `/{code}` hit the same route.
    let app = NormalizePathLayer::trim_trailing_slash().layer(redirect_app(state));

    let request = Request::builder()
        .uri(format!("/{}/", link.code))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

    let location = response.headers().get(header::LOCATION).unwrap();
    assert_eq!(location.to_str().unwrap(), "https://example.com/page");
}
