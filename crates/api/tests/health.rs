//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use todo_store::Store;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = common::build_test_app(Store::seeded());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["categories"], 3);
    assert_eq!(json["todos"], 0);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404 with the path in the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404_with_path() {
    let app = common::build_test_app(Store::seeded());
    let response = get(app, "/this-route-does-not-exist?x=1").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Not Found - /this-route-does-not-exist?x=1");
}

#[tokio::test]
async fn unknown_nested_route_reports_full_path() {
    let app = common::build_test_app(Store::seeded());
    let response = get(app, "/api/todos/a/b/c").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Not Found - /api/todos/a/b/c");
}

#[tokio::test]
async fn unsupported_method_returns_404_with_path() {
    let app = common::build_test_app(Store::seeded());

    for (method, uri) in [
        (Method::PATCH, "/api/todos"),
        (Method::POST, "/api/categories/00000000-0000-4000-8000-000000000000/todos"),
        (Method::DELETE, "/health"),
    ] {
        let response = common::send(app.clone(), method.clone(), uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
        let json = body_json(response).await;
        assert_eq!(json["message"], format!("Not Found - {uri}"));
    }
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(Store::seeded());
    let response = get(app, "/health").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let app = common::build_test_app(Store::seeded());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/todos")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("POST"),
        "Allow-Methods should contain POST, got: {allow_methods}"
    );
}
