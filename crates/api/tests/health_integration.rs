//! Integration tests for probes, metrics and global response headers.

mod common;

use axum::http::{header, Method, Request, StatusCode};
use axum::body::Body;
use common::*;
use waste_manager_api::middleware::init_metrics;

#[tokio::test]
async fn test_health_endpoints() {
    let test = setup().await;

    let response = test.send(request(Method::GET, "/api/health", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["connected"], true);

    let response = test
        .send(request(Method::GET, "/api/health/live", None))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "alive");

    let response = test
        .send(request(Method::GET, "/api/health/ready", None))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_security_headers_present() {
    let test = setup().await;

    let response = test.send(request(Method::GET, "/api/health/live", None)).await;
    let headers = response.headers();
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
    // Disabled in the test configuration.
    assert!(headers.get(header::STRICT_TRANSPORT_SECURITY).is_none());
}

#[tokio::test]
async fn test_request_id_echoed_or_generated() {
    let test = setup().await;

    let response = test
        .send(
            Request::builder()
                .uri("/api/health/live")
                .header("X-Request-ID", "collector-run-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(response.headers()["X-Request-ID"], "collector-run-42");

    let response = test.send(request(Method::GET, "/api/health/live", None)).await;
    let generated = response.headers()["X-Request-ID"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());

    // Unsafe ids are replaced.
    let response = test
        .send(
            Request::builder()
                .uri("/api/health/live")
                .header("X-Request-ID", "bad id; drop")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_ne!(response.headers()["X-Request-ID"], "bad id; drop");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let test = setup().await;

    let response = test
        .send(request(Method::GET, "/api/does-not-exist", Some(&test.admin_token)))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_metrics_endpoint_renders_prometheus_text() {
    let test = setup().await;
    init_metrics().expect("Failed to install metrics recorder");

    test.send(request(Method::GET, "/api/health/live", None)).await;

    let response = test.send(request(Method::GET, "/metrics", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8_lossy(&body);
    assert!(text.contains("http_requests_total"));
}
