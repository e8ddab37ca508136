//! Request-level tests for wiki-link resolution and input validation.
//!
//! Every request here is rejected (or satisfied) before any storage access,
//! so the tests run against the full router and middleware stack without a
//! live database.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use scribe_api::routes::paths;

/// Send a JSON request through the router and return (status, parsed body).
async fn send_json(
    method: Method,
    path: &str,
    auth: Option<String>,
    body: Value,
) -> (StatusCode, Value) {
    let app = common::build_test_app();

    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    let request = builder
        .body(Body::from(body.to_string()))
        .expect("request is well-formed");

    let response = app.oneshot(request).await.expect("router never errors");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is JSON")
    };
    (status, json)
}

// ---------------------------------------------------------------------------
// Resolve batch validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn resolve_batch_of_fifty_one_rejected() {
    let titles: Vec<String> = (0..51).map(|i| format!("Title {i}")).collect();

    let (status, body) = send_json(
        Method::POST,
        paths::ARTICLES_RESOLVE_TITLES,
        None,
        json!({ "titles": titles }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn resolve_empty_batch_returns_empty_map() {
    let (status, body) = send_json(
        Method::POST,
        paths::ARTICLES_RESOLVE_TITLES,
        None,
        json!({ "titles": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({}));
}

#[tokio::test]
async fn resolve_blank_title_rejected() {
    let (status, body) = send_json(
        Method::POST,
        paths::ARTICLES_RESOLVE_TITLES,
        None,
        json!({ "titles": ["Valid Title", "   "] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn resolve_with_invalid_token_rejected() {
    // Optional auth: no header is fine, but a bad token is still an error.
    let (status, body) = send_json(
        Method::POST,
        paths::ARTICLES_RESOLVE_TITLES,
        Some("Bearer expired-or-forged".to_string()),
        json!({ "titles": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

// ---------------------------------------------------------------------------
// Authentication gates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_article_without_token_rejected() {
    let (status, body) = send_json(
        Method::POST,
        paths::ARTICLES,
        None,
        json!({ "title": "Hello", "content": "World" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn create_article_with_garbage_token_rejected() {
    let (status, body) = send_json(
        Method::POST,
        paths::ARTICLES,
        Some("Bearer not-a-jwt".to_string()),
        json!({ "title": "Hello", "content": "World" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn malformed_authorization_header_rejected() {
    let (status, body) = send_json(
        Method::POST,
        paths::ARTICLES,
        Some("Basic dXNlcjpwYXNz".to_string()),
        json!({ "title": "Hello", "content": "World" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

// ---------------------------------------------------------------------------
// Article input validation (authenticated, rejected before storage)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_article_with_empty_title_rejected() {
    let (status, body) = send_json(
        Method::POST,
        paths::ARTICLES,
        Some(common::bearer(1)),
        json!({ "title": "   ", "content": "Body" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn create_article_with_too_many_tags_rejected() {
    let tags: Vec<String> = (0..21).map(|i| format!("tag-{i}")).collect();

    let (status, body) = send_json(
        Method::POST,
        paths::ARTICLES,
        Some(common::bearer(1)),
        json!({ "title": "Tagged", "content": "Body", "tags": tags }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn create_article_with_oversized_content_rejected() {
    let content = "x".repeat(100_001);

    let (status, body) = send_json(
        Method::POST,
        paths::ARTICLES,
        Some(common::bearer(1)),
        json!({ "title": "Big", "content": content }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}
