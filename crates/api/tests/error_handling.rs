//! Error-to-response mapping, exercised by calling `IntoResponse` directly
//! on `AppError` values. No router or database involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

use scribe_api::error::AppError;
use scribe_core::error::CoreError;

async fn response_parts(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn every_variant_maps_to_its_status_and_code() {
    let cases: Vec<(AppError, StatusCode, &str)> = vec![
        (
            AppError::Core(CoreError::Validation("title is required".into())),
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
        ),
        (
            AppError::Core(CoreError::Conflict("username already taken".into())),
            StatusCode::CONFLICT,
            "CONFLICT",
        ),
        (
            AppError::Core(CoreError::Unauthorized("no token provided".into())),
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
        ),
        (
            AppError::Core(CoreError::Forbidden("not the article owner".into())),
            StatusCode::FORBIDDEN,
            "FORBIDDEN",
        ),
        (
            AppError::BadRequest("unusable request".into()),
            StatusCode::BAD_REQUEST,
            "BAD_REQUEST",
        ),
        (
            AppError::InternalError("token signing failed".into()),
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
        ),
    ];

    for (err, want_status, want_code) in cases {
        let description = format!("{err:?}");
        let (status, json) = response_parts(err).await;
        assert_eq!(status, want_status, "status for {description}");
        assert_eq!(json["code"], want_code, "code for {description}");
    }
}

#[tokio::test]
async fn client_facing_variants_keep_their_message() {
    let (_, json) =
        response_parts(AppError::Core(CoreError::Validation("title is required".into()))).await;
    assert_eq!(json["error"], "title is required");

    let (_, json) = response_parts(AppError::BadRequest("unusable request".into())).await;
    assert_eq!(json["error"], "unusable request");
}

#[tokio::test]
async fn not_found_names_the_entity_and_id() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Article",
        id: 42,
    });

    let (status, json) = response_parts(err).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Article with id 42 not found");
}

#[tokio::test]
async fn internal_errors_hide_their_detail() {
    // Both the handler-level and the domain-level internal variants must
    // come out as the same opaque 500.
    let variants = [
        AppError::InternalError("connection string with password".into()),
        AppError::Core(CoreError::Internal("connection string with password".into())),
    ];

    for err in variants {
        let (status, json) = response_parts(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"], "An internal error occurred");
        assert!(
            !json.to_string().contains("password"),
            "500 body must not carry the original detail"
        );
    }
}

#[tokio::test]
async fn missing_row_from_storage_is_a_404() {
    let (status, json) = response_parts(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Resource not found");
}

#[tokio::test]
async fn other_storage_failures_are_opaque_500s() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = response_parts(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn body_shape_is_always_error_plus_code() {
    let (_, json) = response_parts(AppError::BadRequest("x".into())).await;

    let object = json.as_object().expect("body is a JSON object");
    assert_eq!(object.len(), 2);
    assert!(object.contains_key("error"));
    assert!(object.contains_key("code"));
}
