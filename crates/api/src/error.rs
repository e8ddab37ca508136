//! HTTP error surface.
//!
//! Handlers return [`AppError`]; every variant serializes to the same JSON
//! shape, `{ "error": <message>, "code": <stable code> }`, so clients can
//! branch on `code` without parsing prose. Anything unexpected is logged
//! with its full detail and reported to the client as a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use scribe_core::error::CoreError;

/// What a handler can fail with.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain error from `scribe_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Storage error, classified at response time.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request was syntactically fine but semantically unusable.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Failure in the server itself (hashing, token signing, ...).
    #[error("internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Stable machine-readable error codes.
mod codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION: &str = "VALIDATION_ERROR";
    pub const CONFLICT: &str = "CONFLICT";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const FORBIDDEN: &str = "FORBIDDEN";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const INTERNAL: &str = "INTERNAL_ERROR";
}

/// Client-facing text for every sanitized 500.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => core_response(core),
            AppError::Database(db) => database_response(db),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, codes::BAD_REQUEST, msg.clone())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "request failed internally");
                internal_response()
            }
        };

        let body = json!({ "error": message, "code": code });
        (status, axum::Json(body)).into_response()
    }
}

fn core_response(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            codes::NOT_FOUND,
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, codes::VALIDATION, msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, codes::CONFLICT, msg.clone()),
        CoreError::Unauthorized(msg) => {
            (StatusCode::UNAUTHORIZED, codes::UNAUTHORIZED, msg.clone())
        }
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, codes::FORBIDDEN, msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "domain-level internal error");
            internal_response()
        }
    }
}

/// Map a storage error onto the HTTP surface.
///
/// `RowNotFound` is a 404. A unique violation (Postgres 23505) on one of our
/// `uq_`-named constraints is a 409, since every such constraint guards a
/// client-visible uniqueness rule (usernames, emails, favorite pairs). All
/// other storage failures are logged and reported as a generic 500.
fn database_response(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if matches!(err, sqlx::Error::RowNotFound) {
        return (
            StatusCode::NOT_FOUND,
            codes::NOT_FOUND,
            "Resource not found".to_string(),
        );
    }

    if let sqlx::Error::Database(db_err) = err {
        if db_err.code().as_deref() == Some("23505") {
            if let Some(constraint) = db_err.constraint().filter(|c| c.starts_with("uq_")) {
                return (
                    StatusCode::CONFLICT,
                    codes::CONFLICT,
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
        }
    }

    tracing::error!(error = %err, "storage error");
    internal_response()
}

fn internal_response() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        codes::INTERNAL,
        INTERNAL_MESSAGE.to_string(),
    )
}
