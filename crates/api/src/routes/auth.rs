//! Route definitions for authentication, registered under `/auth`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Authentication routes, registered as `/auth`.
///
/// ```text
/// POST /register  register
/// POST /login     login
/// POST /refresh   refresh
/// POST /logout    logout (requires auth)
/// GET  /me        current user (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}
