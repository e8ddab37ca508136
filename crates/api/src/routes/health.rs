//! Root-level liveness endpoint, deliberately outside `/api/v1` so load
//! balancers can check it without knowing the API version.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthStatus {
    /// `"ok"` when the database answers, `"degraded"` otherwise.
    pub status: &'static str,
    /// `"reachable"` or `"unreachable"`.
    pub database: &'static str,
    pub version: &'static str,
}

/// GET /health
///
/// Always returns 200; a database outage is reported in the body so the
/// process itself is not marked dead while storage recovers.
async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let db_up = scribe_db::health_check(&state.pool).await.is_ok();

    Json(HealthStatus {
        status: if db_up { "ok" } else { "degraded" },
        database: if db_up { "reachable" } else { "unreachable" },
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
