pub mod articles;
pub mod auth;
pub mod favorites;
pub mod health;
pub mod paths;
pub mod tags;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
/// /auth/me                                         current user (requires auth)
///
/// /articles                                        list, create
/// /articles/resolve-titles                         batch wiki-link resolution (POST)
/// /articles/{id}                                   get, update, delete
/// /articles/{id}/rendered                          rendered HTML (GET)
/// /articles/{id}/versions                          version history (GET)
/// /articles/{id}/versions/{version_id}             one snapshot (GET)
/// /articles/{id}/versions/{version_id}/restore     restore snapshot (POST)
/// /articles/{id}/diff                              diff two versions (GET, ?v1&v2)
///
/// /favorites                                       list favorite article ids (GET)
/// /favorites/{article_id}                          add (POST), remove (DELETE)
///
/// /tags                                            tag usage counts (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login, refresh, logout, me).
        .nest("/auth", auth::router())
        // Articles, versions, rendering, and wiki-link resolution.
        .nest("/articles", articles::router())
        // Per-user bookmarks.
        .nest("/favorites", favorites::router())
        // Tag aggregation.
        .nest("/tags", tags::router())
}
