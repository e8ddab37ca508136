//! Route definitions for per-user bookmarks, registered under `/favorites`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Favorite routes, registered as `/favorites`.
///
/// ```text
/// GET    /              list_favorites
/// POST   /{article_id}  add_favorite
/// DELETE /{article_id}  remove_favorite
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(favorites::list_favorites))
        .route(
            "/{article_id}",
            post(favorites::add_favorite).delete(favorites::remove_favorite),
        )
}
