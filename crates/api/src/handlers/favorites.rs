//! Handlers for per-user article bookmarks.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use scribe_core::error::CoreError;
use scribe_core::types::DbId;
use scribe_db::repositories::FavoriteRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::articles::ensure_visible_article;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /favorites
///
/// List the ids of all articles the caller has favorited, newest first.
pub async fn list_favorites(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let ids = FavoriteRepo::list_article_ids(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: ids }))
}

/// POST /favorites/{article_id}
///
/// Favorite an article. Idempotent: favoriting twice is a no-op.
pub async fn add_favorite(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(article_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // The article must exist and be visible to the caller.
    ensure_visible_article(&state.pool, article_id, Some(auth.user_id)).await?;

    FavoriteRepo::add(&state.pool, auth.user_id, article_id).await?;

    tracing::info!(user_id = auth.user_id, article_id, "Article favorited");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /favorites/{article_id}
///
/// Remove a favorite. 404 if the caller had not favorited the article.
pub async fn remove_favorite(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(article_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = FavoriteRepo::remove(&state.pool, auth.user_id, article_id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Favorite",
            id: article_id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
