//! Handlers for article version history: list, fetch, restore, diff.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;

use scribe_core::diff::{compute_line_diff, DiffLineType};
use scribe_core::error::CoreError;
use scribe_core::types::DbId;
use scribe_db::models::version::{ArticleVersion, DiffLineDto, DiffRequest, DiffResponse};
use scribe_db::repositories::{ArticleRepo, VersionRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::articles::{ensure_owned, ensure_visible_article};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Fetch a version scoped to its article, or 404.
async fn ensure_version(
    pool: &sqlx::PgPool,
    article_id: DbId,
    version_id: DbId,
) -> AppResult<ArticleVersion> {
    VersionRepo::find_by_article_and_id(pool, article_id, version_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Version",
                id: version_id,
            })
        })
}

/* --------------------------------------------------------------------------
Handlers
-------------------------------------------------------------------------- */

/// GET /articles/{id}/versions
///
/// List an article's version history, newest first.
pub async fn list_versions(
    viewer: MaybeAuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let article = ensure_visible_article(&state.pool, id, viewer.user_id()).await?;
    let versions = VersionRepo::list_by_article(&state.pool, article.id).await?;
    Ok(Json(DataResponse { data: versions }))
}

/// GET /articles/{id}/versions/{version_id}
///
/// Fetch a single version snapshot.
pub async fn get_version(
    viewer: MaybeAuthUser,
    State(state): State<AppState>,
    Path((id, version_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let article = ensure_visible_article(&state.pool, id, viewer.user_id()).await?;
    let version = ensure_version(&state.pool, article.id, version_id).await?;
    Ok(Json(DataResponse { data: version }))
}

/// POST /articles/{id}/versions/{version_id}/restore
///
/// Copy a snapshot's content back onto the article, creating a new version.
/// Requires ownership.
pub async fn restore_version(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((id, version_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let article = ensure_visible_article(&state.pool, id, Some(auth.user_id)).await?;
    ensure_owned(&article, auth.user_id)?;

    let version = ensure_version(&state.pool, article.id, version_id).await?;
    let restored =
        ArticleRepo::restore_version(&state.pool, article.id, &version, Some(auth.user_id))
            .await?;

    tracing::info!(
        user_id = auth.user_id,
        article_id = article.id,
        restored_from = version_id,
        "Article restored to earlier version"
    );

    Ok(Json(DataResponse { data: restored }))
}

/// GET /articles/{id}/diff?v1=X&v2=Y
///
/// Compute a line-level diff between two versions of an article.
pub async fn diff_versions(
    viewer: MaybeAuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<DiffRequest>,
) -> AppResult<impl IntoResponse> {
    let article = ensure_visible_article(&state.pool, id, viewer.user_id()).await?;

    let v1 = ensure_version(&state.pool, article.id, params.v1).await?;
    let v2 = ensure_version(&state.pool, article.id, params.v2).await?;

    let diff = compute_line_diff(&v1.content, &v2.content);
    let lines: Vec<DiffLineDto> = diff
        .into_iter()
        .map(|d| DiffLineDto {
            line_type: match d.line_type {
                DiffLineType::Added => "added".to_string(),
                DiffLineType::Removed => "removed".to_string(),
                DiffLineType::Unchanged => "unchanged".to_string(),
            },
            content: d.content,
        })
        .collect();

    let response = DiffResponse {
        article_id: article.id,
        v1: params.v1,
        v2: params.v2,
        lines,
    };

    Ok(Json(DataResponse { data: response }))
}
