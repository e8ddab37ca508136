//! Handlers for the `/articles` resource.
//!
//! Covers article CRUD, the server-side render endpoint, and batched
//! wiki-link title resolution.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use scribe_core::article::{normalize_title, validate_content, validate_tags, validate_title};
use scribe_core::error::CoreError;
use scribe_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use scribe_core::render::{render_html, ResolvedLinks};
use scribe_core::types::DbId;
use scribe_core::wikilink::{extract_titles, validate_resolve_batch};
use scribe_db::models::article::{Article, CreateArticle, ListArticlesParams, UpdateArticle};
use scribe_db::repositories::ArticleRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
Request / response types
-------------------------------------------------------------------------- */

/// Request body for `POST /articles/resolve-titles`.
#[derive(Debug, Deserialize)]
pub struct ResolveTitlesRequest {
    pub titles: Vec<String>,
}

/// Response for `GET /articles/{id}/rendered`.
#[derive(Debug, Serialize)]
pub struct RenderedArticle {
    pub id: DbId,
    pub title: String,
    pub html: String,
}

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Fetch an article the viewer may see, or 404.
///
/// Invisible and nonexistent articles are indistinguishable to the caller.
pub(crate) async fn ensure_visible_article(
    pool: &sqlx::PgPool,
    id: DbId,
    viewer: Option<DbId>,
) -> AppResult<Article> {
    ArticleRepo::find_visible(pool, id, viewer)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Article",
                id,
            })
        })
}

/// Check that `user_id` may modify the article.
///
/// The author may always modify their article. Articles without an author
/// (the author account was deleted) are editable by any authenticated user.
pub(crate) fn ensure_owned(article: &Article, user_id: DbId) -> AppResult<()> {
    match article.author_id {
        Some(author_id) if author_id != user_id => Err(AppError::Core(CoreError::Forbidden(
            "Only the author may modify this article".into(),
        ))),
        _ => Ok(()),
    }
}

/// Resolve the wiki-link titles in `content` against visible articles,
/// keyed by normalized title.
async fn resolve_content_links(
    pool: &sqlx::PgPool,
    content: &str,
    viewer: Option<DbId>,
) -> AppResult<ResolvedLinks> {
    let titles = extract_titles(content);
    if titles.is_empty() {
        return Ok(ResolvedLinks::new());
    }

    let normalized: Vec<String> = titles.iter().map(|t| normalize_title(t)).collect();
    let matches = ArticleRepo::resolve_titles(pool, &normalized, viewer).await?;
    Ok(matches.into_iter().collect())
}

/* --------------------------------------------------------------------------
Article CRUD
-------------------------------------------------------------------------- */

/// GET /articles
///
/// List articles visible to the caller, with optional substring and tag
/// filters, newest-updated first.
pub async fn list_articles(
    viewer: MaybeAuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListArticlesParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);

    let articles = ArticleRepo::list(
        &state.pool,
        params.q.as_deref(),
        params.tag.as_deref(),
        viewer.user_id(),
        limit,
        offset,
    )
    .await?;

    Ok(Json(DataResponse { data: articles }))
}

/// POST /articles
///
/// Create a new article. The first version snapshot is written alongside.
pub async fn create_article(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateArticle>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(AppError::Core)?;
    validate_content(&input.content).map_err(AppError::Core)?;
    validate_tags(&input.tags).map_err(AppError::Core)?;

    let article = ArticleRepo::create(&state.pool, &input, Some(auth.user_id)).await?;

    tracing::info!(
        user_id = auth.user_id,
        article_id = article.id,
        "Article created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: article })))
}

/// GET /articles/{id}
///
/// Fetch a single article. 404 if absent or not visible to the caller.
pub async fn get_article(
    viewer: MaybeAuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let article = ensure_visible_article(&state.pool, id, viewer.user_id()).await?;
    Ok(Json(DataResponse { data: article }))
}

/// PUT /articles/{id}
///
/// Partial update. Creates a new version only when content is part of the
/// patch. Requires ownership.
pub async fn update_article(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArticle>,
) -> AppResult<impl IntoResponse> {
    let existing = ensure_visible_article(&state.pool, id, Some(auth.user_id)).await?;
    ensure_owned(&existing, auth.user_id)?;

    if let Some(ref title) = input.title {
        validate_title(title).map_err(AppError::Core)?;
    }
    if let Some(ref content) = input.content {
        validate_content(content).map_err(AppError::Core)?;
    }
    if let Some(ref tags) = input.tags {
        validate_tags(tags).map_err(AppError::Core)?;
    }

    let article = ArticleRepo::update(&state.pool, id, &input, Some(auth.user_id)).await?;

    tracing::info!(user_id = auth.user_id, article_id = id, "Article updated");

    Ok(Json(DataResponse { data: article }))
}

/// DELETE /articles/{id}
///
/// Delete an article and, via cascade, its versions and favorites.
/// Requires ownership. Returns 204.
pub async fn delete_article(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = ensure_visible_article(&state.pool, id, Some(auth.user_id)).await?;
    ensure_owned(&existing, auth.user_id)?;

    ArticleRepo::delete(&state.pool, id).await?;

    tracing::info!(user_id = auth.user_id, article_id = id, "Article deleted");

    Ok(StatusCode::NO_CONTENT)
}

/* --------------------------------------------------------------------------
Rendering
-------------------------------------------------------------------------- */

/// GET /articles/{id}/rendered
///
/// Render the article's markdown to HTML with wiki-links resolved
/// server-side. Links are resolved against what the caller may see, so a
/// marker pointing at someone else's private article renders as missing.
pub async fn get_rendered(
    viewer: MaybeAuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let article = ensure_visible_article(&state.pool, id, viewer.user_id()).await?;

    let links = resolve_content_links(&state.pool, &article.content, viewer.user_id()).await?;
    let html = render_html(&article.content, &links);

    Ok(Json(DataResponse {
        data: RenderedArticle {
            id: article.id,
            title: article.title,
            html,
        },
    }))
}

/* --------------------------------------------------------------------------
Wiki-link resolution
-------------------------------------------------------------------------- */

/// POST /articles/resolve-titles
///
/// Batch-resolve up to 50 titles to article ids. Unmatched titles map to
/// null. The response keys are the titles exactly as the caller sent them;
/// matching is case- and whitespace-insensitive.
pub async fn resolve_titles(
    viewer: MaybeAuthUser,
    State(state): State<AppState>,
    Json(input): Json<ResolveTitlesRequest>,
) -> AppResult<impl IntoResponse> {
    validate_resolve_batch(&input.titles).map_err(AppError::Core)?;

    // Empty batch: empty mapping, no storage round-trip.
    if input.titles.is_empty() {
        return Ok(Json(DataResponse {
            data: HashMap::<String, Option<DbId>>::new(),
        }));
    }

    let normalized: Vec<String> = input.titles.iter().map(|t| normalize_title(t)).collect();
    let matches: HashMap<String, DbId> = ArticleRepo::resolve_titles(
        &state.pool,
        &normalized,
        viewer.user_id(),
    )
    .await?
    .into_iter()
    .collect();

    // One entry per requested title, keyed by the caller's spelling.
    let mapping: HashMap<String, Option<DbId>> = input
        .titles
        .iter()
        .map(|title| {
            let id = matches.get(&normalize_title(title)).copied();
            (title.clone(), id)
        })
        .collect();

    Ok(Json(DataResponse { data: mapping }))
}
