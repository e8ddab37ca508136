//! Handler for the tag aggregation endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use scribe_db::repositories::ArticleRepo;

use crate::error::AppResult;
use crate::middleware::auth::MaybeAuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /tags
///
/// Aggregate tag usage over articles visible to the caller, most used first.
pub async fn list_tags(
    viewer: MaybeAuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let tags = ArticleRepo::tag_counts(&state.pool, viewer.user_id()).await?;
    Ok(Json(DataResponse { data: tags }))
}
