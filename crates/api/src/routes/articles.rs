//! Route definitions for articles, versions, rendering, and wiki-link
//! resolution. Registered under `/articles`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{articles, versions};
use crate::state::AppState;

/// Article routes, registered as `/articles`.
///
/// ```text
/// GET    /                                    list_articles
/// POST   /                                    create_article
/// POST   /resolve-titles                      resolve_titles
/// GET    /{id}                                get_article
/// PUT    /{id}                                update_article
/// DELETE /{id}                                delete_article
/// GET    /{id}/rendered                       get_rendered
/// GET    /{id}/versions                       list_versions
/// GET    /{id}/versions/{version_id}          get_version
/// POST   /{id}/versions/{version_id}/restore  restore_version
/// GET    /{id}/diff                           diff_versions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/resolve-titles", post(articles::resolve_titles))
        .route(
            "/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route("/{id}/rendered", get(articles::get_rendered))
        .route("/{id}/versions", get(versions::list_versions))
        .route("/{id}/versions/{version_id}", get(versions::get_version))
        .route(
            "/{id}/versions/{version_id}/restore",
            post(versions::restore_version),
        )
        .route("/{id}/diff", get(versions::diff_versions))
}
