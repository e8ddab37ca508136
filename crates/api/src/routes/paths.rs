//! Client-facing path catalog.
//!
//! One constant per endpoint, with the `/api/v1` prefix already applied.
//! Integration tests and any generated client use these instead of
//! hand-written string literals, so a path change breaks loudly in exactly
//! one place.

/// Root-level health check (not under `/api/v1`).
pub const HEALTH: &str = "/health";

/// Version prefix for all API routes.
pub const API_PREFIX: &str = "/api/v1";

// -- Auth --------------------------------------------------------------------

pub const AUTH_REGISTER: &str = "/api/v1/auth/register";
pub const AUTH_LOGIN: &str = "/api/v1/auth/login";
pub const AUTH_REFRESH: &str = "/api/v1/auth/refresh";
pub const AUTH_LOGOUT: &str = "/api/v1/auth/logout";
pub const AUTH_ME: &str = "/api/v1/auth/me";

// -- Articles ----------------------------------------------------------------

pub const ARTICLES: &str = "/api/v1/articles";
pub const ARTICLES_RESOLVE_TITLES: &str = "/api/v1/articles/resolve-titles";

/// `GET/PUT/DELETE /api/v1/articles/{id}`
pub fn article(id: i64) -> String {
    format!("{ARTICLES}/{id}")
}

/// `GET /api/v1/articles/{id}/rendered`
pub fn article_rendered(id: i64) -> String {
    format!("{ARTICLES}/{id}/rendered")
}

/// `GET /api/v1/articles/{id}/versions`
pub fn article_versions(id: i64) -> String {
    format!("{ARTICLES}/{id}/versions")
}

/// `GET /api/v1/articles/{id}/versions/{version_id}`
pub fn article_version(id: i64, version_id: i64) -> String {
    format!("{ARTICLES}/{id}/versions/{version_id}")
}

/// `POST /api/v1/articles/{id}/versions/{version_id}/restore`
pub fn article_version_restore(id: i64, version_id: i64) -> String {
    format!("{ARTICLES}/{id}/versions/{version_id}/restore")
}

/// `GET /api/v1/articles/{id}/diff?v1=X&v2=Y`
pub fn article_diff(id: i64, v1: i64, v2: i64) -> String {
    format!("{ARTICLES}/{id}/diff?v1={v1}&v2={v2}")
}

// -- Favorites ---------------------------------------------------------------

pub const FAVORITES: &str = "/api/v1/favorites";

/// `POST/DELETE /api/v1/favorites/{article_id}`
pub fn favorite(article_id: i64) -> String {
    format!("{FAVORITES}/{article_id}")
}

// -- Tags --------------------------------------------------------------------

pub const TAGS: &str = "/api/v1/tags";
