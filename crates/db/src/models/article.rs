//! Article entity and DTO models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use scribe_core::types::{DbId, Timestamp};

/// A row from the `articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub is_public: bool,
    pub author_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new article.
#[derive(Debug, Deserialize)]
pub struct CreateArticle {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
}

/// DTO for updating an existing article. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_public: Option<bool>,
}

/// Query params for article listing.
#[derive(Debug, Deserialize)]
pub struct ListArticlesParams {
    /// Substring search over title and content.
    pub q: Option<String>,
    /// Exact tag filter.
    pub tag: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// One entry of the tag aggregation.
#[derive(Debug, FromRow, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: i64,
}
