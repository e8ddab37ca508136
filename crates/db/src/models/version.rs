//! Article version model.
//!
//! Versions are immutable snapshots of article content, created on every
//! content-changing write.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use scribe_core::types::{DbId, Timestamp};

/// A row from the `article_versions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArticleVersion {
    pub id: DbId,
    pub article_id: DbId,
    pub content: String,
    pub edited_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// Query params for comparing two article versions.
#[derive(Debug, Deserialize)]
pub struct DiffRequest {
    pub v1: DbId,
    pub v2: DbId,
}

/// Response for a version diff.
#[derive(Debug, Serialize)]
pub struct DiffResponse {
    pub article_id: DbId,
    pub v1: DbId,
    pub v2: DbId,
    pub lines: Vec<DiffLineDto>,
}

/// A single line in a diff response (serializable).
#[derive(Debug, Serialize)]
pub struct DiffLineDto {
    pub line_type: String,
    pub content: String,
}
