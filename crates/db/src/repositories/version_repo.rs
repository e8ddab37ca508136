//! Repository for the `article_versions` table.
//!
//! Versions are immutable snapshots created on article creation, on every
//! content-changing update, and on restore. They are never mutated; the only
//! deletion path is the FK cascade when the parent article is deleted.

use sqlx::PgPool;

use scribe_core::types::DbId;

use crate::models::version::ArticleVersion;

/// Column list for article_versions queries.
const COLUMNS: &str = "id, article_id, content, edited_by, created_at";

/// Provides read and create operations for article versions.
pub struct VersionRepo;

impl VersionRepo {
    /// Create a new version snapshot.
    pub async fn create(
        pool: &PgPool,
        article_id: DbId,
        content: &str,
        edited_by: Option<DbId>,
    ) -> Result<ArticleVersion, sqlx::Error> {
        let query = format!(
            "INSERT INTO article_versions (article_id, content, edited_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ArticleVersion>(&query)
            .bind(article_id)
            .bind(content)
            .bind(edited_by)
            .fetch_one(pool)
            .await
    }

    /// List all versions for an article, ordered newest first.
    pub async fn list_by_article(
        pool: &PgPool,
        article_id: DbId,
    ) -> Result<Vec<ArticleVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM article_versions
             WHERE article_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ArticleVersion>(&query)
            .bind(article_id)
            .fetch_all(pool)
            .await
    }

    /// Find a specific version, scoped to its article.
    pub async fn find_by_article_and_id(
        pool: &PgPool,
        article_id: DbId,
        version_id: DbId,
    ) -> Result<Option<ArticleVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM article_versions
             WHERE article_id = $1 AND id = $2"
        );
        sqlx::query_as::<_, ArticleVersion>(&query)
            .bind(article_id)
            .bind(version_id)
            .fetch_optional(pool)
            .await
    }
}
