//! Repository for the `articles` table.
//!
//! Also manages version creation on article create/update/restore, the
//! batched wiki-link title resolution query, and the tag aggregation.
//!
//! Every read takes an optional `viewer`: anonymous callers see public
//! articles only, authenticated callers additionally see their own.

use sqlx::PgPool;

use scribe_core::types::DbId;

use crate::models::article::{Article, CreateArticle, TagCount, UpdateArticle};
use crate::models::version::ArticleVersion;
use crate::repositories::version_repo::VersionRepo;

/// Column list for articles queries.
const COLUMNS: &str = "id, title, content, tags, is_public, author_id, created_at, updated_at";

/// Provides CRUD operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Create a new article and its first version.
    pub async fn create(
        pool: &PgPool,
        input: &CreateArticle,
        author_id: Option<DbId>,
    ) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (title, content, tags, is_public, author_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let article = sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.tags)
            .bind(input.is_public)
            .bind(author_id)
            .fetch_one(pool)
            .await?;

        // First snapshot.
        VersionRepo::create(pool, article.id, &input.content, author_id).await?;

        Ok(article)
    }

    /// Find an article by id, restricted to what `viewer` may see.
    pub async fn find_visible(
        pool: &PgPool,
        id: DbId,
        viewer: Option<DbId>,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM articles
             WHERE id = $1 AND (is_public = TRUE OR author_id = $2)"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(viewer)
            .fetch_optional(pool)
            .await
    }

    /// List articles visible to `viewer`, optionally filtered by a substring
    /// query over title/content and an exact tag, newest-updated first.
    pub async fn list(
        pool: &PgPool,
        q: Option<&str>,
        tag: Option<&str>,
        viewer: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Article>, sqlx::Error> {
        let pattern = q.map(|q| format!("%{}%", escape_like(q)));
        let query = format!(
            "SELECT {COLUMNS} FROM articles
             WHERE (is_public = TRUE OR author_id = $1)
               AND ($2::TEXT IS NULL OR title ILIKE $2 OR content ILIKE $2)
               AND ($3::TEXT IS NULL OR $3 = ANY(tags))
             ORDER BY updated_at DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(viewer)
            .bind(pattern)
            .bind(tag)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update an article and create a new version if content changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArticle,
        editor: Option<DbId>,
    ) -> Result<Article, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET
                title = COALESCE($1, title),
                content = COALESCE($2, content),
                tags = COALESCE($3, tags),
                is_public = COALESCE($4, is_public)
             WHERE id = $5
             RETURNING {COLUMNS}"
        );
        let article = sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.tags)
            .bind(input.is_public)
            .bind(id)
            .fetch_one(pool)
            .await?;

        if input.content.is_some() {
            VersionRepo::create(pool, article.id, &article.content, editor).await?;
        }

        Ok(article)
    }

    /// Delete an article. Versions and favorites go with it via FK cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Copy a version's content back onto the article, creating a new version.
    pub async fn restore_version(
        pool: &PgPool,
        article_id: DbId,
        version: &ArticleVersion,
        editor: Option<DbId>,
    ) -> Result<Article, sqlx::Error> {
        let query = format!("UPDATE articles SET content = $1 WHERE id = $2 RETURNING {COLUMNS}");
        let article = sqlx::query_as::<_, Article>(&query)
            .bind(&version.content)
            .bind(article_id)
            .fetch_one(pool)
            .await?;

        VersionRepo::create(pool, article_id, &version.content, editor).await?;

        Ok(article)
    }

    /// Batch-resolve normalized titles to article ids, restricted to what
    /// `viewer` may see.
    ///
    /// Returns one `(normalized_title, id)` pair per matched title. Titles
    /// without a match are simply absent. When several articles share a
    /// normalized title the lowest id (oldest article) wins.
    pub async fn resolve_titles(
        pool: &PgPool,
        normalized_titles: &[String],
        viewer: Option<DbId>,
    ) -> Result<Vec<(String, DbId)>, sqlx::Error> {
        sqlx::query_as::<_, (String, DbId)>(
            "SELECT DISTINCT ON (LOWER(TRIM(title))) LOWER(TRIM(title)) AS normalized, id
             FROM articles
             WHERE LOWER(TRIM(title)) = ANY($1)
               AND (is_public = TRUE OR author_id = $2)
             ORDER BY LOWER(TRIM(title)), id ASC",
        )
        .bind(normalized_titles)
        .bind(viewer)
        .fetch_all(pool)
        .await
    }

    /// Aggregate tag usage over articles visible to `viewer`, most used first.
    pub async fn tag_counts(
        pool: &PgPool,
        viewer: Option<DbId>,
    ) -> Result<Vec<TagCount>, sqlx::Error> {
        sqlx::query_as::<_, TagCount>(
            "SELECT tag, COUNT(*) AS count
             FROM articles, UNNEST(tags) AS tag
             WHERE (is_public = TRUE OR author_id = $1)
             GROUP BY tag
             ORDER BY count DESC, tag ASC",
        )
        .bind(viewer)
        .fetch_all(pool)
        .await
    }
}

/// Escape `%`, `_`, and `\` so user input cannot act as LIKE metacharacters.
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn like_metacharacters_escaped() {
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
