//! Repository for the `favorites` table.

use sqlx::PgPool;

use scribe_core::types::DbId;

/// Provides operations for per-user article bookmarks.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// List the ids of all articles a user has favorited, newest first.
    pub async fn list_article_ids(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> = sqlx::query_as(
            "SELECT article_id FROM favorites
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Add a favorite. Idempotent: the (user, article) pair is unique and a
    /// repeat insert is a no-op.
    pub async fn add(pool: &PgPool, user_id: DbId, article_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO favorites (user_id, article_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, article_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(article_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove a favorite. Returns whether a row was deleted.
    pub async fn remove(
        pool: &PgPool,
        user_id: DbId,
        article_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM favorites WHERE user_id = $1 AND article_id = $2",
        )
        .bind(user_id)
        .bind(article_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
