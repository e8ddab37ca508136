//! Database-backed tests for batch title resolution.
//!
//! Each test gets a fresh migrated database from `#[sqlx::test]`, seeds it
//! through the repositories, and checks the resolution query directly.

use std::collections::HashMap;

use sqlx::PgPool;

use scribe_core::article::normalize_title;
use scribe_core::types::DbId;
use scribe_db::models::article::CreateArticle;
use scribe_db::models::user::CreateUser;
use scribe_db::repositories::{ArticleRepo, UserRepo};

async fn seed_user(pool: &PgPool, username: &str) -> DbId {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$stub$stub".to_string(),
        },
    )
    .await
    .expect("user insert succeeds");
    user.id
}

async fn seed_article(
    pool: &PgPool,
    title: &str,
    is_public: bool,
    author: Option<DbId>,
) -> DbId {
    let article = ArticleRepo::create(
        pool,
        &CreateArticle {
            title: title.to_string(),
            content: format!("Content of {title}."),
            tags: vec![],
            is_public,
        },
        author,
    )
    .await
    .expect("article insert succeeds");
    article.id
}

async fn resolve(
    pool: &PgPool,
    titles: &[&str],
    viewer: Option<DbId>,
) -> HashMap<String, DbId> {
    let normalized: Vec<String> = titles.iter().map(|t| normalize_title(t)).collect();
    ArticleRepo::resolve_titles(pool, &normalized, viewer)
        .await
        .expect("resolution query succeeds")
        .into_iter()
        .collect()
}

#[sqlx::test]
async fn variants_of_one_title_resolve_to_the_same_article(pool: PgPool) {
    let author = seed_user(&pool, "alice").await;
    let id = seed_article(&pool, "Existing Article", true, Some(author)).await;

    let mapping = resolve(
        &pool,
        &["Existing Article", "  existing article  ", "Nonexistent"],
        None,
    )
    .await;

    assert_eq!(mapping.get("existing article"), Some(&id));
    assert_eq!(mapping.len(), 1, "only the existing title matches");
    assert!(!mapping.contains_key("nonexistent"));
}

#[sqlx::test]
async fn duplicate_titles_resolve_to_the_oldest_article(pool: PgPool) {
    let author = seed_user(&pool, "alice").await;
    let first = seed_article(&pool, "Shared Title", true, Some(author)).await;
    let second = seed_article(&pool, "shared title", true, Some(author)).await;
    let third = seed_article(&pool, "  Shared Title  ", true, Some(author)).await;
    assert!(first < second && second < third);

    let mapping = resolve(&pool, &["Shared Title"], None).await;

    assert_eq!(mapping.get("shared title"), Some(&first));
}

#[sqlx::test]
async fn private_articles_resolve_only_for_their_author(pool: PgPool) {
    let author = seed_user(&pool, "alice").await;
    let other = seed_user(&pool, "bob").await;
    let id = seed_article(&pool, "Private Notes", false, Some(author)).await;

    let for_author = resolve(&pool, &["Private Notes"], Some(author)).await;
    assert_eq!(for_author.get("private notes"), Some(&id));

    let for_other = resolve(&pool, &["Private Notes"], Some(other)).await;
    assert!(for_other.is_empty(), "other users must not see the match");

    let anonymous = resolve(&pool, &["Private Notes"], None).await;
    assert!(anonymous.is_empty(), "anonymous callers must not see the match");
}

#[sqlx::test]
async fn public_duplicate_shadows_a_private_older_one_for_strangers(pool: PgPool) {
    let author = seed_user(&pool, "alice").await;
    let private_id = seed_article(&pool, "Guide", false, Some(author)).await;
    let public_id = seed_article(&pool, "Guide", true, Some(author)).await;

    // The author sees both rows, so the lowest id wins.
    let for_author = resolve(&pool, &["Guide"], Some(author)).await;
    assert_eq!(for_author.get("guide"), Some(&private_id));

    // Everyone else only sees the public row.
    let anonymous = resolve(&pool, &["Guide"], None).await;
    assert_eq!(anonymous.get("guide"), Some(&public_id));
}

#[sqlx::test]
async fn mixed_batch_returns_one_row_per_matched_title(pool: PgPool) {
    let author = seed_user(&pool, "alice").await;
    let alpha = seed_article(&pool, "Alpha", true, Some(author)).await;
    let beta = seed_article(&pool, "Beta", true, Some(author)).await;

    let mapping = resolve(&pool, &["ALPHA", "beta", "Gamma"], None).await;

    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.get("alpha"), Some(&alpha));
    assert_eq!(mapping.get("beta"), Some(&beta));
}
