//! End-to-end resolution mapping over a real migrated database.
//!
//! These tests seed articles through the repositories and call the resolve
//! endpoint through the full router, checking the title-to-id-or-null
//! mapping the client actually receives.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use scribe_api::routes::paths;
use scribe_core::types::DbId;
use scribe_db::models::article::CreateArticle;
use scribe_db::models::user::CreateUser;
use scribe_db::repositories::{ArticleRepo, UserRepo};

async fn seed_author(pool: &PgPool) -> DbId {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: "author".to_string(),
            email: "author@example.com".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$stub$stub".to_string(),
        },
    )
    .await
    .expect("user insert succeeds");
    user.id
}

async fn seed_article(pool: &PgPool, title: &str, is_public: bool, author: DbId) -> DbId {
    let article = ArticleRepo::create(
        pool,
        &CreateArticle {
            title: title.to_string(),
            content: "Body.".to_string(),
            tags: vec![],
            is_public,
        },
        Some(author),
    )
    .await
    .expect("article insert succeeds");
    article.id
}

async fn post_resolve(pool: PgPool, auth: Option<String>, titles: Value) -> (StatusCode, Value) {
    let app = common::build_test_app_with(pool);

    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(paths::ARTICLES_RESOLVE_TITLES)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    let request = builder
        .body(Body::from(json!({ "titles": titles }).to_string()))
        .expect("request is well-formed");

    let response = app.oneshot(request).await.expect("router never errors");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    (status, serde_json::from_slice(&bytes).expect("body is JSON"))
}

#[sqlx::test(migrations = "../db/migrations")]
async fn mapping_keeps_the_callers_spelling(pool: PgPool) {
    let author = seed_author(&pool).await;
    let id = seed_article(&pool, "Existing Article", true, author).await;

    let (status, body) = post_resolve(
        pool,
        None,
        json!(["Existing Article", "  existing article  ", "Nonexistent"]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // Whitespace and case variants of an existing title share its id; an
    // unmatched title maps to null rather than being dropped.
    assert_eq!(body["data"]["Existing Article"], json!(id));
    assert_eq!(body["data"]["  existing article  "], json!(id));
    assert_eq!(body["data"]["Nonexistent"], Value::Null);
    assert_eq!(body["data"].as_object().map(|o| o.len()), Some(3));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn private_titles_are_null_for_anonymous_callers(pool: PgPool) {
    let author = seed_author(&pool).await;
    let id = seed_article(&pool, "Private Notes", false, author).await;

    let (status, body) = post_resolve(pool.clone(), None, json!(["Private Notes"])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["Private Notes"], Value::Null);

    let (status, body) = post_resolve(
        pool,
        Some(common::bearer(author)),
        json!(["Private Notes"]),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["Private Notes"], json!(id));
}
