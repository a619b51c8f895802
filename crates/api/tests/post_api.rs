//! HTTP-level integration tests for the post surface.
//!
//! Covers slug derivation, draft visibility, the public listing with
//! pagination and search, detail rendering, and admin CRUD.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{
    body_json, delete_auth, get, get_auth, login_token, post_json_auth, put_json_auth, seed_user,
    ADMIN_EMAIL,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_post(
    app: Router,
    token: &str,
    title: &str,
    published: bool,
) -> serde_json::Value {
    let body = serde_json::json!({
        "title": title,
        "content": format!("Body of {title}."),
        "published": published,
    });
    let response = post_json_auth(app, "/api/v1/admin/posts", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Creation and slug derivation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_derives_clean_slug_from_title(pool: PgPool) {
    seed_user(&pool, ADMIN_EMAIL).await;
    let app = common::build_test_app(pool).await;
    let token = login_token(app.clone(), ADMIN_EMAIL).await;

    let json = create_post(app, &token, "  Hello,   World!  ", false).await;
    assert_eq!(json["data"]["slug"], "hello-world");
    assert_eq!(json["data"]["published"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_without_content_is_400_before_any_write(pool: PgPool) {
    seed_user(&pool, ADMIN_EMAIL).await;
    let app = common::build_test_app(pool).await;
    let token = login_token(app.clone(), ADMIN_EMAIL).await;

    let body = serde_json::json!({ "title": "No body", "content": "  " });
    let response = post_json_auth(app.clone(), "/api/v1/admin/posts", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    // Nothing was persisted.
    let response = get_auth(app, "/api/v1/admin/posts", &token).await;
    let listing = body_json(response).await;
    assert_eq!(listing["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_slug_is_409(pool: PgPool) {
    seed_user(&pool, ADMIN_EMAIL).await;
    let app = common::build_test_app(pool).await;
    let token = login_token(app.clone(), ADMIN_EMAIL).await;

    create_post(app.clone(), &token, "Same Title", false).await;

    let body = serde_json::json!({ "title": "Same Title", "content": "Other body" });
    let response = post_json_auth(app, "/api/v1/admin/posts", &token, body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Round trip and visibility
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_then_fetch_by_slug_round_trips(pool: PgPool) {
    seed_user(&pool, ADMIN_EMAIL).await;
    let app = common::build_test_app(pool).await;
    let token = login_token(app.clone(), ADMIN_EMAIL).await;

    let body = serde_json::json!({
        "title": "Round Trip",
        "slug": "round-trip",
        "content": "# Heading\n\nParagraph.",
        "excerpt": "a round trip",
        "published": false,
    });
    let response = post_json_auth(app.clone(), "/api/v1/admin/posts", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(app, "/api/v1/posts/round-trip").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["data"]["title"], "Round Trip");
    assert_eq!(json["data"]["slug"], "round-trip");
    assert_eq!(json["data"]["excerpt"], "a round trip");
    assert_eq!(json["data"]["published"], false);
    assert!(json["data"]["content_html"]
        .as_str()
        .unwrap()
        .contains("<h1>Heading</h1>"));

    let created_at = json["data"]["created_at"].as_str().unwrap();
    let updated_at = json["data"]["updated_at"].as_str().unwrap();
    assert!(updated_at >= created_at);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_slug_is_a_404_not_found_state(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get(app, "/api/v1/posts/missing-post").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn drafts_appear_only_in_the_admin_listing(pool: PgPool) {
    seed_user(&pool, ADMIN_EMAIL).await;
    let app = common::build_test_app(pool).await;
    let token = login_token(app.clone(), ADMIN_EMAIL).await;

    create_post(app.clone(), &token, "Published Post", true).await;
    create_post(app.clone(), &token, "Draft Post", false).await;

    let public = body_json(get(app.clone(), "/api/v1/posts").await).await;
    let slugs: Vec<&str> = public["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["published-post"]);

    let admin = body_json(get_auth(app, "/api/v1/admin/posts", &token).await).await;
    assert_eq!(admin["data"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn thirteen_posts_paginate_into_three_pages_without_ellipsis(pool: PgPool) {
    seed_user(&pool, ADMIN_EMAIL).await;
    let app = common::build_test_app(pool).await;
    let token = login_token(app.clone(), ADMIN_EMAIL).await;

    for i in 1..=13 {
        create_post(app.clone(), &token, &format!("Post number {i}"), true).await;
    }

    let page1 = body_json(get(app.clone(), "/api/v1/posts?page=1").await).await;
    assert_eq!(page1["data"].as_array().unwrap().len(), 6);
    assert_eq!(page1["meta"]["total"], 13);
    assert_eq!(page1["meta"]["total_pages"], 3);

    let page2 = body_json(get(app.clone(), "/api/v1/posts?page=2").await).await;
    assert_eq!(page2["data"].as_array().unwrap().len(), 6);

    let page3 = body_json(get(app.clone(), "/api/v1/posts?page=3").await).await;
    assert_eq!(page3["data"].as_array().unwrap().len(), 1);

    // Window is exactly pages 1-3 with no ellipsis entries.
    let controls = page2["controls"].as_array().unwrap();
    let kinds: Vec<&str> = controls
        .iter()
        .map(|c| c["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["page", "page", "page"]);
    let numbers: Vec<i64> = controls
        .iter()
        .map(|c| c["number"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn search_filters_published_posts_case_insensitively(pool: PgPool) {
    seed_user(&pool, ADMIN_EMAIL).await;
    let app = common::build_test_app(pool).await;
    let token = login_token(app.clone(), ADMIN_EMAIL).await;

    create_post(app.clone(), &token, "Rust Ownership Explained", true).await;
    create_post(app.clone(), &token, "Unrelated Topic", true).await;
    create_post(app.clone(), &token, "Ownership Draft", false).await;

    let json = body_json(get(app, "/api/v1/posts?q=OWNERSHIP").await).await;
    let hits = json["data"].as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["slug"], "rust-ownership-explained");
    assert_eq!(json["query"], "OWNERSHIP");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_search_result_is_distinct_from_no_posts(pool: PgPool) {
    seed_user(&pool, ADMIN_EMAIL).await;
    let app = common::build_test_app(pool).await;
    let token = login_token(app.clone(), ADMIN_EMAIL).await;

    create_post(app.clone(), &token, "Only Post", true).await;

    // No matches for this query, but the collection itself is not empty.
    let json = body_json(get(app.clone(), "/api/v1/posts?q=zebra").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
    assert_eq!(json["meta"]["total"], 0);
    assert_eq!(json["query"], "zebra");

    let unfiltered = body_json(get(app, "/api/v1/posts").await).await;
    assert_eq!(unfiltered["meta"]["total"], 1);
    assert!(unfiltered["query"].is_null());
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn partial_update_keeps_unmentioned_fields(pool: PgPool) {
    seed_user(&pool, ADMIN_EMAIL).await;
    let app = common::build_test_app(pool).await;
    let token = login_token(app.clone(), ADMIN_EMAIL).await;

    let created = create_post(app.clone(), &token, "Before Update", false).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let body = serde_json::json!({ "published": true });
    let response =
        put_json_auth(app.clone(), &format!("/api/v1/admin/posts/{id}"), &token, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["data"]["published"], true);
    assert_eq!(json["data"]["title"], "Before Update");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_then_fetch_is_404(pool: PgPool) {
    seed_user(&pool, ADMIN_EMAIL).await;
    let app = common::build_test_app(pool).await;
    let token = login_token(app.clone(), ADMIN_EMAIL).await;

    let created = create_post(app.clone(), &token, "Doomed Post", true).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = delete_auth(app.clone(), &format!("/api/v1/admin/posts/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, &format!("/api/v1/admin/posts/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
