//! Integration tests for the posts repository.
//!
//! Exercises the repository layer against a real database:
//! - Create / fetch round trips and timestamp stamping
//! - Draft vs published visibility
//! - Search semantics
//! - Unique slug constraint violations

use assert_matches::assert_matches;
use inkpot_db::models::post::{CreatePost, UpdatePost};
use inkpot_db::repositories::PostRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_post(title: &str, published: bool) -> CreatePost {
    CreatePost {
        title: title.to_string(),
        slug: None,
        content: format!("Body of {title}."),
        excerpt: None,
        cover_image: None,
        published: Some(published),
    }
}

fn no_changes() -> UpdatePost {
    UpdatePost {
        title: None,
        slug: None,
        content: None,
        excerpt: None,
        cover_image: None,
        published: None,
    }
}

// ---------------------------------------------------------------------------
// Create / fetch
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn create_then_fetch_by_slug_round_trips(pool: PgPool) {
    let input = CreatePost {
        title: "First Post".to_string(),
        slug: None,
        content: "Hello markdown".to_string(),
        excerpt: Some("hello".to_string()),
        cover_image: None,
        published: Some(false),
    };

    let created = PostRepo::create(&pool, &input, "first-post").await.unwrap();

    let fetched = PostRepo::find_by_slug(&pool, "first-post")
        .await
        .unwrap()
        .expect("post must be found by slug");

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, "First Post");
    assert_eq!(fetched.slug, "first-post");
    assert_eq!(fetched.content, "Hello markdown");
    assert_eq!(fetched.excerpt.as_deref(), Some("hello"));
    assert!(!fetched.published);
    assert!(fetched.updated_at >= fetched.created_at);
}

#[sqlx::test]
async fn published_defaults_to_false(pool: PgPool) {
    let mut input = new_post("Draft by default", false);
    input.published = None;

    let created = PostRepo::create(&pool, &input, "draft-by-default")
        .await
        .unwrap();
    assert!(!created.published);
}

#[sqlx::test]
async fn missing_slug_lookup_is_none_not_error(pool: PgPool) {
    let found = PostRepo::find_by_slug(&pool, "does-not-exist").await.unwrap();
    assert_matches!(found, None);
}

#[sqlx::test]
async fn duplicate_slug_violates_unique_constraint(pool: PgPool) {
    PostRepo::create(&pool, &new_post("One", false), "same-slug")
        .await
        .unwrap();

    let err = PostRepo::create(&pool, &new_post("Two", false), "same-slug")
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_posts_slug"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn drafts_are_hidden_from_public_listing_but_not_admin(pool: PgPool) {
    PostRepo::create(&pool, &new_post("Public", true), "public")
        .await
        .unwrap();
    PostRepo::create(&pool, &new_post("Draft", false), "draft")
        .await
        .unwrap();

    let public = PostRepo::list_published(&pool, 10, 0).await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].slug, "public");

    let admin = PostRepo::list_all(&pool).await.unwrap();
    assert_eq!(admin.len(), 2);

    assert_eq!(PostRepo::count_published(&pool).await.unwrap(), 1);
}

#[sqlx::test]
async fn published_listing_is_newest_first_and_paginated(pool: PgPool) {
    for i in 0..3 {
        PostRepo::create(&pool, &new_post(&format!("Post {i}"), true), &format!("post-{i}"))
            .await
            .unwrap();
        // Distinct created_at values so the ordering is deterministic.
        sqlx::query("UPDATE posts SET created_at = NOW() + ($1 || ' seconds')::interval WHERE slug = $2")
            .bind(i.to_string())
            .bind(format!("post-{i}"))
            .execute(&pool)
            .await
            .unwrap();
    }

    let first_page = PostRepo::list_published(&pool, 2, 0).await.unwrap();
    assert_eq!(first_page.len(), 2);
    assert_eq!(first_page[0].slug, "post-2");
    assert_eq!(first_page[1].slug, "post-1");

    let second_page = PostRepo::list_published(&pool, 2, 2).await.unwrap();
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].slug, "post-0");
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn search_matches_title_and_content_case_insensitively(pool: PgPool) {
    let mut by_title = new_post("Rust Ownership", true);
    by_title.content = "nothing relevant".to_string();
    PostRepo::create(&pool, &by_title, "rust-ownership")
        .await
        .unwrap();

    let mut by_content = new_post("Another Day", true);
    by_content.content = "More about OWNERSHIP semantics".to_string();
    PostRepo::create(&pool, &by_content, "another-day")
        .await
        .unwrap();

    let hits = PostRepo::search(&pool, "ownership", 10, 0).await.unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(PostRepo::count_search(&pool, "ownership").await.unwrap(), 2);
}

#[sqlx::test]
async fn search_excludes_drafts(pool: PgPool) {
    PostRepo::create(&pool, &new_post("Hidden gem", false), "hidden-gem")
        .await
        .unwrap();

    let hits = PostRepo::search(&pool, "gem", 10, 0).await.unwrap();
    assert!(hits.is_empty());
    assert_eq!(PostRepo::count_search(&pool, "gem").await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn partial_update_stamps_updated_at_and_keeps_other_fields(pool: PgPool) {
    let created = PostRepo::create(&pool, &new_post("Original", false), "original")
        .await
        .unwrap();

    let updated = PostRepo::update(
        &pool,
        created.id,
        &UpdatePost {
            published: Some(true),
            ..no_changes()
        },
    )
    .await
    .unwrap()
    .expect("row must exist");

    assert!(updated.published);
    assert_eq!(updated.title, "Original");
    assert_eq!(updated.content, created.content);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test]
async fn update_of_missing_row_returns_none(pool: PgPool) {
    let updated = PostRepo::update(&pool, 999_999, &no_changes()).await.unwrap();
    assert!(updated.is_none());
}

#[sqlx::test]
async fn delete_removes_the_row(pool: PgPool) {
    let created = PostRepo::create(&pool, &new_post("Doomed", false), "doomed")
        .await
        .unwrap();

    assert!(PostRepo::delete(&pool, created.id).await.unwrap());
    assert!(PostRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
    assert!(!PostRepo::delete(&pool, created.id).await.unwrap());
}
