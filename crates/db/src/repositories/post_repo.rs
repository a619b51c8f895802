//! Repository for the `posts` table.

use inkpot_core::types::DbId;
use sqlx::PgPool;

use crate::models::post::{CreatePost, Post, UpdatePost};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, slug, content, excerpt, cover_image, published, created_at, updated_at";

/// Provides CRUD, listing, and search operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post, returning the created row.
    ///
    /// The slug must already be resolved (explicit or derived) by the caller.
    /// `published` defaults to false so new posts start as drafts.
    pub async fn create(pool: &PgPool, input: &CreatePost, slug: &str) -> Result<Post, sqlx::Error> {
        let published = input.published.unwrap_or(false);
        let query = format!(
            "INSERT INTO posts (title, slug, content, excerpt, cover_image, published)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.content)
            .bind(&input.excerpt)
            .bind(&input.cover_image)
            .bind(published)
            .fetch_one(pool)
            .await
    }

    /// Find a post by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a post by slug. Zero rows is a normal empty result, not an error.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE slug = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List every post, drafts included, newest first. Admin listing.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts ORDER BY created_at DESC");
        sqlx::query_as::<_, Post>(&query).fetch_all(pool).await
    }

    /// List published posts, newest first, with pagination.
    pub async fn list_published(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts
             WHERE published = true
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count published posts.
    pub async fn count_published(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE published = true")
            .fetch_one(pool)
            .await
    }

    /// Case-insensitive substring search over title and content, restricted
    /// to published posts, newest first, with pagination.
    pub async fn search(
        pool: &PgPool,
        query_str: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, sqlx::Error> {
        let pattern = format!("%{query_str}%");
        let query = format!(
            "SELECT {COLUMNS} FROM posts
             WHERE published = true
               AND (title ILIKE $1 OR content ILIKE $1)
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(&pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count published posts matching a search query.
    pub async fn count_search(pool: &PgPool, query_str: &str) -> Result<i64, sqlx::Error> {
        let pattern = format!("%{query_str}%");
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM posts
             WHERE published = true
               AND (title ILIKE $1 OR content ILIKE $1)",
        )
        .bind(&pattern)
        .fetch_one(pool)
        .await
    }

    /// Partially update a post by ID, stamping `updated_at`.
    ///
    /// Returns `None` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePost,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET
                title = COALESCE($1, title),
                slug = COALESCE($2, slug),
                content = COALESCE($3, content),
                excerpt = COALESCE($4, excerpt),
                cover_image = COALESCE($5, cover_image),
                published = COALESCE($6, published),
                updated_at = NOW()
             WHERE id = $7
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.content)
            .bind(&input.excerpt)
            .bind(&input.cover_image)
            .bind(input.published)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
