//! Repository for the `pages` table.
//!
//! Pages are looked up by fixed slugs and mutated by administrators; the
//! editor creates missing ones on demand via [`PageRepo::get_or_create`].

use inkpot_core::types::DbId;
use sqlx::PgPool;

use crate::models::page::{Page, UpdatePage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, content, updated_at";

/// Provides lookup, update, and get-or-create operations for pages.
pub struct PageRepo;

impl PageRepo {
    /// List all pages ordered by title. Admin listing.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages ORDER BY title");
        sqlx::query_as::<_, Page>(&query).fetch_all(pool).await
    }

    /// Find a page by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE id = $1");
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a page by slug. Zero rows is a normal empty result, not an error.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE slug = $1");
        sqlx::query_as::<_, Page>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a page by ID, stamping `updated_at`.
    ///
    /// Returns `None` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePage,
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "UPDATE pages SET
                title = COALESCE($1, title),
                content = COALESCE($2, content),
                updated_at = NOW()
             WHERE id = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the page with the given slug, inserting an empty one with the
    /// supplied default title if it does not exist yet.
    ///
    /// Idempotent: a second call with the same slug is a pure read returning
    /// the same row. The insert uses `ON CONFLICT DO NOTHING` so two
    /// concurrent first calls both land on the same row.
    pub async fn get_or_create(
        pool: &PgPool,
        slug: &str,
        default_title: &str,
    ) -> Result<Page, sqlx::Error> {
        if let Some(page) = Self::find_by_slug(pool, slug).await? {
            return Ok(page);
        }

        let result = sqlx::query(
            "INSERT INTO pages (title, slug, content)
             VALUES ($1, $2, '')
             ON CONFLICT (slug) DO NOTHING",
        )
        .bind(default_title)
        .bind(slug)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            tracing::info!(slug, title = default_title, "Page created on demand");
        }

        // The row exists now, whether this call or a concurrent one inserted it.
        let query = format!("SELECT {COLUMNS} FROM pages WHERE slug = $1");
        sqlx::query_as::<_, Page>(&query)
            .bind(slug)
            .fetch_one(pool)
            .await
    }
}
