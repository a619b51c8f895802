//! Post entity model and DTOs.

use inkpot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    /// URL-safe unique identifier, derived from the title when not supplied.
    pub slug: String,
    /// Markdown body.
    pub content: String,
    pub excerpt: Option<String>,
    /// Public URL of the cover image, if one was uploaded.
    pub cover_image: Option<String>,
    /// Gates visibility in the public listing and search.
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new post.
///
/// `slug` falls back to a derivation from `title`; `published` defaults to
/// false so new posts start as drafts.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub slug: Option<String>,
    pub content: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub published: Option<bool>,
}

/// DTO for updating an existing post. All fields are optional; omitted fields
/// are left untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub published: Option<bool>,
}
