//! Page entity model and DTOs.
//!
//! Pages are static, slug-addressed content (terms, privacy, services, ...).
//! They are seeded by migration or created on demand; the UI never deletes
//! them, so there is no delete DTO.

use inkpot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `pages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Page {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    /// Markdown body.
    pub content: String,
    pub updated_at: Timestamp,
}

/// DTO for updating an existing page.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePage {
    pub title: Option<String>,
    pub content: Option<String>,
}
