//! Handlers for static pages: public lookup by slug and the admin editing
//! surface, including creation on demand for slugs without a row yet.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use inkpot_core::content::validate_page_input;
use inkpot_core::error::CoreError;
use inkpot_core::markdown::render_markdown_to_html;
use inkpot_core::slug::title_from_slug;
use inkpot_core::types::DbId;
use inkpot_db::models::page::{Page, UpdatePage};
use inkpot_db::repositories::PageRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::guard::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// A page plus its body rendered to HTML, for the public detail view.
#[derive(Debug, Serialize)]
pub struct PageDetail {
    #[serde(flatten)]
    pub page: Page,
    pub content_html: String,
}

// ---------------------------------------------------------------------------
// Public surface
// ---------------------------------------------------------------------------

/// GET /api/v1/pages/{slug}
///
/// Page content by slug with its rendered body.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let page = PageRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundBySlug {
                entity: "Page",
                slug: slug.clone(),
            })
        })?;

    let content_html = render_markdown_to_html(&page.content);
    Ok(Json(DataResponse {
        data: PageDetail { page, content_html },
    }))
}

// ---------------------------------------------------------------------------
// Admin surface
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/pages
///
/// Every page, ordered by title.
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let pages = PageRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: pages }))
}

/// GET /api/v1/admin/pages/by-slug/{slug}
///
/// Fetch the page for the editor, creating an empty one with a default title
/// derived from the slug if it does not exist yet. Idempotent: the second
/// call is a pure read.
pub async fn get_or_create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let default_title = title_from_slug(&slug);
    if default_title.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Page slug must not be empty".into(),
        )));
    }

    let page = PageRepo::get_or_create(&state.pool, &slug, &default_title).await?;

    tracing::debug!(
        page_id = page.id,
        slug = %page.slug,
        user_id = admin.user_id,
        "Page fetched for editing",
    );

    Ok(Json(DataResponse { data: page }))
}

/// PUT /api/v1/admin/pages/{id}
///
/// Update title/content; `updated_at` is stamped.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePage>,
) -> AppResult<impl IntoResponse> {
    if let Some(content) = &input.content {
        validate_page_input(content)?;
    }

    let page = PageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Page", id }))?;

    tracing::info!(page_id = id, user_id = admin.user_id, "Page updated",);

    Ok(Json(DataResponse { data: page }))
}
