//! Handlers for blog posts: the public listing/detail surface and the
//! admin CRUD surface behind the route guard.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use inkpot_core::content::{validate_post_input, validate_slug};
use inkpot_core::error::CoreError;
use inkpot_core::markdown::render_markdown_to_html;
use inkpot_core::pagination::{clamp_page, PageMeta, POSTS_PER_PAGE};
use inkpot_core::slug::slugify;
use inkpot_core::types::DbId;
use inkpot_db::models::post::{CreatePost, Post, UpdatePost};
use inkpot_db::repositories::PostRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::guard::RequireAdmin;
use crate::query::ListParams;
use crate::response::{DataResponse, PaginatedResponse};
use crate::state::AppState;

/// A post plus its body rendered to HTML, for detail views.
#[derive(Debug, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    pub content_html: String,
}

// ---------------------------------------------------------------------------
// Public surface
// ---------------------------------------------------------------------------

/// GET /api/v1/posts
///
/// Published posts, newest first, six per page. With `?q=` the listing is
/// filtered by case-insensitive substring match over title and content;
/// drafts never appear either way.
pub async fn list_published(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(params.page);
    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string);

    let (total, posts) = match &query {
        Some(q) => {
            let total = PostRepo::count_search(&state.pool, q).await?;
            let meta = PageMeta::new(page, POSTS_PER_PAGE, total);
            let posts = PostRepo::search(&state.pool, q, POSTS_PER_PAGE, meta.offset()).await?;
            (total, posts)
        }
        None => {
            let total = PostRepo::count_published(&state.pool).await?;
            let meta = PageMeta::new(page, POSTS_PER_PAGE, total);
            let posts =
                PostRepo::list_published(&state.pool, POSTS_PER_PAGE, meta.offset()).await?;
            (total, posts)
        }
    };

    let meta = PageMeta::new(page, POSTS_PER_PAGE, total);
    Ok(Json(PaginatedResponse::new(posts, meta, query)))
}

/// GET /api/v1/posts/{slug}
///
/// Single post by slug with its rendered body. Zero rows is a normal
/// not-found result, not a remote-store failure.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let post = PostRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundBySlug {
                entity: "Post",
                slug: slug.clone(),
            })
        })?;

    let content_html = render_markdown_to_html(&post.content);
    Ok(Json(DataResponse {
        data: PostDetail { post, content_html },
    }))
}

// ---------------------------------------------------------------------------
// Admin surface
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/posts
///
/// Every post, drafts included, newest first.
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let posts = PostRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// POST /api/v1/admin/posts
///
/// Create a post. Title and content are validated locally before any query;
/// a blank slug is derived from the title; `published` defaults to false.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreatePost>,
) -> AppResult<impl IntoResponse> {
    validate_post_input(&input.title, &input.content)?;
    let slug = resolve_slug(&input)?;

    let post = PostRepo::create(&state.pool, &input, &slug).await?;

    tracing::info!(
        post_id = post.id,
        slug = %post.slug,
        published = post.published,
        user_id = admin.user_id,
        "Post created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// GET /api/v1/admin/posts/{id}
///
/// Fetch a post for the editor.
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    Ok(Json(DataResponse { data: post }))
}

/// PUT /api/v1/admin/posts/{id}
///
/// Partial update. Omitted fields keep their values; `updated_at` is stamped.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePost>,
) -> AppResult<impl IntoResponse> {
    if let Some(content) = &input.content {
        if content.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Content is required".into(),
            )));
        }
    }
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }

    let post = PostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    tracing::info!(post_id = id, user_id = admin.user_id, "Post updated",);

    Ok(Json(DataResponse { data: post }))
}

/// DELETE /api/v1/admin/posts/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PostRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Post", id }));
    }

    tracing::info!(post_id = id, user_id = admin.user_id, "Post deleted",);

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve the slug for a new post: the explicit one when given, otherwise
/// derived from the title.
fn resolve_slug(input: &CreatePost) -> Result<String, AppError> {
    if let Some(slug) = input.slug.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        validate_slug(slug)?;
        return Ok(slug.to_string());
    }

    let derived = slugify(&input.title);
    if derived.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Could not derive a slug from the title".into(),
        )));
    }
    Ok(derived)
}
