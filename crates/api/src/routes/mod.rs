//! Route tree assembly.

pub mod auth;
pub mod health;
pub mod images;
pub mod pages;
pub mod posts;
pub mod preview;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
/// /auth/refresh                    refresh (public)
/// /auth/logout                     logout (requires auth)
/// /auth/me                         current principal (requires auth)
///
/// /posts                           published listing, ?page= & ?q= (public)
/// /posts/{slug}                    post detail with rendered body (public)
/// /pages/{slug}                    page detail with rendered body (public)
///
/// /admin/posts                     list all, create        (admin only)
/// /admin/posts/{id}                get, update, delete     (admin only)
/// /admin/pages                     list all                (admin only)
/// /admin/pages/by-slug/{slug}      get-or-create for edit  (admin only)
/// /admin/pages/{id}                update                  (admin only)
/// /admin/images                    multipart upload (POST) (admin only)
/// /admin/preview                   markdown preview (POST) (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/posts", posts::public_router())
        .nest("/pages", pages::public_router())
        .nest("/admin/posts", posts::admin_router())
        .nest("/admin/pages", pages::admin_router())
        .nest("/admin/images", images::router())
        .nest("/admin/preview", preview::router())
}
