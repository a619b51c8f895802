//! Route definitions for static pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Public page routes, registered as `/pages`.
pub fn public_router() -> Router<AppState> {
    Router::new().route("/{slug}", get(pages::get_by_slug))
}

/// Admin page routes, registered as `/admin/pages`.
///
/// ```text
/// GET /                    list_all
/// GET /by-slug/{slug}      get_or_create (for the editor)
/// PUT /{id}                update
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::list_all))
        .route("/by-slug/{slug}", get(pages::get_or_create))
        .route("/{id}", axum::routing::put(pages::update))
}
