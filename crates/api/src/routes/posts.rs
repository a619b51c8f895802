//! Route definitions for blog posts.

use axum::routing::get;
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// Public post routes, registered as `/posts`.
///
/// ```text
/// GET /          list_published (?page= & ?q=)
/// GET /{slug}    get_by_slug
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_published))
        .route("/{slug}", get(posts::get_by_slug))
}

/// Admin post routes, registered as `/admin/posts`.
///
/// ```text
/// GET    /       list_all
/// POST   /       create
/// GET    /{id}   get_by_id
/// PUT    /{id}   update
/// DELETE /{id}   delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_all).post(posts::create))
        .route(
            "/{id}",
            get(posts::get_by_id)
                .put(posts::update)
                .delete(posts::delete),
        )
}
