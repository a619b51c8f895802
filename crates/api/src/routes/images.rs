//! Route definition for image uploads.

use axum::routing::post;
use axum::Router;

use crate::handlers::images;
use crate::state::AppState;

/// Image upload route, registered as `/admin/images`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(images::upload))
}
