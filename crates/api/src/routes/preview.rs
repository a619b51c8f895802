//! Route definition for the markdown preview.

use axum::routing::post;
use axum::Router;

use crate::handlers::preview;
use crate::state::AppState;

/// Markdown preview route, registered as `/admin/preview`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(preview::render))
}
