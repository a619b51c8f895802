//! Handler for the editor's markdown preview toggle.

use axum::Json;
use inkpot_core::markdown::render_markdown_to_html;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::guard::RequireAdmin;
use crate::response::DataResponse;

/// Request body for `POST /admin/preview`.
#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub content: String,
}

/// Rendered preview payload.
#[derive(Debug, Serialize)]
pub struct PreviewHtml {
    pub html: String,
}

/// POST /api/v1/admin/preview
///
/// Render a markdown draft to HTML without persisting anything.
pub async fn render(
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<PreviewRequest>,
) -> AppResult<Json<DataResponse<PreviewHtml>>> {
    let html = render_markdown_to_html(&input.content);
    Ok(Json(DataResponse {
        data: PreviewHtml { html },
    }))
}
