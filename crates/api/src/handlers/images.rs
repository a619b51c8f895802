//! Handler for image uploads into the public bucket.
//!
//! The flow mirrors what the editor needs: ensure the bucket exists (created
//! on first use), sniff the payload to confirm it is an image, generate a
//! random object key preserving the original extension, upload, and return
//! the public URL.

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::Json;
use inkpot_core::upload::{object_key, sniff_image_content_type};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::guard::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the upload endpoint.
#[derive(Debug, Deserialize)]
pub struct UploadParams {
    /// Folder the object is grouped under inside the bucket (e.g. `covers`).
    pub context: Option<String>,
}

/// Response payload for a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadResult {
    /// Publicly reachable URL of the uploaded image.
    pub url: String,
    /// Object key inside the bucket.
    pub key: String,
}

/// POST /api/v1/admin/images
///
/// Multipart upload of a single image file.
pub async fn upload(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadResult>>)> {
    let context = params.context.as_deref().unwrap_or("uploads");

    // Take the first file field; the editor sends exactly one.
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
        .ok_or_else(|| AppError::BadRequest("Multipart body contains no file".into()))?;

    let filename = field.file_name().unwrap_or("upload").to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    if bytes.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }

    let content_type = sniff_image_content_type(&bytes)?;
    let key = object_key(context, &filename)?;
    let size_bytes = bytes.len();

    // The bucket is created on first use; subsequent calls are a cheap check.
    state.store.ensure_bucket().await?;
    state.store.put(&key, bytes.to_vec(), content_type).await?;

    let url = state.store.public_url(&key);

    tracing::info!(
        key = %key,
        content_type,
        size_bytes,
        user_id = admin.user_id,
        "Image uploaded",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadResult { url, key },
        }),
    ))
}
