//! Object-key generation and payload checks for image uploads.
//!
//! Uploaded files are addressed as `{context}/{randomId}.{ext}` inside the
//! public bucket. The random id keeps uploads collision-free without a
//! database round trip; the original extension is preserved so public URLs
//! stay recognizable.

use image::ImageFormat;
use rand::Rng;

use crate::error::CoreError;

/// Length of the random filename stem.
pub const FILENAME_LENGTH: usize = 13;

/// Generate an object key for an uploaded file.
///
/// `context` groups uploads (e.g. `"covers"`, `"inline"`); `original_name` is
/// the client-side filename whose extension is carried over (defaulting to
/// `bin` when it has none).
pub fn object_key(context: &str, original_name: &str) -> Result<String, CoreError> {
    validate_context(context)?;

    let ext = original_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or_else(|| "bin".to_string());

    let stem: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(FILENAME_LENGTH)
        .map(char::from)
        .collect();
    let stem = stem.to_lowercase();

    Ok(format!("{context}/{stem}.{ext}"))
}

/// Validate an upload context segment.
///
/// The context becomes a path segment of the object key, so it must not be
/// empty or contain separators.
pub fn validate_context(context: &str) -> Result<(), CoreError> {
    if context.is_empty() {
        return Err(CoreError::Validation("Upload context is required".into()));
    }
    if !context
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(CoreError::Validation(format!(
            "Invalid upload context '{context}': only alphanumerics, hyphens, and underscores are allowed"
        )));
    }
    Ok(())
}

/// Sniff an uploaded payload and return its image content type.
///
/// Only png, jpeg, webp, and gif are accepted; anything else is rejected
/// before the upload is attempted.
pub fn sniff_image_content_type(bytes: &[u8]) -> Result<&'static str, CoreError> {
    let format = image::guess_format(bytes)
        .map_err(|_| CoreError::Validation("Upload is not a recognized image".into()))?;

    match format {
        ImageFormat::Png => Ok("image/png"),
        ImageFormat::Jpeg => Ok("image/jpeg"),
        ImageFormat::WebP => Ok("image/webp"),
        ImageFormat::Gif => Ok("image/gif"),
        other => Err(CoreError::Validation(format!(
            "Unsupported image format: {other:?}"
        ))),
    }
}
