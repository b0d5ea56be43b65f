//! Photo fixture loading for multipart uploads

use std::path::Path;

use crate::error::{ApiError, ApiResult};
use crate::types::FilePart;

/// Multipart field name the service reads photos from
pub const PHOTO_FIELD: &str = "pet_photo";

/// MIME type announced for a photo, from its extension
///
/// Unknown extensions are sent as opaque bytes; rejecting them is the
/// service's job.
pub fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

/// Read a photo from disk into a `pet_photo` file part
pub async fn load_photo(path: &Path) -> ApiResult<FilePart> {
    let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::Fixture {
        path: path.to_path_buf(),
        source,
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| PHOTO_FIELD.to_string());

    tracing::debug!("📎 Loaded photo {} ({} bytes)", file_name, bytes.len());

    Ok(FilePart {
        field: PHOTO_FIELD.to_string(),
        file_name,
        mime: mime_for(path).to_string(),
        bytes,
    })
}
