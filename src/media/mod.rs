//! Loading local image and video files into prompt parts.

use std::ffi::OsStr;
use std::path::Path;

use crate::error::VertexAiError;
use crate::models::Part;

/// Returns the media type for an image file, judged by its extension.
///
/// Extensions are matched case-sensitively; anything other than `png`,
/// `jpg`, or `jpeg` is rejected.
///
/// # Errors
///
/// Returns [`VertexAiError::UnsupportedMediaType`] for unrecognized
/// extensions.
pub fn image_media_type(path: &Path) -> Result<&'static str, VertexAiError> {
    match path.extension().and_then(OsStr::to_str) {
        Some("png") => Ok("image/png"),
        Some("jpg") | Some("jpeg") => Ok("image/jpeg"),
        _ => Err(VertexAiError::UnsupportedMediaType {
            kind: "image",
            path: path.to_path_buf(),
        }),
    }
}

/// Returns the media type for a video file, judged by its extension.
///
/// Extensions are matched case-sensitively; anything other than `mpg`,
/// `mov`, `mp4`, or `webm` is rejected.
///
/// # Errors
///
/// Returns [`VertexAiError::UnsupportedMediaType`] for unrecognized
/// extensions.
pub fn video_media_type(path: &Path) -> Result<&'static str, VertexAiError> {
    match path.extension().and_then(OsStr::to_str) {
        Some("mpg") => Ok("video/mpeg"),
        Some("mov") => Ok("video/quicktime"),
        Some("mp4") => Ok("video/mp4"),
        Some("webm") => Ok("video/webm"),
        _ => Err(VertexAiError::UnsupportedMediaType {
            kind: "video",
            path: path.to_path_buf(),
        }),
    }
}

/// Reads an image file into an inline-data prompt part.
///
/// # Errors
///
/// Returns an error if the extension is not a recognized image type or
/// the file cannot be read.
pub async fn image_part(path: &Path) -> Result<Part, VertexAiError> {
    let media_type = image_media_type(path)?;
    let bytes = tokio::fs::read(path).await?;
    Ok(Part::inline_data(media_type, bytes))
}

/// Reads a video file into an inline-data prompt part.
///
/// # Errors
///
/// Returns an error if the extension is not a recognized video type or
/// the file cannot be read.
pub async fn video_part(path: &Path) -> Result<Part, VertexAiError> {
    let media_type = video_media_type(path)?;
    let bytes = tokio::fs::read(path).await?;
    Ok(Part::inline_data(media_type, bytes))
}
