//! Upload media-type rules: extension allow-lists, [`MediaKind`] derivation,
//! and stored-filename generation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::slug::slugify;

/// Accepted image file extensions.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Accepted video file extensions.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "webm"];

/// Media classification of a portfolio upload, derived from the file
/// extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Database/text representation (`"image"` / `"video"`).
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// Extract the lowercase extension from a filename, if any.
pub fn file_extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Derive the [`MediaKind`] for an uploaded filename, rejecting anything
/// outside the allow-lists.
pub fn media_kind_for(filename: &str) -> Result<MediaKind, CoreError> {
    let ext = file_extension(filename).ok_or_else(|| {
        CoreError::UnsupportedMedia(format!("File '{filename}' has no extension"))
    })?;
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Ok(MediaKind::Image)
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Ok(MediaKind::Video)
    } else {
        Err(CoreError::UnsupportedMedia(format!(
            "Unsupported file type '.{ext}'. Accepted: {IMAGE_EXTENSIONS:?} and {VIDEO_EXTENSIONS:?}"
        )))
    }
}

/// Build the stored filename for an upload: `{title-slug}_{original-name}`
/// with the original name sanitized to its basename.
///
/// The title slug keeps names stable and collision-resistant across items;
/// the original filename preserves the extension the allow-list accepted.
pub fn stored_filename(title: &str, original: &str) -> String {
    // Strip any client-supplied path components.
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original)
        .replace(' ', "_");
    let slug = slugify(title);
    if slug.is_empty() {
        base
    } else {
        format!("{slug}_{base}")
    }
}
