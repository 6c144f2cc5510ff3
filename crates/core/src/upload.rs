//! Image upload validation.
//!
//! Uploads are limited to JPEG, PNG, WebP and GIF files of at most
//! [`MAX_UPLOAD_BYTES`]. The declared content type must agree with the file's
//! magic bytes.

use image::ImageFormat;

use crate::error::CoreError;

/// Maximum accepted upload size (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Folder prefix for stored project images.
pub const UPLOAD_FOLDER: &str = "portfolio";

/// Accepted content types.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp", "image/gif"];

/// An accepted image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Webp,
    Gif,
}

impl ImageKind {
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/webp" => Some(Self::Webp),
            "image/gif" => Some(Self::Gif),
            _ => None,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
            Self::Gif => "image/gif",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Webp => "webp",
            Self::Gif => "gif",
        }
    }

    fn matches(self, format: ImageFormat) -> bool {
        matches!(
            (self, format),
            (Self::Jpeg, ImageFormat::Jpeg)
                | (Self::Png, ImageFormat::Png)
                | (Self::Webp, ImageFormat::WebP)
                | (Self::Gif, ImageFormat::Gif)
        )
    }
}

/// Check the declared type and size of a file before it is sent anywhere.
pub fn check_declared(
    content_type: &str,
    size: usize,
    max_bytes: usize,
) -> Result<ImageKind, CoreError> {
    let kind = ImageKind::from_content_type(content_type).ok_or_else(|| {
        CoreError::Validation(format!(
            "Unsupported file type '{content_type}'. Allowed: JPEG, PNG, WebP, GIF"
        ))
    })?;

    if size == 0 {
        return Err(CoreError::Validation("File is empty".into()));
    }
    if size > max_bytes {
        return Err(CoreError::Validation(format!(
            "File is too large ({size} bytes). Maximum is {} MB",
            max_bytes / (1024 * 1024)
        )));
    }

    Ok(kind)
}

/// Validate an uploaded file: declared type, size, and magic bytes.
pub fn validate_image(
    content_type: &str,
    bytes: &[u8],
    max_bytes: usize,
) -> Result<ImageKind, CoreError> {
    let kind = check_declared(content_type, bytes.len(), max_bytes)?;

    let sniffed = image::guess_format(bytes)
        .map_err(|_| CoreError::Validation("File content is not a recognized image".into()))?;
    if !kind.matches(sniffed) {
        return Err(CoreError::Validation(format!(
            "File content does not match declared type '{}'",
            kind.content_type()
        )));
    }

    Ok(kind)
}

/// Object key for a stored image, e.g. `portfolio/<id>.png`.
pub fn storage_key(kind: ImageKind, unique_id: &str) -> String {
    format!("{UPLOAD_FOLDER}/{unique_id}.{}", kind.extension())
}
