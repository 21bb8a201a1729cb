//! Image attachment loading.
//!
//! The image comes from a user-supplied path. Only common image formats are
//! accepted and the size cap comes from configuration.

use std::path::Path;

use crate::core::config::AttachmentConfig;
use crate::core::error::{AppError, Result};

/// An image file staged for submission
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// MIME type for a file extension, image formats only
fn content_type_for_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Load an image attachment from disk, enforcing the configured size cap
pub async fn load_image(path: &Path, config: &AttachmentConfig) -> Result<ImageAttachment> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AppError::BadRequest(format!("Invalid image path: {}", path.display())))?
        .to_string();

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let content_type = content_type_for_extension(extension).ok_or_else(|| {
        AppError::BadRequest(format!("Unsupported image format: '{}'", file_name))
    })?;

    let bytes = tokio::fs::read(path).await?;

    if bytes.len() > config.max_image_bytes {
        return Err(AppError::BadRequest(format!(
            "Image exceeds the {} byte limit: {}",
            config.max_image_bytes, file_name
        )));
    }

    tracing::debug!(
        "Image staged for submission: {} ({} bytes, {})",
        file_name,
        bytes.len(),
        content_type
    );

    Ok(ImageAttachment {
        file_name,
        content_type: content_type.to_string(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for_known_extensions() {
        assert_eq!(content_type_for_extension("jpg"), Some("image/jpeg"));
        assert_eq!(content_type_for_extension("JPEG"), Some("image/jpeg"));
        assert_eq!(content_type_for_extension("png"), Some("image/png"));
        assert_eq!(content_type_for_extension("svg"), Some("image/svg+xml"));
    }

    #[test]
    fn test_content_type_rejects_non_images() {
        assert_eq!(content_type_for_extension("pdf"), None);
        assert_eq!(content_type_for_extension("exe"), None);
        assert_eq!(content_type_for_extension(""), None);
    }

    #[tokio::test]
    async fn test_load_image_enforces_size_cap() {
        let dir = std::env::temp_dir();
        let path = dir.join("ecopoint_test_cap.png");
        tokio::fs::write(&path, vec![0u8; 64]).await.unwrap();

        let config = AttachmentConfig { max_image_bytes: 16 };
        let err = load_image(&path, &config).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        tokio::fs::remove_file(&path).await.ok();
    }

    #[tokio::test]
    async fn test_load_image_reads_file_and_maps_mime() {
        let dir = std::env::temp_dir();
        let path = dir.join("ecopoint_test_load.png");
        tokio::fs::write(&path, vec![1u8, 2, 3]).await.unwrap();

        let config = AttachmentConfig {
            max_image_bytes: 1024,
        };
        let image = load_image(&path, &config).await.unwrap();
        assert_eq!(image.file_name, "ecopoint_test_load.png");
        assert_eq!(image.content_type, "image/png");
        assert_eq!(image.bytes, vec![1, 2, 3]);

        tokio::fs::remove_file(&path).await.ok();
    }

    #[tokio::test]
    async fn test_load_image_rejects_unknown_extension() {
        let config = AttachmentConfig {
            max_image_bytes: 1024,
        };
        let err = load_image(Path::new("notes.txt"), &config).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
