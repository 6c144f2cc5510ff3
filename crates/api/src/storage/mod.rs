//! Image storage backends.
//!
//! Handlers talk to an [`ImageStore`] trait object so the backend can be
//! chosen at startup from [`StorageConfig`]:
//!
//! - [`local::LocalImageStore`] -- writes to a directory served at `/uploads`.
//! - [`s3::S3ImageStore`] -- writes to an S3 bucket.

pub mod local;
pub mod s3;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::StorageConfig;

/// Errors raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Object storage request failed: {0}")]
    Upstream(String),
}

/// A place that accepts one image and hands back its public URL.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store `bytes` under `key` and return the URL the image is served from.
    async fn put(&self, key: &str, content_type: &str, bytes: Vec<u8>)
        -> Result<String, StorageError>;
}

/// Reject keys that could escape the storage root.
pub(crate) fn check_key(key: &str) -> Result<(), StorageError> {
    let escapes = key.is_empty()
        || key.starts_with('/')
        || key.contains('\\')
        || key.split('/').any(|part| part.is_empty() || part == "." || part == "..");
    if escapes {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// Build the configured image store.
pub async fn build_image_store(config: &StorageConfig) -> Arc<dyn ImageStore> {
    match config {
        StorageConfig::Local {
            dir,
            public_base_url,
        } => {
            tracing::info!(dir = %dir.display(), "Using local image storage");
            Arc::new(local::LocalImageStore::new(dir.clone(), public_base_url))
        }
        StorageConfig::S3 { bucket, public_url } => {
            tracing::info!(%bucket, "Using S3 image storage");
            Arc::new(s3::S3ImageStore::from_env(bucket, public_url).await)
        }
    }
}
