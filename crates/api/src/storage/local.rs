use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{check_key, ImageStore, StorageError};

/// URL path under which the local upload directory is served.
pub const UPLOADS_ROUTE: &str = "/uploads";

/// Stores images on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalImageStore {
    pub fn new(root: PathBuf, public_base_url: &str) -> Self {
        Self {
            root,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn put(
        &self,
        key: &str,
        _content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        check_key(key)?;
        let path = self.root.join(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, &bytes).await?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "Stored image locally");
        Ok(format!("{}{UPLOADS_ROUTE}/{key}", self.public_base_url))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn writes_file_and_returns_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path().to_path_buf(), "http://localhost:3000/");

        let url = store
            .put("portfolio/abc.png", "image/png", b"png-bytes".to_vec())
            .await
            .unwrap();

        assert_eq!(url, "http://localhost:3000/uploads/portfolio/abc.png");
        let written = std::fs::read(dir.path().join("portfolio/abc.png")).unwrap();
        assert_eq!(written, b"png-bytes");
    }

    #[tokio::test]
    async fn rejects_escaping_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path().to_path_buf(), "http://localhost:3000");

        let result = store.put("../escape.png", "image/png", vec![1]).await;
        assert_matches!(result, Err(StorageError::InvalidKey(_)));
    }
}
