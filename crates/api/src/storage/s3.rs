use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;

use super::{check_key, ImageStore, StorageError};

/// Stores images in an S3 bucket.
///
/// Credentials and region come from the standard AWS environment
/// (`AWS_ACCESS_KEY_ID`, `AWS_REGION`, profiles, instance metadata).
#[derive(Debug, Clone)]
pub struct S3ImageStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_url: String,
}

impl S3ImageStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: &str, public_url: &str) -> Self {
        Self {
            client,
            bucket: bucket.to_string(),
            public_url: public_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a client from the ambient AWS configuration.
    pub async fn from_env(bucket: &str, public_url: &str) -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(aws_sdk_s3::Client::new(&sdk_config), bucket, public_url)
    }

    /// Public URL an object with `key` is served from.
    pub fn object_url(&self, key: &str) -> String {
        format!("{}/{key}", self.public_url)
    }
}

#[async_trait]
impl ImageStore for S3ImageStore {
    async fn put(
        &self,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        check_key(key)?;
        let size = bytes.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Upstream(DisplayErrorContext(&e).to_string()))?;

        tracing::debug!(bucket = %self.bucket, key, size, "Stored image in S3");
        Ok(self.object_url(key))
    }
}
