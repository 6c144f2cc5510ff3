//! State of one image field on the project form.

use showreel_core::upload::{check_declared, MAX_UPLOAD_BYTES};

use crate::api::AdminApi;

/// An image URL slot with its own upload progress and error.
///
/// Each field uploads independently, so several can be in flight at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageField {
    value: String,
    uploading: bool,
    error: Option<String>,
}

impl ImageField {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Paste a URL directly.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.value = url.into();
        self.error = None;
    }

    pub fn remove(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Upload a file and, on success, use its public URL as the value.
    ///
    /// Type and size are checked before anything is sent. On failure the
    /// previous value is kept and the error is shown next to the field.
    pub async fn upload(
        &mut self,
        api: &impl AdminApi,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> bool {
        if let Err(e) = check_declared(content_type, bytes.len(), MAX_UPLOAD_BYTES) {
            self.error = Some(e.to_string());
            return false;
        }

        self.uploading = true;
        self.error = None;
        let result = api.upload_image(file_name, content_type, bytes).await;
        self.uploading = false;

        match result {
            Ok(url) => {
                self.value = url;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, file_name, "Image upload failed");
                self.error = Some(e.user_message());
                false
            }
        }
    }
}
