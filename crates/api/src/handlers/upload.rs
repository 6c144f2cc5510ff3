//! Handler for admin image uploads.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use showreel_core::error::CoreError;
use showreel_core::upload::{storage_key, validate_image};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::state::AppState;

/// Response body for a stored image.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

fn multipart_error(e: MultipartError, max_bytes: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::Core(CoreError::Validation(format!(
            "File is too large. Maximum is {} MB",
            max_bytes / (1024 * 1024)
        )));
    }
    AppError::BadRequest(e.body_text())
}

/// POST /api/v1/admin/uploads
///
/// Accepts a multipart form with a required `file` field holding one JPEG,
/// PNG, WebP or GIF image. Returns the public URL of the stored copy.
pub async fn upload_image(
    State(state): State<AppState>,
    session: AdminSession,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let max_bytes = state.config.upload_max_bytes;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_bytes))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let content_type = field.content_type().unwrap_or("").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, max_bytes))?;
        file = Some((content_type, data.to_vec()));
    }

    let (content_type, data) =
        file.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    let kind = validate_image(&content_type, &data, max_bytes)?;
    let key = storage_key(kind, &uuid::Uuid::new_v4().to_string());
    let size = data.len();
    let url = state.images.put(&key, kind.content_type(), data).await?;

    tracing::info!(%key, size, admin = %session.email, "Image uploaded");
    Ok(Json(UploadResponse { url }))
}
