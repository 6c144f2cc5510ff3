//! HTTP error mapping.
//!
//! Every failure leaves the server as `{ "error": <message>, "code": <CODE> }`.
//! Client mistakes carry their message. Store and storage failures are logged
//! here and reach the client only as a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use showreel_core::error::CoreError;

use crate::storage::StorageError;

const GENERIC_INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Unique constraints with a message fit for the admin form.
const CONFLICT_MESSAGES: &[(&str, &str)] =
    &[("uq_projects_slug", "A project with this slug already exists")];

/// Check constraints guarding required fields, with their client message.
const CHECK_MESSAGES: &[(&str, &str)] = &[
    ("ck_projects_title_not_blank", "Title must not be empty"),
    ("ck_projects_slug_not_blank", "Slug must not be empty"),
];

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Malformed request that never reached domain validation.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl AppError {
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Core(CoreError::Unauthorized(msg.into()))
    }

    /// Status, machine code, and client-facing message. Logs the details
    /// that are withheld from the client.
    fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            Self::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            Self::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            Self::Core(CoreError::Conflict(msg)) => {
                (StatusCode::CONFLICT, "CONFLICT", msg.clone())
            }
            Self::Core(CoreError::Unauthorized(msg)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
            }
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            Self::Database(err) => classify_sqlx_error(err),
            Self::Core(CoreError::Internal(detail)) | Self::InternalError(detail) => {
                tracing::error!(error = %detail, "Internal error");
                internal()
            }
            Self::Storage(err) => {
                tracing::error!(error = %err, "Image storage failed");
                internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error) = self.classify();
        (status, Json(ErrorBody { error, code })).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        GENERIC_INTERNAL_MESSAGE.to_string(),
    )
}

/// `RowNotFound` is a 404, a violated `uq_*` constraint is a 409, and a
/// violated `ck_*` check is a 400. Anything else is logged and hidden behind
/// a 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if let sqlx::Error::RowNotFound = err {
        return (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        );
    }

    let unique_constraint = err
        .as_database_error()
        .filter(|db| db.is_unique_violation())
        .and_then(|db| db.constraint())
        .filter(|name| name.starts_with("uq_"));
    if let Some(constraint) = unique_constraint {
        let message = CONFLICT_MESSAGES
            .iter()
            .find(|(name, _)| *name == constraint)
            .map(|(_, msg)| msg.to_string())
            .unwrap_or_else(|| format!("Duplicate value violates unique constraint: {constraint}"));
        return (StatusCode::CONFLICT, "CONFLICT", message);
    }

    let check_constraint = err
        .as_database_error()
        .filter(|db| db.is_check_violation())
        .and_then(|db| db.constraint())
        .filter(|name| name.starts_with("ck_"));
    if let Some(constraint) = check_constraint {
        let message = CHECK_MESSAGES
            .iter()
            .find(|(name, _)| *name == constraint)
            .map(|(_, msg)| msg.to_string())
            .unwrap_or_else(|| format!("Value violates check constraint: {constraint}"));
        return (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message);
    }

    tracing::error!(error = %err, "Database error");
    internal()
}
