//! Wire models for the admin API, in the server's camelCase JSON shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use showreel_core::team::TeamMember;

/// A project as returned by the admin endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub client: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail: String,
    pub image1: String,
    pub image2: String,
    pub image3: String,
    pub team: Vec<TeamMember>,
    pub color: String,
    pub order: i32,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The document the project form submits on create and on update.
///
/// Rank is absent: it only changes through the reorder endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    pub slug: String,
    pub title: String,
    pub client: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail: String,
    pub image1: String,
    pub image2: String,
    pub image3: String,
    pub team: Vec<TeamMember>,
    pub color: String,
    pub published: bool,
}

/// The signed-in admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Response of `GET /auth/session` when someone is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: SessionUser,
    pub expires_at: DateTime<Utc>,
}

/// Response of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub user: SessionUser,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UploadResponse {
    pub url: String,
}

/// Error body produced by the server: `{ "error": ..., "code": ... }`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
    pub code: Option<String>,
}
