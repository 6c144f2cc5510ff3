//! Project entity model and DTOs.
//!
//! Field names serialize in camelCase, matching the admin UI's document
//! shape. The `display_order` column surfaces as `order`.

use serde::{Deserialize, Serialize};
use showreel_core::team::TeamMember;
use showreel_core::types::{ProjectId, Timestamp};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub slug: String,
    pub title: String,
    pub client: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail: String,
    pub image1: String,
    pub image2: String,
    pub image3: String,
    #[sqlx(json)]
    pub team: Vec<TeamMember>,
    pub color: String,
    #[sqlx(rename = "display_order")]
    pub order: i32,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
///
/// `slug` and `title` default to empty so that a missing field reaches
/// validation instead of failing deserialization. Every other `None` takes
/// the column default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    pub client: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail: Option<String>,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
    pub team: Option<Vec<TeamMember>>,
    /// Empty or absent falls back to `#ff6b35`.
    pub color: Option<String>,
    /// Defaults to 0.
    pub order: Option<i32>,
    /// Defaults to `true`.
    pub published: Option<bool>,
}

/// DTO for updating an existing project. Only `Some` fields are written.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub client: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail: Option<String>,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
    pub team: Option<Vec<TeamMember>>,
    pub color: Option<String>,
    pub order: Option<i32>,
    pub published: Option<bool>,
}
