//! Public read handlers backing the portfolio pages.
//!
//! Only published projects are visible. Store failures are logged and
//! degrade to "no data": an empty list or a 404.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use showreel_core::error::CoreError;
use showreel_core::project::{color_or_default, gallery_images};
use showreel_core::team::TeamMember;
use showreel_core::video::embed_url;
use showreel_db::models::project::Project;
use showreel_db::repositories::{ProjectFilter, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// One card on the portfolio grid.
#[derive(Debug, Serialize)]
pub struct ProjectSummary {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub client: String,
    pub thumbnail: String,
    pub color: String,
}

impl From<&Project> for ProjectSummary {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id.clone(),
            slug: p.slug.clone(),
            title: p.title.clone(),
            client: p.client.clone(),
            thumbnail: p.thumbnail.clone(),
            color: color_or_default(&p.color).to_string(),
        }
    }
}

/// Everything the project detail page renders.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub client: String,
    pub description: String,
    pub video_url: String,
    /// Player URL derived from `video_url`.
    pub embed_url: String,
    pub thumbnail: String,
    /// Non-empty gallery images in slot order.
    pub images: Vec<String>,
    pub team: Vec<TeamMember>,
    pub color: String,
}

impl From<Project> for ProjectDetail {
    fn from(p: Project) -> Self {
        let images = gallery_images(&[p.image1.as_str(), p.image2.as_str(), p.image3.as_str()]);
        let color = color_or_default(&p.color).to_string();
        Self {
            embed_url: embed_url(&p.video_url),
            id: p.id,
            slug: p.slug,
            title: p.title,
            client: p.client,
            description: p.description,
            video_url: p.video_url,
            thumbnail: p.thumbnail,
            images,
            team: p.team,
            color,
        }
    }
}

/// GET /api/v1/projects
pub async fn list_published(
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<ProjectSummary>>> {
    let projects = match ProjectRepo::list(&state.pool, ProjectFilter::public()).await {
        Ok(projects) => projects,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load published projects");
            Vec::new()
        }
    };
    Json(DataResponse {
        data: projects.iter().map(ProjectSummary::from).collect(),
    })
}

/// GET /api/v1/projects/{slug}
pub async fn get_published(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<ProjectDetail>>> {
    let found = match ProjectRepo::find_by_slug(&state.pool, &slug, true).await {
        Ok(found) => found,
        Err(e) => {
            tracing::error!(error = %e, %slug, "Failed to load project");
            None
        }
    };
    let project = found.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: slug,
        })
    })?;
    Ok(Json(DataResponse {
        data: ProjectDetail::from(project),
    }))
}
