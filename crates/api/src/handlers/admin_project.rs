//! Handlers for the `/admin/projects` resource.
//!
//! Every handler takes an [`AdminSession`], so requests without a valid
//! session are rejected before the body is parsed or the store is touched.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use showreel_core::error::CoreError;
use showreel_core::project::{validate_replacement, validate_required};
use showreel_core::reorder::ReorderEntry;
use showreel_db::models::project::{CreateProject, Project, UpdateProject};
use showreel_db::repositories::{ProjectFilter, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Request body for `POST /admin/projects/reorder`.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub updates: Vec<ReorderEntry>,
}

fn not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// GET /api/v1/admin/projects
///
/// Every project, published or not, in rank order.
pub async fn list(
    State(state): State<AppState>,
    _session: AdminSession,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool, ProjectFilter::admin()).await?;
    Ok(Json(projects))
}

/// POST /api/v1/admin/projects
pub async fn create(
    State(state): State<AppState>,
    session: AdminSession,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_required(&input.title, &input.slug)?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(
        project_id = %project.id,
        slug = %project.slug,
        admin = %session.email,
        "Project created"
    );
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/admin/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// PUT /api/v1/admin/projects/{id}
///
/// Fields absent from the body keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<String>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    validate_replacement("title", input.title.as_deref())?;
    validate_replacement("slug", input.slug.as_deref())?;

    let project = ProjectRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(project_id = %project.id, admin = %session.email, "Project updated");
    Ok(Json(project))
}

/// DELETE /api/v1/admin/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.pool, &id).await? {
        tracing::info!(project_id = %id, admin = %session.email, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// POST /api/v1/admin/projects/reorder
///
/// Applies each `{id, order}` pair as given. Contiguity is not checked and
/// unknown ids are skipped.
pub async fn reorder(
    State(state): State<AppState>,
    session: AdminSession,
    Json(input): Json<ReorderRequest>,
) -> AppResult<Json<SuccessResponse>> {
    let touched = ProjectRepo::reorder(&state.pool, &input.updates).await?;
    tracing::info!(
        requested = input.updates.len(),
        touched,
        admin = %session.email,
        "Projects reordered"
    );
    Ok(Json(SuccessResponse::ok()))
}
