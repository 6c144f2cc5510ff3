use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use showreel_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// Projects table status payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DbStatusResponse {
    pub status: &'static str,
    pub table_exists: bool,
    pub project_count: i64,
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = showreel_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// GET /health/db -- reports whether the projects table exists and its size.
async fn db_status(State(state): State<AppState>) -> AppResult<Json<DbStatusResponse>> {
    let table = ProjectRepo::table_status(&state.pool).await?;
    Ok(Json(DbStatusResponse {
        status: "connected",
        table_exists: table.table_exists,
        project_count: table.project_count,
    }))
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/db", get(db_status))
}
