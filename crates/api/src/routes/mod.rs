pub mod admin;
pub mod auth;
pub mod health;
pub mod projects;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
/// /auth/session                    current session or null (public)
/// /auth/logout                     revoke current token (requires auth)
///
/// /projects                        published list (public)
/// /projects/{slug}                 published detail (public)
///
/// /admin/projects                  list, create (requires auth)
/// /admin/projects/reorder          reorder batch (POST)
/// /admin/projects/{id}             get, update, delete
/// /admin/uploads                   image upload (multipart)
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", projects::router())
        .nest("/admin", admin::router(config.upload_max_bytes))
}
