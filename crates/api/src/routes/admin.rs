//! Route definitions for the `/admin` area. Every route requires a session.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{admin_project, upload};
use crate::state::AppState;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /projects           -> list
/// POST   /projects           -> create
/// POST   /projects/reorder   -> reorder
/// GET    /projects/{id}      -> get_by_id
/// PUT    /projects/{id}      -> update
/// DELETE /projects/{id}      -> delete
/// POST   /uploads            -> upload_image (multipart)
/// ```
pub fn router(upload_max_bytes: usize) -> Router<AppState> {
    let project_routes = Router::new()
        .route("/", get(admin_project::list).post(admin_project::create))
        .route("/reorder", post(admin_project::reorder))
        .route(
            "/{id}",
            get(admin_project::get_by_id)
                .put(admin_project::update)
                .delete(admin_project::delete),
        );

    let upload_routes = Router::new()
        .route("/", post(upload::upload_image))
        .layer(DefaultBodyLimit::max(
            upload_max_bytes + MULTIPART_OVERHEAD_BYTES,
        ));

    Router::new()
        .nest("/projects", project_routes)
        .nest("/uploads", upload_routes)
}
