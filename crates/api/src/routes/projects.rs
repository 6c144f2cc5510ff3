//! Route definitions for the public `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::site;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET /        -> list_published
/// GET /{slug}  -> get_published
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(site::list_published))
        .route("/{slug}", get(site::get_published))
}
