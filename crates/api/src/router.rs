//! Assembles the HTTP application.
//!
//! [`build_app_router`] is the single entry point used by `main.rs` and by
//! the integration tests, so both run the same routes behind the same layers.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::{ServerConfig, StorageConfig};
use crate::routes;
use crate::state::AppState;
use crate::storage::local::UPLOADS_ROUTE;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Preflight responses may be cached by browsers for this long.
const CORS_MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// Health probes, the versioned API, and (for local storage) the upload
/// directory, wrapped in [`with_http_layers`].
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let mut app = routes::health::router().nest("/api/v1", routes::api_routes(config));

    if let StorageConfig::Local { dir, .. } = &config.storage {
        app = app.nest_service(UPLOADS_ROUTE, ServeDir::new(dir));
    }

    with_http_layers(app, config).with_state(state)
}

/// Wrap `app` in the request pipeline. Outermost first, a request passes:
///
/// ```text
/// CORS -> assign x-request-id -> trace span -> echo x-request-id
///      -> timeout (408) -> panic guard (500) -> handler
/// ```
fn with_http_layers(app: Router<AppState>, config: &ServerConfig) -> Router<AppState> {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let timeout = Duration::from_secs(config.request_timeout_secs);

    app.layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(config))
}

/// CORS for the configured admin/site origins.
///
/// Panics at startup on an origin that is not a valid header value.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{origin}': {e}"))
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}
