use std::sync::Arc;

use crate::auth::revocation::RevokedTokens;
use crate::config::ServerConfig;
use crate::storage::ImageStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: showreel_db::DbPool,
    /// Server configuration (JWT, admin credentials, upload limits).
    pub config: Arc<ServerConfig>,
    /// Backend that uploaded images are written to.
    pub images: Arc<dyn ImageStore>,
    /// Token ids revoked by signing out.
    pub revoked: Arc<RevokedTokens>,
}

impl AppState {
    pub fn new(
        pool: showreel_db::DbPool,
        config: ServerConfig,
        images: Arc<dyn ImageStore>,
    ) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            images,
            revoked: Arc::new(RevokedTokens::new()),
        }
    }
}
