//! JWT-based admin session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::error::AppError;
use crate::state::AppState;

/// The signed-in admin, extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Add it as a handler parameter to require a session. The extractor runs
/// before the request body is read, so a rejected request never reaches the
/// database:
///
/// ```ignore
/// async fn my_handler(session: AdminSession) -> AppResult<Json<()>> {
///     tracing::info!(email = %session.email, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// Admin account id (from `claims.sub`).
    pub subject: String,
    pub email: String,
    /// Token id, used to revoke this session on sign-out.
    pub token_id: String,
    /// Token expiry (UTC Unix timestamp).
    pub expires_at: i64,
}

impl AdminSession {
    /// Resolve the session carried by `headers`, if any.
    pub async fn from_headers(headers: &HeaderMap, state: &AppState) -> Result<Self, AppError> {
        let auth_header = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::unauthorized("Invalid Authorization format. Expected: Bearer <token>")
        })?;

        let claims = state
            .config
            .jwt
            .verify(token)
            .map_err(|_| AppError::unauthorized("Invalid or expired token"))?;

        if state.revoked.is_revoked(&claims.jti).await {
            return Err(AppError::unauthorized("Session has been signed out"));
        }

        Ok(AdminSession {
            subject: claims.sub,
            email: claims.email,
            token_id: claims.jti,
            expires_at: claims.exp,
        })
    }
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers, state).await
    }
}
