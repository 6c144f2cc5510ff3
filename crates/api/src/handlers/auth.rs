//! Handlers for the `/auth` resource (login, session, logout).

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::state::AppState;

/// Account id carried in the `sub` claim of admin tokens.
pub const ADMIN_ACCOUNT_ID: &str = "admin";

/// Display name of the admin account.
const ADMIN_DISPLAY_NAME: &str = "Admin";

const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public admin info embedded in auth responses.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// The current session as reported by `GET /auth/session`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub user: UserInfo,
    pub expires_at: DateTime<Utc>,
}

fn user_info(id: &str, email: &str) -> UserInfo {
    UserInfo {
        id: id.to_string(),
        email: email.to_string(),
        name: ADMIN_DISPLAY_NAME.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with the configured admin email and password.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let admin = &state.config.admin;

    if !admin.email_matches(&input.email) {
        tracing::warn!("Login attempt with unknown email");
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    }

    let password_valid = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::warn!("Login attempt with wrong password");
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    }

    let issued = state
        .config
        .jwt
        .issue(ADMIN_ACCOUNT_ID, &admin.email)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(email = %admin.email, "Admin signed in");

    Ok(Json(AuthResponse {
        access_token: issued.token,
        expires_in: state.config.jwt.expires_in_secs(),
        user: user_info(ADMIN_ACCOUNT_ID, &admin.email),
    }))
}

/// GET /api/v1/auth/session
///
/// Returns the current session, or `null` when the request carries no valid
/// token. Never fails with 401.
pub async fn session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<Option<SessionInfo>> {
    let session = AdminSession::from_headers(&headers, &state).await.ok();
    Json(session.map(|s| SessionInfo {
        user: user_info(&s.subject, &s.email),
        expires_at: DateTime::from_timestamp(s.expires_at, 0).unwrap_or_default(),
    }))
}

/// POST /api/v1/auth/logout
///
/// Revoke the presented token. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, session: AdminSession) -> StatusCode {
    state
        .revoked
        .revoke(&session.token_id, session.expires_at)
        .await;
    tracing::info!(email = %session.email, "Admin signed out");
    StatusCode::NO_CONTENT
}
