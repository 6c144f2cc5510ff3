//! REST client for the showreel admin API.
//!
//! Wraps the `/api/v1/auth` and `/api/v1/admin` endpoints using [`reqwest`].
//! The bearer token obtained from [`AdminClient::login`] is attached to every
//! subsequent request.

use reqwest::StatusCode;
use serde::Serialize;
use showreel_core::reorder::ReorderEntry;

use crate::models::{
    ErrorBody, LoginResponse, ProjectDocument, ProjectRecord, Session, UploadResponse,
};

/// Errors from the admin REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Missing, expired, or rejected credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The server (or a local pre-check) rejected the input.
    #[error("{0}")]
    Validation(String),

    /// Uniqueness violation, e.g. a slug already in use.
    #[error("{0}")]
    Conflict(String),

    /// Any other non-2xx status.
    #[error("Server error ({status}): {message}")]
    Upstream { status: u16, message: String },
}

impl ClientError {
    /// Message suitable for an inline error next to the form or row.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => "Could not reach the server".to_string(),
            Self::Unauthorized(msg)
            | Self::NotFound(msg)
            | Self::Validation(msg)
            | Self::Conflict(msg) => msg.clone(),
            Self::Upstream { message, .. } => message.clone(),
        }
    }

    /// Classify by the body's `code` when the server sent one, falling back
    /// to the HTTP status for bodies without it (proxies, plain text).
    fn from_status(status: StatusCode, body: &str) -> Self {
        let (message, code) = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => (parsed.error, parsed.code),
            Err(_) => (body.to_string(), None),
        };
        match code.as_deref() {
            Some("UNAUTHORIZED") => return Self::Unauthorized(message),
            Some("NOT_FOUND") => return Self::NotFound(message),
            Some("VALIDATION_ERROR" | "BAD_REQUEST") => return Self::Validation(message),
            Some("CONFLICT") => return Self::Conflict(message),
            _ => {}
        }
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::PAYLOAD_TOO_LARGE => Self::Validation(message),
            StatusCode::CONFLICT => Self::Conflict(message),
            _ => Self::Upstream {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct ReorderBody<'a> {
    updates: &'a [ReorderEntry],
}

/// HTTP client for one showreel server.
#[derive(Debug, Clone)]
pub struct AdminClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl AdminClient {
    /// Create a client for a server, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Sign in with the admin credentials and keep the issued token.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<LoginResponse, ClientError> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(&LoginBody { email, password })
            .send()
            .await?;

        let login: LoginResponse = Self::parse_response(response).await?;
        self.token = Some(login.access_token.clone());
        Ok(login)
    }

    /// Revoke the current token on the server and forget it locally.
    pub async fn logout(&mut self) -> Result<(), ClientError> {
        let Some(token) = self.token.take() else {
            return Ok(());
        };
        let response = self
            .client
            .post(self.url("/auth/logout"))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// `GET /auth/session`. `None` when nobody is signed in.
    pub async fn session(&self) -> Result<Option<Session>, ClientError> {
        let response = self.authorized(self.client.get(self.url("/auth/session"))).send().await?;
        Self::parse_response(response).await
    }

    pub async fn list_projects(&self) -> Result<Vec<ProjectRecord>, ClientError> {
        let response = self
            .authorized(self.client.get(self.url("/admin/projects")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn get_project(&self, id: &str) -> Result<ProjectRecord, ClientError> {
        let response = self
            .authorized(self.client.get(self.url(&format!("/admin/projects/{id}"))))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn create_project(
        &self,
        document: &ProjectDocument,
    ) -> Result<ProjectRecord, ClientError> {
        let response = self
            .authorized(self.client.post(self.url("/admin/projects")))
            .json(document)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Replace the editable fields of an existing project.
    pub async fn update_project(
        &self,
        id: &str,
        document: &ProjectDocument,
    ) -> Result<ProjectRecord, ClientError> {
        let response = self
            .authorized(self.client.put(self.url(&format!("/admin/projects/{id}"))))
            .json(document)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .authorized(self.client.delete(self.url(&format!("/admin/projects/{id}"))))
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// Send a batch of `(id, order)` assignments.
    pub async fn reorder_projects(&self, updates: &[ReorderEntry]) -> Result<(), ClientError> {
        let response = self
            .authorized(self.client.post(self.url("/admin/projects/reorder")))
            .json(&ReorderBody { updates })
            .send()
            .await?;
        Self::check_status(response).await
    }

    /// Upload one image as multipart field `file` and return its public URL.
    pub async fn upload_image(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ClientError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .authorized(self.client.post(self.url("/admin/uploads")))
            .multipart(form)
            .send()
            .await?;
        let uploaded: UploadResponse = Self::parse_response(response).await?;
        Ok(uploaded.url)
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{path}", self.base_url)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Return the response unchanged on success, or the mapped
    /// [`ClientError`] built from the status and `{error, code}` body.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::from_status(status, &body));
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
