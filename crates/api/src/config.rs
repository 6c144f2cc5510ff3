use std::path::PathBuf;

use showreel_core::upload::MAX_UPLOAD_BYTES;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// Most fields have defaults suitable for local development. The database
/// URL, JWT secret, and admin credentials must always be provided.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// The single admin identity allowed to sign in.
    pub admin: AdminCredentials,
    /// Where uploaded images are stored.
    pub storage: StorageConfig,
    /// Largest accepted upload in bytes (default: 10 MiB).
    pub upload_max_bytes: usize,
}

/// Credentials of the one admin account.
#[derive(Clone)]
pub struct AdminCredentials {
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

impl AdminCredentials {
    /// Load admin credentials from `ADMIN_EMAIL` and `ADMIN_PASSWORD_HASH`.
    ///
    /// # Panics
    ///
    /// Panics if either variable is missing or empty.
    pub fn from_env() -> Self {
        let email = std::env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set");
        let password_hash =
            std::env::var("ADMIN_PASSWORD_HASH").expect("ADMIN_PASSWORD_HASH must be set");
        assert!(!email.trim().is_empty(), "ADMIN_EMAIL must not be empty");
        assert!(
            !password_hash.is_empty(),
            "ADMIN_PASSWORD_HASH must not be empty"
        );

        Self {
            email: email.trim().to_string(),
            password_hash,
        }
    }

    /// Emails compare case-insensitively, ignoring surrounding whitespace.
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }
}

/// Image storage backend selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// Files written under `dir` and served by this server at `/uploads`.
    Local {
        dir: PathBuf,
        /// Prefix for returned URLs, e.g. `http://localhost:3000`.
        public_base_url: String,
    },
    /// Objects written to an S3 bucket.
    S3 {
        bucket: String,
        /// Prefix for returned URLs, e.g. a CDN in front of the bucket.
        public_url: String,
    },
}

impl StorageConfig {
    /// Load storage configuration from environment variables.
    ///
    /// | Env Var            | Default                  |
    /// |--------------------|--------------------------|
    /// | `STORAGE_BACKEND`  | `local`                  |
    /// | `UPLOAD_DIR`       | `storage/uploads`        |
    /// | `PUBLIC_BASE_URL`  | `http://localhost:3000`  |
    /// | `S3_BUCKET`        | -- (required for `s3`)   |
    /// | `S3_PUBLIC_URL`    | -- (required for `s3`)   |
    pub fn from_env() -> Self {
        let backend = std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "local".into());
        match backend.as_str() {
            "local" => Self::Local {
                dir: std::env::var("UPLOAD_DIR")
                    .unwrap_or_else(|_| "storage/uploads".into())
                    .into(),
                public_base_url: std::env::var("PUBLIC_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:3000".into())
                    .trim_end_matches('/')
                    .to_string(),
            },
            "s3" => Self::S3 {
                bucket: std::env::var("S3_BUCKET")
                    .expect("S3_BUCKET must be set when STORAGE_BACKEND=s3"),
                public_url: std::env::var("S3_PUBLIC_URL")
                    .expect("S3_PUBLIC_URL must be set when STORAGE_BACKEND=s3")
                    .trim_end_matches('/')
                    .to_string(),
            },
            other => panic!("Unknown STORAGE_BACKEND '{other}'. Expected 'local' or 's3'"),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `UPLOAD_MAX_BYTES`     | `10485760`                 |
    ///
    /// See [`JwtConfig::from_env`], [`AdminCredentials::from_env`] and
    /// [`StorageConfig::from_env`] for the remaining variables.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upload_max_bytes: usize = std::env::var("UPLOAD_MAX_BYTES")
            .map(|v| v.parse().expect("UPLOAD_MAX_BYTES must be a valid usize"))
            .unwrap_or(MAX_UPLOAD_BYTES);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            admin: AdminCredentials::from_env(),
            storage: StorageConfig::from_env(),
            upload_max_bytes,
        }
    }
}
