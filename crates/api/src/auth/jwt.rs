//! Signed session tokens for the admin account.
//!
//! A session is a single HS256 JWT. There is no refresh flow: the token is
//! valid until `exp` or until its `jti` is revoked by signing out.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session lifetime used when `SESSION_TTL_HOURS` is unset.
const DEFAULT_SESSION_TTL_HOURS: i64 = 12;

/// Payload of a session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Admin account id.
    pub sub: String,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
    /// Token id; the revocation list is keyed by it.
    pub jti: String,
}

/// A freshly signed session token and the facts the handler reports back.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub token_id: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC secret for signing and verification.
    pub secret: String,
    pub session_ttl: Duration,
}

impl JwtConfig {
    /// Read `JWT_SECRET` (required, non-empty) and `SESSION_TTL_HOURS`
    /// (default `12`).
    ///
    /// # Panics
    ///
    /// Panics when the secret is missing or the TTL is not a positive integer.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        assert!(!secret.is_empty(), "JWT_SECRET must be set to a non-empty value");

        let hours: i64 = match std::env::var("SESSION_TTL_HOURS") {
            Ok(raw) => raw
                .parse()
                .unwrap_or_else(|_| panic!("SESSION_TTL_HOURS must be an integer, got '{raw}'")),
            Err(_) => DEFAULT_SESSION_TTL_HOURS,
        };
        assert!(hours > 0, "SESSION_TTL_HOURS must be positive");

        Self {
            secret,
            session_ttl: Duration::hours(hours),
        }
    }

    /// Session lifetime in whole seconds, as reported to clients.
    pub fn expires_in_secs(&self) -> i64 {
        self.session_ttl.num_seconds()
    }

    /// Sign a new session for `subject`.
    pub fn issue(
        &self,
        subject: &str,
        email: &str,
    ) -> Result<IssuedToken, jsonwebtoken::errors::Error> {
        let issued_at = Utc::now();
        let expires_at = issued_at + self.session_ttl;
        let claims = Claims {
            sub: subject.to_owned(),
            email: email.to_owned(),
            exp: expires_at.timestamp(),
            iat: issued_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;
        Ok(IssuedToken {
            token,
            token_id: claims.jti,
            expires_at,
        })
    }

    /// Check signature and expiry, returning the claims of a valid token.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            session_ttl: Duration::hours(1),
        }
    }

    #[test]
    fn issued_token_verifies() {
        let jwt = config("session-secret");
        let issued = jwt.issue("admin", "admin@studio.test").unwrap();

        let claims = jwt.verify(&issued.token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.email, "admin@studio.test");
        assert_eq!(claims.jti, issued.token_id);
        assert_eq!(claims.exp, issued.expires_at.timestamp());
        assert_eq!(claims.exp - claims.iat, 3600);
        assert_eq!(jwt.expires_in_secs(), 3600);
    }

    #[test]
    fn expired_token_is_rejected() {
        let jwt = config("session-secret");
        // Past the default 60s leeway.
        let now = Utc::now().timestamp();
        let stale = Claims {
            sub: "admin".into(),
            email: "admin@studio.test".into(),
            exp: now - 300,
            iat: now - 4000,
            jti: "old".into(),
        };
        let token = encode(
            &Header::default(),
            &stale,
            &EncodingKey::from_secret(b"session-secret"),
        )
        .unwrap();

        assert!(jwt.verify(&token).is_err());
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let issued = config("alpha").issue("admin", "a@b.c").unwrap();
        assert!(config("bravo").verify(&issued.token).is_err());
    }

    #[test]
    fn token_ids_are_unique() {
        let jwt = config("session-secret");
        let a = jwt.issue("admin", "a@b.c").unwrap();
        let b = jwt.issue("admin", "a@b.c").unwrap();
        assert_ne!(a.token_id, b.token_id);
    }
}
