//! Signed-out token tracking.
//!
//! Tokens are stateless, so signing out records the token's `jti` until its
//! own expiry passes. Entries older than that are pruned on every insert.

use std::collections::HashMap;

use tokio::sync::RwLock;

/// In-memory set of revoked token ids, keyed by `jti` with the token's expiry.
#[derive(Debug, Default)]
pub struct RevokedTokens {
    entries: RwLock<HashMap<String, i64>>,
}

impl RevokedTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Revoke `jti` until `expires_at` (UTC Unix timestamp).
    pub async fn revoke(&self, jti: &str, expires_at: i64) {
        let now = chrono::Utc::now().timestamp();
        let mut entries = self.entries.write().await;
        entries.retain(|_, exp| *exp > now);
        entries.insert(jti.to_string(), expires_at);
    }

    pub async fn is_revoked(&self, jti: &str) -> bool {
        self.entries.read().await.contains_key(jti)
    }

    /// Number of tracked ids, including any not yet pruned.
    #[cfg(test)]
    async fn tracked_count(&self) -> usize {
        self.entries.read().await.len()
    }
}
