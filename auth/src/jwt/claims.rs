use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity claim embedded in every bearer token.
///
/// Carries exactly what a guarded request needs to resolve its caller:
/// the subject identifier and the username, plus the RFC 7519 timestamps
/// used for expiry checking. Once issued, a claim is immutable; it is
/// re-verified (signature and expiry) on every use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Username at issuance time
    pub username: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create a claim for an authenticated user.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier, stored in `sub`
    /// * `username` - Username at issuance time
    /// * `ttl_minutes` - Minutes until the token expires
    pub fn for_user(user_id: impl ToString, username: String, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::minutes(ttl_minutes);

        Self {
            sub: user_id.to_string(),
            username,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check whether the claim is expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
