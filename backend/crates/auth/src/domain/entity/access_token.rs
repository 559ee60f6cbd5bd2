//! Access Token Entity
//!
//! A signed bearer token handed to the client after login. Never persisted.

use chrono::{DateTime, Utc};
use std::fmt;

/// Token type label returned alongside the token
pub const TOKEN_TYPE: &str = "bearer";

#[derive(Clone)]
pub struct AccessToken {
    /// Encoded, signed token string
    pub token: String,
    /// Admin username the token was issued for
    pub subject: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn token_type(&self) -> &'static str {
        TOKEN_TYPE
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"[REDACTED]")
            .field("subject", &self.subject)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
