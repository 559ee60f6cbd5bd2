//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup and
//! handed to the use cases and the gate; nothing here is read from globals.

use std::fmt;
use std::time::Duration;

use platform::crypto::SigningSecret;

/// Access token lifetime: one week
pub const ACCESS_TOKEN_EXPIRE_MINUTES: u64 = 10080;

/// Fixed default administrator, created on the first matching login
pub const BOOTSTRAP_USERNAME: &str = "admin";
pub const BOOTSTRAP_PASSWORD: &str = "admin123";

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC key for access token signatures
    pub token_secret: SigningSecret,
    /// Access token lifetime
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    pub fn new(token_secret: SigningSecret) -> Self {
        Self {
            token_secret,
            token_ttl: Duration::from_secs(ACCESS_TOKEN_EXPIRE_MINUTES * 60),
            password_pepper: None,
        }
    }

    /// Create config with a random signing secret (for development)
    ///
    /// Tokens do not survive a restart with this config.
    pub fn with_random_secret() -> Self {
        Self::new(SigningSecret::generate())
    }

    pub fn with_pepper(mut self, pepper: impl Into<Vec<u8>>) -> Self {
        self.password_pepper = Some(pepper.into());
        self
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::with_random_secret()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &self.token_secret)
            .field("token_ttl", &self.token_ttl)
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
