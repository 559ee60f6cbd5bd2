//! Access Token Service
//!
//! Issues and verifies HS256-signed JWTs carrying `sub`, `iat` and `exp`.
//! Every verification failure collapses into [`AuthError::Unauthenticated`]:
//! callers cannot tell an expired token from a forged one.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use platform::crypto::SigningSecret;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::entity::access_token::AccessToken;
use crate::error::{AuthError, AuthResult};

/// JWT claims for access tokens
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject (admin username)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sub: Option<String>,
    /// Issued at (Unix timestamp)
    iat: i64,
    /// Expiration time (Unix timestamp)
    exp: i64,
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &SigningSecret, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.token_secret, config.token_ttl)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `subject`, valid from now
    pub fn issue(&self, subject: &str) -> AuthResult<AccessToken> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token for `subject` as if it had been issued at `issued_at`
    pub fn issue_at(&self, subject: &str, issued_at: DateTime<Utc>) -> AuthResult<AccessToken> {
        let ttl = TimeDelta::from_std(self.ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid token lifetime: {}", e)))?;
        let expires_at = issued_at + ttl;

        let claims = Claims {
            sub: Some(subject.to_string()),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to encode access token: {}", e)))?;

        Ok(AccessToken {
            token,
            subject: subject.to_string(),
            expires_at,
        })
    }

    /// Verify signature and expiry, returning the token's subject
    pub fn verify_token(&self, token: &str) -> AuthResult<String> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!(reason = %e, "Access token rejected");
            AuthError::Unauthenticated
        })?;

        // jsonwebtoken accepts `exp == now`; the token is valid only strictly before expiry.
        if data.claims.exp <= Utc::now().timestamp() {
            tracing::debug!("Access token expired");
            return Err(AuthError::Unauthenticated);
        }

        match data.claims.sub {
            Some(sub) if !sub.is_empty() => Ok(sub),
            _ => {
                tracing::debug!("Access token has no subject");
                Err(AuthError::Unauthenticated)
            }
        }
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &"HS256")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
