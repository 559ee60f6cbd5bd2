//! Process Configuration
//!
//! Everything the server needs from the environment, read once at startup
//! and passed into constructors from there.

use std::net::SocketAddr;
use std::num::NonZeroU32;

use anyhow::{Context, bail};
use auth::AuthConfig;
use axum::http::HeaderValue;
use platform::crypto::{RECOMMENDED_SECRET_LEN, SigningSecret};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8001";

/// Allowed CORS origins
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `*`: any origin, without credentials
    Any,
    List(Vec<HeaderValue>),
}

impl CorsOrigins {
    /// Parse a comma-separated origin list. `*` anywhere in the list means any.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let entries: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if entries.is_empty() || entries.contains(&"*") {
            return Ok(CorsOrigins::Any);
        }

        let origins = entries
            .into_iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin: {}", origin))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(CorsOrigins::List(origins))
    }
}

/// Application configuration
///
/// No `Debug`: the database URL may carry a password and the auth config
/// carries the signing secret.
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub auth: AuthConfig,
    pub cors_origins: CorsOrigins,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Load from process environment (after `.env` has been applied)
    ///
    /// Release builds refuse to start without `JWT_SECRET`; debug builds fall
    /// back to a random secret.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        allow_random_secret: bool,
    ) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<NonZeroU32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?
                .get(),
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let token_secret = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(raw) => {
                let secret = SigningSecret::new(raw.into_bytes())?;
                if secret.is_weak() {
                    tracing::warn!(
                        min_bytes = RECOMMENDED_SECRET_LEN,
                        "JWT_SECRET is shorter than recommended"
                    );
                }
                secret
            }
            None if allow_random_secret => {
                tracing::warn!("JWT_SECRET not set, using a random secret; tokens will not survive a restart");
                SigningSecret::generate()
            }
            None => bail!("JWT_SECRET must be set"),
        };

        let mut auth = AuthConfig::new(token_secret);
        if let Some(pepper) = lookup("PASSWORD_PEPPER").filter(|s| !s.is_empty()) {
            auth = auth.with_pepper(pepper.into_bytes());
        }

        let cors_origins = CorsOrigins::parse(&lookup("CORS_ORIGINS").unwrap_or_else(|| "*".to_string()))?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:8001")?;

        Ok(Self {
            database_url,
            database_max_connections,
            auth,
            cors_origins,
            bind_addr,
        })
    }
}
