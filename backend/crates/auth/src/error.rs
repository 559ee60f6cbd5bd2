//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.
//!
//! Rejections are coarse: a caller learns that a login failed or
//! that a token was refused, never which check refused it.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::db_unavailable, kind::ErrorKind};
use platform::bearer::{BEARER_CHALLENGE, BearerError};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown user, wrong password, or a bootstrap attempt with anything
    /// other than the default pair
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed, expired or forged bearer token
    #[error("Invalid authentication credentials")]
    Unauthenticated,

    /// Credential store could not be reached; the request may be retried
    #[error("Credential store unavailable")]
    StorageUnavailable(#[source] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials | AuthError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AuthError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials | AuthError::Unauthenticated => ErrorKind::Unauthorized,
            AuthError::StorageUnavailable(_) => ErrorKind::ServiceUnavailable,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Internal details stay in the log; the response only carries a
    /// generic message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Internal(_) => AppError::internal("Internal server error"),
            AuthError::StorageUnavailable(_) => {
                AppError::service_unavailable(self.to_string()).with_action("Please retry later")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::StorageUnavailable(e) => {
                tracing::error!(error = %e, "Credential store unavailable");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Unauthenticated => {
                tracing::debug!("Rejected unauthenticated request");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let challenge = matches!(self, AuthError::Unauthenticated);
        let mut response = self.to_app_error().into_response();
        if challenge {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(BEARER_CHALLENGE),
            );
        }
        response
    }
}

/// Outages become `StorageUnavailable`; decode errors, constraint
/// violations and other query failures are internal.
impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        if db_unavailable(&err) {
            AuthError::StorageUnavailable(err)
        } else {
            AuthError::Internal(format!("Credential query failed: {err}"))
        }
    }
}

impl From<BearerError> for AuthError {
    fn from(err: BearerError) -> Self {
        tracing::debug!(reason = %err, "Bearer header rejected");
        AuthError::Unauthenticated
    }
}
