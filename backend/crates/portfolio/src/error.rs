//! Portfolio Error Types
//!
//! Portfolio-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::db_unavailable, kind::ErrorKind};
use thiserror::Error;

/// Portfolio-specific result type alias
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Project not found")]
    ProjectNotFound,

    #[error("Experience not found")]
    ExperienceNotFound,

    /// Request body or query failed validation
    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PortfolioError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PortfolioError::ProjectNotFound | PortfolioError::ExperienceNotFound => {
                StatusCode::NOT_FOUND
            }
            PortfolioError::Validation(_) => StatusCode::BAD_REQUEST,
            PortfolioError::Database(e) => {
                if db_unavailable(e) {
                    StatusCode::SERVICE_UNAVAILABLE
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
            PortfolioError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PortfolioError::ProjectNotFound | PortfolioError::ExperienceNotFound => {
                ErrorKind::NotFound
            }
            PortfolioError::Validation(_) => ErrorKind::BadRequest,
            PortfolioError::Database(e) => {
                if db_unavailable(e) {
                    ErrorKind::ServiceUnavailable
                } else {
                    ErrorKind::InternalServerError
                }
            }
            PortfolioError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PortfolioError::Database(e) => {
                tracing::error!(error = %e, "Portfolio database error");
            }
            PortfolioError::Internal(msg) => {
                tracing::error!(message = %msg, "Portfolio internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Portfolio request rejected");
            }
        }
    }
}

impl From<PortfolioError> for AppError {
    fn from(err: PortfolioError) -> Self {
        match err {
            PortfolioError::Database(e) => AppError::from(e),
            PortfolioError::Internal(_) => AppError::internal("Internal server error"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for PortfolioError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
