//! Error conversions
//!
//! Feature-gated bridges between [`AppError`] and the storage and HTTP
//! layers.

#[cfg(any(feature = "sqlx", feature = "axum"))]
use super::app_error::AppError;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Whether a database failure is an outage rather than a bad query.
///
/// Pool exhaustion, dropped connections and the PostgreSQL resource and
/// shutdown classes (53xxx, 57xxx) count as outages.
#[cfg(feature = "sqlx")]
pub fn db_unavailable(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => true,
        // https://www.postgresql.org/docs/current/errcodes-appendix.html
        sqlx::Error::Database(db_err) => db_err
            .code()
            .is_some_and(|code| code.starts_with("53") || code.starts_with("57")),
        _ => false,
    }
}

/// Response-safe mapping: the driver message only travels as `source`.
#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let app_err = if db_unavailable(&err) {
            AppError::service_unavailable("Database unavailable").with_action("Please retry later")
        } else {
            AppError::internal("Database error")
        };
        app_err.with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let kind = self.kind();
        let status =
            StatusCode::from_u16(kind.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details
        let mut body = serde_json::json!({
            "type": kind.problem_type(),
            "title": kind.title(),
            "status": kind.status_code(),
            "detail": self.message(),
        });
        if let Some(action) = self.action() {
            body["action"] = serde_json::Value::from(action);
        }

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/problem+json")],
            Json(body),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "sqlx")]
    #[test]
    fn test_pool_timeout_is_unavailable() {
        use super::*;
        use crate::error::kind::ErrorKind;

        assert!(db_unavailable(&sqlx::Error::PoolTimedOut));
        let app_err: AppError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(app_err.kind(), ErrorKind::ServiceUnavailable);
        assert_eq!(app_err.action(), Some("Please retry later"));
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_row_not_found_is_internal() {
        use super::*;
        use crate::error::kind::ErrorKind;

        assert!(!db_unavailable(&sqlx::Error::RowNotFound));
        let app_err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(app_err.kind(), ErrorKind::InternalServerError);
        assert_eq!(app_err.message(), "Database error");
    }

    #[cfg(feature = "axum")]
    #[test]
    fn test_problem_response() {
        use super::*;
        use axum::http::{StatusCode, header};
        use axum::response::IntoResponse;

        let response = AppError::not_found("Project not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/problem+json"
        );
    }
}
