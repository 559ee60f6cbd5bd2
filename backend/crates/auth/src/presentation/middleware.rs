//! Auth Middleware
//!
//! Bearer token gate for admin routes.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer_token;
use std::sync::Arc;

use crate::application::TokenService;
use crate::error::AuthError;

/// Identity of the caller, inserted by [`require_admin`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAdmin {
    pub username: String,
}

/// Middleware that requires a valid bearer token.
///
/// Use with `axum::middleware::from_fn_with_state(tokens, require_admin)`.
/// The wrapped handler never runs for a rejected request.
pub async fn require_admin(
    State(tokens): State<Arc<TokenService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer_token(req.headers())?;
    let username = tokens.verify_token(token)?;

    req.extensions_mut().insert(AuthenticatedAdmin { username });

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthenticatedAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedAdmin>()
            .cloned()
            .ok_or(AuthError::Unauthenticated)
    }
}
