//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::{AuthConfig, TokenService};
use crate::domain::repository::CredentialRepository;
use crate::infra::postgres::PgCredentialRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(
    repo: PgCredentialRepository,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
) -> Router {
    auth_router_generic(repo, tokens, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Router
where
    R: CredentialRepository + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        tokens,
        config,
    };

    Router::new()
        .route("/admin/login", post(handlers::login::<R>))
        .with_state(state)
}
