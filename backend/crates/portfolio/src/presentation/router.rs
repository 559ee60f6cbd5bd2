//! Portfolio Router

use axum::middleware::from_fn_with_state;
use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use auth::{TokenService, require_admin};

use crate::domain::repository::{ExperienceRepository, ProfileRepository, ProjectRepository};
use crate::infra::postgres::PgPortfolioRepository;
use crate::presentation::handlers::{self, PortfolioAppState};

/// Create the Portfolio router with PostgreSQL repository
pub fn portfolio_router(repo: PgPortfolioRepository, tokens: Arc<TokenService>) -> Router {
    portfolio_router_generic(repo, tokens)
}

/// Create a generic Portfolio router for any repository implementation
///
/// Everything under `/admin` sits behind the bearer gate; public reads do not.
pub fn portfolio_router_generic<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: ProjectRepository + ExperienceRepository + ProfileRepository + Send + Sync + 'static,
{
    let state = PortfolioAppState {
        repo: Arc::new(repo),
    };

    let public = Router::new()
        .route("/profile", get(handlers::get_profile::<R>))
        .route("/projects", get(handlers::list_projects::<R>))
        .route("/projects/{id}", get(handlers::get_project::<R>))
        .route("/experiences", get(handlers::list_experiences::<R>));

    let admin = Router::new()
        .route("/admin/profile", put(handlers::update_profile::<R>))
        .route("/admin/projects", post(handlers::create_project::<R>))
        .route(
            "/admin/projects/{id}",
            put(handlers::update_project::<R>).delete(handlers::delete_project::<R>),
        )
        .route("/admin/experiences", post(handlers::create_experience::<R>))
        .route(
            "/admin/experiences/{id}",
            put(handlers::update_experience::<R>).delete(handlers::delete_experience::<R>),
        )
        .route_layer(from_fn_with_state(tokens, require_admin));

    public.merge(admin).with_state(state)
}
