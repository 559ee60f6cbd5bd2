//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors are mapped to `kernel::error::AppError` inside each crate.

mod config;

use std::sync::Arc;

use auth::{
    AuthConfig, PgCredentialRepository, TokenService, auth_router_generic,
    domain::repository::CredentialRepository,
};
use axum::{
    Json, Router,
    http::{Method, header},
    routing::get,
};
use portfolio::{
    PgPortfolioRepository,
    domain::repository::{ExperienceRepository, ProfileRepository, ProjectRepository},
    portfolio_router_generic,
    presentation::dto::MessageResponse,
};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{AppConfig, CorsOrigins};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,portfolio=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_config = Arc::new(config.auth);
    let tokens = Arc::new(TokenService::from_config(&auth_config));

    let api = api_router(
        PgCredentialRepository::new(pool.clone()),
        PgPortfolioRepository::new(pool),
        tokens,
        auth_config,
    );

    let app = Router::new()
        .nest("/api", api)
        .route("/api/", get(root))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins));

    // Start server
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Routes served under `/api`
fn api_router<C, P>(
    credentials: C,
    content: P,
    tokens: Arc<TokenService>,
    auth_config: Arc<AuthConfig>,
) -> Router
where
    C: CredentialRepository + Send + Sync + 'static,
    P: ProjectRepository + ExperienceRepository + ProfileRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(root))
        .merge(auth_router_generic(credentials, tokens.clone(), auth_config))
        .merge(portfolio_router_generic(content, tokens))
}

/// GET /api/
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Portfolio API"))
}

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Credentials cannot be combined with a wildcard origin
    match origins {
        CorsOrigins::Any => cors.allow_origin(AllowOrigin::any()),
        CorsOrigins::List(list) => cors
            .allow_origin(AllowOrigin::list(list.clone()))
            .allow_credentials(true),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
