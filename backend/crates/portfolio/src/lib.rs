//! Portfolio Content Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases for projects, experiences and the profile
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Public reads of the profile, projects and experiences with a
//!   publication status filter
//! - Admin create/update/delete behind `auth::require_admin`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{PortfolioError, PortfolioResult};
pub use infra::{memory::InMemoryPortfolioRepository, postgres::PgPortfolioRepository};
pub use presentation::router::{portfolio_router, portfolio_router_generic};

#[cfg(test)]
mod tests;
