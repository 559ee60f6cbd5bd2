//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Login use case, token service, configuration
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Features
//! - Single administrator identity, created by the first login with the
//!   default pair (`admin` / `admin123`)
//! - Stateless HS256 access tokens valid for one week
//! - `require_admin` middleware guarding mutating routes
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, verified in constant time
//! - Signing secret comes from configuration and is never logged
//! - Login failures and token rejections do not reveal which check failed

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{config::AuthConfig, token::TokenService};
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryCredentialRepository, postgres::PgCredentialRepository};
pub use presentation::middleware::{AuthenticatedAdmin, require_admin};
pub use presentation::router::{auth_router, auth_router_generic};
