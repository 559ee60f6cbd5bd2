//! Infrastructure Layer
//!
//! Repository implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryPortfolioRepository;
pub use postgres::PgPortfolioRepository;
