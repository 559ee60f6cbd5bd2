//! Application Layer
//!
//! Use cases for reading and editing portfolio content.

pub mod experiences;
pub mod profile;
pub mod projects;

pub use experiences::ExperienceUseCase;
pub use profile::ProfileUseCase;
pub use projects::ProjectUseCase;

/// Maximum number of items returned by a list query
pub const LIST_LIMIT: usize = 100;
