//! Domain Layer
//!
//! Content entities, value objects, and repository traits.

pub mod entities;
pub mod repository;
pub mod value_objects;

pub use entities::{
    Experience, ExperienceFields, Profile, ProfileFields, Project, ProjectFields,
};
pub use repository::{ExperienceRepository, ProfileRepository, ProjectRepository};
pub use value_objects::{ExperienceKind, PublicationStatus, StatusFilter};
