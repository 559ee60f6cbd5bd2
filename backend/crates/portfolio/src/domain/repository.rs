//! Repository Traits
//!
//! Interfaces for content persistence. Implementations are in the
//! infrastructure layer.

use kernel::id::{ExperienceId, ProjectId};

use crate::domain::entities::{Experience, Profile, Project};
use crate::domain::value_objects::StatusFilter;
use crate::error::PortfolioResult;

/// Project repository trait
#[trait_variant::make(ProjectRepository: Send)]
pub trait LocalProjectRepository {
    /// Projects matching `filter`, newest first, at most `limit`
    async fn list(&self, filter: StatusFilter, limit: usize) -> PortfolioResult<Vec<Project>>;

    async fn find_by_id(&self, id: &ProjectId) -> PortfolioResult<Option<Project>>;

    async fn create(&self, project: &Project) -> PortfolioResult<()>;

    /// Overwrite an existing project. Returns `false` if it does not exist.
    async fn update(&self, project: &Project) -> PortfolioResult<bool>;

    /// Returns `false` if nothing was deleted
    async fn delete(&self, id: &ProjectId) -> PortfolioResult<bool>;
}

/// Experience repository trait
#[trait_variant::make(ExperienceRepository: Send)]
pub trait LocalExperienceRepository {
    /// Experiences matching `filter`, latest `start_date` first, at most `limit`
    async fn list(&self, filter: StatusFilter, limit: usize) -> PortfolioResult<Vec<Experience>>;

    async fn find_by_id(&self, id: &ExperienceId) -> PortfolioResult<Option<Experience>>;

    async fn create(&self, experience: &Experience) -> PortfolioResult<()>;

    /// Overwrite an existing experience. Returns `false` if it does not exist.
    async fn update(&self, experience: &Experience) -> PortfolioResult<bool>;

    /// Returns `false` if nothing was deleted
    async fn delete(&self, id: &ExperienceId) -> PortfolioResult<bool>;
}

/// Profile repository trait (singleton record)
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    async fn find(&self) -> PortfolioResult<Option<Profile>>;

    /// Insert or overwrite the single profile row and return what is stored.
    ///
    /// When a row already exists its id survives, even if `profile` carries
    /// a freshly minted one.
    async fn save(&self, profile: &Profile) -> PortfolioResult<Profile>;
}
