//! In-Memory Repository Implementation
//!
//! Process-local content store for tests and database-less runs.

use tokio::sync::RwLock;

use kernel::id::{ExperienceId, ProjectId};

use crate::domain::entities::{Experience, Profile, Project};
use crate::domain::repository::{ExperienceRepository, ProfileRepository, ProjectRepository};
use crate::domain::value_objects::StatusFilter;
use crate::error::PortfolioResult;

/// Stores items in insertion order
#[derive(Debug, Default)]
pub struct InMemoryPortfolioRepository {
    projects: RwLock<Vec<Project>>,
    experiences: RwLock<Vec<Experience>>,
    profile: RwLock<Option<Profile>>,
}

impl InMemoryPortfolioRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Project Repository Implementation
// ============================================================================

impl ProjectRepository for InMemoryPortfolioRepository {
    async fn list(&self, filter: StatusFilter, limit: usize) -> PortfolioResult<Vec<Project>> {
        // Newest insert first so equal timestamps keep a stable order
        let mut projects: Vec<Project> = self
            .projects
            .read()
            .await
            .iter()
            .rev()
            .filter(|p| filter.matches(p.fields.status))
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        projects.truncate(limit);
        Ok(projects)
    }

    async fn find_by_id(&self, id: &ProjectId) -> PortfolioResult<Option<Project>> {
        Ok(self
            .projects
            .read()
            .await
            .iter()
            .find(|p| p.id == *id)
            .cloned())
    }

    async fn create(&self, project: &Project) -> PortfolioResult<()> {
        self.projects.write().await.push(project.clone());
        Ok(())
    }

    async fn update(&self, project: &Project) -> PortfolioResult<bool> {
        let mut projects = self.projects.write().await;
        match projects.iter_mut().find(|p| p.id == project.id) {
            Some(slot) => {
                *slot = project.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &ProjectId) -> PortfolioResult<bool> {
        let mut projects = self.projects.write().await;
        let before = projects.len();
        projects.retain(|p| p.id != *id);
        Ok(projects.len() != before)
    }
}

// ============================================================================
// Experience Repository Implementation
// ============================================================================

impl ExperienceRepository for InMemoryPortfolioRepository {
    async fn list(&self, filter: StatusFilter, limit: usize) -> PortfolioResult<Vec<Experience>> {
        let mut experiences: Vec<Experience> = self
            .experiences
            .read()
            .await
            .iter()
            .rev()
            .filter(|e| filter.matches(e.fields.status))
            .cloned()
            .collect();
        experiences.sort_by(|a, b| b.fields.start_date.cmp(&a.fields.start_date));
        experiences.truncate(limit);
        Ok(experiences)
    }

    async fn find_by_id(&self, id: &ExperienceId) -> PortfolioResult<Option<Experience>> {
        Ok(self
            .experiences
            .read()
            .await
            .iter()
            .find(|e| e.id == *id)
            .cloned())
    }

    async fn create(&self, experience: &Experience) -> PortfolioResult<()> {
        self.experiences.write().await.push(experience.clone());
        Ok(())
    }

    async fn update(&self, experience: &Experience) -> PortfolioResult<bool> {
        let mut experiences = self.experiences.write().await;
        match experiences.iter_mut().find(|e| e.id == experience.id) {
            Some(slot) => {
                *slot = experience.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &ExperienceId) -> PortfolioResult<bool> {
        let mut experiences = self.experiences.write().await;
        let before = experiences.len();
        experiences.retain(|e| e.id != *id);
        Ok(experiences.len() != before)
    }
}

// ============================================================================
// Profile Repository Implementation
// ============================================================================

impl ProfileRepository for InMemoryPortfolioRepository {
    async fn find(&self) -> PortfolioResult<Option<Profile>> {
        Ok(self.profile.read().await.clone())
    }

    async fn save(&self, profile: &Profile) -> PortfolioResult<Profile> {
        let mut slot = self.profile.write().await;
        let mut stored = profile.clone();
        if let Some(existing) = slot.as_ref() {
            stored.id = existing.id;
        }
        *slot = Some(stored.clone());
        Ok(stored)
    }
}
