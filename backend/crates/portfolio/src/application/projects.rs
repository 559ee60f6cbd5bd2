//! Project Use Cases

use std::sync::Arc;

use kernel::id::ProjectId;

use crate::application::LIST_LIMIT;
use crate::domain::entities::{Project, ProjectFields};
use crate::domain::repository::ProjectRepository;
use crate::domain::value_objects::StatusFilter;
use crate::error::{PortfolioError, PortfolioResult};

pub struct ProjectUseCase<R>
where
    R: ProjectRepository,
{
    repo: Arc<R>,
}

impl<R> ProjectUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, filter: StatusFilter) -> PortfolioResult<Vec<Project>> {
        self.repo.list(filter, LIST_LIMIT).await
    }

    pub async fn get(&self, id: &ProjectId) -> PortfolioResult<Project> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(PortfolioError::ProjectNotFound)
    }

    pub async fn create(&self, fields: ProjectFields) -> PortfolioResult<Project> {
        fields.validate()?;

        let project = Project::new(fields);
        self.repo.create(&project).await?;

        tracing::info!(project_id = %project.id, "Project created");

        Ok(project)
    }

    pub async fn update(&self, id: &ProjectId, fields: ProjectFields) -> PortfolioResult<Project> {
        fields.validate()?;

        let mut project = self.get(id).await?;
        project.replace(fields);

        if !self.repo.update(&project).await? {
            return Err(PortfolioError::ProjectNotFound);
        }

        tracing::info!(project_id = %project.id, "Project updated");

        Ok(project)
    }

    pub async fn delete(&self, id: &ProjectId) -> PortfolioResult<()> {
        if !self.repo.delete(id).await? {
            return Err(PortfolioError::ProjectNotFound);
        }

        tracing::info!(project_id = %id, "Project deleted");

        Ok(())
    }
}
