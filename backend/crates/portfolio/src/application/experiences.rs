//! Experience Use Cases

use std::sync::Arc;

use kernel::id::ExperienceId;

use crate::application::LIST_LIMIT;
use crate::domain::entities::{Experience, ExperienceFields};
use crate::domain::repository::ExperienceRepository;
use crate::domain::value_objects::StatusFilter;
use crate::error::{PortfolioError, PortfolioResult};

pub struct ExperienceUseCase<R>
where
    R: ExperienceRepository,
{
    repo: Arc<R>,
}

impl<R> ExperienceUseCase<R>
where
    R: ExperienceRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, filter: StatusFilter) -> PortfolioResult<Vec<Experience>> {
        self.repo.list(filter, LIST_LIMIT).await
    }

    pub async fn create(&self, fields: ExperienceFields) -> PortfolioResult<Experience> {
        fields.validate()?;

        let experience = Experience::new(fields);
        self.repo.create(&experience).await?;

        tracing::info!(experience_id = %experience.id, "Experience created");

        Ok(experience)
    }

    pub async fn update(
        &self,
        id: &ExperienceId,
        fields: ExperienceFields,
    ) -> PortfolioResult<Experience> {
        fields.validate()?;

        let mut experience = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(PortfolioError::ExperienceNotFound)?;
        experience.replace(fields);

        if !self.repo.update(&experience).await? {
            return Err(PortfolioError::ExperienceNotFound);
        }

        tracing::info!(experience_id = %experience.id, "Experience updated");

        Ok(experience)
    }

    pub async fn delete(&self, id: &ExperienceId) -> PortfolioResult<()> {
        if !self.repo.delete(id).await? {
            return Err(PortfolioError::ExperienceNotFound);
        }

        tracing::info!(experience_id = %id, "Experience deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::fixtures;
    use crate::domain::value_objects::PublicationStatus;
    use crate::infra::memory::InMemoryPortfolioRepository;

    fn use_case() -> ExperienceUseCase<InMemoryPortfolioRepository> {
        ExperienceUseCase::new(Arc::new(InMemoryPortfolioRepository::new()))
    }

    #[tokio::test]
    async fn test_list_orders_by_start_date_desc() {
        let experiences = use_case();
        for (title, start) in [("mid", "2021-03"), ("latest", "2023-09"), ("oldest", "2018-01")] {
            experiences
                .create(fixtures::experience(title, start, PublicationStatus::Published))
                .await
                .unwrap();
        }

        let listed = experiences.list(StatusFilter::default()).await.unwrap();
        let titles: Vec<_> = listed.iter().map(|e| e.fields.title.as_str()).collect();
        assert_eq!(titles, vec!["latest", "mid", "oldest"]);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let experiences = use_case();
        let created = experiences
            .create(fixtures::experience("Intern", "2020-06", PublicationStatus::Draft))
            .await
            .unwrap();

        let updated = experiences
            .update(
                &created.id,
                fixtures::experience("Engineer", "2020-06", PublicationStatus::Published),
            )
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);

        experiences.delete(&created.id).await.unwrap();
        assert!(matches!(
            experiences.delete(&created.id).await,
            Err(PortfolioError::ExperienceNotFound)
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_blank_company() {
        let experiences = use_case();
        let mut fields = fixtures::experience("Engineer", "2020-06", PublicationStatus::Published);
        fields.company = String::new();

        assert!(matches!(
            experiences.create(fields).await,
            Err(PortfolioError::Validation(_))
        ));
    }
}
