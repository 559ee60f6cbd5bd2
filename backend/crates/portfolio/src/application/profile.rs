//! Profile Use Cases

use std::sync::Arc;

use crate::domain::entities::{Profile, ProfileFields};
use crate::domain::repository::ProfileRepository;
use crate::error::PortfolioResult;

pub struct ProfileUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> ProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get(&self) -> PortfolioResult<Option<Profile>> {
        self.repo.find().await
    }

    /// Create the profile or overwrite it, keeping the existing id
    pub async fn upsert(&self, fields: ProfileFields) -> PortfolioResult<Profile> {
        fields.validate()?;

        let profile = match self.repo.find().await? {
            Some(mut existing) => {
                existing.replace(fields);
                existing
            }
            None => Profile::new(fields),
        };

        let profile = self.repo.save(&profile).await?;

        tracing::info!(profile_id = %profile.id, "Profile saved");

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::fixtures;
    use crate::error::PortfolioError;
    use crate::infra::memory::InMemoryPortfolioRepository;

    #[tokio::test]
    async fn test_upsert_keeps_id() {
        let profiles = ProfileUseCase::new(Arc::new(InMemoryPortfolioRepository::new()));
        assert!(profiles.get().await.unwrap().is_none());

        let first = profiles.upsert(fixtures::profile("Jane")).await.unwrap();
        let second = profiles.upsert(fixtures::profile("Jane Doe")).await.unwrap();

        assert_eq!(first.id, second.id);
        let stored = profiles.get().await.unwrap().unwrap();
        assert_eq!(stored.fields.name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_upsert_validates() {
        let profiles = ProfileUseCase::new(Arc::new(InMemoryPortfolioRepository::new()));
        let mut fields = fixtures::profile("Jane");
        fields.bio = "  ".to_string();

        assert!(matches!(
            profiles.upsert(fields).await,
            Err(PortfolioError::Validation(_))
        ));
        assert!(profiles.get().await.unwrap().is_none());
    }
}
