//! In-Memory Repository Implementation
//!
//! Process-local credential store for tests and local runs without a
//! database. Records are lost on restart.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entity::admin_credential::AdminCredential;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::{admin_name::AdminName, admin_password::AdminPassword};
use crate::error::AuthResult;

#[derive(Debug, Default)]
pub struct InMemoryCredentialRepository {
    admins: RwLock<HashMap<String, AdminCredential>>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored credential records
    pub async fn len(&self) -> usize {
        self.admins.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.admins.read().await.is_empty()
    }
}

impl CredentialRepository for InMemoryCredentialRepository {
    async fn find_admin(&self, username: &AdminName) -> AuthResult<Option<AdminCredential>> {
        Ok(self.admins.read().await.get(username.as_str()).cloned())
    }

    async fn create_admin(&self, credential: &AdminCredential) -> AuthResult<bool> {
        let mut admins = self.admins.write().await;
        match admins.entry(credential.username.as_str().to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(credential.clone());
                Ok(true)
            }
        }
    }

    async fn update_password_hash(
        &self,
        username: &AdminName,
        password_hash: &AdminPassword,
    ) -> AuthResult<()> {
        if let Some(credential) = self.admins.write().await.get_mut(username.as_str()) {
            credential.password_hash = password_hash.clone();
            credential.updated_at = Utc::now();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::admin_password::RawPassword;

    fn credential(username: &str, password: &str) -> AdminCredential {
        let raw = RawPassword::new(password.to_string()).unwrap();
        AdminCredential::new(
            AdminName::new(username).unwrap(),
            AdminPassword::from_raw(&raw, None).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryCredentialRepository::new();
        assert!(repo.is_empty().await);

        assert!(repo.create_admin(&credential("admin", "admin123")).await.unwrap());

        let found = repo
            .find_admin(&AdminName::new("admin").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.username.as_str(), "admin");
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_ignored() {
        let repo = InMemoryCredentialRepository::new();
        let first = credential("admin", "admin123");

        assert!(repo.create_admin(&first).await.unwrap());
        assert!(!repo.create_admin(&credential("admin", "other")).await.unwrap());
        assert_eq!(repo.len().await, 1);

        let stored = repo
            .find_admin(&AdminName::new("admin").unwrap())
            .await
            .unwrap()
            .unwrap();
        let raw = RawPassword::new("admin123".to_string()).unwrap();
        assert!(stored.password_hash.verify(&raw, None));
    }

    #[tokio::test]
    async fn test_update_password_hash() {
        let repo = InMemoryCredentialRepository::new();
        repo.create_admin(&credential("admin", "admin123")).await.unwrap();

        let raw = RawPassword::new("rotated".to_string()).unwrap();
        let new_hash = AdminPassword::from_raw(&raw, None).unwrap();
        let name = AdminName::new("admin").unwrap();
        repo.update_password_hash(&name, &new_hash).await.unwrap();

        let stored = repo.find_admin(&name).await.unwrap().unwrap();
        assert!(stored.password_hash.verify(&raw, None));
    }
}
