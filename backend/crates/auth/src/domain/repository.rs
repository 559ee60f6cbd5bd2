//! Repository Traits
//!
//! Interfaces for credential persistence. Implementations are in the
//! infrastructure layer.

use crate::domain::entity::admin_credential::AdminCredential;
use crate::domain::value_object::{admin_name::AdminName, admin_password::AdminPassword};
use crate::error::AuthResult;

/// Administrator credential repository trait
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Find the credential record for a username
    async fn find_admin(&self, username: &AdminName) -> AuthResult<Option<AdminCredential>>;

    /// Insert a credential record atomically.
    ///
    /// Returns `false` without modifying anything when a record for the
    /// username already exists.
    async fn create_admin(&self, credential: &AdminCredential) -> AuthResult<bool>;

    /// Replace the stored password hash
    async fn update_password_hash(
        &self,
        username: &AdminName,
        password_hash: &AdminPassword,
    ) -> AuthResult<()>;
}
