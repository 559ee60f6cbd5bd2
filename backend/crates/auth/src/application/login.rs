//! Login Use Case
//!
//! Authenticates the administrator and issues an access token. When no
//! credential record exists yet, the fixed default pair creates it
//! (bootstrap); every later login verifies against the stored hash.

use std::sync::Arc;

use crate::application::config::{AuthConfig, BOOTSTRAP_PASSWORD, BOOTSTRAP_USERNAME};
use crate::application::token::TokenService;
use crate::domain::entity::{access_token::AccessToken, admin_credential::AdminCredential};
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::{
    admin_name::AdminName,
    admin_password::{AdminPassword, RawPassword},
};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Which branch of the login flow produced the token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginPath {
    /// No record existed; the default credential was created
    Bootstrap,
    /// Password verified against the stored hash
    Verify,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub token: AccessToken,
    pub path: LoginPath,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: CredentialRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: CredentialRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Exact match on the submitted strings, before any normalization
        let is_bootstrap_pair =
            input.username == BOOTSTRAP_USERNAME && input.password == BOOTSTRAP_PASSWORD;

        let username = AdminName::new(input.username).map_err(|_| AuthError::InvalidCredentials)?;
        let password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let path = match self.repo.find_admin(&username).await? {
            Some(credential) => {
                self.verify(credential, &password).await?;
                LoginPath::Verify
            }
            None if is_bootstrap_pair => self.bootstrap(&username, &password).await?,
            None => {
                tracing::debug!("Login for unknown admin");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let token = self.tokens.issue(username.as_str())?;

        tracing::info!(username = %username, path = ?path, "Admin logged in");

        Ok(LoginOutput { token, path })
    }

    /// Create the default credential record.
    ///
    /// Falls back to [`LoginPath::Verify`] when a concurrent login created the
    /// record first.
    async fn bootstrap(&self, username: &AdminName, password: &RawPassword) -> AuthResult<LoginPath> {
        let password_hash = AdminPassword::from_raw(password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        let credential = AdminCredential::new(username.clone(), password_hash);

        if self.repo.create_admin(&credential).await? {
            tracing::info!(username = %username, "Bootstrapped admin credential");
            return Ok(LoginPath::Bootstrap);
        }

        tracing::info!(username = %username, "Admin credential created concurrently, verifying");

        let existing = self.repo.find_admin(username).await?.ok_or_else(|| {
            AuthError::Internal("Admin credential missing after duplicate insert".to_string())
        })?;
        self.verify(existing, password).await?;

        Ok(LoginPath::Verify)
    }

    /// Check the password against the stored hash, upgrading outdated hashes
    async fn verify(&self, credential: AdminCredential, password: &RawPassword) -> AuthResult<()> {
        if !credential.password_hash.verify(password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        if credential.password_hash.needs_rehash() {
            self.rehash(credential, password).await;
        }

        Ok(())
    }

    async fn rehash(&self, mut credential: AdminCredential, password: &RawPassword) {
        let password_hash = match AdminPassword::from_raw(password, self.config.pepper()) {
            Ok(hash) => hash,
            Err(e) => {
                tracing::warn!(error = %e, "Password rehash failed");
                return;
            }
        };
        credential.update_password(password_hash);

        match self
            .repo
            .update_password_hash(&credential.username, &credential.password_hash)
            .await
        {
            Ok(()) => tracing::info!(username = %credential.username, "Upgraded password hash"),
            Err(e) => tracing::warn!(error = %e, "Failed to store upgraded password hash"),
        }
    }
}
