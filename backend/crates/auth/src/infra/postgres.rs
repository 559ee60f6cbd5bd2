//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::admin_credential::AdminCredential;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::{admin_name::AdminName, admin_password::AdminPassword};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed credential repository
#[derive(Clone)]
pub struct PgCredentialRepository {
    pool: PgPool,
}

impl PgCredentialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CredentialRepository for PgCredentialRepository {
    async fn find_admin(&self, username: &AdminName) -> AuthResult<Option<AdminCredential>> {
        let row = sqlx::query_as::<_, AdminRow>(
            r#"
            SELECT
                username,
                password_hash,
                created_at,
                updated_at
            FROM admins
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_credential()).transpose()
    }

    async fn create_admin(&self, credential: &AdminCredential) -> AuthResult<bool> {
        // PRIMARY KEY on username: a concurrent bootstrap inserts nothing
        let inserted = sqlx::query(
            r#"
            INSERT INTO admins (
                username,
                password_hash,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4)
            ON CONFLICT (username) DO NOTHING
            "#,
        )
        .bind(credential.username.as_str())
        .bind(credential.password_hash.as_phc_string())
        .bind(credential.created_at)
        .bind(credential.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(inserted == 1)
    }

    async fn update_password_hash(
        &self,
        username: &AdminName,
        password_hash: &AdminPassword,
    ) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE admins SET
                password_hash = $2,
                updated_at = $3
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .bind(password_hash.as_phc_string())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AdminRow {
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AdminRow {
    fn into_credential(self) -> AuthResult<AdminCredential> {
        let username = AdminName::new(self.username)
            .map_err(|e| AuthError::Internal(format!("Invalid username in database: {}", e)))?;
        let password_hash = AdminPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(AdminCredential {
            username,
            password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
