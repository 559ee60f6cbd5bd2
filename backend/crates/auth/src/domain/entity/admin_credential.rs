//! Admin Credential Entity
//!
//! The single administrator record. Created once by the bootstrap login and
//! afterwards only its password hash may change.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{admin_name::AdminName, admin_password::AdminPassword};

#[derive(Debug, Clone)]
pub struct AdminCredential {
    /// Unique login identifier (storage key)
    pub username: AdminName,
    /// Argon2id hash of the password
    pub password_hash: AdminPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AdminCredential {
    pub fn new(username: AdminName, password_hash: AdminPassword) -> Self {
        let now = Utc::now();
        Self {
            username,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the stored hash (e.g. after a parameter upgrade)
    pub fn update_password(&mut self, password_hash: AdminPassword) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}
