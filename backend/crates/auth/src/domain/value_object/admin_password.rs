//! Admin Password
//!
//! [`RawPassword`] is what arrived in the login body; [`AdminPassword`] is
//! what the `admins` table holds. Only the second one ever leaves the
//! request.
//!
//! ```rust
//! use auth::domain::value_object::admin_password::{AdminPassword, RawPassword};
//!
//! let raw = RawPassword::new("admin123".to_string()).unwrap();
//! let stored = AdminPassword::from_raw(&raw, None).unwrap();
//! assert!(stored.verify(&raw, None));
//! ```

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

/// Submitted password. Zeroized on drop.
#[derive(Debug)]
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Any non-blank input up to the platform length cap is accepted; the
    /// only rule that matters at login is whether it matches the stored hash.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        ClearTextPassword::new(raw).map(Self)
    }
}

/// Argon2id PHC string of the admin password
#[derive(Clone, PartialEq, Eq)]
pub struct AdminPassword(HashedPassword);

impl AdminPassword {
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> Result<Self, PasswordHashError> {
        raw.0.hash(pepper).map(Self)
    }

    /// Rehydrate a stored hash. A malformed value means the row was written
    /// by something other than this service.
    pub fn from_phc_string(phc: impl Into<String>) -> Result<Self, PasswordHashError> {
        HashedPassword::from_phc_string(phc).map(Self)
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(&raw.0, pepper)
    }

    /// Stored under older Argon2 settings; replace on the next good login
    pub fn needs_rehash(&self) -> bool {
        self.0.needs_rehash()
    }
}

impl fmt::Debug for AdminPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminPassword([HASH])")
    }
}
