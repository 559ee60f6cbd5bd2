//! Admin Name Value Object
//!
//! The administrator's login identifier. Compared byte-for-byte: no case
//! folding, trimming or Unicode normalization, so the bootstrap gate can only
//! ever match the exact default name.

use derive_more::Display;
use thiserror::Error;

/// Maximum length for an admin name (in characters)
pub const ADMIN_NAME_MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminNameError {
    #[error("Admin name cannot be empty")]
    Empty,

    #[error("Admin name must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Admin name contains control characters")]
    InvalidCharacter,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct AdminName(String);

impl AdminName {
    pub fn new(raw: impl Into<String>) -> Result<Self, AdminNameError> {
        let raw = raw.into();

        if raw.trim().is_empty() {
            return Err(AdminNameError::Empty);
        }

        let char_count = raw.chars().count();
        if char_count > ADMIN_NAME_MAX_LENGTH {
            return Err(AdminNameError::TooLong {
                max: ADMIN_NAME_MAX_LENGTH,
                actual: char_count,
            });
        }

        if raw.chars().any(char::is_control) {
            return Err(AdminNameError::InvalidCharacter);
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
