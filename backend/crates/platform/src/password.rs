//! Password Hashing and Verification
//!
//! Argon2id with pinned cost parameters. An optional pepper is fed to
//! Argon2 as its keyed secret, so a leaked hash column alone is not enough
//! to run an offline guess.
//!
//! Hashes are stored as PHC strings; the cost parameters travel inside the
//! string, which is what lets [`HashedPassword::needs_rehash`] spot hashes
//! written under older settings.

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Upper bound on accepted input, keeps hashing cost bounded
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Memory cost in KiB (19 MiB)
pub const HASH_MEMORY_KIB: u32 = 19 * 1024;
pub const HASH_ITERATIONS: u32 = 2;
pub const HASH_PARALLELISM: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

/// Hasher for the pinned parameter set, keyed with `pepper` when present.
fn hasher(pepper: Option<&[u8]>) -> Result<Argon2<'_>, argon2::Error> {
    let params = Params::new(HASH_MEMORY_KIB, HASH_ITERATIONS, HASH_PARALLELISM, None)?;
    match pepper {
        Some(secret) => Argon2::new_with_secret(secret, Algorithm::Argon2id, Version::V0x13, params),
        None => Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params)),
    }
}

// ============================================================================
// Clear Text Password
// ============================================================================

/// Submitted password, kept byte-for-byte and zeroized on drop.
///
/// No `Clone`; `Debug` is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let candidate = Self(raw);

        if candidate.0.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let actual = candidate.0.chars().count();
        if actual > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual,
            });
        }

        if candidate
            .0
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(candidate)
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash with a fresh 128-bit salt.
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(OsRng);
        let argon2 = hasher(pepper).map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;
        let hash = argon2
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword(hash.to_string()))
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClearTextPassword([REDACTED])")
    }
}

// ============================================================================
// Hashed Password
// ============================================================================

/// PHC string, e.g. `$argon2id$v=19$m=19456,t=2,p=1$<salt>$<hash>`
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Accepts any well-formed PHC string; the algorithm is checked at verify time.
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let phc = s.into();
        PasswordHash::new(&phc).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self(phc))
    }

    pub fn as_phc_string(&self) -> &str {
        &self.0
    }

    /// Constant-time check of `password` against this hash.
    ///
    /// The cost parameters are read from the stored string, so hashes made
    /// under older settings keep verifying. The pepper must match the one
    /// used when hashing.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.0) else {
            return false;
        };
        let Ok(argon2) = hasher(pepper) else {
            return false;
        };
        argon2.verify_password(password.as_bytes(), &parsed).is_ok()
    }

    /// True unless this is an Argon2id hash with the pinned parameters.
    pub fn needs_rehash(&self) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.0) else {
            return true;
        };
        if parsed.algorithm != Algorithm::Argon2id.ident() {
            return true;
        }
        match Params::try_from(&parsed) {
            Ok(params) => {
                (params.m_cost(), params.t_cost(), params.p_cost())
                    != (HASH_MEMORY_KIB, HASH_ITERATIONS, HASH_PARALLELISM)
            }
            Err(_) => true,
        }
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashedPassword([HASH])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear(s: &str) -> ClearTextPassword {
        ClearTextPassword::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_policy_rejections() {
        assert_eq!(
            ClearTextPassword::new("a".repeat(MAX_PASSWORD_LENGTH + 1)).unwrap_err(),
            PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: MAX_PASSWORD_LENGTH + 1
            }
        );
        for blank in ["", "   ", "\t\n"] {
            assert_eq!(
                ClearTextPassword::new(blank.to_string()).unwrap_err(),
                PasswordPolicyError::EmptyOrWhitespace
            );
        }
        assert_eq!(
            ClearTextPassword::new("adm\u{0007}in".to_string()).unwrap_err(),
            PasswordPolicyError::InvalidCharacter
        );
    }

    #[test]
    fn test_short_password_accepted() {
        // no strength rule on login input
        assert!(ClearTextPassword::new("admin123".to_string()).is_ok());
    }

    #[test]
    fn test_compatibility_forms_do_not_match() {
        let hashed = clear("admin123").hash(None).unwrap();
        assert!(!hashed.verify(&clear("admin１２３"), None));
        assert!(!hashed.verify(&clear("ａｄｍｉｎ123"), None));
    }

    #[test]
    fn test_hash_and_verify() {
        let hashed = clear("admin123").hash(None).unwrap();

        assert!(hashed.as_phc_string().starts_with("$argon2id$v=19$m=19456,t=2,p=1$"));
        assert!(hashed.verify(&clear("admin123"), None));
        assert!(!hashed.verify(&clear("admin124"), None));
        assert!(!hashed.needs_rehash());
    }

    #[test]
    fn test_hash_is_salted() {
        let password = clear("admin123");
        let a = password.hash(None).unwrap();
        let b = password.hash(None).unwrap();
        assert_ne!(a.as_phc_string(), b.as_phc_string());
    }

    #[test]
    fn test_pepper_must_match() {
        let password = clear("admin123");
        let hashed = password.hash(Some(b"pepper-one")).unwrap();

        assert!(hashed.verify(&password, Some(b"pepper-one")));
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"pepper-two")));

        let unpeppered = password.hash(None).unwrap();
        assert!(!unpeppered.verify(&password, Some(b"pepper-one")));
    }

    #[test]
    fn test_invalid_phc_string() {
        assert!(HashedPassword::from_phc_string("admin123").is_err());
        assert!(HashedPassword::from_phc_string("").is_err());
    }

    #[test]
    fn test_weaker_hash_verifies_but_needs_rehash() {
        let params = Params::new(8 * 1024, 1, 1, None).unwrap();
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let salt = SaltString::generate(OsRng);
        let phc = argon2
            .hash_password(b"admin123", &salt)
            .unwrap()
            .to_string();

        let hashed = HashedPassword::from_phc_string(phc).unwrap();
        assert!(hashed.needs_rehash());
        assert!(hashed.verify(&clear("admin123"), None));
    }

    #[test]
    fn test_argon2i_needs_rehash() {
        let params = Params::new(HASH_MEMORY_KIB, HASH_ITERATIONS, HASH_PARALLELISM, None).unwrap();
        let argon2 = Argon2::new(Algorithm::Argon2i, Version::V0x13, params);
        let salt = SaltString::generate(OsRng);
        let phc = argon2
            .hash_password(b"admin123", &salt)
            .unwrap()
            .to_string();

        assert!(HashedPassword::from_phc_string(phc).unwrap().needs_rehash());
    }

    #[test]
    fn test_debug_redaction() {
        let password = clear("secret-value");
        assert_eq!(format!("{password:?}"), "ClearTextPassword([REDACTED])");

        let hashed = password.hash(None).unwrap();
        assert!(!format!("{hashed:?}").contains("argon2"));
    }
}
