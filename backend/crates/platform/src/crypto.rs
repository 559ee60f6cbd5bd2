//! Cryptographic Utilities
//!
//! Random byte generation and the symmetric secret used to sign access tokens.

use std::fmt;

use rand::{RngCore, rngs::OsRng};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Recommended minimum secret length for HMAC-SHA256 (one hash block output)
pub const RECOMMENDED_SECRET_LEN: usize = 32;

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretError {
    #[error("Signing secret must not be empty")]
    Empty,
}

/// Symmetric key for token signatures.
///
/// Zeroized on drop and redacted in `Debug`. Has no `Display` or
/// `Serialize` impl.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    /// Wrap raw secret bytes (e.g. the value of an environment variable)
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, SecretError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(SecretError::Empty);
        }
        Ok(Self(bytes))
    }

    /// Random 256-bit secret, for development and tests
    pub fn generate() -> Self {
        Self(random_bytes(RECOMMENDED_SECRET_LEN))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Shorter than [`RECOMMENDED_SECRET_LEN`]
    pub fn is_weak(&self) -> bool {
        self.0.len() < RECOMMENDED_SECRET_LEN
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningSecret").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        // Should not be all zeros (statistically)
        assert!(bytes.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert_eq!(SigningSecret::new(Vec::new()).unwrap_err(), SecretError::Empty);
        assert_eq!(SigningSecret::new("").unwrap_err(), SecretError::Empty);
    }

    #[test]
    fn test_generated_secrets_differ() {
        let a = SigningSecret::generate();
        let b = SigningSecret::generate();
        assert_ne!(a.as_bytes(), b.as_bytes());
        assert!(!a.is_weak());
    }

    #[test]
    fn test_weak_secret() {
        let secret = SigningSecret::new("short-secret").unwrap();
        assert!(secret.is_weak());
    }

    #[test]
    fn test_debug_redaction() {
        let secret = SigningSecret::new("super-secret-signing-key").unwrap();
        let debug = format!("{:?}", secret);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("super-secret"));
    }
}
