//! Shared admin secret gating delete and comment actions.

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use super::error::ReviewError;

/// Secret used when configuration does not provide one.
pub const DEFAULT_ADMIN_SECRET: &str = "admin";

/// The configured admin secret.
///
/// Comparison hashes both sides and compares the digests without early
/// exit, so timing does not leak the length or matching prefix of the
/// secret.
#[derive(Clone)]
pub struct AdminSecret {
    secret: Zeroizing<String>,
}

impl AdminSecret {
    /// Builds a secret from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when `secret` is blank.
    pub fn new(secret: &str) -> Result<Self, ReviewError> {
        if secret.trim().is_empty() {
            return Err(ReviewError::Configuration {
                message: "admin secret must not be blank".to_owned(),
            });
        }
        Ok(Self {
            secret: Zeroizing::new(secret.to_owned()),
        })
    }

    /// Returns true when `supplied` matches the secret exactly.
    #[must_use]
    pub fn verify(&self, supplied: &str) -> bool {
        let expected = Sha256::digest(self.secret.as_bytes());
        let actual = Sha256::digest(supplied.as_bytes());

        expected
            .iter()
            .zip(actual.iter())
            .fold(0_u8, |difference, (left, right)| difference | (left ^ right))
            == 0
    }

    /// Returns true when the built-in default is in use.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.verify(DEFAULT_ADMIN_SECRET)
    }
}

impl Default for AdminSecret {
    fn default() -> Self {
        Self {
            secret: Zeroizing::new(DEFAULT_ADMIN_SECRET.to_owned()),
        }
    }
}

impl fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminSecret")
            .field("secret", &"<redacted>")
            .finish()
    }
}
