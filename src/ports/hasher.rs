//! Password hashing port.

use crate::error::Result;

/// One-way salted password hashing.
///
/// Hash strings embed their own salt and cost so verification needs no
/// extra state.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password with a fresh salt.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Hash`] if the primitive cannot produce a hash.
    fn hash(&self, plaintext: &str) -> Result<String>;

    /// Checks `plaintext` against a stored hash.
    ///
    /// Returns `Ok(false)` for a well-formed hash that does not match.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Hash`] if the stored hash is malformed or the
    /// primitive fails.
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool>;
}
