//! bcrypt adapter for the `PasswordHasher` port.

use crate::error::{Error, Result};
use crate::ports::PasswordHasher;

/// Hashes passwords with bcrypt at a fixed cost.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Creates a hasher using `cost` rounds (log2).
    #[must_use]
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// The configured cost factor.
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String> {
        let hashed = bcrypt::hash(plaintext, self.cost).map_err(Error::hash)?;
        tracing::debug!(cost = self.cost, "hashed password");
        Ok(hashed)
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(plaintext, hash).map_err(|e| {
            tracing::debug!(error = %e, "password hash rejected");
            Error::hash(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost keeps the suite fast.
    fn hasher() -> BcryptHasher {
        BcryptHasher::new(4)
    }

    #[test]
    fn hash_and_verify() {
        let h = hasher();
        let hash = h.hash("test_password_123").unwrap();

        assert!(h.verify("test_password_123", &hash).unwrap());
        assert!(!h.verify("wrong_password", &hash).unwrap());
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let h = hasher();
        let hash1 = h.hash("same_password").unwrap();
        let hash2 = h.hash("same_password").unwrap();

        assert_ne!(hash1, hash2);
        assert!(h.verify("same_password", &hash1).unwrap());
        assert!(h.verify("same_password", &hash2).unwrap());
    }

    #[test]
    fn default_cost_matches_bcrypt() {
        assert_eq!(BcryptHasher::default().cost(), bcrypt::DEFAULT_COST);
    }

    #[test]
    fn hash_embeds_cost() {
        let hash = hasher().hash("pw").unwrap();
        assert!(hash.starts_with("$2b$04$"), "unexpected hash prefix: {hash}");
        assert_eq!(hash.len(), 60);
    }

    #[test]
    fn verification_is_exact() {
        let h = hasher();
        let hash = h.hash("correct_password").unwrap();

        for attempt in [
            "",
            "CORRECT_PASSWORD",
            "correct_password ",
            " correct_password",
            "correct_passwörd",
        ] {
            assert!(!h.verify(attempt, &hash).unwrap(), "should not match: {attempt:?}");
        }
    }

    #[test]
    fn unicode_and_empty_passwords() {
        let h = hasher();
        let unicode = h.hash("пароль🔒密码").unwrap();
        assert!(h.verify("пароль🔒密码", &unicode).unwrap());

        let empty = h.hash("").unwrap();
        assert!(h.verify("", &empty).unwrap());
        assert!(!h.verify("not_empty", &empty).unwrap());
    }

    #[test]
    fn malformed_hashes_are_errors_not_mismatches() {
        let h = hasher();
        for bad in ["", "invalid_hash", "$2b$10$invalid_bcrypt_hash", "$argon2id$v=19$m=4096"] {
            let result = h.verify("password", bad);
            assert!(matches!(result, Err(Error::Hash(_))), "expected error for {bad:?}");
        }
    }
}
