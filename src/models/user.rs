//! User account record.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ports::PasswordHasher;
use crate::tokens::TokenGenerator;

/// Length of generated auth keys and one-off tokens.
pub const TOKEN_LEN: i64 = 32;

/// A user account as stored in the `user` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Primary key.
    pub id: u64,
    /// Unique login name.
    pub username: String,
    /// Random key for cookie-based re-authentication.
    pub auth_key: String,
    /// bcrypt hash of the login password.
    pub password_hash: String,
    /// bcrypt hash of the transaction PIN.
    pub pin_hash: String,
    /// One-off token for password resets.
    pub password_reset_token: String,
    /// Display name.
    pub fullname: String,
    /// Contact email.
    pub email: String,
    /// Mobile number, normalized to an international prefix.
    pub handphone: String,
    /// Account status.
    pub status: String,
    /// `"Y"` or `"N"`.
    pub login_dashboard: String,
    /// Date of birth.
    pub dob: Option<NaiveDate>,
    /// Free-form gender value.
    pub gender: String,
    /// Postal address.
    pub address: Option<String>,
    /// ISO country code.
    pub country_id: String,
    /// Province reference.
    pub prov_id: u32,
    /// City reference.
    pub city_id: u32,
    /// Postal code.
    pub postal_code: String,
    /// Creation timestamp.
    pub created_at: Option<NaiveDateTime>,
    /// Last update timestamp.
    pub updated_at: Option<NaiveDateTime>,
    /// One-off token for email verification.
    pub verification_token: String,
    /// Avatar image URL.
    pub avatar: String,
    /// Thumbnail avatar URL.
    pub avatar_small: String,
}

impl User {
    /// Name of the backing table.
    #[must_use]
    pub fn table_name() -> &'static str {
        "user"
    }

    /// Hashes `plaintext` and stores it in `password_hash`.
    ///
    /// On failure the previous hash is kept.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Hash`] if hashing fails.
    pub fn set_password(&mut self, hasher: &dyn PasswordHasher, plaintext: &str) -> Result<()> {
        self.password_hash = hasher.hash(plaintext)?;
        Ok(())
    }

    /// Checks `plaintext` against the stored password hash.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Hash`] if the stored hash is malformed.
    pub fn check_password(&self, hasher: &dyn PasswordHasher, plaintext: &str) -> Result<bool> {
        hasher.verify(plaintext, &self.password_hash)
    }

    /// Replaces `auth_key` with a fresh 32-symbol random string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RandomSource`] and leaves the key unchanged
    /// if random bytes are unavailable.
    pub fn generate_auth_key(&mut self, tokens: &TokenGenerator<'_>) -> Result<()> {
        self.auth_key = tokens.random_string(TOKEN_LEN)?;
        Ok(())
    }

    /// Replaces `verification_token` with a fresh random string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RandomSource`] if random bytes are unavailable.
    pub fn generate_verification_token(&mut self, tokens: &TokenGenerator<'_>) -> Result<()> {
        self.verification_token = tokens.random_string(TOKEN_LEN)?;
        Ok(())
    }

    /// Replaces `password_reset_token` with a fresh random string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RandomSource`] if random bytes are unavailable.
    pub fn generate_password_reset_token(&mut self, tokens: &TokenGenerator<'_>) -> Result<()> {
        self.password_reset_token = tokens.random_string(TOKEN_LEN)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::adapters::live::{BcryptHasher, LiveClock, OsEntropy};
    use crate::adapters::scripted::ScriptedEntropy;
    use crate::error::Error;

    #[test]
    fn table_name_is_user() {
        assert_eq!(User::table_name(), "user");
    }

    #[test]
    fn set_and_check_password() {
        let hasher = BcryptHasher::new(4);
        let mut user = User { username: "superadmin".into(), ..User::default() };

        user.set_password(&hasher, "s3cret").unwrap();
        assert!(user.password_hash.starts_with("$2b$04$"));
        assert!(user.check_password(&hasher, "s3cret").unwrap());
        assert!(!user.check_password(&hasher, "guess").unwrap());
    }

    #[test]
    fn check_password_without_hash_is_an_error() {
        let user = User::default();
        assert!(matches!(user.check_password(&BcryptHasher::new(4), "x"), Err(Error::Hash(_))));
    }

    #[test]
    fn auth_key_is_32_symbols() {
        let (entropy, clock) = (OsEntropy, LiveClock);
        let tokens = TokenGenerator::new(&entropy, &clock);
        let mut user = User::default();

        user.generate_auth_key(&tokens).unwrap();
        assert_eq!(user.auth_key.len(), 32);

        let previous = user.auth_key.clone();
        user.generate_auth_key(&tokens).unwrap();
        assert_ne!(user.auth_key, previous);
    }

    #[test]
    fn failed_generation_keeps_old_values() {
        let clock = LiveClock;
        let entropy = ScriptedEntropy::exhausted();
        let tokens = TokenGenerator::new(&entropy, &clock);
        let mut user = User {
            auth_key: "existing".into(),
            verification_token: "pending".into(),
            ..User::default()
        };

        assert!(user.generate_auth_key(&tokens).is_err());
        assert!(user.generate_verification_token(&tokens).is_err());
        assert!(user.generate_password_reset_token(&tokens).is_err());
        assert_eq!(user.auth_key, "existing");
        assert_eq!(user.verification_token, "pending");
        assert_eq!(user.password_reset_token, "");
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let user = User {
            id: 7,
            username: "budi".into(),
            address: Some("Jl. Merdeka 1".into()),
            ..User::default()
        };
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["id"], json!(7));
        assert_eq!(value["username"], json!("budi"));
        assert_eq!(value["address"], json!("Jl. Merdeka 1"));
        assert_eq!(value["avatar_small"], json!(""));
        assert!(value["dob"].is_null());

        let back: User = serde_json::from_value(value).unwrap();
        assert_eq!(back, user);
    }
}
