//! Random identifier and token generation.
//!
//! Every generator draws its bytes from an injected [`EntropySource`] and
//! either returns a value in its exact format or [`Error::RandomSource`].
//! Uniqueness is probabilistic only; callers that need a hard guarantee
//! must enforce it where the value is stored.
//!
//! [`Error::RandomSource`]: crate::Error::RandomSource

pub mod encoding;

use crate::error::Result;
use crate::ports::{Clock, EntropySource};

/// Length of a transaction ID: 12 timestamp digits plus 8 random digits.
pub const TRANSACTION_ID_LEN: usize = 20;
/// Length of the short numeric code.
pub const NUMERIC_CODE_LEN: usize = 6;
/// Timestamp layout at the front of a transaction ID.
pub const TRANSACTION_TIMESTAMP_FORMAT: &str = "%y%m%d%H%M%S";

const TRANSACTION_SUFFIX_LEN: usize = 8;

/// Generates transaction IDs, numeric codes, UUIDs and random strings.
///
/// Holds only shared references to `Send + Sync` ports, so one generator
/// can serve any number of threads.
#[derive(Clone, Copy)]
pub struct TokenGenerator<'a> {
    entropy: &'a dyn EntropySource,
    clock: &'a dyn Clock,
}

impl<'a> TokenGenerator<'a> {
    /// Creates a generator over the given random source and clock.
    #[must_use]
    pub fn new(entropy: &'a dyn EntropySource, clock: &'a dyn Clock) -> Self {
        Self { entropy, clock }
    }

    /// Returns `yyMMddHHmmss` (local time) followed by 8 random digits.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RandomSource`] if random bytes are unavailable.
    pub fn transaction_id(&self) -> Result<String> {
        let mut suffix = [0u8; TRANSACTION_SUFFIX_LEN];
        self.entropy.fill(&mut suffix)?;

        let timestamp = self.clock.now_local().format(TRANSACTION_TIMESTAMP_FORMAT);
        Ok(format!("{timestamp}{}", encoding::decimal_digits(&suffix)))
    }

    /// Returns exactly six random decimal digits.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RandomSource`] if random bytes are unavailable.
    pub fn numeric_code(&self) -> Result<String> {
        let mut bytes = [0u8; NUMERIC_CODE_LEN];
        self.entropy.fill(&mut bytes)?;
        Ok(encoding::decimal_digits(&bytes))
    }

    /// Returns a random version-4 UUID in lowercase hyphenated form.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RandomSource`] if random bytes are unavailable.
    pub fn uuid_v4(&self) -> Result<String> {
        let mut bytes = [0u8; 16];
        self.entropy.fill(&mut bytes)?;
        Ok(encoding::uuid_v4(bytes))
    }

    /// Returns `length` symbols drawn from [`encoding::ALPHABET`].
    ///
    /// A zero or negative `length` yields an empty string without touching
    /// the random source.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RandomSource`] if random bytes are unavailable
    /// and [`crate::Error::Capacity`] if `length` bytes cannot be allocated;
    /// an empty string is never used to signal failure.
    pub fn random_string(&self, length: i64) -> Result<String> {
        let Ok(length) = usize::try_from(length) else {
            return Ok(String::new());
        };
        if length == 0 {
            return Ok(String::new());
        }

        let mut bytes = Vec::new();
        bytes.try_reserve_exact(length)?;
        bytes.resize(length, 0);
        self.entropy.fill(&mut bytes)?;
        Ok(encoding::alphabet_string(&bytes))
    }
}
