//! Error type shared by every helper in the crate.

use thiserror::Error;

/// Boxed source error carried across port boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias using [`enum@Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by generators, hashers and helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// The secure random source could not supply bytes.
    #[error("secure random source unavailable: {0}")]
    RandomSource(#[source] BoxError),

    /// The hashing primitive failed or the stored hash could not be parsed.
    ///
    /// A password that simply does not match is not an error.
    #[error("password hashing failed: {0}")]
    Hash(#[source] BoxError),

    /// A timestamp did not match any accepted layout.
    #[error("invalid timestamp {input:?}: {source}")]
    TimeParse {
        /// The rejected input.
        input: String,
        /// Parser error for the last layout tried.
        #[source]
        source: chrono::ParseError,
    },

    /// An HTTP request could not be completed (transport failure or timeout).
    #[error("HTTP request failed: {0}")]
    Http(#[source] BoxError),

    /// An output buffer of the requested length could not be allocated.
    #[error("requested length cannot be allocated: {0}")]
    Capacity(#[from] std::collections::TryReserveError),

    /// A request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// A configuration value could not be parsed.
    #[error("invalid configuration for {key}: {message}")]
    Config {
        /// Environment variable name.
        key: &'static str,
        /// What was wrong with it.
        message: String,
    },
}

impl Error {
    /// Wraps any error as a random-source failure.
    pub fn random_source(err: impl Into<BoxError>) -> Self {
        Self::RandomSource(err.into())
    }

    /// Wraps any error as a hashing failure.
    pub fn hash(err: impl Into<BoxError>) -> Self {
        Self::Hash(err.into())
    }

    /// Wraps any error as an HTTP failure.
    pub fn http(err: impl Into<BoxError>) -> Self {
        Self::Http(err.into())
    }
}
