//! Runtime configuration read from the environment.

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Environment variable for the bcrypt cost factor.
pub const BCRYPT_COST_VAR: &str = "COMMONS_BCRYPT_COST";
/// Environment variable for the default HTTP timeout in milliseconds.
pub const HTTP_TIMEOUT_VAR: &str = "COMMONS_HTTP_TIMEOUT_MS";
/// Environment variable for the phone country code.
pub const PHONE_COUNTRY_CODE_VAR: &str = "COMMONS_PHONE_COUNTRY_CODE";
/// Environment variable for the tracing filter.
pub const LOG_VAR: &str = "COMMONS_LOG";

/// Default HTTP timeout applied when a call does not pass its own.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_millis(10_000);
/// Default phone country code (Indonesia).
pub const DEFAULT_PHONE_COUNTRY_CODE: &str = "62";

/// Settings shared by the live adapters and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// bcrypt work factor, 4..=31.
    pub bcrypt_cost: u32,
    /// Default timeout for HTTP calls.
    pub http_timeout: Duration,
    /// Digits prefixed by phone normalization.
    pub phone_country_code: String,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            phone_country_code: DEFAULT_PHONE_COUNTRY_CODE.to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when a variable is set but invalid.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup; unset keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when a value is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(BCRYPT_COST_VAR) {
            let cost: u32 = raw.trim().parse().map_err(|e| Error::Config {
                key: BCRYPT_COST_VAR,
                message: format!("{raw:?} is not a number: {e}"),
            })?;
            if !(4..=31).contains(&cost) {
                return Err(Error::Config {
                    key: BCRYPT_COST_VAR,
                    message: format!("{cost} is outside 4..=31"),
                });
            }
            config.bcrypt_cost = cost;
        }

        if let Some(raw) = lookup(HTTP_TIMEOUT_VAR) {
            let millis: u64 = raw.trim().parse().map_err(|e| Error::Config {
                key: HTTP_TIMEOUT_VAR,
                message: format!("{raw:?} is not a number: {e}"),
            })?;
            if millis == 0 {
                return Err(Error::Config {
                    key: HTTP_TIMEOUT_VAR,
                    message: "timeout must be greater than zero".to_string(),
                });
            }
            config.http_timeout = Duration::from_millis(millis);
        }

        if let Some(raw) = lookup(PHONE_COUNTRY_CODE_VAR) {
            let code = raw.trim();
            if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::Config {
                    key: PHONE_COUNTRY_CODE_VAR,
                    message: format!("{raw:?} must be one or more digits"),
                });
            }
            config.phone_country_code = code.to_string();
        }

        if let Some(raw) = lookup(LOG_VAR) {
            EnvFilter::try_new(&raw).map_err(|e| Error::Config {
                key: LOG_VAR,
                message: format!("{raw:?} is not a valid filter: {e}"),
            })?;
            config.log_filter = raw;
        }

        Ok(config)
    }
}
