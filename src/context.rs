//! Service context bundling all port trait objects.

use crate::adapters::live::{BcryptHasher, LiveClock, LiveHttpClient, OsEntropy};
use crate::config::Config;
use crate::ports::{Clock, EntropySource, HttpClient, PasswordHasher};
use crate::tokens::TokenGenerator;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Callers pass the
/// context (or individual ports) down instead of reaching for globals.
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Secure random source for tokens and IDs.
    pub entropy: Box<dyn EntropySource>,
    /// Password hashing primitive.
    pub hasher: Box<dyn PasswordHasher>,
    /// HTTP client for outbound JSON calls.
    pub http: Box<dyn HttpClient>,
    /// Settings the adapters were built from.
    pub config: Config,
}

impl ServiceContext {
    /// Creates a live context: system clock, OS entropy, bcrypt at the
    /// configured cost, reqwest with the configured timeout.
    #[must_use]
    pub fn live(config: Config) -> Self {
        Self {
            clock: Box::new(LiveClock),
            entropy: Box::new(OsEntropy),
            hasher: Box::new(BcryptHasher::new(config.bcrypt_cost)),
            http: Box::new(LiveHttpClient::new(config.http_timeout)),
            config,
        }
    }

    /// A token generator over this context's entropy and clock.
    #[must_use]
    pub fn tokens(&self) -> TokenGenerator<'_> {
        TokenGenerator::new(self.entropy.as_ref(), self.clock.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::adapters::scripted::{FixedClock, ScriptedEntropy};

    #[test]
    fn live_context_generates_tokens() {
        let ctx = ServiceContext::live(Config { bcrypt_cost: 4, ..Config::default() });
        let tokens = ctx.tokens();

        assert_eq!(tokens.uuid_v4().unwrap().len(), 36);
        assert_eq!(tokens.numeric_code().unwrap().len(), 6);

        let hash = ctx.hasher.hash("pw").unwrap();
        assert!(hash.starts_with("$2b$04$"));
        assert!(ctx.hasher.verify("pw", &hash).unwrap());
    }

    #[test]
    fn ports_can_be_swapped() {
        let mut ctx = ServiceContext::live(Config::default());
        ctx.clock = Box::new(FixedClock::new(Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap()));
        ctx.entropy = Box::new(ScriptedEntropy::new(vec![0; 16]));

        assert_eq!(ctx.tokens().uuid_v4().unwrap(), "00000000-0000-4000-8000-000000000000");
        assert!(ctx.tokens().uuid_v4().is_err());
    }
}
