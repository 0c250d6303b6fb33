//! `commons txid|code|uuid|random` commands.

use crate::context::ServiceContext;

/// Execute the `txid` command.
///
/// # Errors
///
/// Returns an error string if the random source fails.
pub fn transaction_id(ctx: &ServiceContext) -> Result<String, String> {
    ctx.tokens().transaction_id().map_err(|e| e.to_string())
}

/// Execute the `code` command.
///
/// # Errors
///
/// Returns an error string if the random source fails.
pub fn numeric_code(ctx: &ServiceContext) -> Result<String, String> {
    ctx.tokens().numeric_code().map_err(|e| e.to_string())
}

/// Execute the `uuid` command.
///
/// # Errors
///
/// Returns an error string if the random source fails.
pub fn uuid(ctx: &ServiceContext) -> Result<String, String> {
    ctx.tokens().uuid_v4().map_err(|e| e.to_string())
}

/// Execute the `random` command.
///
/// # Errors
///
/// Returns an error string if the random source fails.
pub fn random(ctx: &ServiceContext, length: i64) -> Result<String, String> {
    ctx.tokens().random_string(length).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone, Utc};

    use super::*;
    use crate::adapters::scripted::{FixedClock, ScriptedEntropy};
    use crate::config::Config;

    fn scripted(bytes: Vec<u8>) -> ServiceContext {
        let mut ctx = ServiceContext::live(Config::default());
        ctx.entropy = Box::new(ScriptedEntropy::new(bytes));
        ctx
    }

    #[test]
    fn txid_from_scripted_context() {
        let instant = Utc.with_ymd_and_hms(2031, 12, 31, 23, 59, 58).unwrap();
        let mut ctx = scripted(vec![0; 8]);
        ctx.clock = Box::new(FixedClock::new(instant));

        let prefix = instant.with_timezone(&Local).format("%y%m%d%H%M%S").to_string();
        assert_eq!(transaction_id(&ctx).unwrap(), format!("{prefix}00000000"));
    }

    #[test]
    fn code_and_random_from_script() {
        let ctx = scripted(vec![1, 2, 3, 4, 5, 6, 10, 36, 62]);
        assert_eq!(numeric_code(&ctx).unwrap(), "123456");
        assert_eq!(random(&ctx, 3).unwrap(), "Aa_");
    }

    #[test]
    fn negative_random_is_empty() {
        let ctx = scripted(Vec::new());
        assert_eq!(random(&ctx, -1).unwrap(), "");
    }

    #[test]
    fn exhausted_script_reports_failure() {
        let ctx = scripted(vec![1, 2]);
        assert!(uuid(&ctx).is_err());
        assert!(numeric_code(&ctx).is_err());
    }
}
