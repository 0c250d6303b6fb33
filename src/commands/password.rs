//! `commons hash|verify` commands.

use crate::context::ServiceContext;

/// Execute the `hash` command.
///
/// # Errors
///
/// Returns an error string if hashing fails.
pub fn hash(ctx: &ServiceContext, password: &str) -> Result<String, String> {
    ctx.hasher.hash(password).map_err(|e| e.to_string())
}

/// Execute the `verify` command, yielding `match` or `mismatch`.
///
/// # Errors
///
/// Returns an error string if `stored` is not a valid hash.
pub fn verify(ctx: &ServiceContext, password: &str, stored: &str) -> Result<String, String> {
    let matched = ctx.hasher.verify(password, stored).map_err(|e| e.to_string())?;
    Ok(if matched { "match" } else { "mismatch" }.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn ctx() -> ServiceContext {
        ServiceContext::live(Config { bcrypt_cost: 4, ..Config::default() })
    }

    #[test]
    fn hash_then_verify() {
        let ctx = ctx();
        let stored = hash(&ctx, "hunter2").unwrap();

        assert_eq!(verify(&ctx, "hunter2", &stored).unwrap(), "match");
        assert_eq!(verify(&ctx, "hunter3", &stored).unwrap(), "mismatch");
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let err = verify(&ctx(), "hunter2", "not-a-hash").unwrap_err();
        assert!(err.starts_with("password hashing failed"), "{err}");
    }
}
