//! Command dispatch and handlers.

pub mod http;
pub mod password;
pub mod text;
pub mod tokens;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler and print its output.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    let output = dispatch_with_context(command, ctx).inspect_err(|err| {
        tracing::debug!(command = command.name(), error = %err, "command failed");
    })?;
    tracing::debug!(command = command.name(), "command finished");
    println!("{output}");
    Ok(())
}

/// Run a command and return what it would print.
fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<String, String> {
    match command {
        Command::Txid => tokens::transaction_id(ctx),
        Command::Code => tokens::numeric_code(ctx),
        Command::Uuid => tokens::uuid(ctx),
        Command::Random { length } => tokens::random(ctx, *length),
        Command::Hash { password } => password::hash(ctx, password),
        Command::Verify { password, hash } => password::verify(ctx, password, hash),
        Command::Phone { number, country_code } => text::phone(ctx, number, country_code.as_deref()),
        Command::Capitalize { words } => Ok(text::capitalize(words)),
        Command::Get { url, headers } => http::get(ctx, url, headers),
        Command::Post { url, data, headers, timeout_ms } => {
            http::post(ctx, url, data, headers, *timeout_ms)
        }
    }
}
