//! Shared helpers: secure tokens and identifiers, password hashing, time,
//! phone/name normalization and JSON HTTP calls, plus the `commons` CLI.
//!
//! External collaborators (clock, random source, hasher, HTTP) sit behind
//! the traits in [`ports`] and are wired together in
//! [`context::ServiceContext`].

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod datetime;
pub mod error;
pub mod http;
pub mod models;
pub mod ports;
pub mod text;
pub mod tokens;

pub use error::{Error, Result};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::context::ServiceContext;

/// Run the CLI with the provided arguments.
///
/// Help and version requests print to stdout and succeed.
///
/// # Errors
///
/// Returns an error string when argument parsing, configuration, or command
/// execution fails.
pub fn run<I, T>(args: I) -> std::result::Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };

    let config = Config::from_env().map_err(|e| e.to_string())?;
    init_tracing(&config.log_filter);

    let ctx = ServiceContext::live(config);
    commands::dispatch(&cli.command, &ctx)
}

/// Installs a stderr `fmt` subscriber; later calls are no-ops.
///
/// `filter` has already been checked by [`Config::from_lookup`].
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    // Already installed when `run` is called more than once in-process.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
