//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `commons`.
#[derive(Debug, Parser)]
#[command(name = "commons", version, about = "Generate tokens, hash passwords and tidy up strings")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a transaction ID: local `yyMMddHHmmss` plus 8 random digits.
    Txid,
    /// Print a random 6-digit code.
    Code,
    /// Print a random version-4 UUID.
    Uuid,
    /// Print a random string over `0-9A-Za-z_-`.
    Random {
        /// Number of symbols; zero or negative prints an empty line.
        #[arg(short, long, default_value_t = 32, allow_negative_numbers = true)]
        length: i64,
    },
    /// Hash a password with bcrypt.
    Hash {
        /// Plaintext password.
        password: String,
    },
    /// Check a password against a bcrypt hash.
    Verify {
        /// Plaintext password.
        password: String,
        /// Stored hash.
        hash: String,
    },
    /// Normalize a phone number to an international prefix.
    Phone {
        /// Number in any common notation.
        number: String,
        /// Country code to apply; defaults to `COMMONS_PHONE_COUNTRY_CODE`.
        #[arg(long)]
        country_code: Option<String>,
    },
    /// Title-case a personal name.
    Capitalize {
        /// Name parts.
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// GET a URL expecting JSON.
    Get {
        /// Target URL.
        url: String,
        /// Extra header as `Name: value`; repeatable.
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,
    },
    /// POST a JSON document.
    Post {
        /// Target URL.
        url: String,
        /// JSON request body.
        #[arg(short, long)]
        data: String,
        /// Extra header as `Name: value`; repeatable.
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,
        /// Timeout in milliseconds; defaults to `COMMONS_HTTP_TIMEOUT_MS`.
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
}

impl Command {
    /// Subcommand name as typed on the command line.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Txid => "txid",
            Self::Code => "code",
            Self::Uuid => "uuid",
            Self::Random { .. } => "random",
            Self::Hash { .. } => "hash",
            Self::Verify { .. } => "verify",
            Self::Phone { .. } => "phone",
            Self::Capitalize { .. } => "capitalize",
            Self::Get { .. } => "get",
            Self::Post { .. } => "post",
        }
    }
}
