//! Live entropy backed by the operating system's CSPRNG.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{Error, Result};
use crate::ports::EntropySource;

/// Reads random bytes from the OS (`getrandom` and friends).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(buf).map_err(|e| {
            tracing::warn!(error = %e, requested = buf.len(), "OS random source failed");
            Error::random_source(e)
        })
    }
}
