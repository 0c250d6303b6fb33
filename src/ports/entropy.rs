//! Entropy port supplying cryptographically secure random bytes.

use crate::error::Result;

/// Fills buffers with secure random bytes.
///
/// Implementations must be safe to share across threads. A failure is
/// reported as [`crate::Error::RandomSource`] and never papered over with
/// fixed bytes.
pub trait EntropySource: Send + Sync {
    /// Overwrites every byte of `buf` with fresh random data.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::RandomSource`] if the source cannot supply
    /// enough bytes.
    fn fill(&self, buf: &mut [u8]) -> Result<()>;
}
