//! Entropy source that replays a fixed byte script.

use std::sync::{Mutex, PoisonError};

use crate::error::{Error, Result};
use crate::ports::EntropySource;

/// Serves bytes from a script in order and fails once it runs dry.
///
/// A request that cannot be satisfied in full consumes nothing and returns
/// [`Error::RandomSource`], mirroring an OS source that refuses to hand out
/// a short read.
#[derive(Debug, Default)]
pub struct ScriptedEntropy {
    script: Vec<u8>,
    cursor: Mutex<usize>,
}

impl ScriptedEntropy {
    /// Creates a source that serves `script` once.
    #[must_use]
    pub fn new(script: impl Into<Vec<u8>>) -> Self {
        Self { script: script.into(), cursor: Mutex::new(0) }
    }

    /// A source with no bytes; every non-empty request fails.
    #[must_use]
    pub fn exhausted() -> Self {
        Self::default()
    }

    /// Bytes still available.
    #[must_use]
    pub fn remaining(&self) -> usize {
        let cursor = *self.cursor.lock().unwrap_or_else(PoisonError::into_inner);
        self.script.len() - cursor
    }
}

impl EntropySource for ScriptedEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        let mut cursor =
            self.cursor.lock().map_err(|_| Error::random_source("entropy script lock poisoned"))?;
        let end = *cursor + buf.len();
        let Some(chunk) = self.script.get(*cursor..end) else {
            return Err(Error::random_source(format!(
                "entropy script exhausted: {} requested, {} left",
                buf.len(),
                self.script.len() - *cursor
            )));
        };
        buf.copy_from_slice(chunk);
        *cursor = end;
        Ok(())
    }
}
