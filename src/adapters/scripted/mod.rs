//! Deterministic adapters that serve pre-scripted values.
//!
//! Used by tests and by callers that need reproducible identifiers.

pub mod clock;
pub mod entropy;

pub use clock::FixedClock;
pub use entropy::ScriptedEntropy;
