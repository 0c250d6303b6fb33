//! Live adapters for real external interactions.

pub mod clock;
pub mod entropy;
pub mod hasher;
pub mod http;

pub use clock::LiveClock;
pub use entropy::OsEntropy;
pub use hasher::BcryptHasher;
pub use http::LiveHttpClient;
