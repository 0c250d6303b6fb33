//! Port traits defining external boundaries.
//!
//! Each trait represents a collaborator the helpers depend on but do not
//! own (time, secure randomness, password hashing, HTTP). Implementations
//! live in `src/adapters/`.

pub mod clock;
pub mod entropy;
pub mod hasher;
pub mod http;

pub use clock::Clock;
pub use entropy::EntropySource;
pub use hasher::PasswordHasher;
pub use http::{HttpClient, HttpFuture, HttpRequest, HttpResponse};
