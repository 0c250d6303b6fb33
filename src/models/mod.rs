//! Record types shared with persistence layers.

pub mod user;

pub use user::User;
