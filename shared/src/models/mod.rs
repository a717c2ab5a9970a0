//! Data models
//!
//! Mirrors the JSON documents served by the `/employees` resource.
//! All IDs are `i64` and stay `None` until the server has persisted the record.

pub mod employee;
pub mod skill;

// Re-exports
pub use employee::*;
pub use skill::*;
