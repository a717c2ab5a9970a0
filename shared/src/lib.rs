//! Shared types for the staff directory
//!
//! Domain models and their JSON wire shape, used by both the HTTP client
//! and the UI core.

pub mod models;

// Re-exports
pub use models::{ContactPreference, Employee, EmployeeId, ParseContactPreferenceError, Skill};
pub use serde::{Deserialize, Serialize};
