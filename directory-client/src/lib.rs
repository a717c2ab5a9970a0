//! Directory Client - HTTP client for the employee resource
//!
//! Provides network-based HTTP calls to the `/employees` REST API and the
//! [`EmployeeService`] seam the UI core depends on.

pub mod config;
pub mod error;
pub mod http;
pub mod service;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use service::{EmployeeApi, EmployeeService};

// Re-export shared types for convenience
pub use shared::{ContactPreference, Employee, EmployeeId, Skill};
