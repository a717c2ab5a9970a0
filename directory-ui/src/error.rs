//! Error types for the UI core

use directory_client::ClientError;
use thiserror::Error;

/// Errors raised by the employee form
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Unknown control: {0}")]
    UnknownControl(String),

    #[error("Control is not a field: {0}")]
    NotAField(String),

    #[error("Skill index {index} out of range (len {len})")]
    SkillIndexOutOfRange { index: usize, len: usize },

    #[error("Invalid value for {path}: {value:?}")]
    InvalidValue { path: String, value: String },

    #[error("Form is invalid")]
    Invalid,

    #[error("Service error: {0}")]
    Service(#[from] ClientError),
}

/// Result type for form operations
pub type FormResult<T> = Result<T, FormError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
