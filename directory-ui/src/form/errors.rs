//! Validation error codes

use std::fmt;

/// A single failed validation rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    MinLength { required: usize, actual: usize },
    MaxLength { required: usize, actual: usize },
    Pattern { pattern: String },
    Max { max: u64 },
    OneOf { allowed: Vec<String> },
    EmailDomain { expected: String },
    EmailMismatch,
}

impl ValidationError {
    /// Stable error code, used as the key into the message table
    pub fn code(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength { .. } => "minlength",
            Self::MaxLength { .. } => "maxlength",
            Self::Pattern { .. } => "pattern",
            Self::Max { .. } => "max",
            Self::OneOf { .. } => "oneOf",
            Self::EmailDomain { .. } => "emailDomain",
            Self::EmailMismatch => "emailMismatch",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Errors currently active on a control, in validator order.
///
/// Holds at most one error per code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet(Vec<ValidationError>);

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error unless one with the same code is already present
    pub fn insert(&mut self, error: ValidationError) {
        if !self.contains(error.code()) {
            self.0.push(error);
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.iter().any(|e| e.code() == code)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn codes(&self) -> Vec<&'static str> {
        self.0.iter().map(ValidationError::code).collect()
    }
}

impl FromIterator<ValidationError> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut set = Self::new();
        for error in iter {
            set.insert(error);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_one_error_per_code() {
        let mut set = ErrorSet::new();
        set.insert(ValidationError::Required);
        set.insert(ValidationError::MinLength { required: 2, actual: 1 });
        set.insert(ValidationError::Required);

        assert_eq!(set.len(), 2);
        assert_eq!(set.codes(), vec!["required", "minlength"]);
        assert!(set.contains("minlength"));
        assert!(!set.contains("maxlength"));
    }
}
