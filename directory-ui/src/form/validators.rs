//! Field and group validators
//!
//! Field validators follow the usual form conventions: only `Required`
//! rejects an empty value, every other rule passes on empty input so that
//! optional fields can carry format rules.

use regex::Regex;

use super::control::{FieldControl, GroupControl};
use super::errors::{ErrorSet, ValidationError};

/// Rule attached to a single field
#[derive(Debug, Clone)]
pub enum Validator {
    Required,
    MinLength(usize),
    MaxLength(usize),
    /// Whole-value match; the regex is anchored on construction
    Pattern(Regex),
    /// Digit strings must not exceed this value; other input is left to `Pattern`
    Max(u64),
    /// Value must be one of these options
    OneOf(Vec<String>),
    /// Host part after the last `@` must equal this domain (case-insensitive)
    EmailDomain(String),
}

impl Validator {
    /// Build an anchored [`Validator::Pattern`]
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::Pattern(Regex::new(&format!("^(?:{})$", pattern))?))
    }

    /// Check `value`, returning the failed rule if any
    pub fn validate(&self, value: &str) -> Option<ValidationError> {
        if value.is_empty() {
            return matches!(self, Self::Required).then_some(ValidationError::Required);
        }

        let length = value.chars().count();
        match self {
            Self::Required => None,
            Self::MinLength(min) if length < *min => Some(ValidationError::MinLength {
                required: *min,
                actual: length,
            }),
            Self::MaxLength(max) if length > *max => Some(ValidationError::MaxLength {
                required: *max,
                actual: length,
            }),
            Self::Pattern(regex) if !regex.is_match(value) => Some(ValidationError::Pattern {
                pattern: regex.as_str().to_string(),
            }),
            Self::Max(max) => {
                let over = match value.parse::<u64>() {
                    Ok(n) => n > *max,
                    Err(_) => value.bytes().all(|b| b.is_ascii_digit()),
                };
                over.then_some(ValidationError::Max { max: *max })
            }
            Self::OneOf(allowed) if !allowed.iter().any(|a| a == value) => {
                Some(ValidationError::OneOf {
                    allowed: allowed.clone(),
                })
            }
            Self::EmailDomain(domain) => {
                let host = value.rsplit_once('@').map(|(_, host)| host).unwrap_or("");
                (!host.eq_ignore_ascii_case(domain)).then(|| ValidationError::EmailDomain {
                    expected: domain.clone(),
                })
            }
            _ => None,
        }
    }
}

/// Run every validator against `value`
pub fn run_all(validators: &[Validator], value: &str) -> ErrorSet {
    validators.iter().filter_map(|v| v.validate(value)).collect()
}

/// Cross-field rule attached to a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupValidator {
    /// Two named children must hold the same email
    EmailMatch { email: String, confirm: String },
}

impl GroupValidator {
    pub fn email_match(email: impl Into<String>, confirm: impl Into<String>) -> Self {
        Self::EmailMatch {
            email: email.into(),
            confirm: confirm.into(),
        }
    }

    pub fn validate(&self, group: &GroupControl) -> ErrorSet {
        match self {
            Self::EmailMatch { email, confirm } => match (group.field(email), group.field(confirm)) {
                (Some(email), Some(confirm)) => match_email(email, confirm).into_iter().collect(),
                _ => ErrorSet::new(),
            },
        }
    }
}

/// Emails must match, unless the confirmation is still pristine and empty.
pub fn match_email(email: &FieldControl, confirm: &FieldControl) -> Option<ValidationError> {
    if email.value() == confirm.value() || (confirm.is_pristine() && confirm.value().is_empty()) {
        None
    } else {
        Some(ValidationError::EmailMismatch)
    }
}
