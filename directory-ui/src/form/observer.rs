//! Sibling-driven validator changes
//!
//! An [`Observer`] hangs off a source field. Whenever the source value
//! changes, the target field's validator set is replaced by the rule's
//! output and the target is revalidated on the spot.

use std::fmt;

use super::validators::Validator;

/// Maps the source field's new value to the target's validator set
pub type ValidatorRule = fn(&str) -> Vec<Validator>;

#[derive(Clone)]
pub struct Observer {
    target: String,
    rule: ValidatorRule,
}

impl Observer {
    /// `target` is a dot-separated path from the form root
    pub fn new(target: impl Into<String>, rule: ValidatorRule) -> Self {
        Self {
            target: target.into(),
            rule,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Validator set the target should carry for `source_value`
    pub fn validators_for(&self, source_value: &str) -> Vec<Validator> {
        (self.rule)(source_value)
    }
}

impl fmt::Debug for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer").field("target", &self.target).finish_non_exhaustive()
    }
}
