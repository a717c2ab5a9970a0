//! Validation message projection
//!
//! Turns the error codes cached on the control tree into human-readable
//! text, one slot per control name.

use std::collections::{BTreeMap, HashMap};

use super::control::{Control, GroupControl};

/// Message table: control name -> error code -> text
#[derive(Debug, Clone, Default)]
pub struct ValidationMessages {
    entries: HashMap<String, HashMap<&'static str, String>>,
}

impl ValidationMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, control: &str, code: &'static str, message: impl Into<String>) -> Self {
        self.entries
            .entry(control.to_string())
            .or_default()
            .insert(code, message.into());
        self
    }

    pub fn message(&self, control: &str, code: &str) -> Option<&str> {
        self.entries.get(control)?.get(code).map(String::as_str)
    }
}

/// Current message per control name. Unknown names read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    slots: BTreeMap<String, String>,
}

impl FormErrors {
    /// Pre-create empty slots for `names`
    pub fn with_slots<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            slots: names.into_iter().map(|n| (n.to_string(), String::new())).collect(),
        }
    }

    pub fn get(&self, name: &str) -> &str {
        self.slots.get(name).map(String::as_str).unwrap_or("")
    }

    /// Slots holding a message
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slots
            .iter()
            .filter(|(_, m)| !m.is_empty())
            .map(|(n, m)| (n.as_str(), m.as_str()))
    }

    pub fn is_clear(&self) -> bool {
        self.slots.values().all(String::is_empty)
    }

    fn reset(&mut self, name: &str) -> &mut String {
        let slot = self.slots.entry(name.to_string()).or_default();
        slot.clear();
        slot
    }
}

/// When a control's errors are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    /// Also show errors on untouched controls that already hold a value
    pub show_prefilled: bool,
}

/// Walk `group` and rewrite `out` from the current errors.
///
/// Every visited control's slot is reset first. A control's messages are
/// shown when it has errors and is touched, dirty, or (with
/// `show_prefilled`) non-empty. Groups are recursed into; array entries
/// are not, so errors inside repeated groups never reach a named slot.
pub fn project(
    group: &GroupControl,
    messages: &ValidationMessages,
    visibility: Visibility,
    out: &mut FormErrors,
) {
    for (name, control) in group.controls() {
        let slot = out.reset(name);

        let errors = control.errors();
        let visible = control.is_touched()
            || control.is_dirty()
            || (visibility.show_prefilled && control.has_value());
        if !errors.is_empty() && visible {
            for code in errors.codes() {
                if let Some(message) = messages.message(name, code) {
                    slot.push_str(message);
                }
            }
        }

        if let Control::Group(child) = control {
            project(child, messages, visibility, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::control::{ArrayControl, FieldControl};
    use crate::form::validators::Validator;

    fn messages() -> ValidationMessages {
        ValidationMessages::new()
            .with("name", "required", "Name is required")
            .with("name", "minlength", "Name is too short")
            .with("skillName", "required", "Skill Name is required")
    }

    fn required(value: &str) -> FieldControl {
        FieldControl::new(value).with_validators(vec![Validator::Required, Validator::MinLength(3)])
    }

    #[test]
    fn test_hidden_until_touched_or_dirty() {
        let mut group = GroupControl::new().with_control("name", required(""));
        let mut out = FormErrors::default();
        let visibility = Visibility { show_prefilled: false };

        project(&group, &messages(), visibility, &mut out);
        assert_eq!(out.get("name"), "");

        group.field_mut("name").unwrap().mark_touched();
        project(&group, &messages(), visibility, &mut out);
        assert_eq!(out.get("name"), "Name is required");

        group.field_mut("name").unwrap().set_value("ab");
        project(&group, &messages(), visibility, &mut out);
        assert_eq!(out.get("name"), "Name is too short");

        group.field_mut("name").unwrap().set_value("abc");
        project(&group, &messages(), visibility, &mut out);
        assert!(out.is_clear());
    }

    #[test]
    fn test_prefilled_values_shown_when_enabled() {
        let group = GroupControl::new().with_control("name", required("ab"));
        let mut out = FormErrors::default();

        project(&group, &messages(), Visibility { show_prefilled: false }, &mut out);
        assert_eq!(out.get("name"), "");

        project(&group, &messages(), Visibility { show_prefilled: true }, &mut out);
        assert_eq!(out.get("name"), "Name is too short");
    }

    #[test]
    fn test_nested_groups_recursed_arrays_not() {
        let mut inner = required("");
        inner.mark_touched();
        let mut skill = FieldControl::new("").with_validators(vec![Validator::Required]);
        skill.mark_touched();

        let group = GroupControl::new()
            .with_control("outer", GroupControl::new().with_control("name", inner))
            .with_control(
                "skills",
                ArrayControl::new(vec![GroupControl::new().with_control("skillName", skill)]),
            );
        let mut out = FormErrors::with_slots(["name", "skillName"]);

        project(&group, &messages(), Visibility { show_prefilled: true }, &mut out);
        assert_eq!(out.get("name"), "Name is required");
        assert_eq!(out.get("skillName"), "");
        assert_eq!(out.active().count(), 1);
    }

    #[test]
    fn test_codes_without_message_are_skipped() {
        let mut field = FieldControl::new("x").with_validators(vec![Validator::MinLength(3)]);
        field.mark_touched();
        let group = GroupControl::new().with_control("other", field);
        let mut out = FormErrors::default();

        project(&group, &messages(), Visibility { show_prefilled: false }, &mut out);
        assert_eq!(out.get("other"), "");
    }
}
