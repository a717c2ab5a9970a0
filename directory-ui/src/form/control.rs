//! Control tree
//!
//! Three node kinds make up a form: [`FieldControl`] (one scalar input),
//! [`GroupControl`] (named children plus an optional cross-field rule) and
//! [`ArrayControl`] (ordered, resizable list of groups). [`Control`] is the
//! sum type over the three, giving every node the same `validate()` shape.
//!
//! Each node caches the errors of its last `validate()` call. Touched and
//! dirty roll up: a group or array counts as touched/dirty when any
//! descendant is.

use super::errors::ErrorSet;
use super::observer::Observer;
use super::validators::{GroupValidator, Validator, run_all};

#[derive(Debug, Clone)]
pub enum Control {
    Field(FieldControl),
    Group(GroupControl),
    Array(ArrayControl),
}

impl Control {
    /// Recompute errors for this node and everything below it.
    ///
    /// Returns the node's own errors (group-level errors for a group).
    pub fn validate(&mut self) -> ErrorSet {
        match self {
            Self::Field(field) => field.validate(),
            Self::Group(group) => group.validate(),
            Self::Array(array) => array.validate(),
        }
    }

    /// The node's own errors from the last validation
    pub fn errors(&self) -> &ErrorSet {
        match self {
            Self::Field(field) => field.errors(),
            Self::Group(group) => group.errors(),
            Self::Array(array) => array.errors(),
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Self::Field(field) => field.is_valid(),
            Self::Group(group) => group.is_valid(),
            Self::Array(array) => array.is_valid(),
        }
    }

    pub fn is_touched(&self) -> bool {
        match self {
            Self::Field(field) => field.is_touched(),
            Self::Group(group) => group.is_touched(),
            Self::Array(array) => array.is_touched(),
        }
    }

    pub fn is_dirty(&self) -> bool {
        match self {
            Self::Field(field) => field.is_dirty(),
            Self::Group(group) => group.is_dirty(),
            Self::Array(array) => array.is_dirty(),
        }
    }

    /// Whether any field at or below this node holds a non-empty value
    pub fn has_value(&self) -> bool {
        match self {
            Self::Field(field) => !field.value().is_empty(),
            Self::Group(group) => group.controls().any(|(_, c)| c.has_value()),
            Self::Array(array) => array.iter().any(|g| g.controls().any(|(_, c)| c.has_value())),
        }
    }

    pub fn as_field(&self) -> Option<&FieldControl> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_field_mut(&mut self) -> Option<&mut FieldControl> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&GroupControl> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayControl> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut ArrayControl> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Resolve a dot-separated path (`emailGroup.email`, `skills.0.skillName`)
    pub fn find(&self, path: &str) -> Option<&Control> {
        path.split('.').try_fold(self, |node, segment| match node {
            Self::Group(group) => group.get(segment),
            Self::Array(array) => segment
                .parse::<usize>()
                .ok()
                .and_then(|i| array.get_control(i)),
            Self::Field(_) => None,
        })
    }

    pub fn find_mut(&mut self, path: &str) -> Option<&mut Control> {
        path.split('.').try_fold(self, |node, segment| match node {
            Self::Group(group) => group.get_mut(segment),
            Self::Array(array) => segment
                .parse::<usize>()
                .ok()
                .and_then(move |i| array.get_control_mut(i)),
            Self::Field(_) => None,
        })
    }
}

impl From<FieldControl> for Control {
    fn from(field: FieldControl) -> Self {
        Self::Field(field)
    }
}

impl From<GroupControl> for Control {
    fn from(group: GroupControl) -> Self {
        Self::Group(group)
    }
}

impl From<ArrayControl> for Control {
    fn from(array: ArrayControl) -> Self {
        Self::Array(array)
    }
}

// ============================================================================
// Field
// ============================================================================

/// A single scalar input with its own validator set
#[derive(Debug, Clone, Default)]
pub struct FieldControl {
    value: String,
    validators: Vec<Validator>,
    observers: Vec<Observer>,
    errors: ErrorSet,
    touched: bool,
    dirty: bool,
}

impl FieldControl {
    pub fn new(value: impl Into<String>) -> Self {
        let mut field = Self {
            value: value.into(),
            ..Self::default()
        };
        field.validate();
        field
    }

    pub fn with_validators(mut self, validators: Vec<Validator>) -> Self {
        self.validators = validators;
        self.validate();
        self
    }

    pub fn with_observer(mut self, observer: Observer) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// User edit: updates the value and marks the field dirty
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.dirty = true;
        self.validate();
    }

    /// Programmatic update: leaves touched/dirty untouched
    pub fn patch_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.validate();
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// Replace the validator set. Call [`FieldControl::validate`] afterwards
    /// to refresh the cached errors.
    pub fn set_validators(&mut self, validators: Vec<Validator>) {
        self.validators = validators;
    }

    pub fn observers(&self) -> &[Observer] {
        &self.observers
    }

    pub fn validate(&mut self) -> ErrorSet {
        self.errors = run_all(&self.validators, &self.value);
        self.errors.clone()
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_pristine(&self) -> bool {
        !self.dirty
    }
}

// ============================================================================
// Group
// ============================================================================

/// Named children in insertion order, plus an optional cross-field rule
#[derive(Debug, Clone, Default)]
pub struct GroupControl {
    controls: Vec<(String, Control)>,
    validator: Option<GroupValidator>,
    errors: ErrorSet,
}

impl GroupControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child; a child with the same name is replaced in place
    pub fn with_control(mut self, name: impl Into<String>, control: impl Into<Control>) -> Self {
        self.insert(name, control);
        self
    }

    pub fn with_validator(mut self, validator: GroupValidator) -> Self {
        self.validator = Some(validator);
        self.validate();
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, control: impl Into<Control>) {
        let name = name.into();
        let control = control.into();
        match self.controls.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = control,
            None => self.controls.push((name, control)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Control> {
        self.controls.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Control> {
        self.controls.iter_mut().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    /// Resolve a dot-separated path relative to this group
    pub fn find(&self, path: &str) -> Option<&Control> {
        match path.split_once('.') {
            Some((head, rest)) => self.get(head)?.find(rest),
            None => self.get(path),
        }
    }

    pub fn find_mut(&mut self, path: &str) -> Option<&mut Control> {
        match path.split_once('.') {
            Some((head, rest)) => self.get_mut(head)?.find_mut(rest),
            None => self.get_mut(path),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldControl> {
        self.get(name).and_then(Control::as_field)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldControl> {
        self.get_mut(name).and_then(Control::as_field_mut)
    }

    pub fn controls(&self) -> impl Iterator<Item = (&str, &Control)> {
        self.controls.iter().map(|(n, c)| (n.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Validate every child, then the group's own rule
    pub fn validate(&mut self) -> ErrorSet {
        for (_, control) in &mut self.controls {
            control.validate();
        }
        self.errors = match &self.validator {
            Some(validator) => validator.validate(self),
            None => ErrorSet::new(),
        };
        self.errors.clone()
    }

    /// Group-level errors only; child errors live on the children
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.controls.iter().all(|(_, c)| c.is_valid())
    }

    pub fn is_touched(&self) -> bool {
        self.controls.iter().any(|(_, c)| c.is_touched())
    }

    pub fn is_dirty(&self) -> bool {
        self.controls.iter().any(|(_, c)| c.is_dirty())
    }
}

// ============================================================================
// Array
// ============================================================================

/// Ordered, resizable list of groups, each valid or invalid on its own
#[derive(Debug, Clone, Default)]
pub struct ArrayControl {
    // Stored as `Control` so path lookup can hand out `&Control`.
    controls: Vec<Control>,
    errors: ErrorSet,
    touched: bool,
    dirty: bool,
}

impl ArrayControl {
    pub fn new(groups: Vec<GroupControl>) -> Self {
        Self {
            controls: groups.into_iter().map(Control::Group).collect(),
            ..Self::default()
        }
    }

    pub fn push(&mut self, group: GroupControl) {
        self.controls.push(Control::Group(group));
    }

    /// Remove the group at `index`, shifting later groups down by one
    pub fn remove_at(&mut self, index: usize) -> Option<GroupControl> {
        if index >= self.controls.len() {
            return None;
        }
        match self.controls.remove(index) {
            Control::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Replace every entry
    pub fn replace(&mut self, groups: Vec<GroupControl>) {
        self.controls = groups.into_iter().map(Control::Group).collect();
    }

    pub fn get(&self, index: usize) -> Option<&GroupControl> {
        self.controls.get(index).and_then(Control::as_group)
    }

    fn get_control(&self, index: usize) -> Option<&Control> {
        self.controls.get(index)
    }

    fn get_control_mut(&mut self, index: usize) -> Option<&mut Control> {
        self.controls.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupControl> {
        self.controls.iter().filter_map(Control::as_group)
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn validate(&mut self) -> ErrorSet {
        for control in &mut self.controls {
            control.validate();
        }
        self.errors.clone()
    }

    /// Arrays carry no rules of their own; always empty
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.controls.iter().all(Control::is_valid)
    }

    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_touched(&self) -> bool {
        self.touched || self.controls.iter().any(Control::is_touched)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty || self.controls.iter().any(Control::is_dirty)
    }
}
