//! Form root and value-change propagation

use super::control::{ArrayControl, Control, FieldControl, GroupControl};
use crate::error::{FormError, FormResult};

/// Root of a control tree.
///
/// Every value change runs the changed field's observers and then
/// revalidates the whole tree before returning.
#[derive(Debug, Clone)]
pub struct FormModel {
    root: GroupControl,
}

impl FormModel {
    pub fn new(mut root: GroupControl) -> Self {
        root.validate();
        Self { root }
    }

    pub fn root(&self) -> &GroupControl {
        &self.root
    }

    pub fn find(&self, path: &str) -> Option<&Control> {
        self.root.find(path)
    }

    pub fn field(&self, path: &str) -> FormResult<&FieldControl> {
        self.root
            .find(path)
            .ok_or_else(|| FormError::UnknownControl(path.to_string()))?
            .as_field()
            .ok_or_else(|| FormError::NotAField(path.to_string()))
    }

    fn field_mut(&mut self, path: &str) -> FormResult<&mut FieldControl> {
        self.root
            .find_mut(path)
            .ok_or_else(|| FormError::UnknownControl(path.to_string()))?
            .as_field_mut()
            .ok_or_else(|| FormError::NotAField(path.to_string()))
    }

    /// Current value of the field at `path`
    pub fn value(&self, path: &str) -> FormResult<&str> {
        self.field(path).map(FieldControl::value)
    }

    pub fn array(&self, path: &str) -> FormResult<&ArrayControl> {
        self.root
            .find(path)
            .and_then(Control::as_array)
            .ok_or_else(|| FormError::UnknownControl(path.to_string()))
    }

    pub fn array_mut(&mut self, path: &str) -> FormResult<&mut ArrayControl> {
        self.root
            .find_mut(path)
            .and_then(Control::as_array_mut)
            .ok_or_else(|| FormError::UnknownControl(path.to_string()))
    }

    /// User edit of a field: marks it dirty
    pub fn set_value(&mut self, path: &str, value: &str) -> FormResult<()> {
        self.field_mut(path)?.set_value(value);
        self.value_changed(path)
    }

    /// Programmatic update of a field: touched/dirty stay as they are
    pub fn patch_value(&mut self, path: &str, value: &str) -> FormResult<()> {
        self.field_mut(path)?.patch_value(value);
        self.value_changed(path)
    }

    /// Field lost focus
    pub fn touch(&mut self, path: &str) -> FormResult<()> {
        self.field_mut(path)?.mark_touched();
        Ok(())
    }

    fn value_changed(&mut self, path: &str) -> FormResult<()> {
        let field = self.field(path)?;
        let value = field.value().to_string();
        let observers = field.observers().to_vec();

        for observer in observers {
            let target = self.field_mut(observer.target())?;
            target.set_validators(observer.validators_for(&value));
            target.validate();
            tracing::debug!(source_path = path, target_path = observer.target(), "Validators updated");
        }

        self.validate();
        Ok(())
    }

    /// Revalidate the full tree
    pub fn validate(&mut self) {
        self.root.validate();
    }

    pub fn is_valid(&self) -> bool {
        self.root.is_valid()
    }

    pub fn is_touched(&self) -> bool {
        self.root.is_touched()
    }

    pub fn is_dirty(&self) -> bool {
        self.root.is_dirty()
    }
}
