//! Reactive form engine
//!
//! A form is a tree of [`Control`]s rooted in a [`FormModel`]. Fields carry
//! validators, groups may carry a cross-field [`GroupValidator`], arrays hold
//! repeated groups. Observers let one field rewrite another field's
//! validator set, and [`project`] maps the cached errors to display text.

pub mod control;
pub mod errors;
pub mod messages;
pub mod model;
pub mod observer;
pub mod validators;

pub use control::{ArrayControl, Control, FieldControl, GroupControl};
pub use errors::{ErrorSet, ValidationError};
pub use messages::{FormErrors, ValidationMessages, Visibility, project};
pub use model::FormModel;
pub use observer::{Observer, ValidatorRule};
pub use validators::{GroupValidator, Validator, match_email};
