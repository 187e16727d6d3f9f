//! Password visibility toggle.
//!
//! Every control with class `toggle-password` names its field in
//! `data-target`. The target is resolved by `id` first and by input `name`
//! second, so both markup variants used by the account forms share this one
//! contract. A checkbox mirrors its checked state; any other control flips
//! the field on click.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

use std::fmt;

/// The masking mode of an input, i.e. its `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Password,
    Text,
}

impl FieldType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Text => "text",
        }
    }

    /// Read an input `type`. Anything other than `text` is treated as masked.
    #[must_use]
    pub fn from_attr(value: &str) -> Self {
        if value.eq_ignore_ascii_case("text") { Self::Text } else { Self::Password }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Password => Self::Text,
            Self::Text => Self::Password,
        }
    }

    /// Type matching a checkbox state: checked shows the password.
    #[must_use]
    pub fn for_checked(checked: bool) -> Self {
        if checked { Self::Text } else { Self::Password }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An input whose masking can be switched.
pub trait PasswordField {
    fn field_type(&self) -> FieldType;
    fn set_field_type(&self, kind: FieldType);
}

/// What fired the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleControl {
    /// A checkbox `change`, carrying its new checked state.
    Checkbox { checked: bool },
    /// A button `click`.
    Button,
}

impl ToggleControl {
    /// The DOM event this control listens for.
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Checkbox { .. } => "change",
            Self::Button => "click",
        }
    }
}

/// Apply one toggle event to `field` and return its new type.
pub fn apply_toggle<F: PasswordField + ?Sized>(field: &F, control: ToggleControl) -> FieldType {
    let next = match control {
        ToggleControl::Checkbox { checked } => FieldType::for_checked(checked),
        ToggleControl::Button => field.field_type().flipped(),
    };
    field.set_field_type(next);
    next
}

/// Selector for the `name` fallback lookup of a toggle target.
#[must_use]
pub fn target_name_selector(target: &str) -> String {
    format!("input[name=\"{}\"]", target.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Finds the input a toggle controls.
pub trait TargetLookup {
    type Field: PasswordField;

    /// The element with this id, if it is an input.
    fn input_by_id(&self, id: &str) -> Option<Self::Field>;

    /// The first input matching `selector`.
    fn input_by_selector(&self, selector: &str) -> Option<Self::Field>;
}

/// Resolve a `data-target` value: by id first, then by input name.
///
/// An element that carries the id but is not an input does not stop the
/// name lookup.
pub fn resolve_target<L: TargetLookup + ?Sized>(lookup: &L, target: &str) -> Option<L::Field> {
    lookup
        .input_by_id(target)
        .or_else(|| lookup.input_by_selector(&target_name_selector(target)))
}

/// The control kind for a toggle element. `checked` is ignored for buttons.
#[must_use]
pub fn control_for(is_checkbox: bool, checked: bool) -> ToggleControl {
    if is_checkbox { ToggleControl::Checkbox { checked } } else { ToggleControl::Button }
}
