//! Editable text field (numeric or free-form).

use lienzo_binding::ControlSurface;
use lienzo_params::{Value, format_value};

/// Single-line editable field with commit-on-blur-or-enter semantics.
///
/// The field is kind-agnostic: the binding formats model values into the
/// buffer and parses the raw buffer back, so the same control serves
/// numeric and free-form text parameters.
#[derive(Debug, Default)]
pub struct FieldControl {
    text: String,
    focused: bool,
}

impl FieldControl {
    /// Empty, unfocused field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw buffer contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Gain focus (host forwards this to the binding's `begin_edit`).
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Lose focus (host forwards this to the binding's `end_edit`).
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Replace the buffer, as if the user retyped the field.
    pub fn type_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl ControlSurface for FieldControl {
    fn display_value(&self) -> Value {
        Value::Text(self.text.clone())
    }

    fn set_display_value(&mut self, value: &Value) {
        self.text = format_value(value);
    }

    fn is_editing(&self) -> bool {
        self.focused
    }
}
