//! Read-only value readout.

use lienzo_binding::ControlSurface;
use lienzo_params::{Value, format_value};

/// Non-interactive readout. Model-to-view only; it never originates edits,
/// and a commit of its shown text parses back to an equal value, so the
/// equality gate keeps it inert.
#[derive(Debug, Default)]
pub struct LabelReadout {
    text: String,
}

impl LabelReadout {
    /// Empty readout.
    pub fn new() -> Self {
        Self::default()
    }

    /// The displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl ControlSurface for LabelReadout {
    fn display_value(&self) -> Value {
        Value::Text(self.text.clone())
    }

    fn set_display_value(&mut self, value: &Value) {
        self.text = format_value(value);
    }
}
