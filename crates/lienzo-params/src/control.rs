//! Control-kind hints for rendering parameters.

use crate::value::{Value, ValueKind};

/// Hint selecting which control renders a parameter.
///
/// The hint is advisory: a container maps it to a concrete control
/// implementation, and may substitute (e.g., a read-only build renders
/// everything as [`Label`](ControlKind::Label)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Horizontal drag slider for bounded numeric values.
    Slider,
    /// Editable numeric text field with commit-on-enter/blur.
    NumberField,
    /// Free-form text field.
    TextField,
    /// On/off switch.
    Toggle,
    /// Momentary push button (true while held).
    Button,
    /// Enumerated option picker.
    Dropdown,
    /// Read-only value readout.
    Label,
    /// RGBA channel editor for 4-component vectors.
    ColorPicker,
    /// Swatch row picking one color option out of a fixed set.
    ColorPalette,
    /// One slider per vector component.
    MultiSlider,
    /// One number field per vector component.
    MultiField,
}

impl ControlKind {
    /// The conventional default control for a value of the given kind.
    pub fn default_for(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Bool => ControlKind::Toggle,
            ValueKind::Int => ControlKind::NumberField,
            ValueKind::Float => ControlKind::Slider,
            ValueKind::Text => ControlKind::TextField,
            ValueKind::Vector(_) => ControlKind::MultiField,
            ValueKind::Choice => ControlKind::Dropdown,
        }
    }

    /// Whether this control can render the given value.
    ///
    /// Containers use this to fall back to [`Label`](ControlKind::Label)
    /// instead of instantiating a control that cannot hold the value.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            ControlKind::Slider | ControlKind::NumberField => {
                matches!(value, Value::Int(_) | Value::Float(_))
            }
            ControlKind::TextField => matches!(value, Value::Text(_)),
            ControlKind::Toggle | ControlKind::Button => matches!(value, Value::Bool(_)),
            ControlKind::Dropdown | ControlKind::ColorPalette => matches!(value, Value::Choice(_)),
            ControlKind::Label => true,
            ControlKind::ColorPicker => {
                matches!(value, Value::Vector(v) if v.len() == 4)
            }
            ControlKind::MultiSlider | ControlKind::MultiField => {
                matches!(value, Value::Vector(_))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Vector;

    #[test]
    fn defaults_per_kind() {
        assert_eq!(ControlKind::default_for(ValueKind::Bool), ControlKind::Toggle);
        assert_eq!(ControlKind::default_for(ValueKind::Float), ControlKind::Slider);
        assert_eq!(
            ControlKind::default_for(ValueKind::Vector(3)),
            ControlKind::MultiField
        );
    }

    #[test]
    fn accepts_checks_payload() {
        assert!(ControlKind::Slider.accepts(&Value::Float(0.5)));
        assert!(ControlKind::Slider.accepts(&Value::Int(2)));
        assert!(!ControlKind::Slider.accepts(&Value::Bool(true)));
        assert!(ControlKind::Label.accepts(&Value::Bool(true)));
        assert!(ControlKind::ColorPicker.accepts(&Value::Vector(Vector::vec4(0.0, 0.0, 0.0, 1.0))));
        assert!(!ControlKind::ColorPicker.accepts(&Value::Vector(Vector::vec2(0.0, 0.0))));
    }
}
