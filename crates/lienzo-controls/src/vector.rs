//! Multi-component vector row.

use lienzo_binding::ControlSurface;
use lienzo_params::{Value, Vector, format_float, format_value};

/// One editable sub-field of a [`VectorRow`].
#[derive(Debug, Default)]
struct ComponentField {
    text: String,
    focused: bool,
    /// How many times this field has been repainted from the model.
    paints: usize,
}

/// Row of N numeric fields sharing one vector parameter.
///
/// Each field behaves as an independent scalar editor against
/// `parameter[i]`; a model change to one component repaints only that
/// field, leaving the others' cursors and paint counts untouched.
#[derive(Debug)]
pub struct VectorRow {
    fields: Vec<ComponentField>,
}

impl VectorRow {
    /// Row with `len` components (2 to 4; anything else clamps into range).
    pub fn new(len: usize) -> Self {
        let len = len.clamp(2, 4);
        Self {
            fields: (0..len).map(|_| ComponentField::default()).collect(),
        }
    }

    /// Number of component fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always `false` — a row has at least two fields.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Raw text of field `index`.
    pub fn component_text(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|f| f.text.as_str())
    }

    /// Model repaint count of field `index` (diagnostics and tests).
    pub fn paint_count(&self, index: usize) -> usize {
        self.fields.get(index).map_or(0, |f| f.paints)
    }

    /// Focus field `index` (host forwards to `begin_edit`).
    pub fn focus_component(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(index) {
            field.focused = true;
        }
    }

    /// Blur field `index` (host forwards to `end_edit`).
    pub fn blur_component(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(index) {
            field.focused = false;
        }
    }

    /// Retype field `index`, as the user would.
    pub fn type_component(&mut self, index: usize, text: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.text = text.into();
        }
    }
}

impl ControlSurface for VectorRow {
    /// All fields parsed as a vector when possible; otherwise the raw joined
    /// text, which the binding's commit will reject and drop.
    fn display_value(&self) -> Value {
        let parsed: Result<Vec<f64>, _> = self
            .fields
            .iter()
            .map(|f| f.text.trim().parse::<f64>())
            .collect();
        match parsed.ok().and_then(|c| Vector::from_slice(&c)) {
            Some(vector) => Value::Vector(vector),
            None => {
                let joined: Vec<&str> = self.fields.iter().map(|f| f.text.as_str()).collect();
                Value::Text(format!("({})", joined.join(", ")))
            }
        }
    }

    fn set_display_value(&mut self, value: &Value) {
        if let Value::Vector(v) = value {
            for (i, field) in self.fields.iter_mut().enumerate() {
                if let Some(c) = v.get(i) {
                    field.text = format_float(c);
                    field.paints += 1;
                }
            }
        } else {
            // Scalar fallback keeps the row visibly consistent.
            let text = format_value(value);
            for field in &mut self.fields {
                field.text = text.clone();
                field.paints += 1;
            }
        }
    }

    fn is_editing(&self) -> bool {
        self.fields.iter().any(|f| f.focused)
    }

    fn set_component_display(&mut self, index: usize, value: f64) {
        if let Some(field) = self.fields.get_mut(index) {
            field.text = format_float(value);
            field.paints += 1;
        }
    }
}
