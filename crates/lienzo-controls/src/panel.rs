//! Control factory and panel container.
//!
//! The factory maps a parameter's [`ControlKind`] hint to a concrete control;
//! the [`Panel`] builds one binding per parameter and exposes the only two
//! entry points a form builder needs: attach (via [`Panel::build`]) and
//! detach.

use lienzo_binding::{Binding, ControlSurface};
use lienzo_params::{ControlKind, Parameter, Value};

use crate::color::ColorWell;
use crate::dropdown::DropdownControl;
use crate::field::FieldControl;
use crate::label::LabelReadout;
use crate::slider::SliderControl;
use crate::toggle::{ButtonControl, ToggleControl};
use crate::vector::VectorRow;

/// A concrete headless control, one variant per control family.
///
/// A tagged union instead of trait objects: containers and tests can match
/// on the variant to reach the concrete control, and dispatch is a single
/// `match` rather than a per-widget type check.
#[derive(Debug)]
pub enum InspectorControl {
    /// Bounded numeric slider.
    Slider(SliderControl),
    /// Editable text field (numeric or free-form).
    Field(FieldControl),
    /// On/off switch.
    Toggle(ToggleControl),
    /// Momentary button.
    Button(ButtonControl),
    /// Option picker (dropdown or palette).
    Dropdown(DropdownControl),
    /// Read-only readout.
    Label(LabelReadout),
    /// RGBA color well.
    Color(ColorWell),
    /// Multi-component vector row.
    Vector(VectorRow),
}

impl InspectorControl {
    /// Instantiate the control a parameter's hint asks for.
    ///
    /// Hints that cannot hold the parameter's value fall back to a
    /// [`LabelReadout`] instead of a control that would misbehave.
    pub fn for_param(param: &Parameter) -> Self {
        let kind = param.control();
        if !kind.accepts(&param.value()) {
            return InspectorControl::Label(LabelReadout::new());
        }
        match kind {
            ControlKind::Slider => InspectorControl::Slider(SliderControl::new()),
            ControlKind::NumberField | ControlKind::TextField => {
                InspectorControl::Field(FieldControl::new())
            }
            ControlKind::Toggle => InspectorControl::Toggle(ToggleControl::new()),
            ControlKind::Button => InspectorControl::Button(ButtonControl::new()),
            ControlKind::Dropdown | ControlKind::ColorPalette => {
                InspectorControl::Dropdown(DropdownControl::new())
            }
            ControlKind::Label => InspectorControl::Label(LabelReadout::new()),
            ControlKind::ColorPicker => InspectorControl::Color(ColorWell::new()),
            ControlKind::MultiSlider | ControlKind::MultiField => {
                InspectorControl::Vector(VectorRow::new(param.component_count()))
            }
        }
    }

    /// The slider variant, if that is what this control is.
    pub fn as_slider(&self) -> Option<&SliderControl> {
        match self {
            InspectorControl::Slider(s) => Some(s),
            _ => None,
        }
    }

    /// The field variant, if that is what this control is.
    pub fn as_field(&self) -> Option<&FieldControl> {
        match self {
            InspectorControl::Field(f) => Some(f),
            _ => None,
        }
    }

    /// The dropdown variant, if that is what this control is.
    pub fn as_dropdown(&self) -> Option<&DropdownControl> {
        match self {
            InspectorControl::Dropdown(d) => Some(d),
            _ => None,
        }
    }

    /// The vector-row variant, if that is what this control is.
    pub fn as_vector(&self) -> Option<&VectorRow> {
        match self {
            InspectorControl::Vector(v) => Some(v),
            _ => None,
        }
    }
}

impl ControlSurface for InspectorControl {
    fn display_value(&self) -> Value {
        match self {
            InspectorControl::Slider(c) => c.display_value(),
            InspectorControl::Field(c) => c.display_value(),
            InspectorControl::Toggle(c) => c.display_value(),
            InspectorControl::Button(c) => c.display_value(),
            InspectorControl::Dropdown(c) => c.display_value(),
            InspectorControl::Label(c) => c.display_value(),
            InspectorControl::Color(c) => c.display_value(),
            InspectorControl::Vector(c) => c.display_value(),
        }
    }

    fn set_display_value(&mut self, value: &Value) {
        match self {
            InspectorControl::Slider(c) => c.set_display_value(value),
            InspectorControl::Field(c) => c.set_display_value(value),
            InspectorControl::Toggle(c) => c.set_display_value(value),
            InspectorControl::Button(c) => c.set_display_value(value),
            InspectorControl::Dropdown(c) => c.set_display_value(value),
            InspectorControl::Label(c) => c.set_display_value(value),
            InspectorControl::Color(c) => c.set_display_value(value),
            InspectorControl::Vector(c) => c.set_display_value(value),
        }
    }

    fn is_editing(&self) -> bool {
        match self {
            InspectorControl::Slider(c) => c.is_editing(),
            InspectorControl::Field(c) => c.is_editing(),
            InspectorControl::Toggle(c) => c.is_editing(),
            InspectorControl::Button(c) => c.is_editing(),
            InspectorControl::Dropdown(c) => c.is_editing(),
            InspectorControl::Label(c) => c.is_editing(),
            InspectorControl::Color(c) => c.is_editing(),
            InspectorControl::Vector(c) => c.is_editing(),
        }
    }

    fn set_range(&mut self, min: f64, max: f64) {
        match self {
            InspectorControl::Slider(c) => c.set_range(min, max),
            InspectorControl::Field(c) => c.set_range(min, max),
            InspectorControl::Toggle(c) => c.set_range(min, max),
            InspectorControl::Button(c) => c.set_range(min, max),
            InspectorControl::Dropdown(c) => c.set_range(min, max),
            InspectorControl::Label(c) => c.set_range(min, max),
            InspectorControl::Color(c) => c.set_range(min, max),
            InspectorControl::Vector(c) => c.set_range(min, max),
        }
    }

    fn set_options(&mut self, options: &[String]) {
        match self {
            InspectorControl::Slider(c) => c.set_options(options),
            InspectorControl::Field(c) => c.set_options(options),
            InspectorControl::Toggle(c) => c.set_options(options),
            InspectorControl::Button(c) => c.set_options(options),
            InspectorControl::Dropdown(c) => c.set_options(options),
            InspectorControl::Label(c) => c.set_options(options),
            InspectorControl::Color(c) => c.set_options(options),
            InspectorControl::Vector(c) => c.set_options(options),
        }
    }

    fn set_component_display(&mut self, index: usize, value: f64) {
        match self {
            InspectorControl::Slider(c) => c.set_component_display(index, value),
            InspectorControl::Field(c) => c.set_component_display(index, value),
            InspectorControl::Toggle(c) => c.set_component_display(index, value),
            InspectorControl::Button(c) => c.set_component_display(index, value),
            InspectorControl::Dropdown(c) => c.set_component_display(index, value),
            InspectorControl::Label(c) => c.set_component_display(index, value),
            InspectorControl::Color(c) => c.set_component_display(index, value),
            InspectorControl::Vector(c) => c.set_component_display(index, value),
        }
    }
}

/// One bound row of a [`Panel`].
pub struct PanelRow {
    label: String,
    binding: Binding<InspectorControl>,
}

impl PanelRow {
    /// The bound parameter's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The row's binding.
    pub fn binding(&self) -> &Binding<InspectorControl> {
        &self.binding
    }

    /// The row's binding, mutably.
    pub fn binding_mut(&mut self) -> &mut Binding<InspectorControl> {
        &mut self.binding
    }
}

/// Inspector form over a list of parameters.
///
/// Builds one control + binding per parameter. The host calls
/// [`pump`](Self::pump) once per UI tick and [`detach`](Self::detach) on
/// teardown; both are safe in any order relative to individual row teardown.
#[derive(Default)]
pub struct Panel {
    rows: Vec<PanelRow>,
}

impl Panel {
    /// Build a panel binding every parameter to its hinted control.
    pub fn build<'a>(params: impl IntoIterator<Item = &'a Parameter>) -> Self {
        let rows = params
            .into_iter()
            .map(|param| PanelRow {
                label: param.label().to_string(),
                binding: Binding::attach(param, InspectorControl::for_param(param)),
            })
            .collect();
        Self { rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the panel has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row by parameter label.
    pub fn row(&self, label: &str) -> Option<&PanelRow> {
        self.rows.iter().find(|r| r.label == label)
    }

    /// Row by parameter label, mutably.
    pub fn row_mut(&mut self, label: &str) -> Option<&mut PanelRow> {
        self.rows.iter_mut().find(|r| r.label == label)
    }

    /// Iterate all rows.
    pub fn rows(&self) -> impl Iterator<Item = &PanelRow> {
        self.rows.iter()
    }

    /// Apply queued parameter changes on every row. UI thread only.
    pub fn pump(&mut self) {
        for row in &mut self.rows {
            row.binding.pump();
        }
    }

    /// Detach every row. Idempotent, like the bindings underneath.
    pub fn detach(&mut self) {
        for row in &mut self.rows {
            row.binding.detach();
        }
    }
}
