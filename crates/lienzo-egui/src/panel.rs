//! Retained inspector panel over a list of parameters.

use std::collections::HashMap;

use egui::Ui;

use lienzo_params::{ControlKind, Parameter, format_value};

use crate::controls;

/// Inspector panel: one row per parameter, dispatched on its control hint.
///
/// Parameters are shared handles, so the panel needs no pump of its own;
/// every frame reads the then-current value. The only retained state is the
/// per-field text buffer, which must survive across frames while the user
/// types something that does not yet parse.
pub struct InspectorPanel {
    params: Vec<Parameter>,
    buffers: HashMap<String, String>,
}

impl InspectorPanel {
    /// Build a panel over the given parameters.
    pub fn new(params: impl IntoIterator<Item = Parameter>) -> Self {
        let params: Vec<Parameter> = params.into_iter().collect();
        let buffers = params
            .iter()
            .map(|p| (p.label().to_string(), format_value(&p.value())))
            .collect();
        Self { params, buffers }
    }

    /// The bound parameters.
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// Render every row. Call once per frame from the UI thread.
    pub fn show(&mut self, ui: &mut Ui) {
        egui::Grid::new("lienzo_inspector")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for param in &self.params {
                    // Sliders, checkboxes, and buttons draw their own label.
                    if !matches!(
                        param.control(),
                        ControlKind::Slider | ControlKind::Toggle | ControlKind::Button
                    ) {
                        ui.label(param.label());
                    }
                    match param.control() {
                        ControlKind::Slider => {
                            controls::param_slider(ui, param);
                        }
                        ControlKind::NumberField | ControlKind::TextField => {
                            let buffer = self
                                .buffers
                                .entry(param.label().to_string())
                                .or_insert_with(|| format_value(&param.value()));
                            controls::param_text_field(ui, param, buffer);
                        }
                        ControlKind::Toggle => {
                            controls::param_checkbox(ui, param);
                        }
                        ControlKind::Button => {
                            controls::param_button(ui, param);
                        }
                        ControlKind::Dropdown | ControlKind::ColorPalette => {
                            controls::param_combo(ui, param);
                        }
                        ControlKind::Label => {
                            controls::param_label(ui, param);
                        }
                        ControlKind::ColorPicker => {
                            controls::param_color(ui, param);
                        }
                        ControlKind::MultiSlider | ControlKind::MultiField => {
                            controls::param_vector(ui, param);
                        }
                    }
                    ui.end_row();
                }
            });
    }
}
