//! Per-parameter egui controls.
//!
//! Immediate-mode rendering collapses the binding protocol: each function
//! reads the parameter, draws, and writes back only when the user changed
//! something. The store's equality gate and clamping keep the loop quiet,
//! exactly as with retained bindings.

use egui::{Response, Ui};

use lienzo_params::{Parameter, Value, coerce, format_value};

/// Slider over the parameter's range.
///
/// Falls back to 0–1 when the parameter carries no bounds.
pub fn param_slider(ui: &mut Ui, param: &Parameter) -> Response {
    let (min, max) = param.range().unwrap_or((0.0, 1.0));
    let mut value = param.as_float().unwrap_or(0.0);
    let response = ui.add(egui::Slider::new(&mut value, min..=max).text(param.label()));
    if response.changed() {
        param.set_float(value);
    }
    response
}

/// Drag-value for numeric parameters without slider affordance.
pub fn param_drag(ui: &mut Ui, param: &Parameter) -> Response {
    let mut value = param.as_float().unwrap_or(0.0);
    let mut drag = egui::DragValue::new(&mut value).speed(0.01);
    if let Some((min, max)) = param.range() {
        drag = drag.range(min..=max);
    }
    let response = ui.add(drag);
    if response.changed() {
        match param.value() {
            Value::Int(_) => param.set_int(value.round() as i64),
            _ => param.set_float(value),
        }
    }
    response
}

/// Checkbox for boolean parameters.
pub fn param_checkbox(ui: &mut Ui, param: &Parameter) -> Response {
    let mut on = param.as_bool().unwrap_or(false);
    let response = ui.checkbox(&mut on, param.label());
    if response.changed() {
        param.set_bool(on);
    }
    response
}

/// Momentary button: true while held, false on release.
pub fn param_button(ui: &mut Ui, param: &Parameter) -> Response {
    let response = ui.button(param.label());
    if response.is_pointer_button_down_on() {
        param.set_bool(true);
    } else if param.as_bool() == Some(true) {
        param.set_bool(false);
    }
    response
}

/// Combo box over the parameter's options list.
pub fn param_combo(ui: &mut Ui, param: &Parameter) -> Response {
    let options = param.options();
    let current = param.value();
    let selected = current.as_str().unwrap_or_default().to_string();

    let response = egui::ComboBox::from_id_salt(param.label())
        .selected_text(selected.clone())
        .show_ui(ui, |ui| {
            for option in &options {
                if ui.selectable_label(*option == selected, option).clicked() {
                    param.set_choice(option.clone());
                }
            }
        });
    response.response
}

/// RGBA color button for 4-component vector parameters.
pub fn param_color(ui: &mut Ui, param: &Parameter) -> Response {
    let mut rgba = [0.0f32; 4];
    for (i, channel) in rgba.iter_mut().enumerate() {
        *channel = param.component(i).unwrap_or(0.0) as f32;
    }
    let response = ui.color_edit_button_rgba_unmultiplied(&mut rgba);
    if response.changed() {
        for (i, channel) in rgba.iter().enumerate() {
            param.set_component(i, f64::from(*channel));
        }
    }
    response
}

/// One drag-value per vector component, in a row.
pub fn param_vector(ui: &mut Ui, param: &Parameter) -> Response {
    ui.horizontal(|ui| {
        for i in 0..param.component_count() {
            let mut value = param.component(i).unwrap_or(0.0);
            let mut drag = egui::DragValue::new(&mut value).speed(0.01);
            if let Some((min, max)) = param.range() {
                drag = drag.range(min..=max);
            }
            if ui.add(drag).changed() {
                param.set_component(i, value);
            }
        }
        ui.label(param.label());
    })
    .response
}

/// Read-only readout of the formatted value.
pub fn param_label(ui: &mut Ui, param: &Parameter) -> Response {
    ui.label(format_value(&param.value()))
}

/// Editable text field with commit-on-blur-or-enter.
///
/// `buffer` is the field's persistent edit state, owned by the caller
/// (see [`InspectorPanel`](crate::InspectorPanel)). While the field has
/// focus the buffer is left alone; on blur the raw text is parsed into the
/// parameter's kind and dropped if unparsable, after which the buffer
/// resynchronizes to the authoritative value.
pub fn param_text_field(ui: &mut Ui, param: &Parameter, buffer: &mut String) -> Response {
    let response = ui.text_edit_singleline(buffer);
    if response.lost_focus()
        && let Ok(value) = coerce(&Value::Text(buffer.clone()), param.kind())
    {
        param.set_value(value);
    }
    if !response.has_focus() {
        *buffer = format_value(&param.value());
    }
    response
}
