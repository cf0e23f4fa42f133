//! RGBA color well.

use lienzo_binding::ControlSurface;
use lienzo_params::{Value, Vector};

/// Color editor over a 4-component RGBA vector in 0–1.
///
/// Channels fan out like any vector parameter: a single-channel model
/// change repaints only that channel.
#[derive(Debug)]
pub struct ColorWell {
    rgba: [f64; 4],
    picking: bool,
}

impl ColorWell {
    /// Opaque black.
    pub fn new() -> Self {
        Self {
            rgba: [0.0, 0.0, 0.0, 1.0],
            picking: false,
        }
    }

    /// Current channels.
    pub fn rgba(&self) -> [f64; 4] {
        self.rgba
    }

    /// Open the picker (host forwards to `begin_edit`).
    pub fn open_picker(&mut self) {
        self.picking = true;
    }

    /// Close the picker (host forwards to `end_edit`).
    pub fn close_picker(&mut self) {
        self.picking = false;
    }

    /// Set all channels, as a user pick would. Commit afterwards.
    pub fn pick(&mut self, rgba: [f64; 4]) {
        self.rgba = rgba.map(|c| c.clamp(0.0, 1.0));
    }
}

impl Default for ColorWell {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlSurface for ColorWell {
    fn display_value(&self) -> Value {
        Value::Vector(Vector::vec4(
            self.rgba[0],
            self.rgba[1],
            self.rgba[2],
            self.rgba[3],
        ))
    }

    fn set_display_value(&mut self, value: &Value) {
        if let Value::Vector(v) = value
            && v.len() == 4
        {
            for (i, channel) in self.rgba.iter_mut().enumerate() {
                if let Some(c) = v.get(i) {
                    *channel = c;
                }
            }
        }
    }

    fn is_editing(&self) -> bool {
        self.picking
    }

    fn set_component_display(&mut self, index: usize, value: f64) {
        if index < 4 {
            self.rgba[index] = value;
        }
    }
}
