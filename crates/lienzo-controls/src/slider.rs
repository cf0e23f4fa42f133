//! Bounded numeric slider.

use lienzo_binding::ControlSurface;
use lienzo_params::Value;

/// Horizontal slider over a numeric range.
///
/// The host event loop drives drags: [`begin_drag`](Self::begin_drag),
/// [`drag_to`](Self::drag_to) per tick (each followed by a binding commit),
/// [`end_drag`](Self::end_drag) on release.
#[derive(Debug)]
pub struct SliderControl {
    position: f64,
    min: f64,
    max: f64,
    dragging: bool,
}

impl SliderControl {
    /// Slider over the default 0–1 range; the binding pushes the real
    /// bounds on attach.
    pub fn new() -> Self {
        Self {
            position: 0.0,
            min: 0.0,
            max: 1.0,
            dragging: false,
        }
    }

    /// Current thumb position.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current bounds.
    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Start a drag gesture.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Move the thumb. Positions outside the bounds are clamped.
    pub fn drag_to(&mut self, position: f64) {
        self.position = position.clamp(self.min, self.max);
    }

    /// End the drag gesture.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }
}

impl Default for SliderControl {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlSurface for SliderControl {
    fn display_value(&self) -> Value {
        Value::Float(self.position)
    }

    fn set_display_value(&mut self, value: &Value) {
        if let Some(v) = value.as_float() {
            self.position = v.clamp(self.min, self.max);
        }
    }

    fn is_editing(&self) -> bool {
        self.dragging
    }

    fn set_range(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max;
        self.position = self.position.clamp(min, max);
    }
}
