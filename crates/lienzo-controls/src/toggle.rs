//! Boolean controls: toggle switch and momentary button.

use lienzo_binding::ControlSurface;
use lienzo_params::Value;

/// Two-state on/off switch.
#[derive(Debug, Default)]
pub struct ToggleControl {
    on: bool,
}

impl ToggleControl {
    /// Switch in the off position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current switch state.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Flip the switch, as a user click would. Commit afterwards.
    pub fn flip(&mut self) {
        self.on = !self.on;
    }
}

impl ControlSurface for ToggleControl {
    fn display_value(&self) -> Value {
        Value::Bool(self.on)
    }

    fn set_display_value(&mut self, value: &Value) {
        if let Some(b) = value.as_bool() {
            self.on = b;
        }
    }
}

/// Momentary push button: true while held, false on release.
///
/// Bound to a boolean parameter the host treats as a trigger; both the
/// press and the release are committed, so listeners see a full pulse.
#[derive(Debug, Default)]
pub struct ButtonControl {
    held: bool,
}

impl ButtonControl {
    /// Released button.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the button is currently held.
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Press the button. Commit afterwards.
    pub fn press(&mut self) {
        self.held = true;
    }

    /// Release the button. Commit afterwards.
    pub fn release(&mut self) {
        self.held = false;
    }
}

impl ControlSurface for ButtonControl {
    fn display_value(&self) -> Value {
        Value::Bool(self.held)
    }

    fn set_display_value(&mut self, value: &Value) {
        if let Some(b) = value.as_bool() {
            self.held = b;
        }
    }
}
