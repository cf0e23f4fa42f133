//! Control capability contract consumed by bindings.

use lienzo_params::Value;

/// Minimal capability set a control exposes to its binding.
///
/// A surface knows nothing about parameters: it holds a displayed value,
/// reports whether the user is mid-edit, and optionally accepts range and
/// options updates. Platform adapters (headless controls, egui widgets)
/// implement this; the binding core is written against it alone, so the
/// synchronization logic exists exactly once.
pub trait ControlSurface {
    /// The value as currently shown, possibly mid-edit raw text.
    ///
    /// Text-based controls return [`Value::Text`] with the raw buffer; the
    /// binding parses it back into the parameter's kind.
    fn display_value(&self) -> Value;

    /// Push a model value into the control.
    ///
    /// The binding only calls this when the display is out of sync, so
    /// implementations may repaint unconditionally.
    fn set_display_value(&mut self, value: &Value);

    /// Whether the control currently has user focus or an active drag.
    ///
    /// Bindings suppress model-to-view pushes while this is true, in
    /// addition to their own edit state driven by
    /// [`Binding::begin_edit`](crate::Binding::begin_edit).
    fn is_editing(&self) -> bool {
        false
    }

    /// Update numeric bounds. Controls without a range ignore this.
    fn set_range(&mut self, _min: f64, _max: f64) {}

    /// Replace the selectable options. Controls without options ignore this.
    fn set_options(&mut self, _options: &[String]) {}

    /// Update a single vector component without repainting the group.
    ///
    /// Multi-component surfaces must override this; the default drops the
    /// update (scalar controls never receive it).
    fn set_component_display(&mut self, _index: usize, _value: f64) {}
}

impl<S: ControlSurface + ?Sized> ControlSurface for Box<S> {
    fn display_value(&self) -> Value {
        (**self).display_value()
    }

    fn set_display_value(&mut self, value: &Value) {
        (**self).set_display_value(value);
    }

    fn is_editing(&self) -> bool {
        (**self).is_editing()
    }

    fn set_range(&mut self, min: f64, max: f64) {
        (**self).set_range(min, max);
    }

    fn set_options(&mut self, options: &[String]) {
        (**self).set_options(options);
    }

    fn set_component_display(&mut self, index: usize, value: f64) {
        (**self).set_component_display(index, value);
    }
}
