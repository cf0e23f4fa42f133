//! Observable parameter holder.
//!
//! A [`Parameter`] is the single source of truth a control binds to: a typed
//! value plus display metadata (label, optional bounds, options list, control
//! hint) and a change-notification stream. Values are clamped on assignment;
//! the binding layer never validates ranges itself.
//!
//! Change notifications carry a [`Change`] topic only. Subscribers re-read
//! the authoritative value, so a slow consumer can never observe a stale
//! payload carried inside the notification.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};

use crate::control::ControlKind;
use crate::format::coerce;
use crate::value::{Value, ValueKind, Vector};

/// What changed on a parameter.
///
/// Topics deliberately carry no value payload — consumers re-read the
/// parameter, which is authoritative even under concurrent writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// The whole value was replaced.
    Value,
    /// A single vector component changed.
    Component(usize),
    /// The min/max bounds changed.
    Range,
    /// The options list was replaced.
    Options,
}

type Callback = Arc<dyn Fn(Change) + Send + Sync>;

struct ParamState {
    value: Value,
    control: ControlKind,
    min: Option<f64>,
    max: Option<f64>,
    options: Vec<String>,
}

struct ParamInner {
    label: String,
    state: RwLock<ParamState>,
    subscribers: Mutex<Vec<(u64, Callback)>>,
    next_sub_id: AtomicU64,
}

impl ParamInner {
    /// Snapshot the callback list, then invoke outside any lock. A callback
    /// is free to re-read the parameter or drop its own subscription.
    fn notify(&self, change: Change) {
        let callbacks: Vec<Callback> = self
            .subscribers
            .lock()
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for cb in callbacks {
            cb(change);
        }
    }

    fn unsubscribe(&self, id: u64) {
        self.subscribers.lock().retain(|(sub_id, _)| *sub_id != id);
    }
}

/// Handle to an active change subscription.
///
/// Dropping the handle unsubscribes deterministically — no callback fires
/// after the drop returns. Bindings own one of these and release it on
/// detach.
pub struct Subscription {
    inner: Weak<ParamInner>,
    id: u64,
}

impl Subscription {
    /// Explicitly release the subscription. Equivalent to dropping.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.unsubscribe(self.id);
        }
    }
}

/// A typed, observable, named value holder.
///
/// Cheap to clone — clones share state. Created and owned by the host
/// application; bindings hold a [`WeakParameter`] and never extend the
/// parameter's lifetime.
///
/// # Example
///
/// ```rust
/// use lienzo_params::{ControlKind, Parameter, Value};
///
/// let speed = Parameter::float("Speed", 0.5).with_range(0.0, 1.0);
/// speed.set_float(0.75);
/// assert_eq!(speed.value(), Value::Float(0.75));
///
/// // Assignments outside the range are clamped by the store.
/// speed.set_float(2.0);
/// assert_eq!(speed.value(), Value::Float(1.0));
/// ```
#[derive(Clone)]
pub struct Parameter {
    inner: Arc<ParamInner>,
}

/// Non-owning reference to a [`Parameter`].
#[derive(Clone)]
pub struct WeakParameter {
    inner: Weak<ParamInner>,
}

impl WeakParameter {
    /// Recover the parameter if the host still owns it.
    pub fn upgrade(&self) -> Option<Parameter> {
        self.inner.upgrade().map(|inner| Parameter { inner })
    }
}

impl Parameter {
    fn new(label: impl Into<String>, value: Value, control: ControlKind) -> Self {
        Self {
            inner: Arc::new(ParamInner {
                label: label.into(),
                state: RwLock::new(ParamState {
                    value,
                    control,
                    min: None,
                    max: None,
                    options: Vec::new(),
                }),
                subscribers: Mutex::new(Vec::new()),
                next_sub_id: AtomicU64::new(0),
            }),
        }
    }

    /// Floating-point parameter, rendered as a slider by default.
    pub fn float(label: impl Into<String>, value: f64) -> Self {
        Self::new(label, Value::Float(value), ControlKind::Slider)
    }

    /// Integer parameter, rendered as a number field by default.
    pub fn int(label: impl Into<String>, value: i64) -> Self {
        Self::new(label, Value::Int(value), ControlKind::NumberField)
    }

    /// Boolean parameter, rendered as a toggle by default.
    pub fn toggle(label: impl Into<String>, value: bool) -> Self {
        Self::new(label, Value::Bool(value), ControlKind::Toggle)
    }

    /// Text parameter, rendered as a text field by default.
    pub fn text(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(label, Value::Text(value.into()), ControlKind::TextField)
    }

    /// Enumerated parameter, rendered as a dropdown by default.
    pub fn choice<I>(label: impl Into<String>, value: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let param = Self::new(label, Value::Choice(value.into()), ControlKind::Dropdown);
        param.inner.state.write().options = options.into_iter().map(Into::into).collect();
        param
    }

    /// Vector parameter, rendered as one number field per component.
    pub fn vector(label: impl Into<String>, value: Vector) -> Self {
        Self::new(label, Value::Vector(value), ControlKind::MultiField)
    }

    /// RGBA color parameter (4 components in 0–1), rendered as a color picker.
    pub fn color(label: impl Into<String>, rgba: [f64; 4]) -> Self {
        Self::new(
            label,
            Value::Vector(Vector::vec4(rgba[0], rgba[1], rgba[2], rgba[3])),
            ControlKind::ColorPicker,
        )
        .with_range(0.0, 1.0)
    }

    /// Sets min/max bounds, clamping the current value into them.
    ///
    /// Builder form — use [`set_range`](Self::set_range) after construction.
    /// Ignored for kinds without an ordering (bool, text, choice).
    pub fn with_range(self, min: f64, max: f64) -> Self {
        self.set_range(min, max);
        self
    }

    /// Overrides the control hint.
    ///
    /// A plain state write: clones and existing subscriptions stay attached.
    /// Containers read the hint when they build their controls, so changing
    /// it after a panel is built has no retroactive effect.
    pub fn with_control(self, control: ControlKind) -> Self {
        self.inner.state.write().control = control;
        self
    }

    /// Display name; also the stable identity key for snapshots.
    pub fn label(&self) -> &str {
        &self.inner.label
    }

    /// Control hint for containers.
    pub fn control(&self) -> ControlKind {
        self.inner.state.read().control
    }

    /// Kind tag of the current value.
    pub fn kind(&self) -> ValueKind {
        self.inner.state.read().value.kind()
    }

    /// Current value (authoritative; always re-read, never cached).
    pub fn value(&self) -> Value {
        self.inner.state.read().value.clone()
    }

    /// Numeric view of the current value, if it has one.
    pub fn as_float(&self) -> Option<f64> {
        self.inner.state.read().value.as_float()
    }

    /// Boolean view of the current value, if it has one.
    pub fn as_bool(&self) -> Option<bool> {
        self.inner.state.read().value.as_bool()
    }

    /// Min/max bounds, when both are set.
    pub fn range(&self) -> Option<(f64, f64)> {
        let state = self.inner.state.read();
        state.min.zip(state.max)
    }

    /// Options list for enumerated parameters (empty otherwise).
    pub fn options(&self) -> Vec<String> {
        self.inner.state.read().options.clone()
    }

    /// Vector component at `index`, or `None` for scalar kinds.
    pub fn component(&self, index: usize) -> Option<f64> {
        self.inner.state.read().value.as_vector().and_then(|v| v.get(index))
    }

    /// Number of vector components; `0` for scalar kinds.
    pub fn component_count(&self) -> usize {
        self.inner
            .state
            .read()
            .value
            .as_vector()
            .map_or(0, Vector::len)
    }

    /// Assign a new value.
    ///
    /// The value is coerced into the parameter's kind (text parses, int/float
    /// convert) and clamped into the bounds. Values that cannot be coerced are
    /// ignored. Assigning an unchanged value notifies nobody.
    pub fn set_value(&self, new: Value) {
        let changed = {
            let mut state = self.inner.state.write();
            let Ok(coerced) = coerce(&new, state.value.kind()) else {
                return;
            };
            let clamped = clamp_value(coerced, state.min, state.max);
            if clamped == state.value {
                false
            } else {
                state.value = clamped;
                true
            }
        };
        if changed {
            self.inner.notify(Change::Value);
        }
    }

    /// Assign a float value. See [`set_value`](Self::set_value).
    pub fn set_float(&self, value: f64) {
        self.set_value(Value::Float(value));
    }

    /// Assign an integer value. See [`set_value`](Self::set_value).
    pub fn set_int(&self, value: i64) {
        self.set_value(Value::Int(value));
    }

    /// Assign a boolean value. See [`set_value`](Self::set_value).
    pub fn set_bool(&self, value: bool) {
        self.set_value(Value::Bool(value));
    }

    /// Assign a text value. See [`set_value`](Self::set_value).
    pub fn set_text(&self, value: impl Into<String>) {
        self.set_value(Value::Text(value.into()));
    }

    /// Assign a choice value. See [`set_value`](Self::set_value).
    ///
    /// The store accepts strings outside the options list; the fallback
    /// policy only applies when the list itself is replaced.
    pub fn set_choice(&self, value: impl Into<String>) {
        self.set_value(Value::Choice(value.into()));
    }

    /// Replace a single vector component, notifying only that component.
    ///
    /// Ignored for scalar kinds and out-of-range indices.
    pub fn set_component(&self, index: usize, value: f64) {
        let changed = {
            let mut state = self.inner.state.write();
            let (min, max) = (state.min, state.max);
            let Value::Vector(ref mut vector) = state.value else {
                return;
            };
            let Some(current) = vector.get(index) else {
                return;
            };
            let clamped = clamp_component(value, min, max);
            if clamped == current {
                false
            } else {
                vector.set(index, clamped);
                true
            }
        };
        if changed {
            self.inner.notify(Change::Component(index));
        }
    }

    /// Replace the min/max bounds, clamping the current value into them.
    ///
    /// Ignored for kinds without an ordering. Notifies `Range`, plus `Value`
    /// when clamping moved the value.
    pub fn set_range(&self, min: f64, max: f64) {
        let (range_changed, value_changed) = {
            let mut state = self.inner.state.write();
            if !state.value.is_bounded_kind() {
                return;
            }
            let range_changed = state.min != Some(min) || state.max != Some(max);
            state.min = Some(min);
            state.max = Some(max);
            let clamped = clamp_value(state.value.clone(), state.min, state.max);
            let value_changed = clamped != state.value;
            if value_changed {
                state.value = clamped;
            }
            (range_changed, value_changed)
        };
        if range_changed {
            self.inner.notify(Change::Range);
        }
        if value_changed {
            self.inner.notify(Change::Value);
        }
    }

    /// Replace the options list.
    ///
    /// Policy for choice parameters whose current value is absent from the
    /// new list: fall back to the first option, so parameter and widget stay
    /// consistent. An empty list leaves the value untouched.
    pub fn set_options<I>(&self, options: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let (options_changed, value_changed) = {
            let mut state = self.inner.state.write();
            let new: Vec<String> = options.into_iter().map(Into::into).collect();
            let options_changed = new != state.options;
            state.options = new;
            let value_changed = match &state.value {
                Value::Choice(current)
                    if !state.options.is_empty() && !state.options.contains(current) =>
                {
                    state.value = Value::Choice(state.options[0].clone());
                    true
                }
                _ => false,
            };
            (options_changed, value_changed)
        };
        if options_changed {
            self.inner.notify(Change::Options);
        }
        if value_changed {
            self.inner.notify(Change::Value);
        }
    }

    /// Register a change callback.
    ///
    /// Callbacks may fire from whichever thread performs the write; consumers
    /// that touch widget state must marshal onto the UI thread themselves
    /// (the binding crate's inbox does exactly that).
    pub fn subscribe(&self, callback: impl Fn(Change) + Send + Sync + 'static) -> Subscription {
        let id = self.inner.next_sub_id.fetch_add(1, Ordering::Relaxed);
        self.inner.subscribers.lock().push((id, Arc::new(callback)));
        Subscription {
            inner: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Active subscription count (diagnostics and tests).
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().len()
    }

    /// Non-owning handle for bindings.
    pub fn downgrade(&self) -> WeakParameter {
        WeakParameter {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

fn clamp_component(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let mut v = value;
    if let Some(min) = min {
        v = v.max(min);
    }
    if let Some(max) = max {
        v = v.min(max);
    }
    v
}

fn clamp_value(value: Value, min: Option<f64>, max: Option<f64>) -> Value {
    match value {
        Value::Float(f) => Value::Float(clamp_component(f, min, max)),
        Value::Int(i) => Value::Int(clamp_component(i as f64, min, max).round() as i64),
        Value::Vector(mut v) => {
            for i in 0..v.len() {
                if let Some(c) = v.get(i) {
                    v.set(i, clamp_component(c, min, max));
                }
            }
            Value::Vector(v)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::Mutex as StdMutex;

    fn recorded(param: &Parameter) -> (Subscription, Arc<StdMutex<Vec<Change>>>) {
        let log = Arc::new(StdMutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let sub = param.subscribe(move |c| sink.lock().unwrap().push(c));
        (sub, log)
    }

    #[test]
    fn set_value_clamps_and_notifies() {
        let p = Parameter::float("Speed", 0.5).with_range(0.0, 1.0);
        let (_sub, log) = recorded(&p);

        p.set_float(0.75);
        assert_eq!(p.value(), Value::Float(0.75));

        p.set_float(5.0);
        assert_eq!(p.value(), Value::Float(1.0));

        assert_eq!(*log.lock().unwrap(), vec![Change::Value, Change::Value]);
    }

    #[test]
    fn unchanged_assignment_is_silent() {
        let p = Parameter::float("Speed", 0.5).with_range(0.0, 1.0);
        let (_sub, log) = recorded(&p);

        p.set_float(0.5);
        // Clamped duplicate: 5.0 clamps to 1.0, then 1.0 again is silent.
        p.set_float(1.0);
        p.set_float(5.0);

        assert_eq!(*log.lock().unwrap(), vec![Change::Value]);
    }

    #[test]
    fn int_values_clamp_to_rounded_bounds() {
        let p = Parameter::int("Count", 3).with_range(0.0, 10.0);
        p.set_int(42);
        assert_eq!(p.value(), Value::Int(10));
        p.set_int(-1);
        assert_eq!(p.value(), Value::Int(0));
    }

    #[test]
    fn kind_mismatch_is_ignored() {
        let p = Parameter::toggle("Active", true);
        p.set_value(Value::Float(0.5));
        assert_eq!(p.value(), Value::Bool(true));

        // Text that parses as a bool does coerce.
        p.set_value(Value::Text("off".into()));
        assert_eq!(p.value(), Value::Bool(false));
    }

    #[test]
    fn component_write_notifies_only_that_component() {
        let p = Parameter::vector("Position", Vector::vec3(0.0, 0.0, 0.0));
        let (_sub, log) = recorded(&p);

        p.set_component(1, 0.5);
        assert_eq!(p.component(1), Some(0.5));
        assert_eq!(p.component(0), Some(0.0));
        assert_eq!(*log.lock().unwrap(), vec![Change::Component(1)]);
    }

    #[test]
    fn component_write_out_of_range_is_ignored() {
        let p = Parameter::vector("Position", Vector::vec2(0.0, 0.0));
        let (_sub, log) = recorded(&p);
        p.set_component(7, 1.0);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn range_change_notifies_and_reclamps() {
        let p = Parameter::float("Gain", 0.8).with_range(0.0, 1.0);
        let (_sub, log) = recorded(&p);

        p.set_range(0.0, 0.5);
        assert_eq!(p.value(), Value::Float(0.5));
        assert_eq!(*log.lock().unwrap(), vec![Change::Range, Change::Value]);
    }

    #[test]
    fn options_fallback_to_first() {
        let p = Parameter::choice("Mode", "B", ["A", "B", "C"]);
        let (_sub, log) = recorded(&p);

        p.set_options(["X", "Y"]);
        assert_eq!(p.value(), Value::Choice("X".into()));
        assert_eq!(*log.lock().unwrap(), vec![Change::Options, Change::Value]);
    }

    #[test]
    fn options_keep_value_when_still_present() {
        let p = Parameter::choice("Mode", "B", ["A", "B", "C"]);
        p.set_options(["B", "C"]);
        assert_eq!(p.value(), Value::Choice("B".into()));
    }

    #[test]
    fn empty_options_leave_value_untouched() {
        let p = Parameter::choice("Mode", "B", ["A", "B"]);
        p.set_options(Vec::<String>::new());
        assert_eq!(p.value(), Value::Choice("B".into()));
    }

    #[test]
    fn control_override_keeps_clones_and_subscriptions() {
        let p = Parameter::float("Speed", 0.5);
        let alias = p.clone();
        let (_sub, log) = recorded(&p);

        let p = p.with_control(ControlKind::NumberField);
        assert_eq!(p.control(), ControlKind::NumberField);
        assert_eq!(alias.control(), ControlKind::NumberField);
        assert_eq!(p.subscriber_count(), 1);

        p.set_float(0.9);
        assert_eq!(*log.lock().unwrap(), vec![Change::Value]);
    }

    #[test]
    fn subscription_drop_stops_notifications() {
        let p = Parameter::float("Speed", 0.5);
        let (sub, log) = recorded(&p);
        assert_eq!(p.subscriber_count(), 1);

        drop(sub);
        assert_eq!(p.subscriber_count(), 0);
        p.set_float(0.9);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn weak_reference_does_not_keep_parameter_alive() {
        let p = Parameter::float("Speed", 0.5);
        let weak = p.downgrade();
        assert!(weak.upgrade().is_some());
        drop(p);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn notifications_cross_threads() {
        let p = Parameter::float("Speed", 0.5).with_range(0.0, 1.0);
        let (_sub, log) = recorded(&p);

        let writer = p.clone();
        std::thread::spawn(move || writer.set_float(0.25))
            .join()
            .unwrap();

        assert_eq!(p.value(), Value::Float(0.25));
        assert_eq!(*log.lock().unwrap(), vec![Change::Value]);
    }

    proptest! {
        #[test]
        fn clamped_value_always_within_bounds(
            initial in -1e6f64..1e6,
            write in proptest::num::f64::NORMAL | proptest::num::f64::ZERO,
            a in -1e3f64..1e3,
            span in 0.0f64..1e3,
        ) {
            let p = Parameter::float("x", initial).with_range(a, a + span);
            p.set_float(write);
            let v = p.as_float().unwrap();
            prop_assert!(v >= a && v <= a + span);
        }
    }
}
