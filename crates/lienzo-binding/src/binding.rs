//! The two-way binding between one parameter and one control surface.

use tracing::{debug, trace};

use lienzo_params::{Parameter, Subscription, Value, WeakParameter, coerce};

use crate::inbox::UiInbox;
use crate::surface::ControlSurface;

/// Lifecycle state of a [`Binding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    /// Attached, no edit in progress. Model-to-view pushes apply.
    Idle,
    /// The user is editing the control. Model-to-view pushes are dropped;
    /// the committed widget value wins on exit.
    Editing,
    /// Terminal. Every operation is a no-op.
    Detached,
}

/// Runtime link keeping one [`Parameter`] and one [`ControlSurface`] consistent.
///
/// The binding owns the surface and a change subscription on the parameter,
/// never the parameter itself — it holds a weak reference and degrades to a
/// no-op when the host drops the parameter.
///
/// # Protocol
///
/// - Model → view: parameter changes land in a [`UiInbox`] from any thread;
///   the UI thread calls [`pump`](Self::pump) once per tick to apply them.
///   An already-in-sync surface is never rewritten, so a change that echoes
///   back from the control's own commit disturbs nothing.
/// - View → model: the host forwards control events to
///   [`begin_edit`](Self::begin_edit) / [`commit`](Self::commit) /
///   [`end_edit`](Self::end_edit). Commits parse the raw display; unparsable
///   input is dropped, unchanged values are never re-assigned.
///
/// # Example
///
/// ```rust
/// use lienzo_binding::{Binding, ControlSurface};
/// use lienzo_params::{Parameter, Value};
///
/// struct Readout(Value);
/// impl ControlSurface for Readout {
///     fn display_value(&self) -> Value {
///         self.0.clone()
///     }
///     fn set_display_value(&mut self, value: &Value) {
///         self.0 = value.clone();
///     }
/// }
///
/// let speed = Parameter::float("Speed", 0.5).with_range(0.0, 1.0);
/// let mut binding = Binding::attach(&speed, Readout(Value::Float(0.0)));
/// assert_eq!(binding.surface().0, Value::Float(0.5));
///
/// speed.set_float(0.75);
/// binding.pump();
/// assert_eq!(binding.surface().0, Value::Float(0.75));
/// ```
pub struct Binding<S: ControlSurface> {
    param: WeakParameter,
    label: String,
    surface: S,
    state: BindingState,
    inbox: UiInbox,
    subscription: Option<Subscription>,
}

impl<S: ControlSurface> Binding<S> {
    /// Bind a surface to a parameter.
    ///
    /// Subscribes to the parameter's change stream and immediately paints
    /// range, options, and current value into the surface.
    pub fn attach(param: &Parameter, mut surface: S) -> Self {
        let inbox = UiInbox::new();
        let tx = inbox.clone();
        let subscription = param.subscribe(move |change| tx.push(change));

        if let Some((min, max)) = param.range() {
            surface.set_range(min, max);
        }
        let options = param.options();
        if !options.is_empty() {
            surface.set_options(&options);
        }
        surface.set_display_value(&param.value());

        debug!(param = param.label(), "binding attached");
        Self {
            param: param.downgrade(),
            label: param.label().to_string(),
            surface,
            state: BindingState::Idle,
            inbox,
            subscription: Some(subscription),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> BindingState {
        self.state
    }

    /// Whether an edit is in progress (binding state or surface focus).
    pub fn is_editing(&self) -> bool {
        self.state == BindingState::Editing || self.surface.is_editing()
    }

    /// The bound surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The bound surface, mutably. The host drives control events through
    /// this and forwards them to [`commit`](Self::commit) afterwards.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The bound parameter, if the host still owns it.
    pub fn parameter(&self) -> Option<Parameter> {
        self.param.upgrade()
    }

    /// Enter the editing state: the control gained focus or a drag began.
    pub fn begin_edit(&mut self) {
        if self.state == BindingState::Idle {
            self.state = BindingState::Editing;
            trace!(param = %self.label, "edit began");
        }
    }

    /// Commit the surface's current display into the parameter.
    ///
    /// Called on discrete control events: a slider drag tick, a field commit
    /// on enter/blur, a toggle flip, a selection. The raw display is parsed
    /// into the parameter's kind; parse failures are dropped silently and an
    /// unchanged value is never re-assigned, so committing cannot cause
    /// listener churn or an echo write.
    pub fn commit(&mut self) {
        if self.state == BindingState::Detached {
            return;
        }
        let Some(param) = self.param.upgrade() else {
            return;
        };
        let raw = self.surface.display_value();
        match coerce(&raw, param.kind()) {
            Ok(value) => {
                if value != param.value() {
                    param.set_value(value);
                }
            }
            Err(err) => {
                trace!(param = %self.label, %err, "dropping unparsable input");
            }
        }
    }

    /// Leave the editing state: focus lost or drag ended.
    ///
    /// Value pushes suppressed during the edit are dropped — the surface is
    /// resynchronized to the parameter's then-current value instead. Range
    /// and options changes that arrived mid-edit are not covered by that
    /// resync, so they are applied here. When the exit was itself a commit,
    /// the surface is already in sync and nothing is rewritten.
    pub fn end_edit(&mut self) {
        if self.state != BindingState::Editing {
            return;
        }
        self.state = BindingState::Idle;
        let pending = self.inbox.drain();
        trace!(param = %self.label, "edit ended");
        let Some(param) = self.param.upgrade() else {
            return;
        };
        if pending.options {
            self.surface.set_options(&param.options());
        }
        if pending.range
            && let Some((min, max)) = param.range()
        {
            self.surface.set_range(min, max);
        }
        self.repaint_value(&param);
    }

    /// Apply queued parameter changes to the surface. UI thread only.
    ///
    /// While an edit is in progress the queue is left untouched for
    /// [`end_edit`](Self::end_edit) to resolve: the committed widget value
    /// wins over queued value pushes, while range and options changes are
    /// applied on exit.
    pub fn pump(&mut self) {
        if self.state == BindingState::Detached {
            return;
        }
        if self.is_editing() {
            return;
        }
        let pending = self.inbox.drain();
        if pending.is_empty() {
            return;
        }
        let Some(param) = self.param.upgrade() else {
            trace!(param = %self.label, "parameter dropped, ignoring changes");
            return;
        };
        if pending.options {
            self.surface.set_options(&param.options());
        }
        if pending.range
            && let Some((min, max)) = param.range()
        {
            self.surface.set_range(min, max);
        }
        if pending.value || pending.options {
            // Options rebuilds repaint the selection as well.
            self.repaint_value(&param);
        } else {
            for index in pending.components {
                if let Some(value) = param.component(index) {
                    self.surface.set_component_display(index, value);
                }
            }
        }
    }

    /// Tear down the binding. Idempotent — a second call is a no-op.
    ///
    /// Releases the subscription (no callback fires afterwards) and stops
    /// every surface mutation. Teardown order between a container and its
    /// children is not guaranteed by the host, hence the idempotence.
    pub fn detach(&mut self) {
        if self.state == BindingState::Detached {
            return;
        }
        self.state = BindingState::Detached;
        self.subscription.take();
        self.inbox.discard();
        debug!(param = %self.label, "binding detached");
    }

    /// Repaint the whole value unless the surface already agrees.
    ///
    /// The agreement check parses the surface's raw display back into the
    /// parameter's kind, so a field showing `0.75` is in sync with a float
    /// of `0.75` even though the canonical rendering is `0.750` — rewriting
    /// it would disturb the cursor for nothing.
    fn repaint_value(&mut self, param: &Parameter) {
        let current = param.value();
        if !self.surface_in_sync(&current) {
            self.surface.set_display_value(&current);
        }
    }

    fn surface_in_sync(&self, current: &Value) -> bool {
        match coerce(&self.surface.display_value(), current.kind()) {
            Ok(shown) => &shown == current,
            Err(_) => false,
        }
    }
}

impl<S: ControlSurface> Drop for Binding<S> {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lienzo_params::{ControlKind, Vector};

    /// Instrumented surface counting every mutation.
    #[derive(Debug)]
    struct TestSurface {
        display: Value,
        editing: bool,
        set_calls: usize,
        range: Option<(f64, f64)>,
        range_calls: usize,
        options: Vec<String>,
        options_calls: usize,
        component_calls: Vec<(usize, f64)>,
    }

    impl TestSurface {
        fn new(display: Value) -> Self {
            Self {
                display,
                editing: false,
                set_calls: 0,
                range: None,
                range_calls: 0,
                options: Vec::new(),
                options_calls: 0,
                component_calls: Vec::new(),
            }
        }
    }

    impl ControlSurface for TestSurface {
        fn display_value(&self) -> Value {
            self.display.clone()
        }

        fn set_display_value(&mut self, value: &Value) {
            self.display = value.clone();
            self.set_calls += 1;
        }

        fn is_editing(&self) -> bool {
            self.editing
        }

        fn set_range(&mut self, min: f64, max: f64) {
            self.range = Some((min, max));
            self.range_calls += 1;
        }

        fn set_options(&mut self, options: &[String]) {
            self.options = options.to_vec();
            self.options_calls += 1;
        }

        fn set_component_display(&mut self, index: usize, value: f64) {
            if let Value::Vector(v) = &mut self.display {
                v.set(index, value);
            }
            self.component_calls.push((index, value));
        }
    }

    #[test]
    fn attach_paints_immediately() {
        let speed = Parameter::float("Speed", 0.5).with_range(0.0, 1.0);
        let binding = Binding::attach(&speed, TestSurface::new(Value::Float(0.0)));

        assert_eq!(binding.surface().display, Value::Float(0.5));
        assert_eq!(binding.surface().set_calls, 1);
        assert_eq!(binding.surface().range, Some((0.0, 1.0)));
        assert_eq!(binding.state(), BindingState::Idle);
    }

    #[test]
    fn attach_pushes_options() {
        let mode = Parameter::choice("Mode", "A", ["A", "B", "C"]);
        let binding = Binding::attach(&mode, TestSurface::new(Value::Choice(String::new())));
        assert_eq!(binding.surface().options, vec!["A", "B", "C"]);
        assert_eq!(binding.surface().display, Value::Choice("A".into()));
    }

    #[test]
    fn idle_writes_reach_surface_on_pump() {
        let speed = Parameter::float("Speed", 0.5).with_range(0.0, 1.0);
        let mut binding = Binding::attach(&speed, TestSurface::new(Value::Float(0.0)));

        speed.set_float(0.2);
        assert_eq!(binding.surface().display, Value::Float(0.5)); // not yet pumped
        binding.pump();
        assert_eq!(binding.surface().display, Value::Float(0.2));
    }

    #[test]
    fn burst_of_writes_coalesces_to_one_repaint() {
        let speed = Parameter::float("Speed", 0.5).with_range(0.0, 1.0);
        let mut binding = Binding::attach(&speed, TestSurface::new(Value::Float(0.0)));

        speed.set_float(0.1);
        speed.set_float(0.2);
        speed.set_float(0.3);
        let before = binding.surface().set_calls;
        binding.pump();
        assert_eq!(binding.surface().display, Value::Float(0.3));
        assert_eq!(binding.surface().set_calls, before + 1);
    }

    #[test]
    fn commit_writes_parsed_display_into_parameter() {
        let speed = Parameter::float("Speed", 0.5).with_range(0.0, 1.0);
        let mut binding = Binding::attach(&speed, TestSurface::new(Value::Float(0.0)));

        binding.surface_mut().display = Value::Float(0.75);
        binding.commit();
        assert_eq!(speed.value(), Value::Float(0.75));

        // The echo of our own commit must not rewrite the surface.
        let before = binding.surface().set_calls;
        binding.pump();
        assert_eq!(binding.surface().set_calls, before);
    }

    #[test]
    fn commit_parses_raw_text() {
        let speed = Parameter::float("Speed", 0.5).with_range(0.0, 1.0);
        let mut binding = Binding::attach(&speed, TestSurface::new(Value::Float(0.0)));

        binding.surface_mut().display = Value::Text("0.75".into());
        binding.commit();
        assert_eq!(speed.value(), Value::Float(0.75));

        // "0.75" parses back to 0.75, so the canonical "0.750" repaint is
        // skipped and the cursor is left alone.
        let before = binding.surface().set_calls;
        binding.pump();
        assert_eq!(binding.surface().set_calls, before);
        assert_eq!(binding.surface().display, Value::Text("0.75".into()));
    }

    #[test]
    fn commit_of_unchanged_value_is_inert() {
        let speed = Parameter::float("Speed", 0.5).with_range(0.0, 1.0);
        let notified = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let seen = std::sync::Arc::clone(&notified);
        let _sub = speed.subscribe(move |_| {
            seen.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        });

        let mut binding = Binding::attach(&speed, TestSurface::new(Value::Float(0.0)));
        binding.surface_mut().display = Value::Float(0.5);
        binding.commit();

        assert_eq!(notified.load(std::sync::atomic::Ordering::SeqCst), 0);
        let before = binding.surface().set_calls;
        binding.pump();
        assert_eq!(binding.surface().set_calls, before);
    }

    #[test]
    fn malformed_input_leaves_parameter_untouched() {
        let speed = Parameter::float("Speed", 0.5).with_range(0.0, 1.0);
        let mut binding = Binding::attach(&speed, TestSurface::new(Value::Float(0.0)));

        binding.surface_mut().display = Value::Text("not a number".into());
        binding.commit();
        assert_eq!(speed.value(), Value::Float(0.5));
    }

    #[test]
    fn editing_suppresses_model_pushes_until_exit() {
        let speed = Parameter::float("Speed", 0.5).with_range(0.0, 1.0);
        let mut binding = Binding::attach(&speed, TestSurface::new(Value::Float(0.0)));

        binding.begin_edit();
        speed.set_float(0.2);
        binding.pump();
        assert_eq!(binding.surface().display, Value::Float(0.5));

        binding.end_edit();
        assert_eq!(binding.surface().display, Value::Float(0.2));
    }

    #[test]
    fn exit_resyncs_to_latest_not_stale() {
        let speed = Parameter::float("Speed", 0.5).with_range(0.0, 1.0);
        let mut binding = Binding::attach(&speed, TestSurface::new(Value::Float(0.0)));

        binding.begin_edit();
        speed.set_float(0.2);
        speed.set_float(0.9);
        binding.end_edit();
        assert_eq!(binding.surface().display, Value::Float(0.9));
    }

    #[test]
    fn range_change_during_edit_survives_exit() {
        let speed = Parameter::float("Speed", 0.5).with_range(0.0, 1.0);
        let mut binding = Binding::attach(&speed, TestSurface::new(Value::Float(0.0)));

        binding.begin_edit();
        speed.set_range(0.0, 0.25);
        binding.end_edit();

        assert_eq!(binding.surface().range, Some((0.0, 0.25)));
        assert_eq!(binding.surface().display, Value::Float(0.25));
    }

    #[test]
    fn options_change_during_edit_survives_exit() {
        let mode = Parameter::choice("Mode", "B", ["A", "B", "C"]);
        let mut binding = Binding::attach(&mode, TestSurface::new(Value::Choice(String::new())));

        binding.begin_edit();
        mode.set_options(["X", "Y"]);
        binding.end_edit();

        assert_eq!(binding.surface().options, vec!["X", "Y"]);
        assert_eq!(binding.surface().display, Value::Choice("X".into()));
    }

    #[test]
    fn surface_focus_alone_suppresses_pushes() {
        let speed = Parameter::float("Speed", 0.5).with_range(0.0, 1.0);
        let mut binding = Binding::attach(&speed, TestSurface::new(Value::Float(0.0)));

        binding.surface_mut().editing = true;
        speed.set_float(0.2);
        binding.pump();
        assert_eq!(binding.surface().display, Value::Float(0.5));

        // Changes stay queued while only the surface reports focus.
        binding.surface_mut().editing = false;
        binding.pump();
        assert_eq!(binding.surface().display, Value::Float(0.2));
    }

    #[test]
    fn detach_is_idempotent_and_stops_mutation() {
        let speed = Parameter::float("Speed", 0.5).with_range(0.0, 1.0);
        let mut binding = Binding::attach(&speed, TestSurface::new(Value::Float(0.0)));
        assert_eq!(speed.subscriber_count(), 1);

        binding.detach();
        binding.detach();
        assert_eq!(speed.subscriber_count(), 0);
        assert_eq!(binding.state(), BindingState::Detached);

        let before = binding.surface().set_calls;
        speed.set_float(0.9);
        binding.pump();
        binding.commit();
        assert_eq!(binding.surface().set_calls, before);
        assert_eq!(speed.value(), Value::Float(0.9));
    }

    #[test]
    fn drop_releases_subscription() {
        let speed = Parameter::float("Speed", 0.5);
        let binding = Binding::attach(&speed, TestSurface::new(Value::Float(0.0)));
        assert_eq!(speed.subscriber_count(), 1);
        drop(binding);
        assert_eq!(speed.subscriber_count(), 0);
    }

    #[test]
    fn dropped_parameter_degrades_to_noop() {
        let speed = Parameter::float("Speed", 0.5);
        let mut binding = Binding::attach(&speed, TestSurface::new(Value::Float(0.0)));

        speed.set_float(0.9);
        drop(speed);
        binding.pump();
        binding.commit();
        assert!(binding.parameter().is_none());
    }

    #[test]
    fn vector_change_touches_only_that_component() {
        let position = Parameter::vector("Position", Vector::vec3(0.1, 0.2, 0.3));
        let mut binding = Binding::attach(
            &position,
            TestSurface::new(Value::Vector(Vector::vec3(0.0, 0.0, 0.0))),
        );
        let paints = binding.surface().set_calls;

        position.set_component(1, 0.9);
        binding.pump();

        assert_eq!(binding.surface().component_calls, vec![(1, 0.9)]);
        assert_eq!(binding.surface().set_calls, paints);
        assert_eq!(
            binding.surface().display,
            Value::Vector(Vector::vec3(0.1, 0.9, 0.3))
        );
    }

    #[test]
    fn options_rebuild_repaints_selection() {
        let mode = Parameter::choice("Mode", "B", ["A", "B", "C"]);
        let mut binding = Binding::attach(&mode, TestSurface::new(Value::Choice(String::new())));

        mode.set_options(["X", "Y"]);
        binding.pump();

        assert_eq!(binding.surface().options, vec!["X", "Y"]);
        // Store fell back to the first option; the surface follows.
        assert_eq!(binding.surface().display, Value::Choice("X".into()));
    }

    #[test]
    fn range_change_propagates_independently() {
        let speed = Parameter::float("Speed", 0.2).with_range(0.0, 1.0);
        let mut binding = Binding::attach(&speed, TestSurface::new(Value::Float(0.0)));

        speed.set_range(0.0, 0.5);
        binding.pump();
        assert_eq!(binding.surface().range, Some((0.0, 0.5)));
    }

    #[test]
    fn cross_thread_write_applies_on_next_pump() {
        let speed = Parameter::float("Speed", 0.5).with_range(0.0, 1.0);
        let mut binding = Binding::attach(&speed, TestSurface::new(Value::Float(0.0)));

        let writer = speed.clone();
        std::thread::spawn(move || writer.set_float(0.25))
            .join()
            .unwrap();

        binding.pump();
        assert_eq!(binding.surface().display, Value::Float(0.25));
    }

    #[test]
    fn label_control_round_trip_is_inert() {
        // A read-only readout bound to a text parameter: commit parses the
        // shown text back to an equal value and never writes.
        let status = Parameter::text("Status", "running").with_control(ControlKind::Label);
        let mut binding = Binding::attach(&status, TestSurface::new(Value::Text(String::new())));
        binding.commit();
        assert_eq!(status.value(), Value::Text("running".into()));
    }
}
