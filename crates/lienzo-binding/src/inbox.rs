//! Marshal-to-UI-thread change queue.

use std::sync::Arc;

use parking_lot::Mutex;

use lienzo_params::Change;

/// Pending change topics, coalesced per [`UiInbox::drain`].
///
/// Multiple writes between two UI ticks collapse into one repaint per topic:
/// last-write-wins is safe because the binding re-reads the authoritative
/// parameter value, never a payload carried in the notification.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PendingChanges {
    /// The whole value needs repainting.
    pub value: bool,
    /// The bounds need pushing.
    pub range: bool,
    /// The options list needs rebuilding.
    pub options: bool,
    /// Individual components needing repainting, deduplicated in arrival order.
    pub components: Vec<usize>,
}

impl PendingChanges {
    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        !self.value && !self.range && !self.options && self.components.is_empty()
    }
}

/// Thread-safe queue carrying parameter changes onto the UI thread.
///
/// Parameter notifications may fire from any thread (a background simulation
/// writing a parameter, for instance). The subscription callback only pushes
/// the change topic here; the UI thread drains the inbox inside
/// [`Binding::pump`](crate::Binding::pump) before touching any widget state.
/// This is the single marshaling primitive in the system — no control
/// re-implements thread hops.
#[derive(Clone, Default)]
pub struct UiInbox {
    changes: Arc<Mutex<Vec<Change>>>,
}

impl UiInbox {
    /// Create an empty inbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a change topic. Callable from any thread.
    ///
    /// Duplicate topics coalesce on entry, so the queue stays bounded even
    /// when a chatty writer outpaces the UI tick or an edit holds pumping
    /// off for a long time.
    pub fn push(&self, change: Change) {
        let mut changes = self.changes.lock();
        if !changes.contains(&change) {
            changes.push(change);
        }
    }

    /// Number of queued change topics.
    pub fn len(&self) -> usize {
        self.changes.lock().len()
    }

    /// Whether any change is queued.
    pub fn is_empty(&self) -> bool {
        self.changes.lock().is_empty()
    }

    /// Take and coalesce all queued changes.
    ///
    /// A queued `Value` subsumes queued components — a full repaint covers
    /// them — so `components` is only populated when no whole-value change
    /// is pending.
    pub fn drain(&self) -> PendingChanges {
        let queued: Vec<Change> = std::mem::take(&mut *self.changes.lock());
        let mut pending = PendingChanges::default();
        for change in queued {
            match change {
                Change::Value => pending.value = true,
                Change::Range => pending.range = true,
                Change::Options => pending.options = true,
                Change::Component(i) => {
                    if !pending.components.contains(&i) {
                        pending.components.push(i);
                    }
                }
            }
        }
        if pending.value {
            pending.components.clear();
        }
        pending
    }

    /// Drop everything queued without applying it.
    pub fn discard(&self) {
        self.changes.lock().clear();
    }
}
