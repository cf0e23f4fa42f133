//! Two-way parameter-to-control binding core.
//!
//! This crate is the platform-agnostic heart of the lienzo inspector: a
//! [`Binding`] keeps one observable [`Parameter`](lienzo_params::Parameter)
//! and one [`ControlSurface`] mutually consistent without update loops and
//! without clobbering in-progress user edits. Platform code implements
//! `ControlSurface`; it never re-implements the synchronization logic.
//!
//! # Modules
//!
//! - [`surface`] — the [`ControlSurface`] capability contract
//! - [`binding`] — the [`Binding`] state machine
//! - [`inbox`] — the [`UiInbox`] marshal-to-UI-thread queue
//!
//! # Invariants
//!
//! - **Echo suppression**: a commit never re-assigns an unchanged value, and
//!   a repaint never rewrites an already-in-sync surface.
//! - **Focus gating**: model-to-view pushes are dropped while the user edits;
//!   the surface resynchronizes to the then-current value on exit.
//! - **Idempotent detach**: teardown twice, or in any order relative to the
//!   container, is a no-op.
//! - **Authoritative re-read**: change notifications carry topics only; the
//!   binding always re-reads the parameter's current value.

pub mod binding;
pub mod inbox;
pub mod surface;

pub use binding::{Binding, BindingState};
pub use inbox::{PendingChanges, UiInbox};
pub use surface::ControlSurface;
