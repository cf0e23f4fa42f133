//! egui adapter for lienzo parameters.
//!
//! Immediate-mode UI needs no explicit binding objects: each control
//! function in [`controls`] reads the parameter, draws, and writes back only
//! on user change, so the parameter store's equality gate and clamping do
//! the same duty the retained bindings do elsewhere. [`InspectorPanel`] is
//! the ready-made form that dispatches on each parameter's
//! [`ControlKind`](lienzo_params::ControlKind) hint.

pub mod controls;
pub mod panel;

pub use panel::InspectorPanel;
