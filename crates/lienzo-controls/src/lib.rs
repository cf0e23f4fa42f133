//! Headless control adapters for the lienzo inspector.
//!
//! Each control is a thin [`ControlSurface`](lienzo_binding::ControlSurface)
//! instance: it holds displayed state and exposes the gestures a platform
//! event loop would drive. All synchronization lives in `lienzo-binding`;
//! nothing here talks to a parameter directly.
//!
//! # Modules
//!
//! - [`slider`], [`field`], [`toggle`], [`dropdown`], [`label`], [`color`],
//!   [`vector`] — one control family each
//! - [`panel`] — the [`InspectorControl`] factory and the [`Panel`] container

pub mod color;
pub mod dropdown;
pub mod field;
pub mod label;
pub mod panel;
pub mod slider;
pub mod toggle;
pub mod vector;

pub use color::ColorWell;
pub use dropdown::DropdownControl;
pub use field::FieldControl;
pub use label::LabelReadout;
pub use panel::{InspectorControl, Panel, PanelRow};
pub use slider::SliderControl;
pub use toggle::{ButtonControl, ToggleControl};
pub use vector::VectorRow;
