//! Typed observable parameters for the lienzo inspector panel.
//!
//! This crate is the model side of the binding protocol: a [`Parameter`] is
//! a typed, named, observable value holder that controls bind to. It owns
//! validation (clamping, options fallback) so the binding layer never has to.
//!
//! # Modules
//!
//! - [`value`] — tagged [`Value`] union and fixed-size [`Vector`]
//! - [`control`] — [`ControlKind`] rendering hints
//! - [`param`] — the observable [`Parameter`] holder and [`Subscription`] tokens
//! - [`format`] — fixed-precision formatting and input parsing
//! - [`snapshot`] — TOML capture/restore of parameter sets
//!
//! # Example
//!
//! ```rust
//! use lienzo_params::{Change, Parameter, Value};
//!
//! let speed = Parameter::float("Speed", 0.5).with_range(0.0, 1.0);
//!
//! let sub = speed.subscribe(|change| {
//!     assert_eq!(change, Change::Value);
//! });
//!
//! speed.set_float(0.75);
//! assert_eq!(speed.value(), Value::Float(0.75));
//! drop(sub);
//! ```

pub mod control;
pub mod format;
pub mod param;
pub mod snapshot;
pub mod value;

pub use control::ControlKind;
pub use format::{FLOAT_DECIMALS, ParseError, coerce, format_float, format_value};
pub use param::{Change, Parameter, Subscription, WeakParameter};
pub use snapshot::{Snapshot, SnapshotError};
pub use value::{Value, ValueKind, Vector};
