//! Tagged value union for parameter storage.
//!
//! Every parameter holds exactly one [`Value`] variant for its lifetime.
//! Collapsing the value space into one tagged union lets controls dispatch
//! with a single `match` instead of per-widget type checks.

use core::fmt;

/// Semantic kind of a [`Value`], without the payload.
///
/// Used for parse coercion and kind-mismatch reporting. Vector kinds carry
/// their component count, since a 2-vector and a 4-vector are not
/// interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// On/off flag.
    Bool,
    /// Signed integer.
    Int,
    /// Floating-point scalar. Single- and double-precision parameters of the
    /// host framework both map here.
    Float,
    /// Free-form text.
    Text,
    /// Fixed-size numeric vector with 2, 3, or 4 components.
    Vector(usize),
    /// One option out of an enumerated string list.
    Choice,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Bool => write!(f, "bool"),
            ValueKind::Int => write!(f, "int"),
            ValueKind::Float => write!(f, "float"),
            ValueKind::Text => write!(f, "text"),
            ValueKind::Vector(n) => write!(f, "vec{n}"),
            ValueKind::Choice => write!(f, "choice"),
        }
    }
}

/// Fixed-size numeric vector with 2 to 4 components.
///
/// Unused trailing components are kept at `0.0` so derived equality works.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    components: [f64; 4],
    len: usize,
}

impl Vector {
    /// Two-component vector.
    pub const fn vec2(x: f64, y: f64) -> Self {
        Self {
            components: [x, y, 0.0, 0.0],
            len: 2,
        }
    }

    /// Three-component vector.
    pub const fn vec3(x: f64, y: f64, z: f64) -> Self {
        Self {
            components: [x, y, z, 0.0],
            len: 3,
        }
    }

    /// Four-component vector.
    pub const fn vec4(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self {
            components: [x, y, z, w],
            len: 4,
        }
    }

    /// Build from a slice of 2 to 4 components.
    ///
    /// Returns `None` for any other length.
    pub fn from_slice(components: &[f64]) -> Option<Self> {
        if !(2..=4).contains(&components.len()) {
            return None;
        }
        let mut buf = [0.0; 4];
        buf[..components.len()].copy_from_slice(components);
        Some(Self {
            components: buf,
            len: components.len(),
        })
    }

    /// Number of components (2, 3, or 4).
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false` — a vector has at least two components.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Component at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<f64> {
        (index < self.len).then(|| self.components[index])
    }

    /// Replace the component at `index`. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, value: f64) {
        if index < self.len {
            self.components[index] = value;
        }
    }

    /// Active components as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.components[..self.len]
    }
}

/// A parameter's payload: one variant per semantic kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// On/off flag (toggles, buttons).
    Bool(bool),
    /// Signed integer (stepped number fields).
    Int(i64),
    /// Floating-point scalar (sliders, number fields).
    Float(f64),
    /// Free-form text (text fields, labels).
    Text(String),
    /// Fixed-size numeric vector (multi-sliders, color channels).
    Vector(Vector),
    /// Selected option of an enumerated list (dropdowns, palettes).
    Choice(String),
}

impl Value {
    /// The kind tag for this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::Vector(v) => ValueKind::Vector(v.len()),
            Value::Choice(_) => ValueKind::Choice,
        }
    }

    /// Numeric view of the value, if it has one.
    ///
    /// `Bool`, `Text`, `Choice`, and `Vector` return `None` — vectors are
    /// numeric per component, not as a whole.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the inner flag for `Bool` values.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the inner string for `Text` and `Choice` values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) | Value::Choice(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the inner vector for `Vector` values.
    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            Value::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// Whether the value is numeric and ordered (supports min/max bounds).
    pub fn is_bounded_kind(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_) | Value::Vector(_))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<Vector> for Value {
    fn from(v: Vector) -> Self {
        Value::Vector(v)
    }
}
