//! Fixed-precision formatting and parsing for parameter values.
//!
//! Controls display values through [`format_value`] and hand raw user input
//! back through [`coerce`]. Centralizing both directions here keeps the
//! per-control adapters free of duplicated format/parse logic.

use thiserror::Error;

use crate::value::{Value, ValueKind, Vector};

/// Fractional digits used when formatting floating-point values.
pub const FLOAT_DECIMALS: usize = 3;

/// Errors produced when raw control input cannot be turned into a value.
///
/// The binding layer treats every variant the same way — the input is
/// dropped — but the taxonomy keeps trace logs useful.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Input was empty or whitespace only.
    #[error("empty input")]
    Empty,

    /// Input did not parse as a number.
    #[error("not a number: '{0}'")]
    InvalidNumber(String),

    /// Input did not parse as a boolean flag.
    #[error("not a boolean: '{0}'")]
    InvalidBool(String),

    /// Input did not parse as a vector of the expected arity.
    #[error("expected {expected} components, got {got}")]
    VectorArity {
        /// Component count required by the target parameter.
        expected: usize,
        /// Component count found in the input.
        got: usize,
    },

    /// The raw value's kind cannot be converted to the target kind.
    #[error("cannot convert {got} to {expected}")]
    KindMismatch {
        /// Kind required by the target parameter.
        expected: ValueKind,
        /// Kind of the raw value.
        got: ValueKind,
    },
}

/// Format a float with [`FLOAT_DECIMALS`] fractional digits.
pub fn format_float(value: f64) -> String {
    format!("{value:.prec$}", prec = FLOAT_DECIMALS)
}

/// Format a value for display in a text-based control.
///
/// Floats use fixed precision, integers have no fractional digits, vectors
/// render as a parenthesized component list.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => format_float(*f),
        Value::Text(s) | Value::Choice(s) => s.clone(),
        Value::Vector(v) => {
            let parts: Vec<String> = v.as_slice().iter().map(|c| format_float(*c)).collect();
            format!("({})", parts.join(", "))
        }
    }
}

/// Parse a float from raw field text.
pub fn parse_float(raw: &str) -> Result<f64, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber(trimmed.to_string()))
}

/// Parse an integer from raw field text.
///
/// Accepts float-shaped input and rounds it, so "3.0" commits as 3.
pub fn parse_int(raw: &str) -> Result<i64, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Ok(i);
    }
    parse_float(trimmed).map(|f| f.round() as i64)
}

/// Parse a boolean from raw control text.
pub fn parse_bool(raw: &str) -> Result<bool, ParseError> {
    match raw.trim() {
        "" => Err(ParseError::Empty),
        s if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("on") || s == "1" => Ok(true),
        s if s.eq_ignore_ascii_case("false") || s.eq_ignore_ascii_case("off") || s == "0" => {
            Ok(false)
        }
        s => Err(ParseError::InvalidBool(s.to_string())),
    }
}

/// Parse a vector in the `(a, b, c)` shape emitted by [`format_value`].
pub fn parse_vector(raw: &str, expected_len: usize) -> Result<Vector, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(trimmed);
    let components: Result<Vec<f64>, ParseError> = inner.split(',').map(parse_float).collect();
    let components = components?;
    if components.len() != expected_len {
        return Err(ParseError::VectorArity {
            expected: expected_len,
            got: components.len(),
        });
    }
    Vector::from_slice(&components).ok_or(ParseError::VectorArity {
        expected: expected_len,
        got: components.len(),
    })
}

/// Convert a raw control value into the target kind.
///
/// Identity when the kinds already match. Text coerces into any kind by
/// parsing; `Int`/`Float` convert into each other. Everything else is a
/// kind mismatch.
pub fn coerce(raw: &Value, target: ValueKind) -> Result<Value, ParseError> {
    if raw.kind() == target {
        return Ok(raw.clone());
    }
    match (raw, target) {
        (Value::Text(s) | Value::Choice(s), ValueKind::Float) => {
            parse_float(s).map(Value::Float)
        }
        (Value::Text(s) | Value::Choice(s), ValueKind::Int) => parse_int(s).map(Value::Int),
        (Value::Text(s) | Value::Choice(s), ValueKind::Bool) => parse_bool(s).map(Value::Bool),
        (Value::Text(s), ValueKind::Choice) => Ok(Value::Choice(s.clone())),
        (Value::Choice(s), ValueKind::Text) => Ok(Value::Text(s.clone())),
        (Value::Text(s), ValueKind::Vector(n)) => parse_vector(s, n).map(Value::Vector),
        (Value::Int(i), ValueKind::Float) => Ok(Value::Float(*i as f64)),
        (Value::Float(f), ValueKind::Int) => Ok(Value::Int(f.round() as i64)),
        _ => Err(ParseError::KindMismatch {
            expected: target,
            got: raw.kind(),
        }),
    }
}
