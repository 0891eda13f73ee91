//! Raw string to typed value conversion.
//!
//! Responsibilities:
//! - Parse a raw variable value according to a `TypeSpec`.
//! - Propagate absence (`None` in, `None` out).
//!
//! Does NOT handle:
//! - Default substitution or enforcement (see walker.rs).
//! - Range or semantic validation of parsed values.
//!
//! Invariants:
//! - Numeric and boolean parses consume the entire string; trailing
//!   characters are an error.
//! - Booleans accept exactly `1`, `0`, `true`, `false` (case-sensitive).
//! - Collections split on a literal separator. An empty string becomes an
//!   empty list but a one-element tuple holding the converted empty string.

use crate::constants::{FALSE_LITERALS, TRUE_LITERALS};
use crate::types::{TypeSpec, Value};

use super::error::ConversionError;

/// Convert an optional raw value. Absence is not an error.
pub fn convert(raw: Option<&str>, spec: &TypeSpec) -> Result<Option<Value>, ConversionError> {
    raw.map(|raw| convert_str(raw, spec)).transpose()
}

/// Convert a present raw value.
pub fn convert_str(raw: &str, spec: &TypeSpec) -> Result<Value, ConversionError> {
    match spec {
        TypeSpec::String => Ok(Value::String(raw.to_string())),
        TypeSpec::Integer => raw
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| ConversionError::new(raw, spec)),
        TypeSpec::Float => parse_float(raw)
            .map(Value::Float)
            .ok_or_else(|| ConversionError::new(raw, spec)),
        TypeSpec::Boolean => parse_bool(raw)
            .map(Value::Boolean)
            .ok_or_else(|| ConversionError::new(raw, spec)),
        TypeSpec::Tuple { element, separator } => split(raw, separator)
            .map(|piece| convert_str(piece, element))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Tuple),
        TypeSpec::List { .. } if raw.is_empty() => Ok(Value::List(Vec::new())),
        TypeSpec::List { element, separator } => split(raw, separator)
            .map(|piece| convert_str(piece, element))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
    }
}

/// Literal split. An empty separator (only constructible in code) leaves
/// the input whole.
fn split<'a>(raw: &'a str, separator: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
    if separator.is_empty() {
        Box::new(std::iter::once(raw))
    } else {
        Box::new(raw.split(separator))
    }
}

/// Decimal or exponential literal. Rejects the `inf`/`nan` spellings that
/// `f64::from_str` would otherwise accept, and overflow to infinity.
fn parse_float(raw: &str) -> Option<f64> {
    let is_literal = raw.bytes().any(|b| b.is_ascii_digit())
        && raw
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !is_literal {
        return None;
    }
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn parse_bool(raw: &str) -> Option<bool> {
    if TRUE_LITERALS.contains(&raw) {
        Some(true)
    } else if FALSE_LITERALS.contains(&raw) {
        Some(false)
    } else {
        None
    }
}
