use serde::{Deserialize, Serialize};
use std::fmt;

/// Loosely typed value of a server-side form field.
///
/// Beneficiary endpoints send flags as `0`/`1`, booleans or strings depending on
/// the form they were captured with, so the DTOs keep them untyped and let the
/// presentation layer decide how to render them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// `0` and `false` are the "recorded as no" values.
    pub fn is_negative(&self) -> bool {
        match self {
            FieldValue::Flag(flag) => !flag,
            FieldValue::Number(n) => *n == 0.0,
            FieldValue::Text(_) => false,
        }
    }

    /// `1`, `true` and `"1"` are the "recorded as yes" values.
    pub fn is_affirmative(&self) -> bool {
        match self {
            FieldValue::Flag(flag) => *flag,
            FieldValue::Number(n) => *n == 1.0,
            FieldValue::Text(s) => s.trim() == "1",
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) if n.fract() == 0.0 => Some(*n as i64),
            FieldValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Flag(true) => f.write_str("Yes"),
            FieldValue::Flag(false) => f.write_str("No"),
            FieldValue::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}
