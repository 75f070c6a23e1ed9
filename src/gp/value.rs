//! Dynamic values produced by evaluation.

use std::fmt;

/// Result of evaluating an expression against one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Number(f64),
    Bool(bool),
}

impl Value {
    /// Nonzero numbers and `true` are truthy.
    pub fn is_truthy(self) -> bool {
        match self {
            Value::Number(x) => x != 0.0,
            Value::Bool(b) => b,
        }
    }

    /// Only `Bool(true)` counts as a selection; truthy numbers do not.
    pub fn is_true(self) -> bool {
        matches!(self, Value::Bool(true))
    }

    /// Numeric view used by arithmetic and comparison: `true` is 1, `false` is 0.
    pub fn as_number(self) -> f64 {
        match self {
            Value::Number(x) => x,
            Value::Bool(true) => 1.0,
            Value::Bool(false) => 0.0,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Number(0.0)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Number(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}
