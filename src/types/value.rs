use std::cmp::Ordering;
use std::fmt;

/// A rule literal after coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A finite decimal number.
    Number(f64),
    /// A boolean value.
    Bool(bool),
    /// A UTF-8 string, case preserved.
    String(String),
}

/// The runtime type of a [`Value`], as reported in type mismatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    Boolean,
    String,
}

/// A borrowed view of a single product attribute value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Number(f64),
    Bool(bool),
    Str(&'a str),
}

impl Value {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Boolean,
            Value::String(_) => ValueKind::String,
        }
    }

    #[must_use]
    pub fn as_scalar(&self) -> Scalar<'_> {
        match self {
            Value::Number(n) => Scalar::Number(*n),
            Value::Bool(b) => Scalar::Bool(*b),
            Value::String(s) => Scalar::Str(s),
        }
    }
}

impl Scalar<'_> {
    /// Order this attribute value against a rule value.
    /// Returns `None` when the types differ or a number is NaN.
    #[must_use]
    pub fn partial_cmp_value(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Scalar::Number(a), Value::Number(b)) => a.partial_cmp(b),
            // false < true, as the document store orders booleans
            (Scalar::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Scalar::Str(a), Value::String(b)) => Some((*a).cmp(b.as_str())),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "\"{v}\""),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Number => write!(f, "number"),
            ValueKind::Boolean => write!(f, "boolean"),
            ValueKind::String => write!(f, "string"),
        }
    }
}
