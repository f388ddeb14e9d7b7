use thiserror::Error;

use super::value::ValueKind;
use crate::ErrorKind;

/// A rule line that failed tokenizing or validation.
///
/// Every variant carries the offending line verbatim. Only the first failing
/// line of a segment is ever reported.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleError {
    #[error("malformed rule '{line}': expected `<field> <operator> <value>`")]
    MalformedRule { line: String },

    #[error("unknown field '{field}' in rule '{line}'")]
    UnknownField { field: String, line: String },

    #[error("unsupported operator '{operator}' in rule '{line}'")]
    UnsupportedOperator { operator: String, line: String },

    #[error("field '{field}' expects a {expected} but got '{literal}' in rule '{line}'")]
    TypeMismatch {
        field: String,
        literal: String,
        expected: ValueKind,
        line: String,
    },

    #[error(
        "invalid value '{literal}' for field '{field}' in rule '{line}'; expected one of: {}",
        allowed.join(", ")
    )]
    InvalidEnumValue {
        field: String,
        literal: String,
        allowed: Vec<String>,
        line: String,
    },
}

impl RuleError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            RuleError::MalformedRule { .. } => ErrorKind::MalformedRule,
            RuleError::UnknownField { .. } => ErrorKind::UnknownField,
            RuleError::UnsupportedOperator { .. } => ErrorKind::UnsupportedOperator,
            RuleError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            RuleError::InvalidEnumValue { .. } => ErrorKind::InvalidEnumValue,
        }
    }

    /// The rule line that caused this error.
    #[must_use]
    pub fn line(&self) -> &str {
        match self {
            RuleError::MalformedRule { line }
            | RuleError::UnknownField { line, .. }
            | RuleError::UnsupportedOperator { line, .. }
            | RuleError::TypeMismatch { line, .. }
            | RuleError::InvalidEnumValue { line, .. } => line,
        }
    }
}
