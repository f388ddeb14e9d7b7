use std::fmt;

use thiserror::Error;

use crate::store::StoreError;
use crate::RuleError;

/// Unified error type returned by [`Segmenter::evaluate()`](crate::Segmenter::evaluate).
///
/// Rule-text failures and product store failures stay separate variants so a
/// caller can answer "your rules are wrong" differently from "the backend is down".
#[derive(Debug, Error)]
pub enum SegmentError {
    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),
}

/// The flat error taxonomy of a segment evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedRule,
    UnknownField,
    UnsupportedOperator,
    TypeMismatch,
    InvalidEnumValue,
    StoreUnavailable,
}

impl SegmentError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            SegmentError::Rule(err) => err.kind(),
            SegmentError::StoreUnavailable(_) => ErrorKind::StoreUnavailable,
        }
    }
}

impl ErrorKind {
    /// `true` for every kind caused by the submitted rule text.
    #[must_use]
    pub fn is_client_error(self) -> bool {
        !matches!(self, ErrorKind::StoreUnavailable)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::MalformedRule => "malformed_rule",
            ErrorKind::UnknownField => "unknown_field",
            ErrorKind::UnsupportedOperator => "unsupported_operator",
            ErrorKind::TypeMismatch => "type_mismatch",
            ErrorKind::InvalidEnumValue => "invalid_enum_value",
            ErrorKind::StoreUnavailable => "store_unavailable",
        };
        f.write_str(name)
    }
}
