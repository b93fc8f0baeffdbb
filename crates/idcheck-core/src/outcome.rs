//! The shared result type returned to callers.

use serde::Serialize;

use crate::error::ErrorKind;

/// Outcome of validating one value against one document type.
///
/// `Valid` carries no payload and `Invalid` always carries both a kind and
/// a message, so "valid implies no error" holds by construction. The
/// outcome is transport-independent: it knows nothing about HTTP status
/// codes or exit codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// The value is a well-formed instance of the document's scheme.
    Valid,
    /// The value was rejected by one of the pipeline stages.
    Invalid {
        /// Failure category.
        kind: ErrorKind,
        /// Human-readable message, stable across releases.
        message: String,
    },
}

impl ValidationOutcome {
    /// Build an `Invalid` outcome.
    pub fn invalid(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Invalid {
            kind,
            message: message.into(),
        }
    }

    /// True for `Valid`.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Failure category, if any.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Valid => None,
            Self::Invalid { kind, .. } => Some(*kind),
        }
    }

    /// Failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { message, .. } => Some(message),
        }
    }
}
