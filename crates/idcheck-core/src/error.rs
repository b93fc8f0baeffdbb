//! Error taxonomy for the idcheck-core library.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a validation failure.
///
/// The engine reports failures as data; none of these variants is ever
/// raised as a panic or crosses the library boundary inside a `Result`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Structural mismatch: wrong length, alphabet, or punctuation.
    #[error("format error")]
    Format,

    /// Structurally valid but the check digit arithmetic does not hold.
    #[error("checksum error")]
    Checksum,

    /// The caller asked for a document type the registry does not implement.
    #[error("unsupported document type")]
    UnsupportedType,

    /// The value was absent or blank where the document type requires one.
    #[error("missing input")]
    MissingInput,
}
