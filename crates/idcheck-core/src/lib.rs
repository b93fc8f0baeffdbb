//! Core library for multi-country identity document validation.
//!
//! This crate provides:
//! - A closed registry of supported document types across Brazil, the US,
//!   the UK, Canada, Mexico, South Korea, and Germany
//! - Per-type normalization and structural matching
//! - Check digit algorithms (weighted mod-11, Luhn mod-10, embedded dates)
//! - A transport-independent validation outcome model
//!
//! The engine is pure: `validate` performs no I/O, never panics on any
//! input, and holds no state beyond constant algorithm tables. Mapping
//! outcomes to a transport (HTTP status codes, exit codes) is the caller's
//! responsibility.

pub mod checksum;
pub mod document;
pub mod error;
pub mod normalize;
pub mod outcome;
pub mod registry;
pub mod rules;

pub use document::{Country, DocumentType, UnknownDocumentType};
pub use error::ErrorKind;
pub use normalize::normalize;
pub use outcome::ValidationOutcome;
pub use registry::{validate, validate_tag};
