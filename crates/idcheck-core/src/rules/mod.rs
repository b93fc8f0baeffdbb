//! Per-country validation rules.
//!
//! One function per document type, each running the same three-stage
//! pipeline: normalize, match the surface grammar, then verify the
//! check digit arithmetic. Stages short-circuit; a value that fails the
//! structural stage never reaches the arithmetic.

pub mod brazil;
pub mod canada;
pub mod germany;
pub mod mexico;
pub mod patterns;
pub mod south_korea;
pub mod united_kingdom;
pub mod united_states;
