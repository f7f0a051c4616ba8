//! QueryForge Core - Core types for compiling field constraints
//!
//! This crate provides the building blocks shared by all constraint encoders:
//! - Constraint kinds identifying each type of field constraint
//! - Position keys controlling where encoded fragments are placed
//! - Typed index values and constraint values with their match mode
//! - The fragment accumulator that renders one field's query fragment
//! - Escaping of engine-reserved characters

pub mod error;
pub mod escape;
pub mod kind;
pub mod parts;
pub mod position;
pub mod value;

#[cfg(test)]
mod tests;

pub use error::{CompileError, Result};
pub use escape::{append_boost, encode_phrase, escape_term, escape_wildcard_term, QueryTerm};
pub use kind::ConstraintKind;
pub use parts::EncodedParts;
pub use position::{PositionCategory, PositionKey};
pub use value::{ConstraintValue, FlagValue, IndexDataType, IndexValue, MatchMode, BUILD_PHRASE};
