//! QueryForge Encoder - compiles field constraints into query fragments
//!
//! This crate provides:
//! - One stateless encoder per constraint kind
//! - An immutable encoder registry, ordered once at startup
//! - The per-field compiler resolving, ordering and running encoders
//!
//! # Example
//!
//! ```
//! use queryforge_core::{ConstraintKind, ConstraintValue, IndexDataType, IndexValue};
//! use queryforge_encoder::{ConstraintRequest, QueryCompiler};
//!
//! let compiler = QueryCompiler::standard().unwrap();
//! let request = ConstraintRequest::for_field("city", Some(IndexDataType::Str)).with(
//!     ConstraintKind::Eq,
//!     ConstraintValue::any([IndexValue::string("Paris"), IndexValue::string("Rome")]),
//! );
//!
//! assert_eq!(compiler.compile(&request).unwrap(), "city:Paris OR :Rome");
//! assert_eq!(
//!     compiler.compile_expanded(&request).unwrap(),
//!     "((city:Paris)) OR ((city:Rome))"
//! );
//! ```

pub mod builder;
pub mod compiler;
pub mod encoder;
pub mod registry;
pub mod request;

#[cfg(test)]
mod tests;

pub use builder::EncoderBuilder;
pub use compiler::QueryCompiler;
pub use encoder::{
    AssignmentEncoder, ConstraintEncoder, DataTypeEncoder, FieldEncoder, LangEncoder, RangeEncoder,
    RegexEncoder, WildcardEncoder,
};
pub use registry::{EncoderRegistry, EncoderRegistryBuilder};
pub use request::{ConstraintRequest, FieldContext};
