//! QueryForge - compiles typed field constraints into search index queries
//!
//! Describe what a field must match, get back the query fragment the search
//! index understands.
//!
//! # Example
//!
//! ```rust
//! use queryforge::prelude::*;
//!
//! let compiler = QueryCompiler::standard().unwrap();
//! let requests = [
//!     ConstraintRequest::for_field("city", Some(IndexDataType::Str)).with(
//!         ConstraintKind::Eq,
//!         ConstraintValue::single(IndexValue::string("Paris")),
//!     ),
//!     ConstraintRequest::for_field("price", Some(IndexDataType::Int)).with(
//!         ConstraintKind::Le,
//!         ConstraintValue::single(IndexValue::new("100", IndexDataType::Int)),
//!     ),
//! ];
//!
//! let query = compile_query(&compiler, &requests).unwrap();
//! assert_eq!(query, "(city:Paris) AND (price:{* TO 100])");
//! ```

// Value model and errors
pub use queryforge_core::{
    CompileError, ConstraintKind, ConstraintValue, EncodedParts, FlagValue, IndexDataType,
    IndexValue, MatchMode, PositionCategory, PositionKey, Result, BUILD_PHRASE,
};

// Configuration
pub use queryforge_config::{
    CompilerConfig, ConfigError, DataTypeConfig, LanguageConfig, PhraseConfig, PhraseSlop,
    RenderStyle,
};

// Encoders and compilation
pub use queryforge_encoder::{
    ConstraintEncoder, ConstraintRequest, EncoderRegistry, EncoderRegistryBuilder, FieldContext,
    QueryCompiler,
};

/// Standard encoder implementations.
pub mod encoders {
    pub use queryforge_encoder::{
        AssignmentEncoder, DataTypeEncoder, EncoderBuilder, FieldEncoder, LangEncoder,
        RangeEncoder, RegexEncoder, WildcardEncoder,
    };
}

#[cfg(feature = "console")]
pub mod console;

/// Joins per-field fragments into one query: `(f1) AND (f2) ...`.
///
/// Empty fragments are skipped.
pub fn assemble_query<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut query = String::new();
    for fragment in fragments {
        let fragment = fragment.as_ref();
        if fragment.is_empty() {
            continue;
        }
        if !query.is_empty() {
            query.push_str(" AND ");
        }
        query.push('(');
        query.push_str(fragment);
        query.push(')');
    }
    query
}

/// Compiles every request and assembles the fragments into one query.
///
/// Fails with the first compilation error, in request order.
pub fn compile_query(compiler: &QueryCompiler, requests: &[ConstraintRequest]) -> Result<String> {
    let fragments = compiler
        .compile_batch(requests)
        .into_iter()
        .collect::<Result<Vec<_>>>()?;
    Ok(assemble_query(fragments))
}

pub mod prelude {
    pub use super::{assemble_query, compile_query};
    pub use super::{
        CompileError, CompilerConfig, ConstraintKind, ConstraintRequest, ConstraintValue,
        IndexDataType, IndexValue, MatchMode, QueryCompiler, RenderStyle,
    };
}
