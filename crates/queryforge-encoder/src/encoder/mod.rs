//! Constraint encoders.
//!
//! One stateless encoder per [`ConstraintKind`]. Each declares the data
//! types it accepts, the kinds that must run before it, the kinds it implies
//! and whether it can run without a value.

mod assignment;
mod data_type;
mod field;
mod lang;
mod range;
mod regex;
mod wildcard;

#[cfg(test)]
mod tests;

use std::fmt::Debug;

use queryforge_config::PhraseConfig;
use queryforge_core::{
    encode_phrase, CompileError, ConstraintKind, ConstraintValue, EncodedParts, IndexDataType,
    MatchMode, QueryTerm, Result,
};

use crate::request::FieldContext;

pub use assignment::AssignmentEncoder;
pub use data_type::DataTypeEncoder;
pub use field::FieldEncoder;
pub use lang::LangEncoder;
pub use range::RangeEncoder;
pub use regex::RegexEncoder;
pub use wildcard::WildcardEncoder;

/// Every data type; used by encoders without type restriction.
pub const ALL_TYPES: &[IndexDataType] = &[
    IndexDataType::Bool,
    IndexDataType::Int,
    IndexDataType::Long,
    IndexDataType::Float,
    IndexDataType::Double,
    IndexDataType::Date,
    IndexDataType::Str,
    IndexDataType::Txt,
    IndexDataType::Ref,
];

/// Textual data types.
pub const TEXT_TYPES: &[IndexDataType] = &[IndexDataType::Txt, IndexDataType::Str];

/// Encodes one constraint kind into fragments of a field query.
///
/// Encoders are built once into an [`EncoderRegistry`](crate::EncoderRegistry)
/// and shared by all compilations, so they hold no mutable state.
pub trait ConstraintEncoder: Send + Sync + Debug {
    /// The kind this encoder handles.
    fn kind(&self) -> ConstraintKind;

    /// Kinds whose encoders must run before this one.
    ///
    /// Used for ordering only; the kinds need not be present.
    fn depends_on(&self) -> &'static [ConstraintKind] {
        &[]
    }

    /// Kinds this encoder needs next to it.
    ///
    /// Each entry is a set of alternatives. When none of a set takes part in
    /// the compilation, the first kind of the set is added with its default.
    fn implies(&self) -> &'static [&'static [ConstraintKind]] {
        &[]
    }

    /// Whether the encoder can run without a value.
    fn supports_default(&self) -> bool;

    /// Data types accepted in constraint values.
    fn accepted_types(&self) -> &'static [IndexDataType];

    /// Appends the fragments for `value` (or the default when `None`).
    fn encode(
        &self,
        field: &FieldContext,
        value: Option<&ConstraintValue>,
        parts: &mut EncodedParts,
    ) -> Result<()>;
}

/// Fails with `UnsupportedValueType` on the first value outside `accepted`.
pub fn check_value_types(
    kind: ConstraintKind,
    accepted: &[IndexDataType],
    value: &ConstraintValue,
) -> Result<()> {
    match value.iter().find(|v| !accepted.contains(&v.data_type())) {
        Some(v) => Err(CompileError::UnsupportedValueType {
            kind,
            data_type: v.data_type(),
            accepted: accepted.to_vec(),
        }),
        None => Ok(()),
    }
}

/// Returns the value if present and non-empty, else `MissingRequiredValue`.
pub fn require_value(
    kind: ConstraintKind,
    value: Option<&ConstraintValue>,
) -> Result<&ConstraintValue> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(CompileError::MissingRequiredValue(kind))
}

/// Builds the extra phrase alternative over plain text terms.
///
/// Returns `None` unless at least two terms qualify.
pub(crate) fn phrase_alternative(terms: &[QueryTerm], config: &PhraseConfig) -> Option<String> {
    let words: Vec<&str> = terms
        .iter()
        .filter(|t| t.is_text && !t.has_wildcard)
        .map(|t| t.term.as_str())
        .collect();
    if words.len() < 2 {
        return None;
    }
    Some(encode_phrase(
        words.iter().copied(),
        config.slop_for(words.len()),
    ))
}

/// Whether the phrase alternative is requested for this value.
pub(crate) fn wants_phrase(value: &ConstraintValue, config: &PhraseConfig) -> bool {
    value.mode() == MatchMode::Any
        && value.build_phrase().unwrap_or(config.enabled_by_default)
}
