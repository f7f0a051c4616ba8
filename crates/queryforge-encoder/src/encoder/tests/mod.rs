//! Tests for the standard encoders.

use super::*;
use queryforge_config::{CompilerConfig, DataTypeConfig, LanguageConfig, PhraseSlop};
use queryforge_core::PositionKey;
use queryforge_test::{any_strings, any_texts, int, phrase_texts, string, text};

mod test_regex;
mod test_wildcard;

fn txt_field() -> FieldContext {
    FieldContext::new(Some(IndexDataType::Txt))
}

fn str_field() -> FieldContext {
    FieldContext::new(Some(IndexDataType::Str))
}

fn int_field() -> FieldContext {
    FieldContext::new(Some(IndexDataType::Int))
}

fn encode(
    encoder: &dyn ConstraintEncoder,
    field: &FieldContext,
    value: Option<&ConstraintValue>,
) -> Result<EncodedParts> {
    let mut parts = EncodedParts::new();
    encoder.encode(field, value, &mut parts)?;
    Ok(parts)
}
