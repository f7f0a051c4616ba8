//! Field selection encoder.

use queryforge_core::{
    escape_term, ConstraintKind, ConstraintValue, EncodedParts, IndexDataType, PositionKey, Result,
};

use super::{check_value_types, require_value, ConstraintEncoder};
use crate::request::FieldContext;

/// Writes the physical field token at the `Field` position.
///
/// The token comes from field mapping outside the compiler, so this encoder
/// never defaults. Several tokens become OR alternatives.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldEncoder;

impl FieldEncoder {
    pub fn new() -> Self {
        FieldEncoder
    }
}

impl ConstraintEncoder for FieldEncoder {
    fn kind(&self) -> ConstraintKind {
        ConstraintKind::Field
    }

    fn depends_on(&self) -> &'static [ConstraintKind] {
        &[ConstraintKind::Lang, ConstraintKind::DataType]
    }

    fn implies(&self) -> &'static [&'static [ConstraintKind]] {
        &[&[ConstraintKind::Lang]]
    }

    fn supports_default(&self) -> bool {
        false
    }

    fn accepted_types(&self) -> &'static [IndexDataType] {
        &[IndexDataType::Str]
    }

    fn encode(
        &self,
        _field: &FieldContext,
        value: Option<&ConstraintValue>,
        parts: &mut EncodedParts,
    ) -> Result<()> {
        let value = require_value(self.kind(), value)?;
        check_value_types(self.kind(), self.accepted_types(), value)?;
        for token in value {
            parts.add(PositionKey::FIELD, escape_term(token.lexical_form()));
        }
        Ok(())
    }
}
