//! Equality (assignment) encoder.

use queryforge_config::PhraseConfig;
use queryforge_core::{
    append_boost, ConstraintKind, ConstraintValue, EncodedParts, IndexDataType, PositionKey,
    QueryTerm, Result,
};

use super::{check_value_types, phrase_alternative, wants_phrase, ConstraintEncoder, ALL_TYPES};
use crate::request::FieldContext;

/// Writes `:term` assignments at the `Assignment` position.
///
/// Under `All` the terms form one AND group; under `Any` each term is its own
/// alternative and, when the phrase flag is set, a quoted phrase over the
/// plain text terms is added as one more alternative. Without a value the
/// bare `:` is written, which range, wildcard and regex constraints rely on.
#[derive(Debug, Clone, Default)]
pub struct AssignmentEncoder {
    phrase: PhraseConfig,
}

impl AssignmentEncoder {
    pub fn new(phrase: PhraseConfig) -> Self {
        Self { phrase }
    }
}

impl ConstraintEncoder for AssignmentEncoder {
    fn kind(&self) -> ConstraintKind {
        ConstraintKind::Eq
    }

    fn depends_on(&self) -> &'static [ConstraintKind] {
        &[ConstraintKind::Field]
    }

    fn supports_default(&self) -> bool {
        true
    }

    fn accepted_types(&self) -> &'static [IndexDataType] {
        ALL_TYPES
    }

    fn encode(
        &self,
        _field: &FieldContext,
        value: Option<&ConstraintValue>,
        parts: &mut EncodedParts,
    ) -> Result<()> {
        let value = match value.filter(|v| !v.is_empty()) {
            Some(value) => value,
            None => {
                parts.add(PositionKey::ASSIGNMENT, ":");
                return Ok(());
            }
        };
        check_value_types(self.kind(), self.accepted_types(), value)?;

        let terms: Vec<QueryTerm> = value.iter().map(QueryTerm::exact).collect();
        let encoded = terms
            .iter()
            .map(|t| format!(":{}", t.encode_boosted(value.boost())));
        parts.add_with_mode(PositionKey::ASSIGNMENT, value.mode(), encoded);

        if wants_phrase(value, &self.phrase) {
            if let Some(phrase) = phrase_alternative(&terms, &self.phrase) {
                parts.add(
                    PositionKey::ASSIGNMENT,
                    append_boost(format!(":{phrase}"), value.boost()),
                );
            }
        }
        Ok(())
    }
}
