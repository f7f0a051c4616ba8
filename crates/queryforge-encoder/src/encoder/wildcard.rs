//! Wildcard encoder.

use queryforge_config::PhraseConfig;
use queryforge_core::{
    append_boost, ConstraintKind, ConstraintValue, EncodedParts, IndexDataType, MatchMode,
    PositionKey, QueryTerm, Result,
};

use super::{
    check_value_types, phrase_alternative, require_value, wants_phrase, ConstraintEncoder,
    TEXT_TYPES,
};
use crate::request::FieldContext;

pub const WILDCARD_POS: PositionKey = PositionKey::value(0);

/// Writes wildcard terms for textual values.
///
/// Every value is split into wildcard words and quoted runs of plain words;
/// the terms of one value are AND-grouped. Values combine per match mode,
/// and the phrase alternative covers the plain terms only.
#[derive(Debug, Clone, Default)]
pub struct WildcardEncoder {
    phrase: PhraseConfig,
}

impl WildcardEncoder {
    pub fn new(phrase: PhraseConfig) -> Self {
        Self { phrase }
    }
}

fn encode_terms(terms: &[QueryTerm], boost: Option<f64>) -> Vec<String> {
    terms.iter().map(|t| t.encode_boosted(boost)).collect()
}

impl ConstraintEncoder for WildcardEncoder {
    fn kind(&self) -> ConstraintKind {
        ConstraintKind::Wildcard
    }

    fn depends_on(&self) -> &'static [ConstraintKind] {
        &[ConstraintKind::Eq]
    }

    fn implies(&self) -> &'static [&'static [ConstraintKind]] {
        &[&[ConstraintKind::Eq]]
    }

    fn supports_default(&self) -> bool {
        false
    }

    fn accepted_types(&self) -> &'static [IndexDataType] {
        TEXT_TYPES
    }

    fn encode(
        &self,
        _field: &FieldContext,
        value: Option<&ConstraintValue>,
        parts: &mut EncodedParts,
    ) -> Result<()> {
        let value = require_value(self.kind(), value)?;
        check_value_types(self.kind(), TEXT_TYPES, value)?;

        let boost = value.boost();
        let per_value: Vec<Vec<QueryTerm>> = value.iter().map(QueryTerm::wildcard).collect();
        match value.mode() {
            MatchMode::All => {
                let all: Vec<QueryTerm> = per_value.iter().flatten().cloned().collect();
                parts.add_all(WILDCARD_POS, encode_terms(&all, boost));
            }
            MatchMode::Any => {
                for terms in &per_value {
                    parts.add_all(WILDCARD_POS, encode_terms(terms, boost));
                }
            }
        }

        if wants_phrase(value, &self.phrase) {
            let all: Vec<QueryTerm> = per_value.into_iter().flatten().collect();
            if let Some(phrase) = phrase_alternative(&all, &self.phrase) {
                parts.add(WILDCARD_POS, append_boost(phrase, boost));
            }
        }
        Ok(())
    }
}
