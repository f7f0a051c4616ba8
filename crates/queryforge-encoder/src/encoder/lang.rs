//! Language scope encoder.

use queryforge_config::LanguageConfig;
use queryforge_core::{
    escape_term, ConstraintKind, ConstraintValue, EncodedParts, IndexDataType, PositionKey, Result,
};

use super::{check_value_types, ConstraintEncoder};
use crate::request::FieldContext;

/// Writes language scoped field prefixes for natural language fields.
///
/// Each requested language becomes one prefix alternative. Without a
/// language the merger prefix is written so untagged text still matches.
/// Fields of other data types get no prefix.
#[derive(Debug, Clone, Default)]
pub struct LangEncoder {
    config: LanguageConfig,
}

impl LangEncoder {
    pub fn new(config: LanguageConfig) -> Self {
        Self { config }
    }
}

impl ConstraintEncoder for LangEncoder {
    fn kind(&self) -> ConstraintKind {
        ConstraintKind::Lang
    }

    fn supports_default(&self) -> bool {
        true
    }

    fn accepted_types(&self) -> &'static [IndexDataType] {
        &[IndexDataType::Str]
    }

    fn encode(
        &self,
        field: &FieldContext,
        value: Option<&ConstraintValue>,
        parts: &mut EncodedParts,
    ) -> Result<()> {
        if let Some(value) = value {
            check_value_types(self.kind(), self.accepted_types(), value)?;
        }
        if !field.is_language_type() {
            return Ok(());
        }
        match value.filter(|v| !v.is_empty()) {
            None => parts.add(PositionKey::PREFIX, escape_term(&self.config.merger_prefix)),
            Some(languages) => {
                for language in languages {
                    let prefix = self.config.prefix_for(language.lexical_form());
                    parts.add(PositionKey::PREFIX, escape_term(&prefix));
                }
            }
        }
        Ok(())
    }
}
