//! Data type scope encoder.

use queryforge_config::DataTypeConfig;
use queryforge_core::{
    escape_term, ConstraintKind, ConstraintValue, EncodedParts, IndexDataType, PositionKey, Result,
};

use super::{check_value_types, ConstraintEncoder};
use crate::request::FieldContext;

/// Writes the data type prefix of non-text fields.
///
/// Without a value the prefix is taken from the field's data type; values
/// are data type tags (`int`, `date`, ...) and each becomes one prefix
/// alternative. Natural language fields are scoped by language instead and
/// get no data type prefix, neither do fields of unknown type.
#[derive(Debug, Clone, Default)]
pub struct DataTypeEncoder {
    config: DataTypeConfig,
}

impl DataTypeEncoder {
    pub fn new(config: DataTypeConfig) -> Self {
        Self { config }
    }
}

impl ConstraintEncoder for DataTypeEncoder {
    fn kind(&self) -> ConstraintKind {
        ConstraintKind::DataType
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
        if field.is_language_type() {
            return Ok(());
        }
        match value.filter(|v| !v.is_empty()) {
            Some(tags) => {
                for tag in tags {
                    let prefix = self.config.prefix_for(tag.lexical_form());
                    parts.add(PositionKey::PREFIX, escape_term(&prefix));
                }
            }
            None => {
                if let Some(data_type) = field.data_type {
                    let prefix = self.config.prefix_for(data_type.tag());
                    parts.add(PositionKey::PREFIX, escape_term(&prefix));
                }
            }
        }
        Ok(())
    }
}
