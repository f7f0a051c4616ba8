//! Wiring between configuration and the standard encoders.

use queryforge_config::CompilerConfig;
use queryforge_core::ConstraintKind;

use crate::encoder::{
    AssignmentEncoder, ConstraintEncoder, DataTypeEncoder, FieldEncoder, LangEncoder, RangeEncoder,
    RegexEncoder, WildcardEncoder,
};

/// Builder for constructing standard encoders from configuration.
pub struct EncoderBuilder;

impl EncoderBuilder {
    /// Builds the standard encoder for `kind`.
    pub fn build(kind: ConstraintKind, config: &CompilerConfig) -> Box<dyn ConstraintEncoder> {
        match kind {
            ConstraintKind::Lang => Box::new(LangEncoder::new(config.language.clone())),
            ConstraintKind::DataType => Box::new(DataTypeEncoder::new(config.data_type.clone())),
            ConstraintKind::Field => Box::new(FieldEncoder::new()),
            ConstraintKind::Eq => Box::new(AssignmentEncoder::new(config.phrase.clone())),
            ConstraintKind::Gt => Box::new(RangeEncoder::gt()),
            ConstraintKind::Ge => Box::new(RangeEncoder::ge()),
            ConstraintKind::Lt => Box::new(RangeEncoder::lt()),
            ConstraintKind::Le => Box::new(RangeEncoder::le()),
            ConstraintKind::Wildcard => Box::new(WildcardEncoder::new(config.phrase.clone())),
            ConstraintKind::Regex => Box::new(RegexEncoder::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_covers_every_kind() {
        let config = CompilerConfig::default();
        for kind in ConstraintKind::ALL {
            assert_eq!(EncoderBuilder::build(kind, &config).kind(), kind);
        }
    }

    #[test]
    fn test_defaults_per_kind() {
        let config = CompilerConfig::default();
        let defaulting: Vec<ConstraintKind> = ConstraintKind::ALL
            .into_iter()
            .filter(|&k| EncoderBuilder::build(k, &config).supports_default())
            .collect();
        assert_eq!(
            defaulting,
            vec![
                ConstraintKind::Lang,
                ConstraintKind::DataType,
                ConstraintKind::Eq,
                ConstraintKind::Gt,
                ConstraintKind::Ge,
                ConstraintKind::Lt,
                ConstraintKind::Le,
            ]
        );
    }
}
