//! Regular expression encoder.

use queryforge_core::{
    append_boost, ConstraintKind, ConstraintValue, EncodedParts, IndexDataType, PositionKey, Result,
};

use super::{check_value_types, require_value, ConstraintEncoder, TEXT_TYPES};
use crate::request::FieldContext;

pub const REGEX_POS: PositionKey = PositionKey::value(0);

/// Writes `/pattern/` terms for textual values.
///
/// Only `/` is escaped inside the pattern. Not every regular expression
/// syntax is understood by every search index; patterns are passed through
/// as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexEncoder;

impl RegexEncoder {
    pub fn new() -> Self {
        RegexEncoder
    }
}

fn escape_slashes(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 2);
    let mut escaped = false;
    for c in pattern.chars() {
        if c == '/' && !escaped {
            out.push('\\');
        }
        escaped = c == '\\' && !escaped;
        out.push(c);
    }
    out
}

impl ConstraintEncoder for RegexEncoder {
    fn kind(&self) -> ConstraintKind {
        ConstraintKind::Regex
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
        let patterns = value.iter().map(|v| {
            append_boost(
                format!("/{}/", escape_slashes(v.lexical_form())),
                value.boost(),
            )
        });
        parts.add_with_mode(REGEX_POS, value.mode(), patterns);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_slashes() {
        assert_eq!(escape_slashes("a/b"), "a\\/b");
        assert_eq!(escape_slashes("a\\/b"), "a\\/b");
        assert_eq!(escape_slashes("[a-z]+"), "[a-z]+");
    }
}
