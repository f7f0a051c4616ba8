//! Index value fixtures.

use queryforge_core::{IndexDataType, IndexValue};

/// Natural language text without language tag.
pub fn text(s: &str) -> IndexValue {
    IndexValue::text(s, None)
}

/// Natural language text tagged with `language`.
pub fn text_in(s: &str, language: &str) -> IndexValue {
    IndexValue::text(s, Some(language))
}

pub fn string(s: &str) -> IndexValue {
    IndexValue::string(s)
}

pub fn int(i: i64) -> IndexValue {
    IndexValue::new(i.to_string(), IndexDataType::Int)
}

pub fn double(d: f64) -> IndexValue {
    IndexValue::new(d.to_string(), IndexDataType::Double)
}

/// A date in the lexical form used by the index (`2024-01-31T00:00:00Z`).
pub fn date(s: &str) -> IndexValue {
    IndexValue::new(s, IndexDataType::Date)
}
