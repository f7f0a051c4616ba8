//! Constraint value fixtures.
//!
//! # Example
//!
//! ```
//! use queryforge_core::MatchMode;
//! use queryforge_test::constraints::phrase_texts;
//!
//! let cv = phrase_texts(&["red", "car"], true);
//! assert_eq!(cv.mode(), MatchMode::Any);
//! assert_eq!(cv.build_phrase(), Some(true));
//! ```

use queryforge_core::ConstraintValue;

use crate::values::{string, text};

/// Text values where any one suffices.
pub fn any_texts(values: &[&str]) -> ConstraintValue {
    ConstraintValue::any(values.iter().map(|v| text(v)))
}

/// Text values where any one suffices, with the phrase flag set.
pub fn phrase_texts(values: &[&str], build_phrase: bool) -> ConstraintValue {
    any_texts(values).with_build_phrase(build_phrase)
}

pub fn any_strings(values: &[&str]) -> ConstraintValue {
    ConstraintValue::any(values.iter().map(|v| string(v)))
}

pub fn all_strings(values: &[&str]) -> ConstraintValue {
    ConstraintValue::all(values.iter().map(|v| string(v)))
}

/// Language codes for the language scope constraint.
pub fn languages(codes: &[&str]) -> ConstraintValue {
    any_strings(codes)
}
