//! Tests for index and constraint values.

use super::*;

#[test]
fn test_duplicates_are_dropped() {
    let cv = ConstraintValue::all([
        IndexValue::string("a"),
        IndexValue::string("b"),
        IndexValue::string("a"),
    ]);
    let forms: Vec<&str> = cv.iter().map(IndexValue::lexical_form).collect();
    assert_eq!(forms, vec!["a", "b"]);
    assert_eq!(cv.mode(), MatchMode::All);
}

#[test]
fn test_default_mode_is_any() {
    let cv = ConstraintValue::single(IndexValue::string("x"));
    assert_eq!(cv.mode(), MatchMode::Any);
}

#[test]
fn test_neutral_boost_is_none() {
    let cv = ConstraintValue::single(IndexValue::string("x")).with_boost(1.0);
    assert_eq!(cv.boost(), None);
    let cv = cv.with_boost(0.5);
    assert_eq!(cv.boost(), Some(0.5));
}

#[test]
fn test_build_phrase_flag() {
    let cv = ConstraintValue::any([IndexValue::string("x")]);
    assert_eq!(cv.build_phrase(), None);

    let cv = cv.with_build_phrase(false);
    assert_eq!(cv.build_phrase(), Some(false));

    // A non-boolean flag value is not a phrase setting
    let cv = cv.with_flag(BUILD_PHRASE, "yes");
    assert_eq!(cv.build_phrase(), None);
}

#[test]
fn test_empty_language_is_none() {
    let v = IndexValue::text("hello", Some(""));
    assert_eq!(v.language(), None);
}

#[test]
fn test_data_type_classes() {
    assert!(IndexDataType::Txt.is_language_type());
    assert!(!IndexDataType::Str.is_language_type());
    assert!(IndexDataType::Str.is_textual());
    assert!(IndexDataType::Double.is_numeric());
    assert!(!IndexDataType::Date.is_numeric());
    assert_eq!(IndexDataType::Long.to_string(), "long");
}

#[cfg(feature = "serde")]
#[test]
fn test_constraint_value_serde() {
    let cv = ConstraintValue::all([IndexValue::text("Paris", Some("fr"))])
        .with_boost(2.0)
        .with_build_phrase(true);
    let encoded = toml::Value::try_from(&cv).unwrap();
    assert_eq!(encoded.get("mode"), Some(&toml::Value::String("all".into())));
    let decoded: ConstraintValue = encoded.try_into().unwrap();
    assert_eq!(decoded, cv);
    assert_eq!(decoded.build_phrase(), Some(true));
}
