use super::*;

#[test]
fn test_numeric_value_rejected() {
    let value = ConstraintValue::single(int(42));
    let err = encode(&WildcardEncoder::default(), &txt_field(), Some(&value)).unwrap_err();
    match err {
        CompileError::UnsupportedValueType {
            kind,
            data_type,
            accepted,
        } => {
            assert_eq!(kind, ConstraintKind::Wildcard);
            assert_eq!(data_type, IndexDataType::Int);
            assert_eq!(accepted, vec![IndexDataType::Txt, IndexDataType::Str]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_requires_value() {
    let err = encode(&WildcardEncoder::default(), &txt_field(), None).unwrap_err();
    assert_eq!(
        err,
        CompileError::MissingRequiredValue(ConstraintKind::Wildcard)
    );
}

#[test]
fn test_wildcards_stay_unescaped() {
    let value = ConstraintValue::single(text("multi*"));
    let parts = encode(&WildcardEncoder::default(), &txt_field(), Some(&value)).unwrap();
    assert_eq!(parts.render(), "multi*");
    assert_eq!(parts.positions().collect::<Vec<_>>(), vec![PositionKey::value(0)]);
}

#[test]
fn test_words_and_grouped() {
    let value = ConstraintValue::single(text("This is a te?t"));
    let parts = encode(&WildcardEncoder::default(), &txt_field(), Some(&value)).unwrap();
    assert_eq!(parts.render(), "\"This is a\" AND te?t");
}

#[test]
fn test_string_values_lower_cased() {
    let value = ConstraintValue::single(string("Mult*"));
    let parts = encode(&WildcardEncoder::default(), &str_field(), Some(&value)).unwrap();
    assert_eq!(parts.render(), "mult*");
}

#[test]
fn test_any_values_are_alternatives() {
    let value = any_texts(&["red*", "car?"]);
    let parts = encode(&WildcardEncoder::default(), &txt_field(), Some(&value)).unwrap();
    assert_eq!(parts.render(), "red* OR car?");
}

#[test]
fn test_phrase_skips_wildcard_terms() {
    let value = phrase_texts(&["red", "fast car", "bl*"], true);
    let parts = encode(&WildcardEncoder::default(), &txt_field(), Some(&value)).unwrap();
    // "red" and "fast car" carry no wildcard and are joined into one phrase
    assert_eq!(
        parts.render(),
        "\"red\" OR \"fast car\" OR bl* OR \"red fast car\""
    );
}
