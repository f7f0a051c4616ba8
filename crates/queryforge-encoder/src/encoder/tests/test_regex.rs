use super::*;

#[test]
fn test_pattern_wrapped_in_slashes() {
    let value = ConstraintValue::single(string("ab[0-9]+"));
    let parts = encode(&RegexEncoder::new(), &str_field(), Some(&value)).unwrap();
    assert_eq!(parts.render(), "/ab[0-9]+/");
}

#[test]
fn test_any_patterns_are_alternatives() {
    let value = any_strings(&["a.*", "b.*"]);
    let parts = encode(&RegexEncoder::new(), &str_field(), Some(&value)).unwrap();
    assert_eq!(parts.render(), "/a.*/ OR /b.*/");
}

#[test]
fn test_rejects_non_text() {
    let value = ConstraintValue::single(int(1));
    let err = encode(&RegexEncoder::new(), &str_field(), Some(&value)).unwrap_err();
    assert!(matches!(err, CompileError::UnsupportedValueType { .. }));
}
