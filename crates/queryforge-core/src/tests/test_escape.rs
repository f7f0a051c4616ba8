//! Tests for term escaping and splitting.

use super::*;
use crate::escape::has_unescaped_wildcard;

#[test]
fn test_escape_reserved() {
    assert_eq!(escape_term("(a)"), "\\(a\\)");
    assert_eq!(escape_term("http://x"), "http\\:\\/\\/x");
    assert_eq!(escape_term("a*b?"), "a\\*b\\?");
}

#[test]
fn test_escape_wildcard_keeps_wildcards() {
    assert_eq!(escape_wildcard_term("pa*s?"), "pa*s?");
    assert_eq!(escape_wildcard_term("x:y*"), "x\\:y*");
    assert_eq!(escape_wildcard_term("lit\\?"), "lit\\?");
}

#[test]
fn test_wildcard_detection() {
    assert!(has_unescaped_wildcard("*foo"));
    assert!(has_unescaped_wildcard("fo?"));
    assert!(!has_unescaped_wildcard("fo\\?"));
    // escaped backslash followed by a real wildcard
    assert!(has_unescaped_wildcard("fo\\\\*"));
}

#[test]
fn test_exact_quotes_multi_word_text() {
    let term = QueryTerm::exact(&IndexValue::text("New York", Some("en")));
    assert!(term.needs_quotes);
    assert!(term.is_text);
    assert_eq!(term.encode(), "\"New York\"");
}

#[test]
fn test_exact_number_is_plain() {
    let term = QueryTerm::exact(&IndexValue::new("-5", IndexDataType::Int));
    assert!(!term.is_text);
    assert_eq!(term.encode(), "\\-5");
}

#[test]
fn test_exact_boosted() {
    let term = QueryTerm::exact(&IndexValue::string("red"));
    assert_eq!(term.encode_boosted(Some(2.5)), "red^2.5");
    assert_eq!(term.encode_boosted(None), "red");
}

#[test]
fn test_wildcard_without_wildcards_is_one_quoted_term() {
    let terms = QueryTerm::wildcard(&IndexValue::text("plain words", None));
    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].encode(), "\"plain words\"");
    assert!(!terms[0].has_wildcard);
}

#[test]
fn test_wildcard_lowercases_strings() {
    let terms = QueryTerm::wildcard(&IndexValue::string("Multi* Toke?"));
    let encoded: Vec<String> = terms.iter().map(QueryTerm::encode).collect();
    assert_eq!(encoded, vec!["multi*", "toke?"]);
}

#[test]
fn test_wildcard_keeps_text_case() {
    let terms = QueryTerm::wildcard(&IndexValue::text("Se?rche* Wildc\\*ard", None));
    let encoded: Vec<String> = terms.iter().map(QueryTerm::encode).collect();
    assert_eq!(encoded, vec!["Se?rche*", "Wildc\\*ard"]);
    assert!(terms[0].has_wildcard);
    assert!(!terms[1].has_wildcard);
}

#[test]
fn test_phrase_with_slop() {
    assert_eq!(encode_phrase(["a", "b", "c"], Some(14)), "\"a b c\"~14");
}

#[test]
fn test_escape_whitespace() {
    assert_eq!(escape_term("my field"), "my\\ field");
    assert_eq!(escape_term("a\tb"), "a\\\tb");
}

#[test]
fn test_exact_non_text_escapes_whitespace() {
    let term = QueryTerm::exact(&IndexValue::new("urn:a b", IndexDataType::Ref));
    assert!(!term.needs_quotes);
    assert_eq!(term.encode(), "urn\\:a\\ b");

    // text keeps its whitespace inside quotes
    let term = QueryTerm::exact(&IndexValue::string("a:b c"));
    assert_eq!(term.encode(), "\"a\\:b c\"");
}

#[test]
fn test_append_boost() {
    assert_eq!(append_boost("{1 TO 2]".to_string(), Some(1.5)), "{1 TO 2]^1.5");
    assert_eq!(append_boost(":x".to_string(), None), ":x");
}
