//! Tests for the fragment accumulator.

use super::*;

#[test]
fn test_render_follows_position_order() {
    let mut parts = EncodedParts::new();
    parts.add(PositionKey::SUFFIX, "!");
    parts.add(PositionKey::ASSIGNMENT, ":x");
    parts.add(PositionKey::PREFIX, "@en");
    parts.add(PositionKey::FIELD, "/label/");
    assert_eq!(parts.render(), "@en/label/:x!");
}

#[test]
fn test_all_mode_is_and_grouped() {
    let mut parts = EncodedParts::new();
    parts.add_with_mode(
        PositionKey::ASSIGNMENT,
        MatchMode::All,
        vec![":Paris".to_string(), ":France".to_string()],
    );
    assert_eq!(parts.render(), ":Paris AND :France");
    assert_eq!(parts.alternatives(PositionKey::ASSIGNMENT).count(), 1);
}

#[test]
fn test_any_mode_is_or_grouped() {
    let mut parts = EncodedParts::new();
    parts.add_with_mode(
        PositionKey::ASSIGNMENT,
        MatchMode::Any,
        vec![":Paris".to_string(), ":France".to_string()],
    );
    assert_eq!(parts.render(), ":Paris OR :France");
    assert_eq!(parts.alternatives(PositionKey::ASSIGNMENT).count(), 2);
}

#[test]
fn test_mixed_groups_are_parenthesized() {
    let mut parts = EncodedParts::new();
    parts.add_all(PositionKey::value(1), vec!["a".to_string(), "b".to_string()]);
    parts.add(PositionKey::value(1), "c");
    assert_eq!(parts.render(), "(a AND b) OR c");
}

#[test]
fn test_duplicate_alternatives_ignored() {
    let mut parts = EncodedParts::new();
    parts.add(PositionKey::FIELD, "f");
    parts.add(PositionKey::FIELD, "f");
    parts.add_all(PositionKey::FIELD, Vec::new());
    assert_eq!(parts.render(), "f");
}

#[test]
fn test_empty_renders_empty() {
    let parts = EncodedParts::new();
    assert!(parts.is_empty());
    assert_eq!(parts.render(), "");
    assert_eq!(parts.render_expanded(), "");
}

#[test]
fn test_expanded_any() {
    let mut parts = EncodedParts::new();
    parts.add(PositionKey::FIELD, "city");
    parts.add(PositionKey::ASSIGNMENT, ":Paris");
    parts.add(PositionKey::ASSIGNMENT, ":Rome");
    assert_eq!(parts.render_expanded(), "((city:Paris)) OR ((city:Rome))");
}

#[test]
fn test_expanded_all() {
    let mut parts = EncodedParts::new();
    parts.add(PositionKey::FIELD, "city");
    parts.add_all(
        PositionKey::ASSIGNMENT,
        vec![":Paris".to_string(), ":Rome".to_string()],
    );
    assert_eq!(parts.render_expanded(), "((city:Paris) AND (city:Rome))");
}

#[test]
fn test_expanded_crosses_prefix_alternatives() {
    let mut parts = EncodedParts::new();
    parts.add(PositionKey::PREFIX, "@en");
    parts.add(PositionKey::PREFIX, "@de");
    parts.add(PositionKey::FIELD, "/label/");
    parts.add(PositionKey::ASSIGNMENT, ":x");
    assert_eq!(
        parts.render_expanded(),
        "((@en/label/:x)) OR ((@de/label/:x))"
    );
}

#[test]
fn test_positions_in_order() {
    let mut parts = EncodedParts::new();
    parts.add(PositionKey::value(2), "b");
    parts.add(PositionKey::value(1), "a");
    let positions: Vec<PositionKey> = parts.positions().collect();
    assert_eq!(positions, vec![PositionKey::value(1), PositionKey::value(2)]);
}

#[test]
fn test_multi_bound_range_needs_expansion() {
    let mut parts = EncodedParts::new();
    parts.add(PositionKey::FIELD, "n");
    parts.add(PositionKey::ASSIGNMENT, ":");
    parts.add(PositionKey::value(1), "{1 TO ");
    parts.add(PositionKey::value(1), "{2 TO ");
    parts.add(PositionKey::value(2), "*]");
    assert_eq!(parts.render(), "n:{1 TO  OR {2 TO *]");
    assert_eq!(
        parts.render_expanded(),
        "((n:{1 TO *])) OR ((n:{2 TO *]))"
    );
}
