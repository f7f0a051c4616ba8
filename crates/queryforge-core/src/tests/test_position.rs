//! Tests for position ordering.

use super::*;

#[test]
fn test_category_order() {
    let mut keys = vec![
        PositionKey::SUFFIX,
        PositionKey::value(2),
        PositionKey::ASSIGNMENT,
        PositionKey::PREFIX,
        PositionKey::value(1),
        PositionKey::FIELD,
    ];
    keys.sort();
    assert_eq!(
        keys,
        vec![
            PositionKey::PREFIX,
            PositionKey::FIELD,
            PositionKey::ASSIGNMENT,
            PositionKey::value(1),
            PositionKey::value(2),
            PositionKey::SUFFIX,
        ]
    );
}

#[test]
fn test_value_rank_does_not_cross_categories() {
    // A large value rank still sorts before the suffix
    assert!(PositionKey::value(u32::MAX) < PositionKey::SUFFIX);
    assert!(PositionKey::value(0) > PositionKey::ASSIGNMENT);
}

#[test]
fn test_accessors() {
    let key = PositionKey::value(3);
    assert_eq!(key.category(), PositionCategory::Value);
    assert_eq!(key.rank(), 3);
}
