//! Position keys for encoded fragments.
//!
//! Range syntax and OR alternation require byte-exact adjacency between
//! fragments, so every fragment is placed by a [`PositionKey`] and the
//! accumulator renders keys in their total order.

/// Structural category of a fragment within one field's query fragment.
///
/// Categories are ordered `Prefix < Field < Assignment < Value < Suffix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PositionCategory {
    Prefix,
    Field,
    Assignment,
    Value,
    Suffix,
}

/// Ordering key: a category and a sub-rank breaking ties inside it.
///
/// Only the `Value` category uses non-zero ranks. The derived ordering
/// compares the category first and the rank second.
///
/// # Example
///
/// ```
/// use queryforge_core::PositionKey;
///
/// assert!(PositionKey::FIELD < PositionKey::ASSIGNMENT);
/// assert!(PositionKey::value(1) < PositionKey::value(2));
/// assert!(PositionKey::value(99) < PositionKey::SUFFIX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositionKey {
    category: PositionCategory,
    rank: u32,
}

impl PositionKey {
    pub const PREFIX: PositionKey = PositionKey::new(PositionCategory::Prefix, 0);
    pub const FIELD: PositionKey = PositionKey::new(PositionCategory::Field, 0);
    pub const ASSIGNMENT: PositionKey = PositionKey::new(PositionCategory::Assignment, 0);
    pub const SUFFIX: PositionKey = PositionKey::new(PositionCategory::Suffix, 0);

    /// Creates a key for the given category and rank.
    #[inline]
    pub const fn new(category: PositionCategory, rank: u32) -> Self {
        PositionKey { category, rank }
    }

    /// Creates a key in the `Value` category.
    #[inline]
    pub const fn value(rank: u32) -> Self {
        PositionKey::new(PositionCategory::Value, rank)
    }

    #[inline]
    pub const fn category(&self) -> PositionCategory {
        self.category
    }

    #[inline]
    pub const fn rank(&self) -> u32 {
        self.rank
    }
}
