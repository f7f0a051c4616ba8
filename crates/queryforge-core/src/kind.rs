//! Constraint kinds.
//!
//! The set of kinds is closed: every kind is known at compile time and the
//! standard encoder registry matches over it exhaustively.

use std::fmt;

/// Canonical identifier for one type of field constraint.
///
/// # Example
///
/// ```
/// use queryforge_core::ConstraintKind;
///
/// assert_eq!(ConstraintKind::Gt.name(), "gt");
/// assert!(ConstraintKind::Gt.is_lower_bound());
/// assert!(ConstraintKind::Le.is_upper_bound());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConstraintKind {
    /// Language scope of a text field.
    Lang,
    /// Data type scope of a non-text field.
    DataType,
    /// Selection of the physical field.
    Field,
    /// Equality assignment (`:value`).
    Eq,
    /// Exclusive lower bound.
    Gt,
    /// Inclusive lower bound.
    Ge,
    /// Exclusive upper bound.
    Lt,
    /// Inclusive upper bound.
    Le,
    /// Wildcard pattern match.
    Wildcard,
    /// Regular expression match.
    Regex,
}

impl ConstraintKind {
    /// All kinds in declaration order.
    pub const ALL: [ConstraintKind; 10] = [
        ConstraintKind::Lang,
        ConstraintKind::DataType,
        ConstraintKind::Field,
        ConstraintKind::Eq,
        ConstraintKind::Gt,
        ConstraintKind::Ge,
        ConstraintKind::Lt,
        ConstraintKind::Le,
        ConstraintKind::Wildcard,
        ConstraintKind::Regex,
    ];

    /// Returns the lower-case name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            ConstraintKind::Lang => "lang",
            ConstraintKind::DataType => "data_type",
            ConstraintKind::Field => "field",
            ConstraintKind::Eq => "eq",
            ConstraintKind::Gt => "gt",
            ConstraintKind::Ge => "ge",
            ConstraintKind::Lt => "lt",
            ConstraintKind::Le => "le",
            ConstraintKind::Wildcard => "wildcard",
            ConstraintKind::Regex => "regex",
        }
    }

    /// Returns true for `Gt` and `Ge`.
    pub const fn is_lower_bound(self) -> bool {
        matches!(self, ConstraintKind::Gt | ConstraintKind::Ge)
    }

    /// Returns true for `Lt` and `Le`.
    pub const fn is_upper_bound(self) -> bool {
        matches!(self, ConstraintKind::Lt | ConstraintKind::Le)
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
