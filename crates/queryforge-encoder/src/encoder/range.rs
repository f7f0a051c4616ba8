//! Range bound encoders.

use queryforge_core::{
    append_boost, ConstraintKind, ConstraintValue, EncodedParts, IndexDataType, PositionKey,
    QueryTerm, Result,
};

use super::{check_value_types, ConstraintEncoder};
use crate::request::FieldContext;

/// Position of lower bounds; upper bounds follow directly.
pub const LOWER_BOUND_POS: PositionKey = PositionKey::value(1);
pub const UPPER_BOUND_POS: PositionKey = PositionKey::value(2);
/// Boost of the whole range, right after the closing bracket.
pub const RANGE_BOOST_POS: PositionKey = PositionKey::value(3);

const RANGE_TYPES: &[IndexDataType] = &[
    IndexDataType::Int,
    IndexDataType::Long,
    IndexDataType::Float,
    IndexDataType::Double,
    IndexDataType::Date,
    IndexDataType::Str,
];

/// Encodes one bound of a range query.
///
/// Lower bounds write `{v TO ` (exclusive) or `[v TO ` (inclusive), upper
/// bounds write `v}` or `v]`. Adjacent in position order they form one
/// bracketed range. A missing value defaults to `*`, and a bound without its
/// counterpart implies the matching open one, so `Gt(1000)` alone renders
/// `{1000 TO *]`.
///
/// A boost belongs to the whole range and is written once after the closing
/// bracket, whichever bound carries it. If both bounds are boosted, the
/// lower bound's boost is used.
#[derive(Debug, Clone, Copy)]
pub struct RangeEncoder {
    kind: ConstraintKind,
}

impl RangeEncoder {
    /// Exclusive lower bound.
    pub fn gt() -> Self {
        Self {
            kind: ConstraintKind::Gt,
        }
    }

    /// Inclusive lower bound.
    pub fn ge() -> Self {
        Self {
            kind: ConstraintKind::Ge,
        }
    }

    /// Exclusive upper bound.
    pub fn lt() -> Self {
        Self {
            kind: ConstraintKind::Lt,
        }
    }

    /// Inclusive upper bound.
    pub fn le() -> Self {
        Self {
            kind: ConstraintKind::Le,
        }
    }

    fn bound(&self, term: &str) -> String {
        match self.kind {
            ConstraintKind::Gt => format!("{{{term} TO "),
            ConstraintKind::Ge => format!("[{term} TO "),
            ConstraintKind::Lt => format!("{term}}}"),
            _ => format!("{term}]"),
        }
    }

    fn position(&self) -> PositionKey {
        if self.kind.is_lower_bound() {
            LOWER_BOUND_POS
        } else {
            UPPER_BOUND_POS
        }
    }
}

impl ConstraintEncoder for RangeEncoder {
    fn kind(&self) -> ConstraintKind {
        self.kind
    }

    fn depends_on(&self) -> &'static [ConstraintKind] {
        &[ConstraintKind::Eq]
    }

    fn implies(&self) -> &'static [&'static [ConstraintKind]] {
        match self.kind {
            ConstraintKind::Gt => &[
                &[ConstraintKind::Eq],
                &[ConstraintKind::Le, ConstraintKind::Lt],
            ],
            ConstraintKind::Ge => &[
                &[ConstraintKind::Eq],
                &[ConstraintKind::Lt, ConstraintKind::Le],
            ],
            ConstraintKind::Lt => &[
                &[ConstraintKind::Eq],
                &[ConstraintKind::Ge, ConstraintKind::Gt],
            ],
            _ => &[
                &[ConstraintKind::Eq],
                &[ConstraintKind::Gt, ConstraintKind::Ge],
            ],
        }
    }

    fn supports_default(&self) -> bool {
        true
    }

    fn accepted_types(&self) -> &'static [IndexDataType] {
        RANGE_TYPES
    }

    fn encode(
        &self,
        _field: &FieldContext,
        value: Option<&ConstraintValue>,
        parts: &mut EncodedParts,
    ) -> Result<()> {
        let value = match value.filter(|v| !v.is_empty()) {
            Some(value) => value,
            None => {
                parts.add(self.position(), self.bound("*"));
                return Ok(());
            }
        };
        check_value_types(self.kind, RANGE_TYPES, value)?;

        let bounds = value
            .iter()
            .map(|v| self.bound(&QueryTerm::exact(v).encode()));
        parts.add_with_mode(self.position(), value.mode(), bounds);

        if value.boost().is_some() && parts.alternatives(RANGE_BOOST_POS).next().is_none() {
            parts.add(RANGE_BOOST_POS, append_boost(String::new(), value.boost()));
        }
        Ok(())
    }
}
