//! Fragment accumulator.
//!
//! Encoders append fragments at a [`PositionKey`]. Each call appends one
//! alternative: a group of parts that are joined with AND. Several calls at
//! the same position become OR alternatives. Rendering walks positions in
//! their total order and concatenates them without separator.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::position::PositionKey;
use crate::value::MatchMode;

type AndGroup = SmallVec<[String; 2]>;

/// Collects encoded fragments of one field constraint.
///
/// # Example
///
/// ```
/// use queryforge_core::{EncodedParts, PositionKey};
///
/// let mut parts = EncodedParts::new();
/// parts.add(PositionKey::value(2), "*]");
/// parts.add(PositionKey::FIELD, "price");
/// parts.add(PositionKey::value(1), "{1000 TO ");
/// parts.add(PositionKey::ASSIGNMENT, ":");
///
/// assert_eq!(parts.render(), "price:{1000 TO *]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedParts {
    parts: BTreeMap<PositionKey, Vec<AndGroup>>,
}

impl EncodedParts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single part as a new alternative.
    pub fn add(&mut self, pos: PositionKey, part: impl Into<String>) {
        self.add_all(pos, std::iter::once(part.into()));
    }

    /// Appends one alternative whose parts are joined with AND.
    ///
    /// Empty groups and alternatives already present are ignored.
    pub fn add_all(&mut self, pos: PositionKey, parts: impl IntoIterator<Item = String>) {
        let group: AndGroup = parts.into_iter().collect();
        if group.is_empty() {
            return;
        }
        let alternatives = self.parts.entry(pos).or_default();
        if !alternatives.contains(&group) {
            alternatives.push(group);
        }
    }

    /// Appends parts according to a match mode.
    ///
    /// `All` writes them as one AND group, `Any` writes each part as its own
    /// OR alternative.
    pub fn add_with_mode(
        &mut self,
        pos: PositionKey,
        mode: MatchMode,
        parts: impl IntoIterator<Item = String>,
    ) {
        match mode {
            MatchMode::All => self.add_all(pos, parts),
            MatchMode::Any => {
                for part in parts {
                    self.add(pos, part);
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Positions holding at least one fragment, in render order.
    pub fn positions(&self) -> impl Iterator<Item = PositionKey> + '_ {
        self.parts.keys().copied()
    }

    /// The alternatives written at a position, each a group of AND parts.
    pub fn alternatives(&self, pos: PositionKey) -> impl Iterator<Item = &[String]> + '_ {
        self.parts
            .get(&pos)
            .into_iter()
            .flat_map(|alts| alts.iter().map(|g| g.as_slice()))
    }

    /// Renders the grouped form.
    ///
    /// Per position, AND groups are joined with ` AND ` and alternatives with
    /// ` OR ` (groups of several parts are parenthesized). Positions are
    /// concatenated without separator.
    ///
    /// Alternatives at one position are joined in place, so the grouped form
    /// is only valid query syntax when at most one position holds several
    /// alternatives that stand on their own. A range with several lower
    /// bounds renders as `{1 TO  OR {2 TO *]`; use
    /// [`render_expanded`](Self::render_expanded) for such fragments.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for alternatives in self.parts.values() {
            if alternatives.len() == 1 {
                out.push_str(&alternatives[0].join(" AND "));
                continue;
            }
            for (i, group) in alternatives.iter().enumerate() {
                if i > 0 {
                    out.push_str(" OR ");
                }
                if group.len() > 1 {
                    out.push('(');
                    out.push_str(&group.join(" AND "));
                    out.push(')');
                } else {
                    out.push_str(&group[0]);
                }
            }
        }
        out
    }

    /// Renders the expanded form accepted by the search index.
    ///
    /// Every alternative of a position is combined with every alternative of
    /// the other positions. Within an alternative, each AND part is combined
    /// with the text of the other positions as well, giving
    /// `((f:a) AND (f:b)) OR ((f:c))`.
    pub fn render_expanded(&self) -> String {
        let mut alternatives: Vec<Vec<String>> = vec![vec![String::new()]];
        for options in self.parts.values() {
            let mut next = Vec::with_capacity(alternatives.len() * options.len());
            for and_list in &alternatives {
                for group in options {
                    next.push(append_and_parts(and_list, group));
                }
            }
            alternatives = next;
        }

        let mut out = String::new();
        let mut first_or = true;
        for and_list in alternatives.iter().filter(|a| a.iter().any(|s| !s.is_empty())) {
            out.push_str(if first_or { "(" } else { " OR (" });
            first_or = false;
            let mut first_and = true;
            for part in and_list.iter().filter(|s| !s.is_empty()) {
                out.push_str(if first_and { "(" } else { " AND (" });
                first_and = false;
                out.push_str(part);
                out.push(')');
            }
            out.push(')');
        }
        out
    }
}

fn append_and_parts(and_list: &[String], group: &AndGroup) -> Vec<String> {
    let mut combined = Vec::with_capacity(and_list.len() * group.len());
    for prefix in and_list {
        for part in group {
            let mut s = String::with_capacity(prefix.len() + part.len());
            s.push_str(prefix);
            s.push_str(part);
            combined.push(s);
        }
    }
    combined
}
