//! Typed index values and constraint values.
//!
//! Index values are produced by value normalization outside this crate;
//! the compiler only reads them.

use std::collections::BTreeMap;
use std::fmt;

/// Flag name enabling the phrase optimization of a multi-value text match.
pub const BUILD_PHRASE: &str = "buildPhrase";

/// Data type tag of an index value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IndexDataType {
    Bool,
    Int,
    Long,
    Float,
    Double,
    Date,
    /// Untokenized string.
    Str,
    /// Natural language text, optionally tagged with a language.
    Txt,
    /// Reference to another document.
    Ref,
}

impl IndexDataType {
    /// Numeric types accepted by range bounds.
    pub const NUMERIC: [IndexDataType; 4] = [
        IndexDataType::Int,
        IndexDataType::Long,
        IndexDataType::Float,
        IndexDataType::Double,
    ];

    /// Returns the short tag used in diagnostics.
    pub const fn tag(self) -> &'static str {
        match self {
            IndexDataType::Bool => "bool",
            IndexDataType::Int => "int",
            IndexDataType::Long => "long",
            IndexDataType::Float => "float",
            IndexDataType::Double => "double",
            IndexDataType::Date => "date",
            IndexDataType::Str => "str",
            IndexDataType::Txt => "txt",
            IndexDataType::Ref => "ref",
        }
    }

    /// True for types holding natural language (only these carry languages).
    pub const fn is_language_type(self) -> bool {
        matches!(self, IndexDataType::Txt)
    }

    /// True for `Txt` and `Str`.
    pub const fn is_textual(self) -> bool {
        matches!(self, IndexDataType::Txt | IndexDataType::Str)
    }

    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            IndexDataType::Int | IndexDataType::Long | IndexDataType::Float | IndexDataType::Double
        )
    }
}

impl fmt::Display for IndexDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A normalized value ready for lexical encoding.
///
/// # Example
///
/// ```
/// use queryforge_core::{IndexDataType, IndexValue};
///
/// let v = IndexValue::text("Paris", Some("fr"));
/// assert_eq!(v.lexical_form(), "Paris");
/// assert_eq!(v.data_type(), IndexDataType::Txt);
/// assert_eq!(v.language(), Some("fr"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexValue {
    lexical_form: String,
    data_type: IndexDataType,
    language: Option<String>,
}

impl IndexValue {
    /// Creates a value without language.
    pub fn new(lexical_form: impl Into<String>, data_type: IndexDataType) -> Self {
        Self {
            lexical_form: lexical_form.into(),
            data_type,
            language: None,
        }
    }

    /// Creates a `Txt` value with an optional language tag.
    pub fn text(lexical_form: impl Into<String>, language: Option<&str>) -> Self {
        Self {
            lexical_form: lexical_form.into(),
            data_type: IndexDataType::Txt,
            language: language.filter(|l| !l.is_empty()).map(str::to_string),
        }
    }

    /// Creates a `Str` value.
    pub fn string(lexical_form: impl Into<String>) -> Self {
        Self::new(lexical_form, IndexDataType::Str)
    }

    pub fn lexical_form(&self) -> &str {
        &self.lexical_form
    }

    pub fn data_type(&self) -> IndexDataType {
        self.data_type
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

/// Whether multiple values must all match or any one suffices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MatchMode {
    /// All values must match (AND).
    All,
    /// Any value suffices (OR).
    #[default]
    Any,
}

/// Value of a feature flag attached to a constraint value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FlagValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        FlagValue::Bool(value)
    }
}

impl From<i64> for FlagValue {
    fn from(value: i64) -> Self {
        FlagValue::Int(value)
    }
}

impl From<f64> for FlagValue {
    fn from(value: f64) -> Self {
        FlagValue::Float(value)
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        FlagValue::Str(value.to_string())
    }
}

/// One or many index values plus match mode, boost and feature flags.
///
/// Values keep insertion order; duplicates are dropped.
///
/// # Example
///
/// ```
/// use queryforge_core::{ConstraintValue, IndexValue, MatchMode};
///
/// let cv = ConstraintValue::any([IndexValue::text("red", None), IndexValue::text("car", None)])
///     .with_build_phrase(true)
///     .with_boost(2.0);
///
/// assert_eq!(cv.mode(), MatchMode::Any);
/// assert_eq!(cv.values().len(), 2);
/// assert_eq!(cv.build_phrase(), Some(true));
/// assert_eq!(cv.boost(), Some(2.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintValue {
    values: Vec<IndexValue>,
    mode: MatchMode,
    boost: Option<f64>,
    flags: BTreeMap<String, FlagValue>,
}

impl ConstraintValue {
    /// Creates an empty constraint value with the given mode.
    pub fn new(mode: MatchMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Creates a constraint value holding a single value.
    pub fn single(value: IndexValue) -> Self {
        let mut cv = Self::default();
        cv.push(value);
        cv
    }

    /// Creates a constraint value where all values must match.
    pub fn all(values: impl IntoIterator<Item = IndexValue>) -> Self {
        Self::new(MatchMode::All).with_values(values)
    }

    /// Creates a constraint value where any value suffices.
    pub fn any(values: impl IntoIterator<Item = IndexValue>) -> Self {
        Self::new(MatchMode::Any).with_values(values)
    }

    /// Adds values, skipping duplicates.
    pub fn with_values(mut self, values: impl IntoIterator<Item = IndexValue>) -> Self {
        for value in values {
            self.push(value);
        }
        self
    }

    /// Sets the boost. A boost of `1.0` is neutral and stored as none.
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = if (boost - 1.0).abs() < f64::EPSILON {
            None
        } else {
            Some(boost)
        };
        self
    }

    /// Sets a feature flag.
    pub fn with_flag(mut self, key: impl Into<String>, value: impl Into<FlagValue>) -> Self {
        self.flags.insert(key.into(), value.into());
        self
    }

    /// Sets the [`BUILD_PHRASE`] flag.
    pub fn with_build_phrase(self, build: bool) -> Self {
        self.with_flag(BUILD_PHRASE, build)
    }

    /// Appends a value unless an equal one is already present.
    pub fn push(&mut self, value: IndexValue) {
        if !self.values.contains(&value) {
            self.values.push(value);
        }
    }

    pub fn values(&self) -> &[IndexValue] {
        &self.values
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn boost(&self) -> Option<f64> {
        self.boost
    }

    pub fn flag(&self, key: &str) -> Option<&FlagValue> {
        self.flags.get(key)
    }

    /// Returns the [`BUILD_PHRASE`] flag if it is set to a boolean.
    pub fn build_phrase(&self) -> Option<bool> {
        match self.flag(BUILD_PHRASE) {
            Some(FlagValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Data type of the first value, if any.
    pub fn data_type(&self) -> Option<IndexDataType> {
        self.values.first().map(IndexValue::data_type)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexValue> {
        self.values.iter()
    }
}

impl<'a> IntoIterator for &'a ConstraintValue {
    type Item = &'a IndexValue;
    type IntoIter = std::slice::Iter<'a, IndexValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl From<IndexValue> for ConstraintValue {
    fn from(value: IndexValue) -> Self {
        ConstraintValue::single(value)
    }
}
