//! Per-field compilation input.

use queryforge_core::{
    CompileError, ConstraintKind, ConstraintValue, IndexDataType, IndexValue, Result,
};

/// What the compiler knows about the field being constrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldContext {
    /// Data type of the indexed field, if known.
    pub data_type: Option<IndexDataType>,
}

impl FieldContext {
    pub fn new(data_type: Option<IndexDataType>) -> Self {
        Self { data_type }
    }

    /// True for natural language text fields, the only ones with language
    /// scoped prefixes.
    pub fn is_language_type(&self) -> bool {
        self.data_type.is_some_and(|t| t.is_language_type())
    }
}

/// The constraints requested for one field.
///
/// Each kind appears at most once; `None` asks for the encoder default.
///
/// # Example
///
/// ```
/// use queryforge_core::{ConstraintKind, ConstraintValue, IndexDataType, IndexValue};
/// use queryforge_encoder::ConstraintRequest;
///
/// let request = ConstraintRequest::for_field("price", Some(IndexDataType::Int))
///     .with(ConstraintKind::Gt, ConstraintValue::single(IndexValue::new("1000", IndexDataType::Int)));
///
/// assert!(request.contains(ConstraintKind::Field));
/// assert!(request.contains(ConstraintKind::Gt));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintRequest {
    field: FieldContext,
    constraints: Vec<(ConstraintKind, Option<ConstraintValue>)>,
}

impl ConstraintRequest {
    pub fn new(field: FieldContext) -> Self {
        Self {
            field,
            constraints: Vec::new(),
        }
    }

    /// Creates a request selecting the physical field `token`.
    pub fn for_field(token: impl Into<String>, data_type: Option<IndexDataType>) -> Self {
        Self::new(FieldContext::new(data_type)).with(
            ConstraintKind::Field,
            ConstraintValue::single(IndexValue::string(token)),
        )
    }

    /// Creates a request selecting the physical field `token` scoped by its
    /// data type or, for natural language text, by the default language.
    ///
    /// ```
    /// use queryforge_core::{ConstraintKind, IndexDataType};
    /// use queryforge_encoder::ConstraintRequest;
    ///
    /// let request = ConstraintRequest::for_index_field("price", Some(IndexDataType::Int));
    /// assert!(request.contains(ConstraintKind::DataType));
    /// assert!(request.contains(ConstraintKind::Lang));
    /// ```
    pub fn for_index_field(token: impl Into<String>, data_type: Option<IndexDataType>) -> Self {
        Self::for_field(token, data_type)
            .with_default(ConstraintKind::DataType)
            .with_default(ConstraintKind::Lang)
    }

    /// Adds a constraint with a value.
    pub fn with(mut self, kind: ConstraintKind, value: ConstraintValue) -> Self {
        self.set(kind, Some(value));
        self
    }

    /// Adds a constraint that uses the encoder default.
    pub fn with_default(mut self, kind: ConstraintKind) -> Self {
        self.set(kind, None);
        self
    }

    /// Sets the value of `kind`, replacing an earlier one.
    pub fn set(&mut self, kind: ConstraintKind, value: Option<ConstraintValue>) {
        match self.constraints.iter_mut().find(|(k, _)| *k == kind) {
            Some(entry) => entry.1 = value,
            None => self.constraints.push((kind, value)),
        }
    }

    pub fn field(&self) -> &FieldContext {
        &self.field
    }

    /// The value of `kind`; `None` if absent or requested with its default.
    pub fn value(&self, kind: ConstraintKind) -> Option<&ConstraintValue> {
        self.constraints
            .iter()
            .find(|(k, _)| *k == kind)
            .and_then(|(_, v)| v.as_ref())
    }

    pub fn contains(&self, kind: ConstraintKind) -> bool {
        self.constraints.iter().any(|(k, _)| *k == kind)
    }

    /// Requested kinds in insertion order.
    pub fn kinds(&self) -> impl Iterator<Item = ConstraintKind> + '_ {
        self.constraints.iter().map(|(k, _)| *k)
    }

    /// Checks that the lower and upper bound of a range share a data type.
    pub fn validate_ranges(&self) -> Result<()> {
        let bound_type = |upper: bool| {
            self.constraints
                .iter()
                .filter(|(k, _)| {
                    if upper {
                        k.is_upper_bound()
                    } else {
                        k.is_lower_bound()
                    }
                })
                .find_map(|(_, v)| v.as_ref().and_then(ConstraintValue::data_type))
        };
        match (bound_type(false), bound_type(true)) {
            (Some(lower), Some(upper)) if lower != upper => {
                Err(CompileError::RangeTypeMismatch { lower, upper })
            }
            _ => Ok(()),
        }
    }
}

impl From<FieldContext> for ConstraintRequest {
    fn from(field: FieldContext) -> Self {
        Self::new(field)
    }
}
