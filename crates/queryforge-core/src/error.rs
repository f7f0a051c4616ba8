//! Error types for QueryForge

use thiserror::Error;

use crate::kind::ConstraintKind;
use crate::value::IndexDataType;

/// Errors raised while building an encoder registry or compiling a field.
///
/// Every error aborts the current per-field compilation. Compilation is pure,
/// so retrying the same request yields the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    /// A requested kind has no registered encoder.
    #[error("No encoder registered for constraint kind {0}")]
    UnknownConstraintKind(ConstraintKind),

    /// An encoder received a value outside its accepted data types.
    #[error("Encoder for {kind} does not accept values of type {data_type} (accepted: {accepted:?})")]
    UnsupportedValueType {
        kind: ConstraintKind,
        data_type: IndexDataType,
        accepted: Vec<IndexDataType>,
    },

    /// A non-defaulting encoder received no value.
    #[error("Constraint kind {0} requires a value")]
    MissingRequiredValue(ConstraintKind),

    /// Encoder ordering dependencies form a cycle (registry construction only).
    #[error("Dependency cycle between encoders: {0:?}")]
    DependencyCycle(Vec<ConstraintKind>),

    /// Two encoders were registered for the same kind (registry construction only).
    #[error("Encoder for constraint kind {0} registered twice")]
    DuplicateEncoder(ConstraintKind),

    /// Lower and upper bound of a range use different data types.
    #[error("Range bounds must share a data type (lower: {lower}, upper: {upper})")]
    RangeTypeMismatch {
        lower: IndexDataType,
        upper: IndexDataType,
    },
}

/// Result type alias for QueryForge operations
pub type Result<T> = std::result::Result<T, CompileError>;
