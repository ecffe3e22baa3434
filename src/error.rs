//! Error types for cstruct

use std::borrow::Cow;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors raised while declaring a record type or accessing a bound record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A definition cannot be laid out
    #[error("invalid schema at field '{field}': {reason}")]
    InvalidSchema {
        field: String,
        reason: Cow<'static, str>,
    },
    /// The buffer handed to `bind` is shorter than the record type
    #[error("buffer too small: required {required} bytes, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },
    /// The record has no field with this name
    #[error("unknown field: {0}")]
    UnknownField(String),
    /// The field exists but is not of the requested category
    #[error("field '{field}' is {actual}, expected {expected}")]
    FieldKindMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
    /// Element index past the end of an array
    #[error("index {index} out of bounds for array of length {length}")]
    IndexOutOfBounds { index: usize, length: usize },
}

impl LayoutError {
    pub(crate) fn invalid_schema(
        field: impl Into<String>,
        reason: impl Into<Cow<'static, str>>,
    ) -> Self {
        LayoutError::InvalidSchema {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
