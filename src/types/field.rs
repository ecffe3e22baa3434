//! Field descriptors and named definitions

use super::PrimitiveKind;
use crate::error::{LayoutError, Result};
use crate::record_type::RecordType;

/// Reserved definition name for padding
pub const PADDING: &str = "_";

/// Shape and size of one schema element
#[derive(Debug, Clone)]
pub enum Field {
    Primitive(PrimitiveKind),
    Record(RecordType),
    Array(ArrayField),
}

impl Field {
    pub const UINT8: Field = Field::Primitive(PrimitiveKind::UInt8);
    pub const INT8: Field = Field::Primitive(PrimitiveKind::Int8);
    pub const UINT16: Field = Field::Primitive(PrimitiveKind::UInt16);
    pub const INT16: Field = Field::Primitive(PrimitiveKind::Int16);
    pub const UINT32: Field = Field::Primitive(PrimitiveKind::UInt32);
    pub const INT32: Field = Field::Primitive(PrimitiveKind::Int32);
    pub const FLOAT32: Field = Field::Primitive(PrimitiveKind::Float32);
    pub const FLOAT64: Field = Field::Primitive(PrimitiveKind::Float64);

    /// Nested record field
    pub fn record(record_type: &RecordType) -> Self {
        Field::Record(record_type.clone())
    }

    /// Fixed-length array of `element`
    pub fn array(element: impl Into<Field>, length: usize) -> Self {
        Field::Array(ArrayField::new(element, length))
    }

    /// Size in bytes
    pub fn size(&self) -> usize {
        match self {
            Field::Primitive(kind) => kind.size(),
            Field::Record(record_type) => record_type.size(),
            Field::Array(array) => array.size(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Field::Primitive(_) => "primitive",
            Field::Record(_) => "record",
            Field::Array(_) => "array",
        }
    }

    pub fn as_primitive(&self) -> Option<PrimitiveKind> {
        match self {
            Field::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&RecordType> {
        match self {
            Field::Record(record_type) => Some(record_type),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayField> {
        match self {
            Field::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Reject zero-sized fields and empty arrays at any depth
    pub(crate) fn validate(&self, name: &str) -> Result<()> {
        match self {
            Field::Primitive(_) => Ok(()),
            Field::Record(record_type) => {
                if record_type.size() == 0 {
                    Err(LayoutError::invalid_schema(
                        name,
                        "nested record type has zero size",
                    ))
                } else {
                    Ok(())
                }
            }
            Field::Array(array) => {
                if array.length() == 0 {
                    return Err(LayoutError::invalid_schema(
                        name,
                        "array length must be positive",
                    ));
                }
                array.element().validate(name)?;
                if array.element().size().checked_mul(array.length()).is_none() {
                    return Err(LayoutError::invalid_schema(name, "array size overflows"));
                }
                Ok(())
            }
        }
    }
}

impl From<PrimitiveKind> for Field {
    fn from(kind: PrimitiveKind) -> Self {
        Field::Primitive(kind)
    }
}

impl From<RecordType> for Field {
    fn from(record_type: RecordType) -> Self {
        Field::Record(record_type)
    }
}

impl From<&RecordType> for Field {
    fn from(record_type: &RecordType) -> Self {
        Field::Record(record_type.clone())
    }
}

impl From<ArrayField> for Field {
    fn from(array: ArrayField) -> Self {
        Field::Array(array)
    }
}

/// Fixed-length array descriptor
///
/// The element may itself be an array, which gives multi-dimensional arrays.
#[derive(Debug, Clone)]
pub struct ArrayField {
    element: Box<Field>,
    length: usize,
    size: usize,
}

impl ArrayField {
    pub fn new(element: impl Into<Field>, length: usize) -> Self {
        let element = element.into();
        let size = element.size().saturating_mul(length);
        Self {
            element: Box::new(element),
            length,
            size,
        }
    }

    pub fn element(&self) -> &Field {
        &self.element
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Expected data size in bytes
    pub fn size(&self) -> usize {
        self.size
    }

    /// Dimensions from outermost to innermost, e.g. `[3, 2]` for `[[T; 2]; 3]`
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = vec![self.length];
        let mut current = self.element();
        while let Field::Array(inner) = current {
            shape.push(inner.length);
            current = inner.element();
        }
        shape
    }

    /// The non-array field at the bottom of the nesting
    pub fn innermost(&self) -> &Field {
        let mut current = self.element();
        while let Field::Array(inner) = current {
            current = inner.element();
        }
        current
    }
}

/// A named field in declaration order
#[derive(Debug, Clone)]
pub struct Definition {
    pub name: String,
    pub field: Field,
}

impl Definition {
    pub fn new(name: impl Into<String>, field: impl Into<Field>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
        }
    }

    pub fn is_padding(&self) -> bool {
        self.name == PADDING
    }
}
