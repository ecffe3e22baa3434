//! Shorthand constructors for definitions
//!
//! ```rust
//! use cstruct::schema::{array, int8, padding, record, uint8};
//! use cstruct::RecordType;
//!
//! let point = RecordType::define(vec![int8("x"), int8("y")]).unwrap();
//! let shape = RecordType::define(vec![
//!     uint8("tag"),
//!     padding(),
//!     record("origin", &point),
//!     array("corners", &point, 4),
//! ])
//! .unwrap();
//! assert_eq!(shape.size(), 12);
//! ```

use crate::record_type::RecordType;
use crate::types::{ArrayField, Definition, Field, PADDING};

pub fn field(name: impl Into<String>, field: impl Into<Field>) -> Definition {
    Definition::new(name, field)
}

pub fn uint8(name: impl Into<String>) -> Definition {
    Definition::new(name, Field::UINT8)
}

pub fn int8(name: impl Into<String>) -> Definition {
    Definition::new(name, Field::INT8)
}

pub fn uint16(name: impl Into<String>) -> Definition {
    Definition::new(name, Field::UINT16)
}

pub fn int16(name: impl Into<String>) -> Definition {
    Definition::new(name, Field::INT16)
}

pub fn uint32(name: impl Into<String>) -> Definition {
    Definition::new(name, Field::UINT32)
}

pub fn int32(name: impl Into<String>) -> Definition {
    Definition::new(name, Field::INT32)
}

pub fn float32(name: impl Into<String>) -> Definition {
    Definition::new(name, Field::FLOAT32)
}

pub fn float64(name: impl Into<String>) -> Definition {
    Definition::new(name, Field::FLOAT64)
}

/// Nested record field
pub fn record(name: impl Into<String>, record_type: &RecordType) -> Definition {
    Definition::new(name, Field::record(record_type))
}

/// Array field; `element` may be a primitive, a record type or another array
pub fn array(name: impl Into<String>, element: impl Into<Field>, length: usize) -> Definition {
    Definition::new(name, Field::array(element, length))
}

/// Array descriptor without a name, for building multi-dimensional arrays
pub fn array_of(element: impl Into<Field>, length: usize) -> ArrayField {
    ArrayField::new(element, length)
}

/// One anonymous byte; repeat for wider gaps
pub fn padding() -> Definition {
    Definition::new(PADDING, Field::UINT8)
}
