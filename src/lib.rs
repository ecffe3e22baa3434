//! cstruct - Declarative binary record layouts over byte buffers
//!
//! Describe a fixed record layout once, then bind it to raw bytes and read or
//! write fields in place with a chosen byte order.
//!
//! # Features
//!
//! - Primitive fields: 8/16/32-bit integers, `f32`, `f64`
//! - Nested records, fixed-length and multi-dimensional arrays
//! - Explicit single-byte padding, no implicit alignment
//! - Little- or big-endian per record, defaulting to the host order
//! - Offsets computed once per record type and shared by every record
//!
//! # Example
//!
//! ```rust
//! use cstruct::schema::{array, array_of, int8, int32, record, uint8};
//! use cstruct::{Endianness, Field, RecordType};
//!
//! let simple = RecordType::define(vec![uint8("first"), int8("second")]).unwrap();
//! let frame = RecordType::define(vec![
//!     uint8("first"),
//!     int8("second"),
//!     record("simple", &simple),
//!     array("numbers", Field::INT32, 8),
//!     array("grid", array_of(Field::INT8, 2), 3),
//! ])
//! .unwrap();
//!
//! let bytes: Vec<u8> = (0..frame.size() as u8).collect();
//! let view = frame.bind(bytes, Some(Endianness::Little)).unwrap();
//!
//! assert_eq!(view.value::<u8>("first").unwrap(), 0);
//! assert_eq!(view.record("simple").unwrap().value::<i8>("second").unwrap(), 3);
//!
//! let numbers = view.array("numbers").unwrap().as_primitive().unwrap();
//! assert_eq!(numbers.value::<i32>(0).unwrap(), i32::from_le_bytes([4, 5, 6, 7]));
//!
//! view.set("first", 42u8).unwrap();
//! assert_eq!(view.to_bytes()[0], 42);
//! ```

pub mod codec;
pub mod error;
pub mod record;
pub mod record_type;
pub mod schema;
pub mod types;

#[cfg(feature = "ndarray")]
pub mod ndarray_ext;

// Re-export common types at crate root
pub use error::{LayoutError, Result};
pub use record::{ArrayValue, PrimitiveArray, Record};
pub use record_type::{FieldInfo, RecordType, RecordTypeBuilder};
pub use types::{
    ArrayField, Definition, Endianness, Field, HostOrder, NativeHost, PADDING, Primitive,
    PrimitiveKind, Scalar,
};

#[cfg(feature = "ndarray")]
pub use ndarray_ext::NdarrayError;
