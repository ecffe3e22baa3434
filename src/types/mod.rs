//! Core types for cstruct schemas

mod endian;
mod field;
mod kind;
mod scalar;

pub use endian::{Endianness, HostOrder, NativeHost};
pub use field::{ArrayField, Definition, Field, PADDING};
pub use kind::PrimitiveKind;
pub use scalar::{Primitive, Scalar};
