//! Primitive field kinds

use super::{Endianness, Scalar};
use crate::codec;

/// Scalar numeric kind of a primitive field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    UInt8,
    Int8,
    UInt16,
    Int16,
    UInt32,
    Int32,
    Float32,
    Float64,
}

impl PrimitiveKind {
    /// All kinds, in catalog order
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::UInt8,
        PrimitiveKind::Int8,
        PrimitiveKind::UInt16,
        PrimitiveKind::Int16,
        PrimitiveKind::UInt32,
        PrimitiveKind::Int32,
        PrimitiveKind::Float32,
        PrimitiveKind::Float64,
    ];

    /// Size in bytes of a single value
    pub const fn size(self) -> usize {
        match self {
            PrimitiveKind::UInt8 | PrimitiveKind::Int8 => 1,
            PrimitiveKind::UInt16 | PrimitiveKind::Int16 => 2,
            PrimitiveKind::UInt32 | PrimitiveKind::Int32 | PrimitiveKind::Float32 => 4,
            PrimitiveKind::Float64 => 8,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::UInt8 => "UInt8",
            PrimitiveKind::Int8 => "Int8",
            PrimitiveKind::UInt16 => "UInt16",
            PrimitiveKind::Int16 => "Int16",
            PrimitiveKind::UInt32 => "UInt32",
            PrimitiveKind::Int32 => "Int32",
            PrimitiveKind::Float32 => "Float32",
            PrimitiveKind::Float64 => "Float64",
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self, PrimitiveKind::Float32 | PrimitiveKind::Float64)
    }

    /// Read a value of this kind at `offset`
    ///
    /// Panics if `offset + self.size()` exceeds the buffer.
    #[inline]
    pub fn read(self, buf: &[u8], offset: usize, endianness: Endianness) -> Scalar {
        codec::read(self, buf, offset, endianness)
    }

    /// Write `value` as this kind at `offset`, converting it first
    ///
    /// Panics if `offset + self.size()` exceeds the buffer.
    #[inline]
    pub fn write(self, buf: &mut [u8], offset: usize, value: Scalar, endianness: Endianness) {
        codec::write(self, buf, offset, value, endianness)
    }
}
