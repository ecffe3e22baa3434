//! Endian-aware primitive reads and writes
//!
//! One `match` over `(PrimitiveKind, Endianness)` per access; every arm is a
//! fixed-width `from_*_bytes` / `to_*_bytes` on the window at `offset`.

use crate::types::{Endianness, Primitive, PrimitiveKind, Scalar};

#[inline(always)]
fn take<const N: usize>(buf: &[u8], offset: usize) -> [u8; N] {
    let mut bytes = [0u8; N];
    bytes.copy_from_slice(&buf[offset..offset + N]);
    bytes
}

macro_rules! decode {
    ($t:ty, $buf:expr, $offset:expr, $endianness:expr) => {{
        let bytes = take::<{ std::mem::size_of::<$t>() }>($buf, $offset);
        match $endianness {
            Endianness::Little => <$t>::from_le_bytes(bytes),
            Endianness::Big => <$t>::from_be_bytes(bytes),
        }
    }};
}

macro_rules! encode {
    ($t:ty, $value:expr, $buf:expr, $offset:expr, $endianness:expr) => {{
        let value = <$t as Primitive>::from_scalar($value);
        let bytes = match $endianness {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        };
        $buf[$offset..$offset + bytes.len()].copy_from_slice(&bytes);
    }};
}

/// Read one value of `kind` at `offset`
#[inline]
pub fn read(kind: PrimitiveKind, buf: &[u8], offset: usize, endianness: Endianness) -> Scalar {
    match kind {
        PrimitiveKind::UInt8 => Scalar::U8(buf[offset]),
        PrimitiveKind::Int8 => Scalar::I8(buf[offset] as i8),
        PrimitiveKind::UInt16 => Scalar::U16(decode!(u16, buf, offset, endianness)),
        PrimitiveKind::Int16 => Scalar::I16(decode!(i16, buf, offset, endianness)),
        PrimitiveKind::UInt32 => Scalar::U32(decode!(u32, buf, offset, endianness)),
        PrimitiveKind::Int32 => Scalar::I32(decode!(i32, buf, offset, endianness)),
        PrimitiveKind::Float32 => Scalar::F32(decode!(f32, buf, offset, endianness)),
        PrimitiveKind::Float64 => Scalar::F64(decode!(f64, buf, offset, endianness)),
    }
}

/// Write `value` converted to `kind` at `offset`
#[inline]
pub fn write(
    kind: PrimitiveKind,
    buf: &mut [u8],
    offset: usize,
    value: Scalar,
    endianness: Endianness,
) {
    match kind {
        PrimitiveKind::UInt8 => buf[offset] = u8::from_scalar(value),
        PrimitiveKind::Int8 => buf[offset] = i8::from_scalar(value) as u8,
        PrimitiveKind::UInt16 => encode!(u16, value, buf, offset, endianness),
        PrimitiveKind::Int16 => encode!(i16, value, buf, offset, endianness),
        PrimitiveKind::UInt32 => encode!(u32, value, buf, offset, endianness),
        PrimitiveKind::Int32 => encode!(i32, value, buf, offset, endianness),
        PrimitiveKind::Float32 => encode!(f32, value, buf, offset, endianness),
        PrimitiveKind::Float64 => encode!(f64, value, buf, offset, endianness),
    }
}
