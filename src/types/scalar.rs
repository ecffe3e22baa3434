//! Scalar values read from and written to primitive fields

use super::PrimitiveKind;
use std::fmt;

/// A single primitive value, tagged with its kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    F32(f32),
    F64(f64),
}

impl Scalar {
    /// Get the kind for this value
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Scalar::U8(_) => PrimitiveKind::UInt8,
            Scalar::I8(_) => PrimitiveKind::Int8,
            Scalar::U16(_) => PrimitiveKind::UInt16,
            Scalar::I16(_) => PrimitiveKind::Int16,
            Scalar::U32(_) => PrimitiveKind::UInt32,
            Scalar::I32(_) => PrimitiveKind::Int32,
            Scalar::F32(_) => PrimitiveKind::Float32,
            Scalar::F64(_) => PrimitiveKind::Float64,
        }
    }

    /// Convert to another kind
    ///
    /// Integers wrap modulo the target width, floats truncate toward zero and
    /// saturate when the target is an integer (NaN becomes 0).
    pub fn cast(self, kind: PrimitiveKind) -> Scalar {
        match kind {
            PrimitiveKind::UInt8 => Scalar::U8(u8::from_scalar(self)),
            PrimitiveKind::Int8 => Scalar::I8(i8::from_scalar(self)),
            PrimitiveKind::UInt16 => Scalar::U16(u16::from_scalar(self)),
            PrimitiveKind::Int16 => Scalar::I16(i16::from_scalar(self)),
            PrimitiveKind::UInt32 => Scalar::U32(u32::from_scalar(self)),
            PrimitiveKind::Int32 => Scalar::I32(i32::from_scalar(self)),
            PrimitiveKind::Float32 => Scalar::F32(f32::from_scalar(self)),
            PrimitiveKind::Float64 => Scalar::F64(f64::from_scalar(self)),
        }
    }

    /// Every kind converts to f64 without loss
    pub fn as_f64(&self) -> f64 {
        f64::from_scalar(*self)
    }

    pub fn as_i64(&self) -> i64 {
        match *self {
            Scalar::U8(v) => v as i64,
            Scalar::I8(v) => v as i64,
            Scalar::U16(v) => v as i64,
            Scalar::I16(v) => v as i64,
            Scalar::U32(v) => v as i64,
            Scalar::I32(v) => v as i64,
            Scalar::F32(v) => v as i64,
            Scalar::F64(v) => v as i64,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::U8(v) => write!(f, "{}", v),
            Scalar::I8(v) => write!(f, "{}", v),
            Scalar::U16(v) => write!(f, "{}", v),
            Scalar::I16(v) => write!(f, "{}", v),
            Scalar::U32(v) => write!(f, "{}", v),
            Scalar::I32(v) => write!(f, "{}", v),
            Scalar::F32(v) => write!(f, "{}", v),
            Scalar::F64(v) => write!(f, "{}", v),
        }
    }
}

/// Rust types that map one-to-one onto a [`PrimitiveKind`]
pub trait Primitive: Copy + Into<Scalar> + 'static {
    const KIND: PrimitiveKind;

    /// Convert any scalar into this type using the crate's truncation rules
    fn from_scalar(value: Scalar) -> Self;
}

macro_rules! impl_primitive {
    ($($t:ty => $kind:ident, $variant:ident;)*) => {
        $(
            impl Primitive for $t {
                const KIND: PrimitiveKind = PrimitiveKind::$kind;

                #[inline]
                #[allow(clippy::unnecessary_cast)]
                fn from_scalar(value: Scalar) -> Self {
                    match value {
                        Scalar::U8(v) => v as $t,
                        Scalar::I8(v) => v as $t,
                        Scalar::U16(v) => v as $t,
                        Scalar::I16(v) => v as $t,
                        Scalar::U32(v) => v as $t,
                        Scalar::I32(v) => v as $t,
                        Scalar::F32(v) => v as $t,
                        Scalar::F64(v) => v as $t,
                    }
                }
            }

            impl From<$t> for Scalar {
                fn from(v: $t) -> Self {
                    Scalar::$variant(v)
                }
            }
        )*
    };
}

impl_primitive! {
    u8 => UInt8, U8;
    i8 => Int8, I8;
    u16 => UInt16, U16;
    i16 => Int16, I16;
    u32 => UInt32, U32;
    i32 => Int32, I32;
    f32 => Float32, F32;
    f64 => Float64, F64;
}
