//! Byte order selection

/// Byte order used to interpret multi-byte fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Byte order of the target this crate was compiled for
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }
}

/// Source of the default byte order used when a bind call leaves it open
///
/// Queried once per bind.
pub trait HostOrder {
    fn endianness(&self) -> Endianness;
}

/// The running machine's byte order
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeHost;

impl HostOrder for NativeHost {
    fn endianness(&self) -> Endianness {
        Endianness::native()
    }
}

/// A fixed order acts as a host that always reports it
impl HostOrder for Endianness {
    fn endianness(&self) -> Endianness {
        *self
    }
}
