//! Shared byte storage seen through offset windows

use crate::types::{Endianness, PrimitiveKind, Scalar};
use std::cell::RefCell;
use std::rc::Rc;

/// A `[start, start + len)` range of a shared buffer
///
/// Windows created with [`Window::sub`] alias their parent; windows created
/// with [`Window::detach`] own a private copy.
#[derive(Clone)]
pub(crate) struct Window {
    bytes: Rc<RefCell<Vec<u8>>>,
    start: usize,
    len: usize,
}

impl Window {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        let len = bytes.len();
        Self {
            bytes: Rc::new(RefCell::new(bytes)),
            start: 0,
            len,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Aliasing sub-window at `offset` relative to this one
    pub(crate) fn sub(&self, offset: usize, len: usize) -> Self {
        debug_assert!(offset + len <= self.len, "sub-window exceeds parent");
        Self {
            bytes: Rc::clone(&self.bytes),
            start: self.start + offset,
            len,
        }
    }

    /// Independent copy of `[offset, offset + len)`
    pub(crate) fn detach(&self, offset: usize, len: usize) -> Self {
        let bytes = self.bytes.borrow();
        let start = self.start + offset;
        Self::new(bytes[start..start + len].to_vec())
    }

    #[inline]
    pub(crate) fn read(&self, kind: PrimitiveKind, offset: usize, endianness: Endianness) -> Scalar {
        let bytes = self.bytes.borrow();
        kind.read(&bytes[self.start..self.start + self.len], offset, endianness)
    }

    #[inline]
    pub(crate) fn write(
        &self,
        kind: PrimitiveKind,
        offset: usize,
        value: Scalar,
        endianness: Endianness,
    ) {
        let mut bytes = self.bytes.borrow_mut();
        kind.write(
            &mut bytes[self.start..self.start + self.len],
            offset,
            value,
            endianness,
        )
    }

    pub(crate) fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        let bytes = self.bytes.borrow();
        f(&bytes[self.start..self.start + self.len])
    }

    pub(crate) fn with_bytes_mut<R>(&self, f: impl FnOnce(&mut [u8]) -> R) -> R {
        let mut bytes = self.bytes.borrow_mut();
        f(&mut bytes[self.start..self.start + self.len])
    }

    pub(crate) fn to_vec(&self) -> Vec<u8> {
        self.with_bytes(|bytes| bytes.to_vec())
    }

    /// The window's bytes, reusing the allocation when nothing else shares it
    pub(crate) fn into_vec(self) -> Vec<u8> {
        let end = self.start + self.len;
        match Rc::try_unwrap(self.bytes) {
            Ok(cell) => {
                let mut bytes = cell.into_inner();
                bytes.truncate(end);
                bytes.drain(..self.start);
                bytes
            }
            Err(shared) => shared.borrow()[self.start..end].to_vec(),
        }
    }

    /// Whether both windows point into the same allocation
    pub(crate) fn shares_storage(&self, other: &Window) -> bool {
        Rc::ptr_eq(&self.bytes, &other.bytes)
    }
}
