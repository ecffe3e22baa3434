//! Records bound to byte buffers
//!
//! A [`Record`] pairs a [`RecordType`] with a window of bytes and an
//! endianness. Primitive fields are read and written straight through the
//! window. Nested records and arrays are built on first access and cached in
//! one slot per field for the lifetime of the record.
//!
//! Nested records alias the parent's bytes. Elements of an array of records
//! are bound to private copies of their bytes, so writing to them leaves the
//! parent untouched.

mod array;
mod window;

pub use array::{ArrayValue, PrimitiveArray};
pub(crate) use window::Window;

use crate::error::{LayoutError, Result};
use crate::record_type::{RecordType, Slot};
use crate::types::{ArrayField, Endianness, Field, Primitive, Scalar};
use std::cell::OnceCell;
use std::fmt;

enum Materialized {
    Record(Record),
    Array(ArrayValue),
}

/// A record type bound to bytes
pub struct Record {
    record_type: RecordType,
    window: Window,
    endianness: Endianness,
    slots: Box<[OnceCell<Materialized>]>,
}

impl Record {
    pub(crate) fn new(record_type: RecordType, window: Window, endianness: Endianness) -> Self {
        debug_assert!(window.len() >= record_type.size());
        let slots = record_type.slots().iter().map(|_| OnceCell::new()).collect();
        tracing::trace!(size = record_type.size(), ?endianness, "bound record");
        Self {
            record_type,
            window,
            endianness,
            slots,
        }
    }

    pub fn record_type(&self) -> &RecordType {
        &self.record_type
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    pub fn size(&self) -> usize {
        self.record_type.size()
    }

    /// Names of the accessible fields in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.record_type.slots().iter().map(|slot| slot.name.as_str())
    }

    fn slot(&self, name: &str) -> Result<(usize, &Slot)> {
        self.record_type
            .slot(name)
            .ok_or_else(|| LayoutError::UnknownField(name.to_string()))
    }

    fn mismatch(slot: &Slot, expected: &'static str) -> LayoutError {
        LayoutError::FieldKindMismatch {
            field: slot.name.clone(),
            expected,
            actual: slot.field.kind_name(),
        }
    }

    /// Read a primitive field
    pub fn get(&self, name: &str) -> Result<Scalar> {
        let (_, slot) = self.slot(name)?;
        match slot.field {
            Field::Primitive(kind) => Ok(self.window.read(kind, slot.offset, self.endianness)),
            _ => Err(Self::mismatch(slot, "primitive")),
        }
    }

    /// Read a primitive field converted to `T`
    pub fn value<T: Primitive>(&self, name: &str) -> Result<T> {
        self.get(name).map(T::from_scalar)
    }

    /// Write a primitive field
    ///
    /// The value is converted to the field's kind; out-of-range integers wrap.
    pub fn set(&self, name: &str, value: impl Into<Scalar>) -> Result<()> {
        let (_, slot) = self.slot(name)?;
        match slot.field {
            Field::Primitive(kind) => {
                self.window
                    .write(kind, slot.offset, value.into(), self.endianness);
                Ok(())
            }
            _ => Err(Self::mismatch(slot, "primitive")),
        }
    }

    /// Nested record sharing this record's bytes
    pub fn record(&self, name: &str) -> Result<&Record> {
        let (position, slot) = self.slot(name)?;
        let Field::Record(record_type) = &slot.field else {
            return Err(Self::mismatch(slot, "record"));
        };
        let cached = self.slots[position].get_or_init(|| {
            tracing::trace!(field = name, "materialized nested record");
            Materialized::Record(self.nested_record(record_type, slot.offset))
        });
        match cached {
            Materialized::Record(record) => Ok(record),
            Materialized::Array(_) => Err(Self::mismatch(slot, "record")),
        }
    }

    /// Array field, built on first access
    pub fn array(&self, name: &str) -> Result<&ArrayValue> {
        let (position, slot) = self.slot(name)?;
        let Field::Array(array) = &slot.field else {
            return Err(Self::mismatch(slot, "array"));
        };
        let cached = self.slots[position].get_or_init(|| {
            tracing::trace!(field = name, length = array.length(), "materialized array");
            Materialized::Array(self.array_value(array, slot.offset))
        });
        match cached {
            Materialized::Array(array) => Ok(array),
            Materialized::Record(_) => Err(Self::mismatch(slot, "array")),
        }
    }

    fn nested_record(&self, record_type: &RecordType, offset: usize) -> Record {
        Record::new(
            record_type.clone(),
            self.window.sub(offset, record_type.size()),
            self.endianness,
        )
    }

    fn array_value(&self, array: &ArrayField, offset: usize) -> ArrayValue {
        ArrayValue::materialize(array, &self.window, offset, self.endianness)
    }

    /// Independent record over a copy of this record's bytes
    pub fn copy(&self) -> Record {
        Record::new(
            self.record_type.clone(),
            Window::new(self.window.to_vec()),
            self.endianness,
        )
    }

    /// Copy of the record's bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.window.to_vec()
    }

    /// The record's bytes, consuming the record
    ///
    /// Hands back the bound buffer without copying when no other view still
    /// shares it, otherwise copies like [`Record::to_bytes`]. Trailing bytes
    /// beyond [`Record::size`] are dropped.
    pub fn into_bytes(self) -> Vec<u8> {
        let Record { window, slots, .. } = self;
        drop(slots);
        window.into_vec()
    }

    /// Borrow the record's bytes for the duration of `f`
    ///
    /// Reading fields from inside `f` is fine. Writing through this record,
    /// a nested record or one of its primitive arrays from inside `f` panics.
    pub fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        self.window.with_bytes(f)
    }

    /// Mutably borrow the record's bytes for the duration of `f`
    ///
    /// Accessing fields of this record from inside `f` panics.
    pub fn with_bytes_mut<R>(&self, f: impl FnOnce(&mut [u8]) -> R) -> R {
        self.window.with_bytes_mut(f)
    }

    /// Whether both records view the same underlying allocation
    pub fn shares_storage(&self, other: &Record) -> bool {
        self.window.shares_storage(&other.window)
    }
}

/// Lists every field with its current value, without filling any cache slot
impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for slot in self.record_type.slots() {
            match &slot.field {
                Field::Primitive(kind) => {
                    map.entry(
                        &slot.name,
                        &self.window.read(*kind, slot.offset, self.endianness),
                    );
                }
                Field::Record(record_type) => {
                    map.entry(&slot.name, &self.nested_record(record_type, slot.offset));
                }
                Field::Array(array) => {
                    map.entry(&slot.name, &self.array_value(array, slot.offset));
                }
            }
        }
        map.finish()
    }
}
