//! Array field values

use super::{Record, Window};
use crate::error::{LayoutError, Result};
use crate::types::{ArrayField, Endianness, Field, Primitive, PrimitiveKind, Scalar};
use std::fmt;

/// Materialized value of an array field
pub enum ArrayValue {
    /// Elements are primitives; reads and writes hit the shared bytes
    Primitive(PrimitiveArray),
    /// Elements are records over private copies of their bytes
    Records(Vec<Record>),
    /// Elements are themselves arrays
    Nested(Vec<ArrayValue>),
}

impl ArrayValue {
    pub(crate) fn materialize(
        array: &ArrayField,
        window: &Window,
        offset: usize,
        endianness: Endianness,
    ) -> Self {
        let length = array.length();
        match array.element() {
            Field::Primitive(kind) => ArrayValue::Primitive(PrimitiveArray {
                window: window.sub(offset, array.size()),
                kind: *kind,
                length,
                endianness,
            }),
            Field::Record(record_type) => {
                let stride = record_type.size();
                ArrayValue::Records(
                    (0..length)
                        .map(|i| {
                            Record::new(
                                record_type.clone(),
                                window.detach(offset + i * stride, stride),
                                endianness,
                            )
                        })
                        .collect(),
                )
            }
            Field::Array(inner) => {
                let stride = inner.size();
                ArrayValue::Nested(
                    (0..length)
                        .map(|i| Self::materialize(inner, window, offset + i * stride, endianness))
                        .collect(),
                )
            }
        }
    }

    /// Number of elements in the outermost dimension
    pub fn len(&self) -> usize {
        match self {
            ArrayValue::Primitive(array) => array.len(),
            ArrayValue::Records(records) => records.len(),
            ArrayValue::Nested(arrays) => arrays.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_primitive(&self) -> Option<&PrimitiveArray> {
        match self {
            ArrayValue::Primitive(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_records(&self) -> Option<&[Record]> {
        match self {
            ArrayValue::Records(records) => Some(records),
            _ => None,
        }
    }

    pub fn as_nested(&self) -> Option<&[ArrayValue]> {
        match self {
            ArrayValue::Nested(arrays) => Some(arrays),
            _ => None,
        }
    }

    /// Dimensions from outermost to innermost
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = vec![self.len()];
        let mut current = self;
        while let ArrayValue::Nested(arrays) = current {
            match arrays.first() {
                Some(first) => {
                    shape.push(first.len());
                    current = first;
                }
                None => break,
            }
        }
        shape
    }

    /// Innermost primitive kind, if the array bottoms out in primitives
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            ArrayValue::Primitive(array) => Some(array.kind()),
            ArrayValue::Records(_) => None,
            ArrayValue::Nested(arrays) => arrays.first().and_then(|a| a.primitive_kind()),
        }
    }

    /// All primitive elements in row-major order
    ///
    /// Returns `None` for arrays of records.
    pub fn flatten<T: Primitive>(&self) -> Option<Vec<T>> {
        let mut out = Vec::new();
        self.flatten_into(&mut out)?;
        Some(out)
    }

    fn flatten_into<T: Primitive>(&self, out: &mut Vec<T>) -> Option<()> {
        match self {
            ArrayValue::Primitive(array) => {
                out.extend(array.iter().map(T::from_scalar));
                Some(())
            }
            ArrayValue::Records(_) => None,
            ArrayValue::Nested(arrays) => {
                for array in arrays {
                    array.flatten_into(out)?;
                }
                Some(())
            }
        }
    }
}

impl fmt::Debug for ArrayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayValue::Primitive(array) => fmt::Debug::fmt(array, f),
            ArrayValue::Records(records) => f.debug_list().entries(records).finish(),
            ArrayValue::Nested(arrays) => f.debug_list().entries(arrays).finish(),
        }
    }
}

/// Strided view over a run of primitives in shared bytes
///
/// Every access goes through the endianness-aware codec, so the view is
/// correct whether or not the byte order matches the host.
#[derive(Clone)]
pub struct PrimitiveArray {
    window: Window,
    kind: PrimitiveKind,
    length: usize,
    endianness: Endianness,
}

impl PrimitiveArray {
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    fn check(&self, index: usize) -> Result<usize> {
        if index >= self.length {
            return Err(LayoutError::IndexOutOfBounds {
                index,
                length: self.length,
            });
        }
        Ok(index * self.kind.size())
    }

    pub fn get(&self, index: usize) -> Result<Scalar> {
        let offset = self.check(index)?;
        Ok(self.window.read(self.kind, offset, self.endianness))
    }

    pub fn value<T: Primitive>(&self, index: usize) -> Result<T> {
        self.get(index).map(T::from_scalar)
    }

    /// Write one element, converted to the array's kind
    pub fn set(&self, index: usize, value: impl Into<Scalar>) -> Result<()> {
        let offset = self.check(index)?;
        self.window
            .write(self.kind, offset, value.into(), self.endianness);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = Scalar> + '_ {
        let width = self.kind.size();
        (0..self.length).map(move |i| self.window.read(self.kind, i * width, self.endianness))
    }

    pub fn to_vec<T: Primitive>(&self) -> Vec<T> {
        self.iter().map(T::from_scalar).collect()
    }

    /// Write `values` from index 0; extra values are ignored
    pub fn copy_from<T: Primitive>(&self, values: &[T]) {
        let width = self.kind.size();
        for (i, value) in values.iter().take(self.length).enumerate() {
            self.window
                .write(self.kind, i * width, (*value).into(), self.endianness);
        }
    }
}

impl fmt::Debug for PrimitiveArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
