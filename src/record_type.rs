//! Compiled record schemas
//!
//! A [`RecordType`] is built once from an ordered list of definitions. The
//! offset of every named field is the running sum of the sizes declared
//! before it; nothing is inserted for alignment. The table is shared by every
//! record bound from the type.

use crate::error::{LayoutError, Result};
use crate::record::{Record, Window};
use crate::types::{Definition, Endianness, Field, HostOrder, NativeHost};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// One named, non-padding field and its absolute offset
#[derive(Debug, Clone)]
pub(crate) struct Slot {
    pub(crate) name: String,
    pub(crate) offset: usize,
    pub(crate) field: Field,
}

struct Layout {
    definitions: Vec<Definition>,
    slots: Vec<Slot>,
    index: HashMap<String, usize>,
    size: usize,
}

/// Immutable, reusable record schema
///
/// Cloning is cheap and clones share the same offset table.
#[derive(Clone)]
pub struct RecordType {
    layout: Arc<Layout>,
}

/// View of a named field's position in a record type
#[derive(Debug, Clone, Copy)]
pub struct FieldInfo<'a> {
    pub name: &'a str,
    pub offset: usize,
    pub field: &'a Field,
}

impl RecordType {
    /// Compute offsets and total size for `definitions`
    ///
    /// An empty list gives a zero-size record type.
    pub fn define(definitions: Vec<Definition>) -> Result<Self> {
        let mut slots = Vec::with_capacity(definitions.len());
        let mut index = HashMap::with_capacity(definitions.len());
        let mut offset = 0usize;

        for definition in &definitions {
            definition.field.validate(&definition.name)?;

            if !definition.is_padding() {
                if definition.name.is_empty() {
                    return Err(LayoutError::invalid_schema("", "field name is empty"));
                }
                if index
                    .insert(definition.name.clone(), slots.len())
                    .is_some()
                {
                    return Err(LayoutError::invalid_schema(
                        definition.name.as_str(),
                        "duplicate field name",
                    ));
                }
                slots.push(Slot {
                    name: definition.name.clone(),
                    offset,
                    field: definition.field.clone(),
                });
            }

            offset = offset
                .checked_add(definition.field.size())
                .ok_or_else(|| {
                    LayoutError::invalid_schema(
                        definition.name.as_str(),
                        "record size overflows",
                    )
                })?;
        }

        tracing::debug!(size = offset, fields = slots.len(), "defined record type");

        Ok(Self {
            layout: Arc::new(Layout {
                definitions,
                slots,
                index,
                size: offset,
            }),
        })
    }

    /// Start an incremental definition
    pub fn builder() -> RecordTypeBuilder {
        RecordTypeBuilder::default()
    }

    /// Total size in bytes, padding included
    pub fn size(&self) -> usize {
        self.layout.size
    }

    /// The definitions this type was built from, padding included
    pub fn definitions(&self) -> &[Definition] {
        &self.layout.definitions
    }

    /// Named fields in declaration order
    pub fn fields(&self) -> impl Iterator<Item = FieldInfo<'_>> {
        self.layout.slots.iter().map(|slot| FieldInfo {
            name: &slot.name,
            offset: slot.offset,
            field: &slot.field,
        })
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.slot(name).map(|(_, slot)| &slot.field)
    }

    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.slot(name).map(|(_, slot)| slot.offset)
    }

    pub(crate) fn slot(&self, name: &str) -> Option<(usize, &Slot)> {
        let position = *self.layout.index.get(name)?;
        Some((position, &self.layout.slots[position]))
    }

    pub(crate) fn slots(&self) -> &[Slot] {
        &self.layout.slots
    }

    /// Bind a fresh zero-filled buffer of exactly [`size`](Self::size) bytes
    pub fn allocate(&self, endianness: Option<Endianness>) -> Record {
        self.allocate_with_host(endianness, &NativeHost)
    }

    pub fn allocate_with_host(
        &self,
        endianness: Option<Endianness>,
        host: &impl HostOrder,
    ) -> Record {
        let endianness = endianness.unwrap_or_else(|| host.endianness());
        Record::new(self.clone(), Window::new(vec![0u8; self.size()]), endianness)
    }

    /// Bind caller-supplied bytes
    ///
    /// Bytes past [`size`](Self::size) are kept but never addressed.
    /// [`Record::into_bytes`] hands the buffer back.
    pub fn bind(&self, buffer: Vec<u8>, endianness: Option<Endianness>) -> Result<Record> {
        self.bind_with_host(buffer, endianness, &NativeHost)
    }

    /// Bind with an explicit source for the default byte order
    pub fn bind_with_host(
        &self,
        buffer: Vec<u8>,
        endianness: Option<Endianness>,
        host: &impl HostOrder,
    ) -> Result<Record> {
        if buffer.len() < self.size() {
            return Err(LayoutError::BufferTooSmall {
                required: self.size(),
                actual: buffer.len(),
            });
        }
        let endianness = endianness.unwrap_or_else(|| host.endianness());
        let window = Window::new(buffer).sub(0, self.size());
        Ok(Record::new(self.clone(), window, endianness))
    }

    /// Whether both handles share one compiled layout
    pub fn ptr_eq(&self, other: &RecordType) -> bool {
        Arc::ptr_eq(&self.layout, &other.layout)
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordType")
            .field("size", &self.layout.size)
            .field("definitions", &self.layout.definitions)
            .finish()
    }
}

/// Incremental construction of a [`RecordType`]
#[derive(Debug, Default)]
pub struct RecordTypeBuilder {
    definitions: Vec<Definition>,
}

impl RecordTypeBuilder {
    pub fn field(mut self, name: impl Into<String>, field: impl Into<Field>) -> Self {
        self.definitions.push(Definition::new(name, field));
        self
    }

    pub fn definition(mut self, definition: Definition) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Append `bytes` single-byte padding fields
    pub fn padding(mut self, bytes: usize) -> Self {
        self.definitions
            .extend(std::iter::repeat_with(crate::schema::padding).take(bytes));
        self
    }

    pub fn build(self) -> Result<RecordType> {
        RecordType::define(self.definitions)
    }
}
