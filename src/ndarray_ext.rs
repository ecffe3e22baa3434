//! ndarray integration for array fields
//!
//! Converts primitive and multi-dimensional array fields into ndarray arrays
//! and writes ndarray data back into the bound bytes.
//!
//! Enable with the `ndarray` feature flag.

use crate::record::{ArrayValue, PrimitiveArray};
use crate::types::{Primitive, PrimitiveKind};
use ndarray::{Array1, ArrayD, ArrayViewD, IxDyn};

/// Error type for ndarray conversions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NdarrayError {
    /// Element kind differs from the requested Rust type
    #[error("kind mismatch: expected {expected:?}, got {actual:?}")]
    KindMismatch {
        expected: PrimitiveKind,
        actual: PrimitiveKind,
    },
    /// Shapes of the field and the ndarray differ
    #[error("shape mismatch: field is {field:?}, array is {array:?}")]
    ShapeMismatch {
        field: Vec<usize>,
        array: Vec<usize>,
    },
    /// The array bottoms out in records, not primitives
    #[error("array elements are records, not primitives")]
    NotPrimitive,
}

fn check_kind<T: Primitive>(actual: PrimitiveKind) -> Result<(), NdarrayError> {
    if T::KIND != actual {
        return Err(NdarrayError::KindMismatch {
            expected: T::KIND,
            actual,
        });
    }
    Ok(())
}

impl PrimitiveArray {
    /// Copy the elements into a 1-D ndarray
    pub fn to_ndarray<T: Primitive>(&self) -> Result<Array1<T>, NdarrayError> {
        check_kind::<T>(self.kind())?;
        Ok(Array1::from_vec(self.to_vec()))
    }
}

impl ArrayValue {
    /// Copy the elements into an n-D ndarray shaped like the field
    pub fn to_ndarray<T: Primitive>(&self) -> Result<ArrayD<T>, NdarrayError> {
        let kind = self.primitive_kind().ok_or(NdarrayError::NotPrimitive)?;
        check_kind::<T>(kind)?;

        let shape = self.shape();
        let elements = self.flatten::<T>().ok_or(NdarrayError::NotPrimitive)?;
        let count = elements.len();

        ArrayD::from_shape_vec(IxDyn(&shape), elements).map_err(|_| NdarrayError::ShapeMismatch {
            field: shape,
            array: vec![count],
        })
    }

    /// Write `source` into the bound bytes, element by element
    ///
    /// The shapes must match exactly. Writes alias the record the array came
    /// from.
    pub fn assign_ndarray<T: Primitive>(&self, source: &ArrayViewD<'_, T>) -> Result<(), NdarrayError> {
        let kind = self.primitive_kind().ok_or(NdarrayError::NotPrimitive)?;
        check_kind::<T>(kind)?;

        let shape = self.shape();
        if source.shape() != shape.as_slice() {
            return Err(NdarrayError::ShapeMismatch {
                field: shape,
                array: source.shape().to_vec(),
            });
        }

        let mut values = source.iter().copied();
        self.assign_from(&mut values);
        Ok(())
    }

    fn assign_from<T: Primitive>(&self, values: &mut impl Iterator<Item = T>) {
        match self {
            ArrayValue::Primitive(array) => {
                let row: Vec<T> = values.by_ref().take(array.len()).collect();
                array.copy_from(&row);
            }
            ArrayValue::Records(_) => {}
            ArrayValue::Nested(arrays) => {
                for array in arrays {
                    array.assign_from(values);
                }
            }
        }
    }
}
