//! The untyped `object` variant of the array family, holding arbitrary
//! values.

use std::any::Any;

use crate::alloc::{Rc, Vec};
use crate::array::{DType, Shape};
use crate::{Error, Result};

/// A shared handle to an arbitrary value stored in an [`ObjectNdArray`].
///
/// Handles preserve value identity: copying a handle (on clone or
/// concatenation) shares the referent rather than duplicating it, and
/// [`Rc::ptr_eq`] observes that sharing.
pub type AnyValue = Rc<dyn Any>;

/// Wraps an arbitrary value in an [`AnyValue`] handle.
pub fn value<T: Any>(v: T) -> AnyValue {
    Rc::new(v)
}

/// An N-dimensional array of arbitrary values.
///
/// Unlike the fixed-width variants, the backing storage is an ordered
/// sequence of [`AnyValue`] handles rather than a binary buffer; the dtype is
/// always [`DType::Object`] and there is no byte representation.
///
/// Cloning copies the element sequence container and the shape (both get
/// fresh allocations) but shares the element handles: the clone is deep on
/// the array's own structure and shallow on the contained values.
#[derive(Clone)]
pub struct ObjectNdArray {
    values: Vec<AnyValue>,
    shape: Shape,
}

impl ObjectNdArray {
    /// Creates a 1-D array with shape `[values.len()]` from a sequence of
    /// value handles.
    pub fn new(values: Vec<AnyValue>) -> Self {
        let shape = Shape::from(values.len());
        Self { values, shape }
    }

    /// Creates an array from a sequence of value handles and an explicit
    /// shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the shape's element product does
    /// not equal `values.len()`.
    pub fn with_shape(values: Vec<AnyValue>, shape: impl Into<Shape>) -> Result<Self> {
        let shape = shape.into();
        shape.validate(values.len())?;
        Ok(Self { values, shape })
    }

    /// Creates an array of the given shape filled with a neutral placeholder
    /// value (the unit value `()`).
    ///
    /// All elements share one placeholder handle until overwritten.
    pub fn filled(shape: impl Into<Shape>) -> Self {
        let shape = shape.into();
        let fill = value(());
        let mut values = Vec::with_capacity(shape.size());
        values.resize(shape.size(), fill);
        Self { values, shape }
    }

    /// Returns the dtype tag, always [`DType::Object`].
    pub fn dtype(&self) -> DType {
        DType::Object
    }

    /// Returns the shape of the array.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the total element count.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of dimensions.
    pub fn dimension(&self) -> usize {
        self.shape.dimension()
    }

    /// Returns the element handle at the given flat index (0-based,
    /// row-major).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<&AnyValue> {
        self.values.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.values.len(),
        })
    }

    /// Replaces the element handle at the given flat index (0-based,
    /// row-major).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= self.len()`.
    pub fn set(&mut self, index: usize, value: AnyValue) -> Result<()> {
        let len = self.values.len();
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfRange { index, len }),
        }
    }

    /// Returns an iterator over the element handles in flat row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &AnyValue> {
        self.values.iter()
    }

    /// Returns the element handles as a slice.
    pub fn values(&self) -> &[AnyValue] {
        &self.values
    }

    /// Concatenates two object arrays into a new 1-D array.
    ///
    /// The result has shape `[self.len() + other.len()]` and holds `self`'s
    /// element handles followed by `other`'s, each copied by reference. The
    /// contained values themselves are not cloned, and multi-dimensional
    /// shapes of either operand are discarded.
    pub fn concat(&self, other: &ObjectNdArray) -> ObjectNdArray {
        let mut values = Vec::with_capacity(self.values.len() + other.values.len());
        values.extend(self.values.iter().cloned());
        values.extend(other.values.iter().cloned());
        ObjectNdArray::new(values)
    }

    /// Copies the array under a new shape, sharing the element handles.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the new shape's element product
    /// does not equal `self.len()`.
    pub fn reshaped(&self, shape: impl Into<Shape>) -> Result<ObjectNdArray> {
        let shape = shape.into();
        shape.validate(self.values.len())?;
        Ok(ObjectNdArray {
            values: self.values.clone(),
            shape,
        })
    }
}

/// Equality is identity-based on the elements: two object arrays are equal
/// iff their shapes match and every element pair shares the same handle.
impl PartialEq for ObjectNdArray {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape
            && self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| Rc::ptr_eq(a, b))
    }
}
