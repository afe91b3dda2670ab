//! The fixed-width dtype variants of the array family.

use std::marker::PhantomData;

use crate::alloc::{Cow, Vec};
use crate::array::{DType, Scalar, Shape};
use crate::{Error, Result};

/// An N-dimensional array of fixed-width elements over a contiguous
/// native-endian byte buffer.
///
/// The struct is generic over the element type and usually referred to
/// through the per-dtype aliases: [`BoolNdArray`], [`Uint8NdArray`],
/// [`Uint16NdArray`], [`Uint32NdArray`], [`Int8NdArray`], [`Int16NdArray`],
/// [`Int32NdArray`], [`Float32NdArray`] and [`Float64NdArray`].
///
/// The backing buffer is either exclusively owned or, for arrays built with
/// [`from_bytes`](NdArrayBase::from_bytes) /
/// [`from_bytes_shaped`](NdArrayBase::from_bytes_shaped), an aliasing view
/// over caller-owned memory bound to the lifetime `'a`. Owned arrays carry
/// the `'static` lifetime. Every other construction path, as well as
/// [`clone`](Clone::clone), [`concat`](NdArrayBase::concat) and
/// [`reshaped`](NdArrayBase::reshaped), allocates fresh exclusively owned
/// storage and never shares bytes between two arrays.
///
/// Invariant: `buffer length == shape size * element width`. The shape and
/// dtype of an array never change after construction; element values may be
/// written in place through [`set`](NdArrayBase::set).
pub struct NdArrayBase<'a, S: Scalar> {
    buf: Cow<'a, [u8]>,
    shape: Shape,
    marker: PhantomData<S>,
}

/// A boolean N-dimensional array, one byte per element.
pub type BoolNdArray<'a> = NdArrayBase<'a, bool>;
/// An 8-bit unsigned integer N-dimensional array.
pub type Uint8NdArray<'a> = NdArrayBase<'a, u8>;
/// A 16-bit unsigned integer N-dimensional array.
pub type Uint16NdArray<'a> = NdArrayBase<'a, u16>;
/// A 32-bit unsigned integer N-dimensional array.
pub type Uint32NdArray<'a> = NdArrayBase<'a, u32>;
/// An 8-bit signed integer N-dimensional array.
pub type Int8NdArray<'a> = NdArrayBase<'a, i8>;
/// A 16-bit signed integer N-dimensional array.
pub type Int16NdArray<'a> = NdArrayBase<'a, i16>;
/// A 32-bit signed integer N-dimensional array.
pub type Int32NdArray<'a> = NdArrayBase<'a, i32>;
/// A 32-bit floating point N-dimensional array.
pub type Float32NdArray<'a> = NdArrayBase<'a, f32>;
/// A 64-bit floating point N-dimensional array.
pub type Float64NdArray<'a> = NdArrayBase<'a, f64>;

fn to_bytes<S: Scalar>(values: &[S]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.resize(values.len() * S::WIDTH, 0);
    for (chunk, value) in buf.chunks_exact_mut(S::WIDTH).zip(values) {
        value.write(chunk);
    }
    buf
}

impl<'a, S: Scalar> NdArrayBase<'a, S> {
    /// Creates a 1-D array with shape `[values.len()]` from a sequence of
    /// elements.
    pub fn new(values: &[S]) -> Self {
        Self {
            buf: Cow::Owned(to_bytes(values)),
            shape: Shape::from(values.len()),
            marker: PhantomData,
        }
    }

    /// Creates an array from a sequence of elements and an explicit shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the shape's element product does
    /// not equal `values.len()`.
    pub fn with_shape(values: &[S], shape: impl Into<Shape>) -> Result<Self> {
        let shape = shape.into();
        shape.validate(values.len())?;
        Ok(Self {
            buf: Cow::Owned(to_bytes(values)),
            shape,
            marker: PhantomData,
        })
    }

    /// Creates a zero-filled array of the given shape.
    ///
    /// `Shape` converts from a plain `usize`, so `zeros(n)` builds the 1-D
    /// array of length `n`.
    pub fn zeros(shape: impl Into<Shape>) -> Self {
        let shape = shape.into();
        let mut buf = Vec::new();
        buf.resize(shape.size() * S::WIDTH, 0);
        Self {
            buf: Cow::Owned(buf),
            shape,
            marker: PhantomData,
        }
    }

    /// Creates a 1-D array view over an externally owned byte buffer, without
    /// copying.
    ///
    /// The caller retains ownership of the memory; the borrow checker keeps
    /// the region alive and immutable for the view's lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `bytes.len()` is not a multiple of
    /// the element width.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() % S::WIDTH != 0 {
            return Err(Error::ShapeMismatch {
                expected: bytes.len() / S::WIDTH * S::WIDTH,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            shape: Shape::from(bytes.len() / S::WIDTH),
            buf: Cow::Borrowed(bytes),
            marker: PhantomData,
        })
    }

    /// Creates an array view over an externally owned byte buffer with an
    /// explicit shape, without copying.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `bytes.len()` does not equal the
    /// shape's element product times the element width.
    pub fn from_bytes_shaped(bytes: &'a [u8], shape: impl Into<Shape>) -> Result<Self> {
        let shape = shape.into();
        let expected = shape.size() * S::WIDTH;
        if bytes.len() != expected {
            return Err(Error::ShapeMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            buf: Cow::Borrowed(bytes),
            shape,
            marker: PhantomData,
        })
    }

    /// Returns the dtype tag fixed at construction.
    pub fn dtype(&self) -> DType {
        S::DTYPE
    }

    /// Returns the shape of the array.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the total element count.
    pub fn len(&self) -> usize {
        self.shape.size()
    }

    /// Returns `true` if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of dimensions.
    pub fn dimension(&self) -> usize {
        self.shape.dimension()
    }

    /// Returns the width of one element in bytes.
    pub fn element_size(&self) -> usize {
        S::WIDTH
    }

    /// Returns the size of the backing buffer in bytes.
    pub fn nbytes(&self) -> usize {
        self.buf.len()
    }

    /// Returns the backing buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns `true` if the array is a view over externally owned memory
    /// rather than exclusively owned storage.
    pub fn is_view(&self) -> bool {
        matches!(self.buf, Cow::Borrowed(_))
    }

    /// Returns the element at the given flat index (0-based, row-major).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<S> {
        let len = self.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        let start = index * S::WIDTH;
        Ok(S::read(&self.buf[start..start + S::WIDTH]))
    }

    /// Writes the element at the given flat index (0-based, row-major).
    ///
    /// Writing to a view detaches it into exclusively owned storage first;
    /// the externally owned memory is never written through.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= self.len()`.
    pub fn set(&mut self, index: usize, value: S) -> Result<()> {
        let len = self.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        let start = index * S::WIDTH;
        value.write(&mut self.buf.to_mut()[start..start + S::WIDTH]);
        Ok(())
    }

    /// Returns an iterator over the elements in flat row-major order.
    pub fn iter(&self) -> impl Iterator<Item = S> + '_ {
        self.buf.chunks_exact(S::WIDTH).map(S::read)
    }

    /// Collects the elements into a vector, in flat row-major order.
    pub fn to_vec(&self) -> Vec<S> {
        self.iter().collect()
    }

    /// Concatenates two arrays of the same dtype into a new owned 1-D array.
    ///
    /// The result has shape `[self.len() + other.len()]` and its buffer is
    /// the byte-for-byte concatenation of the two source buffers in order.
    /// Multi-dimensional shapes of either operand are discarded; this is a
    /// flat join, not an N-D stack.
    pub fn concat(&self, other: &NdArrayBase<'_, S>) -> NdArrayBase<'static, S> {
        let mut buf = Vec::with_capacity(self.buf.len() + other.buf.len());
        buf.extend_from_slice(&self.buf);
        buf.extend_from_slice(&other.buf);
        NdArrayBase {
            buf: Cow::Owned(buf),
            shape: Shape::from(self.len() + other.len()),
            marker: PhantomData,
        }
    }

    /// Copies the array into a freshly allocated buffer reinterpreted under a
    /// new shape.
    ///
    /// The result owns its storage and shape; neither is shared with `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the new shape's element product
    /// does not equal `self.len()`.
    pub fn reshaped(&self, shape: impl Into<Shape>) -> Result<NdArrayBase<'static, S>> {
        let shape = shape.into();
        shape.validate(self.len())?;
        Ok(NdArrayBase {
            buf: Cow::Owned(self.buf.to_vec()),
            shape,
            marker: PhantomData,
        })
    }

    /// Copies the array into a new array of another fixed-width dtype,
    /// converting each element through `f64`.
    ///
    /// The shape is preserved. Every supported element type round-trips `f64`
    /// exactly, so a same-dtype cast is a plain copy.
    pub fn cast<T: Scalar>(&self) -> NdArrayBase<'static, T> {
        let values: Vec<T> = self.iter().map(|v| T::from_f64(v.to_f64())).collect();
        NdArrayBase {
            buf: Cow::Owned(to_bytes(&values)),
            shape: self.shape.clone(),
            marker: PhantomData,
        }
    }

    /// Converts the array into one that owns its storage, copying the bytes
    /// if it is a view.
    pub fn into_owned(self) -> NdArrayBase<'static, S> {
        NdArrayBase {
            buf: Cow::Owned(self.buf.into_owned()),
            shape: self.shape,
            marker: PhantomData,
        }
    }
}

/// Deep copy: allocates a fresh buffer and a fresh shape sequence, never
/// sharing storage with the source. Cloning a view yields an owned array.
impl<S: Scalar> Clone for NdArrayBase<'_, S> {
    fn clone(&self) -> Self {
        Self {
            buf: Cow::Owned(self.buf.to_vec()),
            shape: self.shape.clone(),
            marker: PhantomData,
        }
    }
}

impl<'b, S: Scalar> PartialEq<NdArrayBase<'b, S>> for NdArrayBase<'_, S> {
    fn eq(&self, other: &NdArrayBase<'b, S>) -> bool {
        self.shape == other.shape && *self.buf == *other.buf
    }
}
