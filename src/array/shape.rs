//! The shape of an array: an ordered sequence of dimension sizes.

use crate::alloc::Vec;
use crate::{Error, Result};

/// An ordered sequence of dimension sizes describing how an array's flat
/// element sequence is interpreted as N-dimensional.
///
/// The product of all dimension sizes equals the array's element count; this
/// invariant is validated whenever a shape is paired with storage. A shape is
/// exclusively owned by its array and cloning it allocates a fresh sequence.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Shape(Vec<usize>);

impl Shape {
    /// Creates a shape from an explicit ordered sequence of dimension sizes.
    pub fn new(dims: Vec<usize>) -> Self {
        Self(dims)
    }

    /// Returns the dimension sizes as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Returns the total element count, the product of all dimension sizes.
    ///
    /// An empty shape has a size of one (the empty product).
    pub fn size(&self) -> usize {
        self.0.iter().product()
    }

    /// Returns the number of dimensions.
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    /// Checks that the shape's element product matches `count`.
    pub(crate) fn validate(&self, count: usize) -> Result<()> {
        let size = self.size();
        if size != count {
            return Err(Error::ShapeMismatch {
                expected: size,
                actual: count,
            });
        }
        Ok(())
    }
}

impl From<usize> for Shape {
    /// The default 1-D shape of a length-`len` array, `[len]`.
    fn from(len: usize) -> Self {
        let mut dims = Vec::with_capacity(1);
        dims.push(len);
        Self(dims)
    }
}
impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self(dims)
    }
}
impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self(dims.to_vec())
    }
}
impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Self(dims.to_vec())
    }
}
impl<const N: usize> From<&[usize; N]> for Shape {
    fn from(dims: &[usize; N]) -> Self {
        Self(dims.to_vec())
    }
}

impl PartialEq<[usize]> for Shape {
    fn eq(&self, other: &[usize]) -> bool {
        self.0 == other
    }
}
impl<const N: usize> PartialEq<[usize; N]> for Shape {
    fn eq(&self, other: &[usize; N]) -> bool {
        self.0 == other
    }
}

impl std::fmt::Debug for Shape {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.debug_list().entries(self.0.iter()).finish()
    }
}
