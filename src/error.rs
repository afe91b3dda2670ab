//! Error types used in the [`ndbuf`](crate) crate.

use crate::array::DType;

/// Error type for array construction and access.
///
/// All errors are detected synchronously at the boundary of the operation
/// that violates the invariant, and surface to the immediate caller. There is
/// no partial-success mode: an array is either fully constructed or not
/// constructed at all.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The declared shape disagrees with the supplied element count or buffer
    /// byte length.
    ShapeMismatch {
        /// Element count (or byte length) required by the declared shape.
        expected: usize,
        /// Element count (or byte length) actually supplied.
        actual: usize,
    },
    /// Concatenation or conversion attempted across differing dtypes.
    ///
    /// The caller must align the dtypes before retrying, there is no implicit
    /// coercion.
    DTypeMismatch {
        /// The dtype of the left-hand (or requested) side.
        lhs: DType,
        /// The dtype of the right-hand (or supplied) side.
        rhs: DType,
    },
    /// Indexed access beyond the array's length.
    IndexOutOfRange {
        /// The requested flat index.
        index: usize,
        /// The length of the array.
        len: usize,
    },
}
impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::ShapeMismatch { expected, actual } => {
                write!(fmt, "shape mismatch: expected {expected}, got {actual}")
            }
            Error::DTypeMismatch { lhs, rhs } => {
                write!(fmt, "dtype mismatch: {lhs} and {rhs}")
            }
            Error::IndexOutOfRange { index, len } => {
                write!(fmt, "index {index} out of range for array of length {len}")
            }
        }
    }
}
#[cfg(feature = "std")]
impl std::error::Error for Error {}

pub(crate) type Result<T, E = Error> = std::result::Result<T, E>;
