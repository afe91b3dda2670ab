//! N-dimensional array types over contiguous binary buffers.
//!
//! An array couples a flat element sequence with a [`Shape`] and a [`DType`]
//! tag. The fixed-width dtypes (`bool`, the 8/16/32-bit integers, `f32` and
//! `f64`) store their elements in a native-endian byte buffer through the
//! generic [`NdArrayBase`]; the untyped [`ObjectNdArray`] stores shared
//! handles to arbitrary values instead. [`NdArrayAny`] erases the element
//! type for heterogeneous collections, and the [`ndarray()`] dispatcher
//! builds any variant from a plain source value.
//!
//! All variants share one contract: the shape's element product always
//! equals the element count, flat indices are 0-based row-major, cloning
//! never shares buffers or shapes, and concatenation joins two equal-dtype
//! arrays into a flat 1-D result.

mod dtype;
mod erased;
mod fmt;
#[cfg(feature = "ndarray")]
mod interop;
mod object;
mod shape;
mod typed;

pub use dtype::{DType, Scalar};
pub use erased::{is_ndarray, ndarray, NdArrayAny, NdArrayOpts, NdArraySource};
pub use object::{value, AnyValue, ObjectNdArray};
pub use shape::Shape;
pub use typed::{
    BoolNdArray, Float32NdArray, Float64NdArray, Int16NdArray, Int32NdArray, Int8NdArray,
    NdArrayBase, Uint16NdArray, Uint32NdArray, Uint8NdArray,
};
