#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]

//! Typed N-dimensional arrays backed by fixed-width binary buffers.
//!
//! The crate provides a closed family of array types, one per element
//! representation ("dtype"): boolean, unsigned and signed integers of 8/16/32
//! bits, 32/64-bit floats, and an untyped `object` variant holding arbitrary
//! values. All variants share a uniform shape/length/dtype contract, a common
//! construction protocol from heterogeneous sources, and well-defined clone
//! and concatenation semantics.
//!
//! Fixed-width arrays store their elements in a contiguous native-endian byte
//! buffer. The buffer is either exclusively owned or an aliasing view over
//! caller-owned memory; views are lifetime-checked, so the borrow checker
//! rules out use-after-free of the aliased region.
//!
//! ```rust
//! use ndbuf::{ndarray, DType, NdArrayOpts, Uint8NdArray};
//!
//! let nd = Uint8NdArray::new(&[1, 2, 3, 4, 5, 6]);
//! assert_eq!(nd.dtype(), DType::Uint8);
//! assert_eq!(nd.shape(), &[6]);
//!
//! let nd = nd.reshaped([2, 3]).unwrap();
//! assert_eq!(nd.shape(), &[2, 3]);
//! assert_eq!(nd.dimension(), 2);
//!
//! // The same array built through the type-erased dispatcher.
//! let any = ndarray(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], NdArrayOpts::with_dtype(DType::Uint8)).unwrap();
//! assert_eq!(any.dtype(), DType::Uint8);
//! assert_eq!(any.len(), 6);
//! ```
//!
//! ## Cargo Features
//! - `std`:
//!   Enable the standard library. This feature is enabled by default, but can
//!   be disabled to build [`ndbuf`](crate) in a `no_std` environment. Without
//!   it the crate uses `core` and `alloc` only, and requires a global
//!   allocator to be set.
//! - `ndarray`:
//!   Conversions between [`ndbuf`](crate) arrays and `ndarray` arrays.
//!   Adds a dependency to the `ndarray` crate.
//!   This feature is enabled by default.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate core as std;

pub(crate) mod alloc {
    cfg_if::cfg_if! { if #[cfg(feature = "std")] {
        pub use std::borrow::Cow;
        pub use std::rc::Rc;
        pub use std::vec::Vec;
    } else {
        extern crate alloc;
        pub use alloc::borrow::Cow;
        pub use alloc::rc::Rc;
        pub use alloc::vec::Vec;
    } }
}

#[macro_use]
mod private;
pub mod array;
mod error;

pub(crate) use error::Result;
pub use error::Error;

pub use array::{
    is_ndarray, ndarray, value, AnyValue, BoolNdArray, DType, Float32NdArray, Float64NdArray,
    Int16NdArray, Int32NdArray, Int8NdArray, NdArrayAny, NdArrayBase, NdArrayOpts, NdArraySource,
    ObjectNdArray, Scalar, Shape, Uint16NdArray, Uint32NdArray, Uint8NdArray,
};

#[cfg(feature = "ndarray")]
pub use ::ndarray;
