//! `Debug` representations of the array types.

use std::fmt::Debug;

use crate::array::{DType, NdArrayAny, NdArrayBase, ObjectNdArray, Scalar};

struct Elements<'e, 'a, S: Scalar>(&'e NdArrayBase<'a, S>);
impl<S: Scalar> Debug for Elements<'_, '_, S> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.debug_list().entries(self.0.iter()).finish()
    }
}

impl<S: Scalar> Debug for NdArrayBase<'_, S> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.debug_struct("NdArray")
            .field("dtype", &self.dtype())
            .field("shape", self.shape())
            .field("data", &Elements(self))
            .finish()
    }
}

impl Debug for ObjectNdArray {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.debug_struct("NdArray")
            .field("dtype", &DType::Object)
            .field("shape", self.shape())
            .field("len", &self.len())
            .finish()
    }
}

impl Debug for NdArrayAny<'_> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            NdArrayAny::Bool(arr) => arr.fmt(fmt),
            NdArrayAny::Uint8(arr) => arr.fmt(fmt),
            NdArrayAny::Uint16(arr) => arr.fmt(fmt),
            NdArrayAny::Uint32(arr) => arr.fmt(fmt),
            NdArrayAny::Int8(arr) => arr.fmt(fmt),
            NdArrayAny::Int16(arr) => arr.fmt(fmt),
            NdArrayAny::Int32(arr) => arr.fmt(fmt),
            NdArrayAny::Float32(arr) => arr.fmt(fmt),
            NdArrayAny::Float64(arr) => arr.fmt(fmt),
            NdArrayAny::Object(arr) => arr.fmt(fmt),
        }
    }
}
