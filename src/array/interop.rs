//! Conversions between this crate's arrays and [`ndarray`] arrays.

use ndarray::{ArrayBase, ArrayD, Data, Dimension, IxDyn};

use crate::alloc::Vec;
use crate::array::{NdArrayBase, Scalar, Shape};

impl<S: Scalar> NdArrayBase<'static, S> {
    /// Creates an array from an [`ndarray`] array, copying the elements in
    /// row-major order.
    pub fn from_array<D: Dimension>(array: &ArrayBase<impl Data<Elem = S>, D>) -> Self {
        let values: Vec<S> = array.iter().copied().collect();
        let shape = Shape::from(array.shape());
        match NdArrayBase::with_shape(&values, shape) {
            Ok(nd) => nd,
            // iter() yields exactly shape().product() elements
            Err(_) => unreachable!(),
        }
    }
}

impl<S: Scalar> NdArrayBase<'_, S> {
    /// Copies the array into a dynamically dimensioned [`ndarray`] array.
    pub fn to_array(&self) -> ArrayD<S> {
        match ArrayD::from_shape_vec(IxDyn(self.shape().as_slice()), self.to_vec()) {
            Ok(array) => array,
            // buffer length equals shape size by construction
            Err(_) => unreachable!(),
        }
    }
}
