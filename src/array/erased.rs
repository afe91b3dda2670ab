//! The type-erased array, the construction dispatcher and the type
//! predicate.

use std::any::Any;

use crate::alloc::Vec;
use crate::array::object::value;
use crate::array::{
    AnyValue, BoolNdArray, DType, Float32NdArray, Float64NdArray, Int16NdArray, Int32NdArray,
    Int8NdArray, NdArrayBase, ObjectNdArray, Scalar, Shape, Uint16NdArray, Uint32NdArray,
    Uint8NdArray,
};
use crate::{Error, Result};

/// A type-erased N-dimensional array: a tagged union over every dtype
/// variant.
///
/// Use the `as_*` accessors or [`get_as`](NdArrayAny::get_as) to reach the
/// elements; the uniform dtype/shape/length/concat contract is available
/// directly.
#[derive(Clone)]
pub enum NdArrayAny<'a> {
    /// A [`BoolNdArray`].
    Bool(BoolNdArray<'a>),
    /// A [`Uint8NdArray`].
    Uint8(Uint8NdArray<'a>),
    /// A [`Uint16NdArray`].
    Uint16(Uint16NdArray<'a>),
    /// A [`Uint32NdArray`].
    Uint32(Uint32NdArray<'a>),
    /// An [`Int8NdArray`].
    Int8(Int8NdArray<'a>),
    /// An [`Int16NdArray`].
    Int16(Int16NdArray<'a>),
    /// An [`Int32NdArray`].
    Int32(Int32NdArray<'a>),
    /// A [`Float32NdArray`].
    Float32(Float32NdArray<'a>),
    /// A [`Float64NdArray`].
    Float64(Float64NdArray<'a>),
    /// An [`ObjectNdArray`].
    Object(ObjectNdArray),
}

macro_rules! with_each_variant {
    ($self:expr, $arr:ident => $body:expr) => {
        match $self {
            NdArrayAny::Bool($arr) => $body,
            NdArrayAny::Uint8($arr) => $body,
            NdArrayAny::Uint16($arr) => $body,
            NdArrayAny::Uint32($arr) => $body,
            NdArrayAny::Int8($arr) => $body,
            NdArrayAny::Int16($arr) => $body,
            NdArrayAny::Int32($arr) => $body,
            NdArrayAny::Float32($arr) => $body,
            NdArrayAny::Float64($arr) => $body,
            NdArrayAny::Object($arr) => $body,
        }
    };
}

impl<'a> NdArrayAny<'a> {
    /// Returns the dtype tag of the underlying variant.
    pub fn dtype(&self) -> DType {
        with_each_variant!(self, arr => arr.dtype())
    }

    /// Returns the shape of the array.
    pub fn shape(&self) -> &Shape {
        with_each_variant!(self, arr => arr.shape())
    }

    /// Returns the total element count.
    pub fn len(&self) -> usize {
        with_each_variant!(self, arr => arr.len())
    }

    /// Returns `true` if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        with_each_variant!(self, arr => arr.is_empty())
    }

    /// Returns the number of dimensions.
    pub fn dimension(&self) -> usize {
        with_each_variant!(self, arr => arr.dimension())
    }

    /// Returns the element at the given flat index, read as the fixed-width
    /// element type `S`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DTypeMismatch`] if `S` does not match the array's
    /// dtype (object arrays match no `S`), and [`Error::IndexOutOfRange`] if
    /// `index >= self.len()`.
    pub fn get_as<S: Scalar>(&self, index: usize) -> Result<S> {
        let bytes = match self.fixed_bytes() {
            Some(bytes) if self.dtype() == S::DTYPE => bytes,
            _ => {
                return Err(Error::DTypeMismatch {
                    lhs: S::DTYPE,
                    rhs: self.dtype(),
                })
            }
        };
        let len = self.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        let start = index * S::WIDTH;
        Ok(S::read(&bytes[start..start + S::WIDTH]))
    }

    /// Returns the element at the given flat index as a shared value handle.
    ///
    /// Fixed-width variants box the element in a fresh handle; object arrays
    /// return a copy of the stored handle, preserving value identity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<AnyValue> {
        match self {
            NdArrayAny::Object(arr) => Ok(arr.get(index)?.clone()),
            NdArrayAny::Bool(arr) => Ok(value(arr.get(index)?)),
            NdArrayAny::Uint8(arr) => Ok(value(arr.get(index)?)),
            NdArrayAny::Uint16(arr) => Ok(value(arr.get(index)?)),
            NdArrayAny::Uint32(arr) => Ok(value(arr.get(index)?)),
            NdArrayAny::Int8(arr) => Ok(value(arr.get(index)?)),
            NdArrayAny::Int16(arr) => Ok(value(arr.get(index)?)),
            NdArrayAny::Int32(arr) => Ok(value(arr.get(index)?)),
            NdArrayAny::Float32(arr) => Ok(value(arr.get(index)?)),
            NdArrayAny::Float64(arr) => Ok(value(arr.get(index)?)),
        }
    }

    /// Replaces the element at the given flat index.
    ///
    /// Object arrays store the handle as-is; fixed-width variants read the
    /// handle as their element type and write it into the buffer, detaching a
    /// borrowed view first like [`NdArrayBase::set`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DTypeMismatch`] if the handle does not hold a
    /// fixed-width variant's element type, and [`Error::IndexOutOfRange`] if
    /// `index >= self.len()`.
    pub fn set(&mut self, index: usize, new: AnyValue) -> Result<()> {
        match self {
            NdArrayAny::Object(arr) => arr.set(index, new),
            NdArrayAny::Bool(arr) => set_fixed(arr, index, &new),
            NdArrayAny::Uint8(arr) => set_fixed(arr, index, &new),
            NdArrayAny::Uint16(arr) => set_fixed(arr, index, &new),
            NdArrayAny::Uint32(arr) => set_fixed(arr, index, &new),
            NdArrayAny::Int8(arr) => set_fixed(arr, index, &new),
            NdArrayAny::Int16(arr) => set_fixed(arr, index, &new),
            NdArrayAny::Int32(arr) => set_fixed(arr, index, &new),
            NdArrayAny::Float32(arr) => set_fixed(arr, index, &new),
            NdArrayAny::Float64(arr) => set_fixed(arr, index, &new),
        }
    }

    fn fixed_bytes(&self) -> Option<&[u8]> {
        match self {
            NdArrayAny::Object(_) => None,
            NdArrayAny::Bool(arr) => Some(arr.as_bytes()),
            NdArrayAny::Uint8(arr) => Some(arr.as_bytes()),
            NdArrayAny::Uint16(arr) => Some(arr.as_bytes()),
            NdArrayAny::Uint32(arr) => Some(arr.as_bytes()),
            NdArrayAny::Int8(arr) => Some(arr.as_bytes()),
            NdArrayAny::Int16(arr) => Some(arr.as_bytes()),
            NdArrayAny::Int32(arr) => Some(arr.as_bytes()),
            NdArrayAny::Float32(arr) => Some(arr.as_bytes()),
            NdArrayAny::Float64(arr) => Some(arr.as_bytes()),
        }
    }

    /// Concatenates two arrays of equal dtype into a new owned 1-D array.
    ///
    /// The result holds `self`'s elements followed by `other`'s, in order,
    /// under the flat shape `[self.len() + other.len()]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DTypeMismatch`] if the dtypes differ; nothing is
    /// produced in that case.
    pub fn concat(&self, other: &NdArrayAny<'_>) -> Result<NdArrayAny<'static>> {
        match (self, other) {
            (NdArrayAny::Bool(a), NdArrayAny::Bool(b)) => Ok(NdArrayAny::Bool(a.concat(b))),
            (NdArrayAny::Uint8(a), NdArrayAny::Uint8(b)) => Ok(NdArrayAny::Uint8(a.concat(b))),
            (NdArrayAny::Uint16(a), NdArrayAny::Uint16(b)) => Ok(NdArrayAny::Uint16(a.concat(b))),
            (NdArrayAny::Uint32(a), NdArrayAny::Uint32(b)) => Ok(NdArrayAny::Uint32(a.concat(b))),
            (NdArrayAny::Int8(a), NdArrayAny::Int8(b)) => Ok(NdArrayAny::Int8(a.concat(b))),
            (NdArrayAny::Int16(a), NdArrayAny::Int16(b)) => Ok(NdArrayAny::Int16(a.concat(b))),
            (NdArrayAny::Int32(a), NdArrayAny::Int32(b)) => Ok(NdArrayAny::Int32(a.concat(b))),
            (NdArrayAny::Float32(a), NdArrayAny::Float32(b)) => {
                Ok(NdArrayAny::Float32(a.concat(b)))
            }
            (NdArrayAny::Float64(a), NdArrayAny::Float64(b)) => {
                Ok(NdArrayAny::Float64(a.concat(b)))
            }
            (NdArrayAny::Object(a), NdArrayAny::Object(b)) => Ok(NdArrayAny::Object(a.concat(b))),
            (lhs, rhs) => Err(Error::DTypeMismatch {
                lhs: lhs.dtype(),
                rhs: rhs.dtype(),
            }),
        }
    }

    /// Copies the array into a typed array of dtype `S`, converting each
    /// element through `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DTypeMismatch`] if the array is an object array,
    /// which has no numeric representation.
    fn to_typed<S: Scalar>(&self) -> Result<NdArrayBase<'static, S>> {
        match self {
            NdArrayAny::Object(_) => Err(Error::DTypeMismatch {
                lhs: S::DTYPE,
                rhs: DType::Object,
            }),
            NdArrayAny::Bool(arr) => Ok(arr.cast::<S>()),
            NdArrayAny::Uint8(arr) => Ok(arr.cast::<S>()),
            NdArrayAny::Uint16(arr) => Ok(arr.cast::<S>()),
            NdArrayAny::Uint32(arr) => Ok(arr.cast::<S>()),
            NdArrayAny::Int8(arr) => Ok(arr.cast::<S>()),
            NdArrayAny::Int16(arr) => Ok(arr.cast::<S>()),
            NdArrayAny::Int32(arr) => Ok(arr.cast::<S>()),
            NdArrayAny::Float32(arr) => Ok(arr.cast::<S>()),
            NdArrayAny::Float64(arr) => Ok(arr.cast::<S>()),
        }
    }
}

fn set_fixed<S: Scalar>(arr: &mut NdArrayBase<'_, S>, index: usize, new: &AnyValue) -> Result<()> {
    match new.downcast_ref::<S>() {
        Some(&v) => arr.set(index, v),
        None => Err(Error::DTypeMismatch {
            lhs: S::DTYPE,
            rhs: DType::Object,
        }),
    }
}

macro_rules! impl_variant {
    ($variant:ident, $alias:ident, $as_fn:ident) => {
        impl<'a> From<$alias<'a>> for NdArrayAny<'a> {
            fn from(arr: $alias<'a>) -> Self {
                NdArrayAny::$variant(arr)
            }
        }
        impl<'a> NdArrayAny<'a> {
            #[doc = concat!(
                "Returns the underlying [`", stringify!($alias),
                "`], or `None` if this is not a `", stringify!($variant), "` array."
            )]
            pub fn $as_fn(&self) -> Option<&$alias<'a>> {
                match self {
                    NdArrayAny::$variant(arr) => Some(arr),
                    _ => None,
                }
            }
        }
    };
}

impl_variant!(Bool, BoolNdArray, as_bool);
impl_variant!(Uint8, Uint8NdArray, as_uint8);
impl_variant!(Uint16, Uint16NdArray, as_uint16);
impl_variant!(Uint32, Uint32NdArray, as_uint32);
impl_variant!(Int8, Int8NdArray, as_int8);
impl_variant!(Int16, Int16NdArray, as_int16);
impl_variant!(Int32, Int32NdArray, as_int32);
impl_variant!(Float32, Float32NdArray, as_float32);
impl_variant!(Float64, Float64NdArray, as_float64);

impl<'a> From<ObjectNdArray> for NdArrayAny<'a> {
    fn from(arr: ObjectNdArray) -> Self {
        NdArrayAny::Object(arr)
    }
}
impl<'a> NdArrayAny<'a> {
    /// Returns the underlying [`ObjectNdArray`], or `None` if this is not an
    /// `Object` array.
    pub fn as_object(&self) -> Option<&ObjectNdArray> {
        match self {
            NdArrayAny::Object(arr) => Some(arr),
            _ => None,
        }
    }
}

/// A source value the [`ndarray()`] dispatcher can build an array from.
pub enum NdArraySource<'a> {
    /// An element count: allocate zero-filled storage (placeholder-filled
    /// for object arrays).
    Size(usize),
    /// A raw externally owned byte buffer: alias it in place, without
    /// copying. Not applicable to object arrays.
    Bytes(&'a [u8]),
    /// A sequence of numbers: convert each per the target dtype.
    Numbers(&'a [f64]),
    /// A sequence of arbitrary value handles, for object arrays.
    Values(Vec<AnyValue>),
    /// An existing array: copy its storage (never alias), converting
    /// elements if the target dtype differs.
    Array(&'a NdArrayAny<'a>),
}

impl From<usize> for NdArraySource<'_> {
    fn from(len: usize) -> Self {
        NdArraySource::Size(len)
    }
}
impl<'a> From<&'a [u8]> for NdArraySource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        NdArraySource::Bytes(bytes)
    }
}
impl<'a> From<&'a [f64]> for NdArraySource<'a> {
    fn from(numbers: &'a [f64]) -> Self {
        NdArraySource::Numbers(numbers)
    }
}
impl<'a, const N: usize> From<&'a [f64; N]> for NdArraySource<'a> {
    fn from(numbers: &'a [f64; N]) -> Self {
        NdArraySource::Numbers(numbers)
    }
}
impl From<Vec<AnyValue>> for NdArraySource<'_> {
    fn from(values: Vec<AnyValue>) -> Self {
        NdArraySource::Values(values)
    }
}
impl<'a> From<&'a NdArrayAny<'a>> for NdArraySource<'a> {
    fn from(array: &'a NdArrayAny<'a>) -> Self {
        NdArraySource::Array(array)
    }
}

/// Configuration for the [`ndarray()`] dispatcher.
///
/// A missing dtype defaults to [`DType::Object`]; a missing shape defaults to
/// the flat `[len]` shape.
#[derive(Clone, Debug, Default)]
pub struct NdArrayOpts {
    /// The dtype of the array to build.
    pub dtype: Option<DType>,
    /// The shape of the array to build.
    pub shape: Option<Shape>,
}

impl NdArrayOpts {
    /// Options selecting an explicit dtype and the default shape.
    pub fn with_dtype(dtype: DType) -> Self {
        Self {
            dtype: Some(dtype),
            shape: None,
        }
    }

    /// Sets an explicit shape.
    pub fn shaped(mut self, shape: impl Into<Shape>) -> Self {
        self.shape = Some(shape.into());
        self
    }
}

/// Builds an array of the configured dtype and shape from a heterogeneous
/// source value.
///
/// This is the single construction entry point that selects the concrete
/// dtype variant; see [`NdArraySource`] for the accepted sources and
/// [`NdArrayOpts`] for the defaults. The source is never mutated, and an
/// existing-array source is always copied, never aliased; the only aliasing
/// construction is [`NdArraySource::Bytes`].
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if an explicit shape disagrees with the
/// source's element count, and [`Error::DTypeMismatch`] for conversions the
/// dtype cannot express (an object source under a fixed-width dtype).
///
/// # Panics
///
/// Panics if a raw byte buffer is supplied for an object array; object
/// arrays have no binary representation, so that combination is a contract
/// violation rather than a runtime condition.
pub fn ndarray<'a>(
    source: impl Into<NdArraySource<'a>>,
    opts: NdArrayOpts,
) -> Result<NdArrayAny<'a>> {
    let source = source.into();
    match opts.dtype.unwrap_or(DType::Object) {
        DType::Bool => build_fixed::<bool>(source, opts.shape).map(NdArrayAny::Bool),
        DType::Uint8 => build_fixed::<u8>(source, opts.shape).map(NdArrayAny::Uint8),
        DType::Uint16 => build_fixed::<u16>(source, opts.shape).map(NdArrayAny::Uint16),
        DType::Uint32 => build_fixed::<u32>(source, opts.shape).map(NdArrayAny::Uint32),
        DType::Int8 => build_fixed::<i8>(source, opts.shape).map(NdArrayAny::Int8),
        DType::Int16 => build_fixed::<i16>(source, opts.shape).map(NdArrayAny::Int16),
        DType::Int32 => build_fixed::<i32>(source, opts.shape).map(NdArrayAny::Int32),
        DType::Float32 => build_fixed::<f32>(source, opts.shape).map(NdArrayAny::Float32),
        DType::Float64 => build_fixed::<f64>(source, opts.shape).map(NdArrayAny::Float64),
        DType::Object => build_object(source, opts.shape).map(NdArrayAny::Object),
    }
}

fn build_fixed<'a, S: Scalar>(
    source: NdArraySource<'a>,
    shape: Option<Shape>,
) -> Result<NdArrayBase<'a, S>> {
    match source {
        NdArraySource::Size(len) => {
            let shape = shape.unwrap_or_else(|| Shape::from(len));
            shape.validate(len)?;
            Ok(NdArrayBase::zeros(shape))
        }
        NdArraySource::Bytes(bytes) => match shape {
            Some(shape) => NdArrayBase::from_bytes_shaped(bytes, shape),
            None => NdArrayBase::from_bytes(bytes),
        },
        NdArraySource::Numbers(numbers) => {
            let values: Vec<S> = numbers.iter().map(|&x| S::from_f64(x)).collect();
            match shape {
                Some(shape) => NdArrayBase::with_shape(&values, shape),
                None => Ok(NdArrayBase::new(&values)),
            }
        }
        NdArraySource::Values(_) => Err(Error::DTypeMismatch {
            lhs: S::DTYPE,
            rhs: DType::Object,
        }),
        NdArraySource::Array(array) => {
            let copied = array.to_typed::<S>()?;
            match shape {
                Some(shape) => copied.reshaped(shape),
                None => Ok(copied),
            }
        }
    }
}

fn build_object(source: NdArraySource<'_>, shape: Option<Shape>) -> Result<ObjectNdArray> {
    match source {
        NdArraySource::Size(len) => {
            let shape = shape.unwrap_or_else(|| Shape::from(len));
            shape.validate(len)?;
            Ok(ObjectNdArray::filled(shape))
        }
        NdArraySource::Bytes(_) => {
            panic!("object arrays have no binary representation; a raw byte buffer cannot back one")
        }
        NdArraySource::Numbers(numbers) => {
            let values: Vec<AnyValue> = numbers.iter().map(|&x| value(x)).collect();
            match shape {
                Some(shape) => ObjectNdArray::with_shape(values, shape),
                None => Ok(ObjectNdArray::new(values)),
            }
        }
        NdArraySource::Values(values) => match shape {
            Some(shape) => ObjectNdArray::with_shape(values, shape),
            None => Ok(ObjectNdArray::new(values)),
        },
        NdArraySource::Array(array) => {
            let copied = match array {
                NdArrayAny::Object(obj) => obj.clone(),
                fixed => {
                    let numbers = fixed.to_typed::<f64>()?;
                    let values: Vec<AnyValue> = numbers.iter().map(value).collect();
                    ObjectNdArray::with_shape(values, numbers.shape().clone())?
                }
            };
            match shape {
                Some(shape) => copied.reshaped(shape),
                None => Ok(copied),
            }
        }
    }
}

/// Returns `true` iff `value` is an array produced by this crate's
/// constructors or dispatcher.
///
/// The check is tag-based (`TypeId`), never structural: a plain byte vector
/// or number sequence with identical content is not an array, and neither is
/// any foreign buffer type that merely looks compatible.
pub fn is_ndarray(value: &dyn Any) -> bool {
    value.is::<NdArrayAny<'static>>()
        || value.is::<ObjectNdArray>()
        || value.is::<BoolNdArray<'static>>()
        || value.is::<Uint8NdArray<'static>>()
        || value.is::<Uint16NdArray<'static>>()
        || value.is::<Uint32NdArray<'static>>()
        || value.is::<Int8NdArray<'static>>()
        || value.is::<Int16NdArray<'static>>()
        || value.is::<Int32NdArray<'static>>()
        || value.is::<Float32NdArray<'static>>()
        || value.is::<Float64NdArray<'static>>()
}
