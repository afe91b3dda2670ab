//! The closed set of element representations supported by the array family.

/// Data types (dtypes) that can be used as element representations in arrays.
///
/// Every numeric/boolean dtype has a fixed element byte width; [`Object`](DType::Object)
/// has none, as its backing storage is an ordered sequence of arbitrary
/// values rather than a binary buffer.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DType {
    /// Boolean, `bool`, stored as one byte per element.
    Bool,
    /// 8-bit unsigned integer, `u8`.
    Uint8,
    /// 16-bit unsigned integer, `u16`.
    Uint16,
    /// 32-bit unsigned integer, `u32`.
    Uint32,
    /// 8-bit signed integer, `i8`.
    Int8,
    /// 16-bit signed integer, `i16`.
    Int16,
    /// 32-bit signed integer, `i32`.
    Int32,
    /// 32-bit floating point, `f32`.
    Float32,
    /// 64-bit floating point, `f64`.
    Float64,
    /// Arbitrary values, [`AnyValue`](crate::array::AnyValue), no binary representation.
    Object,
}
impl DType {
    /// Returns the byte width of one element, or `None` for [`Object`](DType::Object).
    pub const fn width(self) -> Option<usize> {
        match self {
            DType::Bool | DType::Uint8 | DType::Int8 => Some(1),
            DType::Uint16 | DType::Int16 => Some(2),
            DType::Uint32 | DType::Int32 | DType::Float32 => Some(4),
            DType::Float64 => Some(8),
            DType::Object => None,
        }
    }

    /// Returns the canonical lowercase name of the dtype.
    pub const fn as_str(self) -> &'static str {
        match self {
            DType::Bool => "bool",
            DType::Uint8 => "uint8",
            DType::Uint16 => "uint16",
            DType::Uint32 => "uint32",
            DType::Int8 => "int8",
            DType::Int16 => "int16",
            DType::Int32 => "int32",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Object => "object",
        }
    }
}
impl std::fmt::Display for DType {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.write_str(self.as_str())
    }
}

/// A trait for types that can be used as fixed-width array elements.
///
/// The trait is implemented for `bool`, `u8`, `u16`, `u32`, `i8`, `i16`,
/// `i32`, `f32` and `f64`, binding each to its [`DType`] tag, its byte width
/// and its native-endian binary representation. The `f64` conversions are the
/// bridge used when an array is built from a plain number sequence or copied
/// across dtypes; every supported element type round-trips through `f64`
/// exactly.
pub trait Scalar: Copy + PartialEq + std::fmt::Debug + 'static {
    /// The [`DType`] tag of the implementing type.
    const DTYPE: DType;
    /// The width of one element in bytes.
    const WIDTH: usize;

    /// Reads one element from its native-endian representation.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() != Self::WIDTH`.
    fn read(bytes: &[u8]) -> Self;

    /// Writes one element in its native-endian representation.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() != Self::WIDTH`.
    fn write(self, bytes: &mut [u8]);

    /// Converts the element to a `f64`.
    fn to_f64(self) -> f64;

    /// Converts a `f64` to the element type, saturating out-of-range values.
    fn from_f64(value: f64) -> Self;

    private_decl! {}
}

macro_rules! impl_scalar {
    ($rust_type:ty, $dtype_variant:ident) => {
        impl Scalar for $rust_type {
            const DTYPE: DType = DType::$dtype_variant;
            const WIDTH: usize = std::mem::size_of::<$rust_type>();

            fn read(bytes: &[u8]) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$rust_type>()];
                raw.copy_from_slice(bytes);
                <$rust_type>::from_ne_bytes(raw)
            }

            fn write(self, bytes: &mut [u8]) {
                bytes.copy_from_slice(&self.to_ne_bytes());
            }

            fn to_f64(self) -> f64 {
                self as f64
            }

            fn from_f64(value: f64) -> Self {
                value as $rust_type
            }

            private_impl! {}
        }
    };
}

impl_scalar!(u8, Uint8);
impl_scalar!(u16, Uint16);
impl_scalar!(u32, Uint32);
impl_scalar!(i8, Int8);
impl_scalar!(i16, Int16);
impl_scalar!(i32, Int32);
impl_scalar!(f32, Float32);
impl_scalar!(f64, Float64);

impl Scalar for bool {
    const DTYPE: DType = DType::Bool;
    const WIDTH: usize = 1;

    fn read(bytes: &[u8]) -> Self {
        assert_eq!(bytes.len(), 1);
        bytes[0] != 0
    }

    fn write(self, bytes: &mut [u8]) {
        assert_eq!(bytes.len(), 1);
        bytes[0] = self as u8;
    }

    fn to_f64(self) -> f64 {
        if self {
            1.0
        } else {
            0.0
        }
    }

    fn from_f64(value: f64) -> Self {
        value != 0.0
    }

    private_impl! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths() {
        assert_eq!(DType::Bool.width(), Some(1));
        assert_eq!(DType::Uint8.width(), Some(1));
        assert_eq!(DType::Int8.width(), Some(1));
        assert_eq!(DType::Uint16.width(), Some(2));
        assert_eq!(DType::Int16.width(), Some(2));
        assert_eq!(DType::Uint32.width(), Some(4));
        assert_eq!(DType::Int32.width(), Some(4));
        assert_eq!(DType::Float32.width(), Some(4));
        assert_eq!(DType::Float64.width(), Some(8));
        assert_eq!(DType::Object.width(), None);
    }

    #[test]
    fn scalar_tags_match_registry() {
        fn check<S: Scalar>() {
            assert_eq!(S::DTYPE.width(), Some(S::WIDTH));
        }
        check::<bool>();
        check::<u8>();
        check::<u16>();
        check::<u32>();
        check::<i8>();
        check::<i16>();
        check::<i32>();
        check::<f32>();
        check::<f64>();
    }

    #[test]
    fn names() {
        let names = [
            (DType::Bool, "bool"),
            (DType::Uint8, "uint8"),
            (DType::Uint16, "uint16"),
            (DType::Uint32, "uint32"),
            (DType::Int8, "int8"),
            (DType::Int16, "int16"),
            (DType::Int32, "int32"),
            (DType::Float32, "float32"),
            (DType::Float64, "float64"),
            (DType::Object, "object"),
        ];
        for (dtype, name) in names {
            assert_eq!(dtype.as_str(), name);
        }
    }

    #[test]
    fn read_write_round_trip() {
        fn check<S: Scalar>(value: S) {
            let mut raw = [0u8; 8];
            value.write(&mut raw[..S::WIDTH]);
            assert_eq!(S::read(&raw[..S::WIDTH]), value);
        }
        check(true);
        check(0xa5_u8);
        check(0xa5a5_u16);
        check(0xa5a5_a5a5_u32);
        check(-91_i8);
        check(-23131_i16);
        check(-1_515_870_811_i32);
        check(1.5_f32);
        check(-2.25_f64);
    }

    #[test]
    fn f64_bridge_is_exact() {
        assert_eq!(u8::from_f64(250.0), 250);
        assert_eq!(u32::from_f64(4_000_000_000.0), 4_000_000_000);
        assert_eq!(i32::from_f64(-5.0), -5);
        assert!(bool::from_f64(1.0));
        assert!(!bool::from_f64(0.0));
        assert_eq!(f32::from_f64(1.5), 1.5);
        assert_eq!(u32::MAX.to_f64(), 4_294_967_295.0);
    }
}
