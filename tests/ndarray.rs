use std::rc::Rc;

use ndbuf::{
    is_ndarray, ndarray, value, BoolNdArray, DType, Error, Float32NdArray, Float64NdArray,
    Int16NdArray, NdArrayAny, NdArrayOpts, NdArraySource, ObjectNdArray, Uint32NdArray,
    Uint8NdArray,
};

#[test]
fn is_ndarray_distinguishes_arrays_from_plain_buffers() {
    assert!(!is_ndarray(&[1u8, 2, 3, 4, 5, 6]));
    assert!(!is_ndarray(&vec![1u8, 2, 3, 4, 5, 6]));
    assert!(!is_ndarray(&vec![1.0f64, 2.0, 3.0]));
    assert!(!is_ndarray(&"not an array"));

    assert!(is_ndarray(&Uint8NdArray::new(&[1, 2, 3, 4, 5, 6])));
    assert!(is_ndarray(&Float64NdArray::zeros([2, 3])));
    assert!(is_ndarray(&ObjectNdArray::new(vec![value(1_i32)])));
    assert!(is_ndarray(
        &ndarray(6, NdArrayOpts::with_dtype(DType::Int32)).unwrap()
    ));
}

fn check_fixed_contract<S: ndbuf::Scalar>(values: &[S]) {
    let nd = ndbuf::NdArrayBase::<S>::new(values);
    assert_eq!(nd.dtype(), S::DTYPE);
    assert_eq!(nd.shape(), &[values.len()]);
    assert_eq!(nd.len(), values.len());
    assert_eq!(nd.nbytes(), values.len() * S::WIDTH);
    assert_eq!(nd.to_vec(), values);

    let copy = nd.clone();
    assert_eq!(copy, nd);
    assert!(!std::ptr::eq(
        nd.as_bytes().as_ptr(),
        copy.as_bytes().as_ptr()
    ));
}

#[test]
fn uniform_contract_across_fixed_dtypes() {
    check_fixed_contract::<bool>(&[true, false, true, true, false, false]);
    check_fixed_contract::<u8>(&[1, 2, 3, 4, 5, 6]);
    check_fixed_contract::<u16>(&[1, 2, 3, 4, 5, 6]);
    check_fixed_contract::<u32>(&[1, 2, 3, 4, 5, 6]);
    check_fixed_contract::<i8>(&[-1, 2, -3, 4, -5, 6]);
    check_fixed_contract::<i16>(&[-1, 2, -3, 4, -5, 6]);
    check_fixed_contract::<i32>(&[-1, 2, -3, 4, -5, 6]);
    check_fixed_contract::<f32>(&[1.5, 2.0, 3.0, 4.0, 5.0, 6.0]);
    check_fixed_contract::<f64>(&[1.5, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn views_alias_until_written() {
    let bytes: Vec<u8> = (1..=24).collect();
    let nd = Uint32NdArray::from_bytes_shaped(&bytes, [2, 3]).unwrap();
    assert!(nd.is_view());
    assert!(std::ptr::eq(bytes.as_ptr(), nd.as_bytes().as_ptr()));
    assert_eq!(nd.len(), 6);

    let mut detached = nd.clone();
    assert!(!detached.is_view());
    detached.set(0, 7).unwrap();
    assert_eq!(bytes[0], 1);
}

#[test]
fn concat_flattens_and_checks_dtype() {
    let a = NdArrayAny::from(Int16NdArray::with_shape(&[1, 2, 3, 4], [2, 2]).unwrap());
    let b = NdArrayAny::from(Int16NdArray::new(&[5, 6]));
    let joined = a.concat(&b).unwrap();
    assert_eq!(joined.shape(), &[6]);
    assert_eq!(joined.dimension(), 1);
    assert_eq!(joined.get_as::<i16>(4), Ok(5));

    let mismatched = NdArrayAny::from(Float32NdArray::new(&[1.0]));
    assert_eq!(
        a.concat(&mismatched).unwrap_err(),
        Error::DTypeMismatch {
            lhs: DType::Int16,
            rhs: DType::Float32,
        }
    );
}

#[test]
fn object_arrays_hold_anything_and_share_on_concat() {
    let a = value("a");
    let one = value(1_i32);
    let yes = value(true);
    let nd0 = ObjectNdArray::new(vec![a.clone(), one.clone(), yes.clone()]);
    assert_eq!(nd0.dtype(), DType::Object);
    assert_eq!(nd0.shape(), &[3]);

    let nd1 = ObjectNdArray::new(vec![value("b")]);
    let joined = nd0.concat(&nd1);
    assert_eq!(joined.len(), 4);
    assert_eq!(joined.shape(), &[4]);
    assert!(Rc::ptr_eq(joined.get(0).unwrap(), &a));
    assert!(Rc::ptr_eq(joined.get(1).unwrap(), &one));
    assert!(Rc::ptr_eq(joined.get(2).unwrap(), &yes));
    assert_eq!(joined.get(3).unwrap().downcast_ref::<&str>(), Some(&"b"));
}

#[test]
fn dispatcher_defaults_to_object_dtype() {
    let nd = ndarray(&[1.0, 2.0, 3.0], NdArrayOpts::default()).unwrap();
    assert_eq!(nd.dtype(), DType::Object);
    assert_eq!(nd.shape(), &[3]);
    let obj = nd.as_object().unwrap();
    assert_eq!(obj.get(2).unwrap().downcast_ref::<f64>(), Some(&3.0));
}

#[test]
fn dispatcher_builds_every_fixed_dtype() {
    let numbers = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    for dtype in [
        DType::Bool,
        DType::Uint8,
        DType::Uint16,
        DType::Uint32,
        DType::Int8,
        DType::Int16,
        DType::Int32,
        DType::Float32,
        DType::Float64,
    ] {
        let flat = ndarray(&numbers, NdArrayOpts::with_dtype(dtype)).unwrap();
        assert_eq!(flat.dtype(), dtype);
        assert_eq!(flat.shape(), &[6]);

        let shaped = ndarray(&numbers, NdArrayOpts::with_dtype(dtype).shaped([2, 3])).unwrap();
        assert_eq!(shaped.dtype(), dtype);
        assert_eq!(shaped.shape(), &[2, 3]);
        assert_eq!(shaped.len(), 6);
    }
}

#[test]
fn dispatcher_size_source_zero_fills() {
    for dtype in [
        DType::Bool,
        DType::Uint8,
        DType::Uint16,
        DType::Uint32,
        DType::Int8,
        DType::Int16,
        DType::Int32,
        DType::Float32,
        DType::Float64,
        DType::Object,
    ] {
        let nd = ndarray(6, NdArrayOpts::with_dtype(dtype)).unwrap();
        assert_eq!(nd.dtype(), dtype);
        assert_eq!(nd.shape(), &[6]);
        assert_eq!(nd.len(), 6);
    }
    let nd = ndarray(6, NdArrayOpts::with_dtype(DType::Float64)).unwrap();
    assert_eq!(nd.get_as::<f64>(5), Ok(0.0));
}

#[test]
fn dispatcher_bytes_source_aliases() {
    let bytes = [1u8, 0, 0, 0, 2, 0, 0, 0];
    let nd = ndarray(
        NdArraySource::Bytes(&bytes),
        NdArrayOpts::with_dtype(DType::Uint32),
    )
    .unwrap();
    assert_eq!(nd.len(), 2);
    let view = nd.as_uint32().unwrap();
    assert!(view.is_view());
    assert!(std::ptr::eq(bytes.as_ptr(), view.as_bytes().as_ptr()));
    #[cfg(target_endian = "little")]
    assert_eq!(view.to_vec(), [1, 2]);
}

#[test]
fn dispatcher_array_source_copies_and_converts() {
    let source = ndarray(
        &[1.0, 2.0, 3.0, 4.0],
        NdArrayOpts::with_dtype(DType::Int32).shaped([2, 2]),
    )
    .unwrap();

    let same = ndarray(&source, NdArrayOpts::with_dtype(DType::Int32)).unwrap();
    assert_eq!(same.shape(), &[2, 2]);
    assert!(!std::ptr::eq(
        source.as_int32().unwrap().as_bytes().as_ptr(),
        same.as_int32().unwrap().as_bytes().as_ptr()
    ));

    let wider = ndarray(&source, NdArrayOpts::with_dtype(DType::Float64)).unwrap();
    assert_eq!(wider.dtype(), DType::Float64);
    assert_eq!(wider.shape(), &[2, 2]);
    assert_eq!(wider.get_as::<f64>(3), Ok(4.0));

    let boxed = ndarray(&source, NdArrayOpts::default()).unwrap();
    assert_eq!(boxed.dtype(), DType::Object);
    assert_eq!(
        boxed
            .as_object()
            .unwrap()
            .get(0)
            .unwrap()
            .downcast_ref::<f64>(),
        Some(&1.0)
    );
}

#[test]
fn dispatcher_rejects_impossible_combinations() {
    assert_eq!(
        ndarray(
            vec![value(1_i32), value("a")],
            NdArrayOpts::with_dtype(DType::Uint8)
        )
        .unwrap_err(),
        Error::DTypeMismatch {
            lhs: DType::Uint8,
            rhs: DType::Object,
        }
    );
    assert_eq!(
        ndarray(&[1.0, 2.0, 3.0], NdArrayOpts::with_dtype(DType::Uint8).shaped([2, 2]))
            .unwrap_err(),
        Error::ShapeMismatch {
            expected: 4,
            actual: 3,
        }
    );
}

#[cfg(feature = "ndarray")]
#[test]
fn ndarray_interop_round_trip() {
    let nd = BoolNdArray::with_shape(&[true, false, true, true], [2, 2]).unwrap();
    // The dispatcher function and the crate re-export share the `ndarray`
    // name in different namespaces; both must resolve.
    let array: ndbuf::ndarray::ArrayD<bool> = nd.to_array();
    assert_eq!(array.shape(), [2, 2]);
    let back = BoolNdArray::from_array(&array);
    assert_eq!(back, nd);
}
