//! Integration tests for elementwise arithmetic and reductions, using the
//! literal oracle values from the walkthrough.

use array_primer::arithmetic::{
    checked_mul, checked_sub, cumsum_axis, exp, floor, max, min, min_axis, round, scaled_sin,
    sqrt, square, sum_axis,
};
use array_primer::ArrayError;
use ndarray::{array, Array1, Axis};

// ---------------------------------------------------------------------------
// Elementwise operations
// ---------------------------------------------------------------------------

#[test]
fn subtraction_is_elementwise() {
    let a = array![20_i64, 30, 40, 50];
    let b = array![0_i64, 1, 2, 3];
    assert_eq!(checked_sub(&a, &b).unwrap(), array![20, 29, 38, 47]);
}

#[test]
fn multiplication_is_elementwise() {
    let a = array![20_i64, 30, 40, 50];
    let b = array![0_i64, 1, 2, 3];
    assert_eq!(checked_mul(&a, &b).unwrap(), array![0, 30, 80, 150]);
}

#[test]
fn mismatched_shapes_are_an_error() {
    let a = array![20_i64, 30, 40, 50];
    let b = array![0_i64, 1, 2];
    let err = checked_sub(&a, &b).unwrap_err();
    assert!(matches!(err, ArrayError::ShapeMismatch { .. }), "{}", err);
}

#[test]
fn square_of_small_ints() {
    let b = array![0_i64, 1, 2, 3];
    assert_eq!(square(&b), array![0, 1, 4, 9]);
}

#[test]
fn scaled_sine_matches_oracle() {
    let a = array![20.0_f64, 30.0, 40.0, 50.0];
    let got = scaled_sin(&a, 10.0);
    let expected = [9.12945251, -9.88031624, 7.4511316, -2.62374854];
    for (g, w) in got.iter().zip(expected) {
        assert!((g - w).abs() < 1e-7, "got {} want {}", g, w);
    }
}

// ---------------------------------------------------------------------------
// Whole-array reductions
// ---------------------------------------------------------------------------

#[test]
fn max_min_sum() {
    let a = array![20_i64, 30, 40, 50];
    assert_eq!(max(&a).unwrap(), 50);
    assert_eq!(min(&a).unwrap(), 20);
    assert_eq!(a.sum(), 140);
}

#[test]
fn max_of_empty_is_an_error() {
    let a: Array1<i64> = array![];
    assert!(matches!(max(&a), Err(ArrayError::EmptyInput)));
}

// ---------------------------------------------------------------------------
// Axis reductions
// ---------------------------------------------------------------------------

#[test]
fn axis_reductions_match_oracle() {
    // 0..12 laid out as (3, 4)
    let m = Array1::from_iter(0_i64..12).into_shape((3, 4)).unwrap();

    assert_eq!(sum_axis(&m, Axis(0)).unwrap(), array![12, 15, 18, 21]);
    assert_eq!(min_axis(&m, Axis(1)).unwrap(), array![0, 4, 8]);
    assert_eq!(
        cumsum_axis(&m, Axis(1)).unwrap(),
        array![[0, 1, 3, 6], [4, 9, 15, 22], [8, 17, 27, 38]]
    );
}

#[test]
fn axis_out_of_bounds_is_an_error() {
    let m = array![[1_i64, 2], [3, 4]];
    assert!(matches!(
        sum_axis(&m, Axis(2)),
        Err(ArrayError::AxisOutOfBounds { axis: 2, ndim: 2 })
    ));
    assert!(matches!(
        cumsum_axis(&m, Axis(5)),
        Err(ArrayError::AxisOutOfBounds { axis: 5, ndim: 2 })
    ));
}

#[test]
fn cumsum_does_not_mutate_input() {
    let m = array![[1_i64, 2], [3, 4]];
    let _ = cumsum_axis(&m, Axis(0)).unwrap();
    assert_eq!(m, array![[1, 2], [3, 4]]);
}

// ---------------------------------------------------------------------------
// Float maps
// ---------------------------------------------------------------------------

#[test]
fn float_maps_match_oracle() {
    let e = array![0.0_f64, 1.0, 2.0];

    let exps = exp(&e);
    let expected = [1.0, 2.71828183, 7.3890561];
    for (g, w) in exps.iter().zip(expected) {
        assert!((g - w).abs() < 1e-7, "exp: got {} want {}", g, w);
    }

    let roots = sqrt(&e);
    let expected = [0.0, 1.0, 1.41421356];
    for (g, w) in roots.iter().zip(expected) {
        assert!((g - w).abs() < 1e-7, "sqrt: got {} want {}", g, w);
    }

    assert_eq!(floor(&exps), array![1.0, 2.0, 7.0]);
    assert_eq!(round(&exps), array![1.0, 3.0, 7.0]);
}
