//! Elementwise arithmetic and reductions.
//!
//! Arithmetic on same-shaped arrays is always elementwise and fills a new
//! array with the result. The checked variants here reject mismatched
//! shapes with an error instead of panicking.

use std::ops::{Add, Mul, Sub};

use ndarray::{Array1, Array2, Axis, Zip};
use ndarray_stats::QuantileExt;
use num_traits::Float;

use crate::error::{check_axis, ArrayError};

fn check_same_shape<A>(a: &Array1<A>, b: &Array1<A>) -> Result<(), ArrayError> {
    if a.shape() != b.shape() {
        return Err(ArrayError::ShapeMismatch {
            left: a.shape().to_vec(),
            right: b.shape().to_vec(),
        });
    }
    Ok(())
}

/// Elementwise `a - b` over same-shaped arrays.
///
/// ```
/// use array_primer::arithmetic::checked_sub;
/// use ndarray::array;
/// let a = array![20_i64, 30, 40, 50];
/// let b = array![0_i64, 1, 2, 3];
/// assert_eq!(checked_sub(&a, &b).unwrap(), array![20, 29, 38, 47]);
/// ```
pub fn checked_sub<A>(a: &Array1<A>, b: &Array1<A>) -> Result<Array1<A>, ArrayError>
where
    A: Copy + Sub<Output = A>,
{
    check_same_shape(a, b)?;
    Ok(Zip::from(a).and(b).map_collect(|&x, &y| x - y))
}

/// Elementwise `a * b` over same-shaped arrays.
pub fn checked_mul<A>(a: &Array1<A>, b: &Array1<A>) -> Result<Array1<A>, ArrayError>
where
    A: Copy + Mul<Output = A>,
{
    check_same_shape(a, b)?;
    Ok(Zip::from(a).and(b).map_collect(|&x, &y| x * y))
}

/// Elementwise square, the scalar-power example from the walkthrough.
pub fn square<A>(a: &Array1<A>) -> Array1<A>
where
    A: Copy + Mul<Output = A>,
{
    a.mapv(|x| x * x)
}

/// `scale * sin(a)`, applied elementwise.
pub fn scaled_sin<A: Float>(a: &Array1<A>, scale: A) -> Array1<A> {
    a.mapv(|x| scale * x.sin())
}

/// Largest element of the array.
pub fn max<A>(a: &Array1<A>) -> Result<A, ArrayError>
where
    A: Copy + PartialOrd,
{
    Ok(*QuantileExt::max(a)?)
}

/// Smallest element of the array.
pub fn min<A>(a: &Array1<A>) -> Result<A, ArrayError>
where
    A: Copy + PartialOrd,
{
    Ok(*QuantileExt::min(a)?)
}

/// Sum along one axis of a 2-D array; `Axis(0)` collapses rows, giving one
/// sum per column.
pub fn sum_axis<A>(m: &Array2<A>, axis: Axis) -> Result<Array1<A>, ArrayError>
where
    A: Copy + Add<Output = A> + num_traits::Zero,
{
    check_axis(axis, m.ndim())?;
    Ok(m.sum_axis(axis))
}

/// Minimum along one axis of a 2-D array; `Axis(1)` gives one minimum per
/// row.
pub fn min_axis<A>(m: &Array2<A>, axis: Axis) -> Result<Array1<A>, ArrayError>
where
    A: Copy + PartialOrd,
{
    check_axis(axis, m.ndim())?;
    if m.len_of(axis) == 0 {
        return Err(ArrayError::EmptyInput);
    }
    Ok(m.map_axis(axis, |lane| {
        lane.iter()
            .copied()
            .fold(lane[0], |acc, v| if v < acc { v } else { acc })
    }))
}

/// Cumulative sum along one axis, keeping the array's shape.
///
/// ```
/// use array_primer::arithmetic::cumsum_axis;
/// use ndarray::{array, Axis};
/// let m = array![[0_i64, 1, 2, 3], [4, 5, 6, 7], [8, 9, 10, 11]];
/// let c = cumsum_axis(&m, Axis(1)).unwrap();
/// assert_eq!(c, array![[0, 1, 3, 6], [4, 9, 15, 22], [8, 17, 27, 38]]);
/// ```
pub fn cumsum_axis<A>(m: &Array2<A>, axis: Axis) -> Result<Array2<A>, ArrayError>
where
    A: Copy + Add<Output = A>,
{
    check_axis(axis, m.ndim())?;
    let mut out = m.to_owned();
    out.accumulate_axis_inplace(axis, |&prev, curr| *curr = *curr + prev);
    Ok(out)
}

/// Elementwise exponential.
pub fn exp<A: Float>(a: &Array1<A>) -> Array1<A> {
    a.mapv(A::exp)
}

/// Elementwise square root.
pub fn sqrt<A: Float>(a: &Array1<A>) -> Array1<A> {
    a.mapv(A::sqrt)
}

/// Elementwise floor.
pub fn floor<A: Float>(a: &Array1<A>) -> Array1<A> {
    a.mapv(A::floor)
}

/// Elementwise round (half away from zero).
pub fn round<A: Float>(a: &Array1<A>) -> Array1<A> {
    a.mapv(A::round)
}
