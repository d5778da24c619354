//! Elementwise comparison masks, whole-array equality, and axis sorting.

use ndarray::{Array1, Array2, Axis, Zip};

use crate::error::{check_axis, ArrayError};

/// Elementwise `a == b`, one boolean per element pair.
///
/// ```
/// use array_primer::comparison::eq_elementwise;
/// use ndarray::array;
/// let a = array![1_i64, 2, 3];
/// let b = array![5_i64, 4, 3];
/// assert_eq!(eq_elementwise(&a, &b).unwrap(), array![false, false, true]);
/// ```
pub fn eq_elementwise<A>(a: &Array1<A>, b: &Array1<A>) -> Result<Array1<bool>, ArrayError>
where
    A: PartialEq,
{
    if a.shape() != b.shape() {
        return Err(ArrayError::ShapeMismatch {
            left: a.shape().to_vec(),
            right: b.shape().to_vec(),
        });
    }
    Ok(Zip::from(a).and(b).map_collect(|x, y| x == y))
}

/// Elementwise `a <= threshold`.
pub fn le_scalar<A>(a: &Array1<A>, threshold: A) -> Array1<bool>
where
    A: Copy + PartialOrd,
{
    a.mapv(|x| x <= threshold)
}

/// Whole-array equality: same shape and every element equal.
pub fn arrays_equal<A: PartialEq>(a: &Array1<A>, b: &Array1<A>) -> bool {
    a == b
}

/// Sort each lane along the given axis, returning a new array.
///
/// Sorting along `Axis(0)` orders every column independently; along
/// `Axis(1)` it orders every row.
///
/// ```
/// use array_primer::comparison::sorted_axis;
/// use ndarray::{array, Axis};
/// let c = array![[2_i64, 4, 8], [1, 13, 7]];
/// assert_eq!(
///     sorted_axis(&c, Axis(0)).unwrap(),
///     array![[1, 4, 7], [2, 13, 8]]
/// );
/// assert_eq!(
///     sorted_axis(&c, Axis(1)).unwrap(),
///     array![[2, 4, 8], [1, 7, 13]]
/// );
/// ```
pub fn sorted_axis<A>(m: &Array2<A>, axis: Axis) -> Result<Array2<A>, ArrayError>
where
    A: Clone + PartialOrd,
{
    check_axis(axis, m.ndim())?;
    let mut out = m.to_owned();
    for mut lane in out.lanes_mut(axis) {
        let mut values: Vec<A> = lane.iter().cloned().collect();
        values.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());
        for (slot, value) in lane.iter_mut().zip(values) {
            *slot = value;
        }
    }
    Ok(out)
}
