//! Shape manipulation: transpose, flatten, reshape, insert/delete, and
//! concatenation.
//!
//! Everything returns a new array; the inputs are never mutated. Flattening
//! is always in row-major (logical) order.

use ndarray::{concatenate, Array1, Array2, ArrayView2, Axis};

use crate::error::{check_axis, ArrayError};

/// Transposed copy of a 2-D array.
pub fn transpose<A: Clone>(m: &Array2<A>) -> Array2<A> {
    m.t().to_owned()
}

/// Flatten to 1-D in row-major order.
///
/// ```
/// use array_primer::manipulation::ravel;
/// use ndarray::array;
/// let c = array![[2_i64, 4, 8], [1, 13, 7]];
/// assert_eq!(ravel(&c), array![2, 4, 8, 1, 13, 7]);
/// ```
pub fn ravel<A: Clone>(m: &Array2<A>) -> Array1<A> {
    m.iter().cloned().collect()
}

/// Reshape a 2-D array to a new 2-D shape with the same element count.
pub fn reshape<A: Clone>(m: &Array2<A>, shape: (usize, usize)) -> Result<Array2<A>, ArrayError> {
    m.to_owned().into_shape(shape).map_err(ArrayError::from)
}

/// Append one array's elements to another's: both operands are flattened
/// and joined into a single 1-D array.
pub fn append<A: Clone>(m: &Array2<A>, other: &Array2<A>) -> Array1<A> {
    m.iter().chain(other.iter()).cloned().collect()
}

/// Insert `value` at `index`, shifting the tail right.
///
/// ```
/// use array_primer::manipulation::insert;
/// use ndarray::array;
/// let a = array![1_i64, 2, 3];
/// assert_eq!(insert(&a, 1, 5).unwrap(), array![1, 5, 2, 3]);
/// ```
pub fn insert<A: Clone>(a: &Array1<A>, index: usize, value: A) -> Result<Array1<A>, ArrayError> {
    if index > a.len() {
        return Err(ArrayError::IndexOutOfBounds {
            index,
            len: a.len(),
        });
    }
    let mut data: Vec<A> = a.to_vec();
    data.insert(index, value);
    Ok(Array1::from_vec(data))
}

/// Remove the elements at the given indices, keeping the rest in order.
/// Duplicate indices are removed once.
pub fn delete<A: Clone>(a: &Array1<A>, indices: &[usize]) -> Result<Array1<A>, ArrayError> {
    for &idx in indices {
        if idx >= a.len() {
            return Err(ArrayError::IndexOutOfBounds {
                index: idx,
                len: a.len(),
            });
        }
    }
    let kept: Vec<A> = a
        .iter()
        .enumerate()
        .filter(|(i, _)| !indices.contains(i))
        .map(|(_, v)| v.clone())
        .collect();
    Ok(Array1::from_vec(kept))
}

/// Concatenate 2-D arrays along an existing axis. All extents except the
/// concatenation axis must match.
pub fn concat<A: Clone>(
    axis: Axis,
    parts: &[ArrayView2<'_, A>],
) -> Result<Array2<A>, ArrayError> {
    if parts.is_empty() {
        return Err(ArrayError::EmptyInput);
    }
    check_axis(axis, 2)?;
    concatenate(axis, parts).map_err(ArrayError::from)
}

/// Stack two 2-D arrays vertically (row-wise).
pub fn vstack<A: Clone>(m: &Array2<A>, other: &Array2<A>) -> Result<Array2<A>, ArrayError> {
    concat(Axis(0), &[m.view(), other.view()])
}

/// Stack two 2-D arrays horizontally (column-wise).
pub fn hstack<A: Clone>(m: &Array2<A>, other: &Array2<A>) -> Result<Array2<A>, ArrayError> {
    concat(Axis(1), &[m.view(), other.view()])
}
