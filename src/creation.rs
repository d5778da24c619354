//! Array construction: explicit data, filled shapes, and generated ranges.
//!
//! Literal arrays come straight from `ndarray::array!`; the helpers here
//! cover the remaining construction patterns from the walkthrough.

use ndarray::{Array, Array1, Array2, Array3};
use num_traits::{Float, One, Zero};

use crate::error::ArrayError;

/// Build a 2-D array from a flat buffer in row-major order.
///
/// Returns an error when the buffer length does not match the shape.
///
/// ```
/// use array_primer::creation::from_flat;
/// let m = from_flat((2, 3), vec![1.5, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(m.shape(), &[2, 3]);
/// assert_eq!(m[(0, 0)], 1.5);
/// ```
pub fn from_flat<A>(shape: (usize, usize), data: Vec<A>) -> Result<Array2<A>, ArrayError> {
    Array2::from_shape_vec(shape, data).map_err(ArrayError::from)
}

/// A 2-D array of zeros, e.g. `zeros::<f64>((3, 4))`.
pub fn zeros<A>(shape: (usize, usize)) -> Array2<A>
where
    A: Clone + Zero,
{
    Array2::zeros(shape)
}

/// A 3-D array of ones, e.g. `ones::<i16>((2, 3, 4))`.
pub fn ones<A>(shape: (usize, usize, usize)) -> Array3<A>
where
    A: Clone + One,
{
    Array3::ones(shape)
}

/// Placeholder for an array whose contents will be filled in later.
///
/// `ndarray` has an uninitialized constructor, but reading from it is
/// undefined behavior, so the walkthrough hands out a default-initialized
/// buffer instead.
pub fn placeholder(shape: (usize, usize)) -> Array2<f64> {
    Array2::default(shape)
}

/// Arithmetic progression over `[start, stop)` with the given step.
///
/// ```
/// use array_primer::creation::range;
/// use ndarray::array;
/// assert_eq!(range(10.0, 30.0, 5.0), array![10.0, 15.0, 20.0, 25.0]);
/// ```
pub fn range<A: Float>(start: A, stop: A, step: A) -> Array1<A> {
    Array::range(start, stop, step)
}

/// `n` evenly spaced values from `start` to `stop`, endpoint included.
pub fn linspace<A: Float>(start: A, stop: A, n: usize) -> Array1<A> {
    Array::linspace(start, stop, n)
}
