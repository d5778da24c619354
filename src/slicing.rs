//! Indexing, slicing, and iteration.
//!
//! One-dimensional arrays index and slice like slices do; the helpers here
//! add the negative-index convention and return owned copies so the
//! walkthrough can print them freely. Iteration over a 2-D array is done
//! with respect to the first axis.

use std::ops::Range;

use ndarray::{s, Array1, Array2, ArrayView1};

use crate::error::ArrayError;

/// Element lookup with negative-index support: `at(&a, -1)` is the last
/// element. Returns `None` when the index falls outside the array.
///
/// ```
/// use array_primer::slicing::at;
/// use ndarray::Array1;
/// let a = Array1::from_iter(0_i64..=10);
/// assert_eq!(at(&a, 2), Some(2));
/// assert_eq!(at(&a, -1), Some(10));
/// assert_eq!(at(&a, -12), None);
/// ```
pub fn at<A: Clone>(a: &Array1<A>, index: isize) -> Option<A> {
    let len = a.len() as isize;
    let idx = if index < 0 { index + len } else { index };
    if idx < 0 || idx >= len {
        return None;
    }
    Some(a[idx as usize].clone())
}

/// Owned copy of `a[range.start..range.end]`.
pub fn segment<A: Clone>(a: &Array1<A>, range: Range<usize>) -> Result<Array1<A>, ArrayError> {
    if range.end > a.len() || range.start > range.end {
        return Err(ArrayError::IndexOutOfBounds {
            index: range.end,
            len: a.len(),
        });
    }
    Ok(a.slice(s![range.start..range.end]).to_owned())
}

/// The first `n` elements, `a[:n]`.
pub fn prefix<A: Clone>(a: &Array1<A>, n: usize) -> Result<Array1<A>, ArrayError> {
    segment(a, 0..n)
}

/// Everything from `start` on, `a[start:]`.
pub fn suffix<A: Clone>(a: &Array1<A>, start: usize) -> Result<Array1<A>, ArrayError> {
    segment(a, start..a.len())
}

/// Single cell of a 2-D array, `m[row, col]`.
pub fn cell<A: Clone>(m: &Array2<A>, index: (usize, usize)) -> Option<A> {
    m.get(index).cloned()
}

/// One full column, `m[:, col]`.
pub fn column<A: Clone>(m: &Array2<A>, col: usize) -> Result<Array1<A>, ArrayError> {
    if col >= m.ncols() {
        return Err(ArrayError::IndexOutOfBounds {
            index: col,
            len: m.ncols(),
        });
    }
    Ok(m.column(col).to_owned())
}

/// A contiguous block of rows with every column, `m[range, :]`.
pub fn row_block<A: Clone>(m: &Array2<A>, rows: Range<usize>) -> Result<Array2<A>, ArrayError> {
    if rows.end > m.nrows() || rows.start > rows.end {
        return Err(ArrayError::IndexOutOfBounds {
            index: rows.end,
            len: m.nrows(),
        });
    }
    Ok(m.slice(s![rows.start..rows.end, ..]).to_owned())
}

/// Iterate over a 2-D array row by row (with respect to the first axis).
pub fn rows<A>(m: &Array2<A>) -> impl Iterator<Item = ArrayView1<'_, A>> {
    m.outer_iter()
}
