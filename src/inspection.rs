//! Read-only inspection of an array: axes, shape, element count, dtype.

use std::fmt;

use ndarray::{ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};

use crate::dtype::{DType, DTypeOf};

/// Snapshot of an array's structural attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayProfile {
    /// Number of axes (dimensions).
    pub ndim: usize,
    /// Per-axis extents.
    pub shape: Vec<usize>,
    /// Total number of elements (product of the shape).
    pub len: usize,
    /// Element type.
    pub dtype: DType,
}

/// Profile any array whose element type is in the dtype catalogue.
///
/// ```
/// use array_primer::inspection::profile;
/// use ndarray::array;
/// let m = array![[1.5, 2.0, 3.0], [4.0, 5.0, 6.0]];
/// let p = profile(&m);
/// assert_eq!(p.ndim, 2);
/// assert_eq!(p.shape, vec![2, 3]);
/// assert_eq!(p.len, 6);
/// assert_eq!(p.dtype.name(), "float64");
/// ```
pub fn profile<A, S, D>(array: &ArrayBase<S, D>) -> ArrayProfile
where
    A: DTypeOf,
    S: Data<Elem = A>,
    D: Dimension,
{
    ArrayProfile {
        ndim: array.ndim(),
        shape: array.shape().to_vec(),
        len: array.len(),
        dtype: A::DTYPE,
    }
}

impl fmt::Display for ArrayProfile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ndim={} shape={:?} len={} dtype={}",
            self.ndim, self.shape, self.len, self.dtype
        )
    }
}
