use std::error::Error;
use std::fmt;

use ndarray::{Axis, ShapeError};
use ndarray_stats::errors::MinMaxError;

/// Custom error type for array operations that the walkthrough checks
/// instead of letting `ndarray` panic.
#[derive(Debug)]
pub enum ArrayError {
    /// Elementwise operation on arrays of different shapes.
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },
    /// Axis parameter outside the array's dimensionality.
    AxisOutOfBounds { axis: usize, ndim: usize },
    /// Index outside the array's extent.
    IndexOutOfBounds { index: usize, len: usize },
    /// Reduction over an array with no elements.
    EmptyInput,
    /// Comparison between values with no defined order (e.g. NaN).
    UndefinedOrder,
    /// Shape rejected by ndarray (reshape, concatenate, stacking).
    Incompatible(ShapeError),
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArrayError::ShapeMismatch { left, right } => {
                write!(f, "shape mismatch: {:?} vs {:?}", left, right)
            }
            ArrayError::AxisOutOfBounds { axis, ndim } => {
                write!(f, "axis {} out of bounds for {}-dimensional array", axis, ndim)
            }
            ArrayError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            }
            ArrayError::EmptyInput => write!(f, "operation requires a non-empty array"),
            ArrayError::UndefinedOrder => {
                write!(f, "values have no defined order (NaN encountered)")
            }
            ArrayError::Incompatible(e) => write!(f, "incompatible shape: {}", e),
        }
    }
}

impl Error for ArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ArrayError::Incompatible(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ShapeError> for ArrayError {
    fn from(e: ShapeError) -> Self {
        ArrayError::Incompatible(e)
    }
}

impl From<MinMaxError> for ArrayError {
    fn from(e: MinMaxError) -> Self {
        match e {
            MinMaxError::EmptyInput => ArrayError::EmptyInput,
            MinMaxError::UndefinedOrder => ArrayError::UndefinedOrder,
        }
    }
}

pub(crate) fn check_axis(axis: Axis, ndim: usize) -> Result<(), ArrayError> {
    if axis.index() >= ndim {
        return Err(ArrayError::AxisOutOfBounds {
            axis: axis.index(),
            ndim,
        });
    }
    Ok(())
}
