//! array-primer: an annotated walkthrough of n-dimensional array operations.
//!
//! This crate is a reference companion for the `ndarray` ecosystem: each
//! module covers one section of a classic array-library primer (creation,
//! inspection, arithmetic, slicing, comparison, manipulation) with small,
//! documented functions that delegate to `ndarray` and validate shapes,
//! axes, and indices up front instead of panicking.
//!
//! The `array-primer` binary prints the walkthrough itself; the library
//! functions are what the walkthrough and the test suite exercise.
pub mod arithmetic;
pub mod comparison;
pub mod creation;
pub mod dtype;
pub mod error;
pub mod inspection;
pub mod manipulation;
pub mod slicing;
pub mod tour;

pub use dtype::{DType, DTypeOf};
pub use error::ArrayError;
pub use inspection::ArrayProfile;
