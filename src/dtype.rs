//! Catalogue of element types covered by the walkthrough.
//!
//! Object, string, and unicode entries from classic array primers are not
//! numeric element types and are deliberately absent here.

use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Element types the walkthrough demonstrates, named the way array
/// libraries conventionally name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DType {
    /// Boolean storing true and false values.
    Bool,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Single-precision floating point.
    Float32,
    /// Double-precision floating point.
    Float64,
    /// Complex number made of two 64-bit floats.
    Complex128,
}

impl DType {
    /// All catalogue entries, in ascending size order.
    pub const ALL: [DType; 7] = [
        DType::Bool,
        DType::Int16,
        DType::Int32,
        DType::Int64,
        DType::Float32,
        DType::Float64,
        DType::Complex128,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DType::Bool => "bool",
            DType::Int16 => "int16",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Complex128 => "complex128",
        }
    }

    /// Storage size of one element, matching `std::mem::size_of` for the
    /// mapped Rust type.
    pub fn size_bytes(self) -> usize {
        match self {
            DType::Bool => 1,
            DType::Int16 => 2,
            DType::Int32 => 4,
            DType::Int64 => 8,
            DType::Float32 => 4,
            DType::Float64 => 8,
            DType::Complex128 => 16,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, DType::Int16 | DType::Int32 | DType::Int64)
    }

    pub fn is_float(self) -> bool {
        matches!(self, DType::Float32 | DType::Float64)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a Rust element type to its catalogue entry.
pub trait DTypeOf {
    const DTYPE: DType;
}

impl DTypeOf for bool {
    const DTYPE: DType = DType::Bool;
}

impl DTypeOf for i16 {
    const DTYPE: DType = DType::Int16;
}

impl DTypeOf for i32 {
    const DTYPE: DType = DType::Int32;
}

impl DTypeOf for i64 {
    const DTYPE: DType = DType::Int64;
}

impl DTypeOf for f32 {
    const DTYPE: DType = DType::Float32;
}

impl DTypeOf for f64 {
    const DTYPE: DType = DType::Float64;
}

impl DTypeOf for Complex64 {
    const DTYPE: DType = DType::Complex128;
}
