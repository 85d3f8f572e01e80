use std::error::Error;
use std::fmt;

/// Errors reported by matrix construction, access, and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A requested dimension was zero.
    InvalidDimensions { rows: usize, cols: usize },
    /// A 1-based index fell outside `[1, rows] x [1, cols]`.
    IndexOutOfBounds {
        i: usize,
        j: usize,
        rows: usize,
        cols: usize,
    },
    /// Operand or output shapes are incompatible with the operation.
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// An entry buffer's length disagrees with `rows * cols`.
    LengthMismatch {
        rows: usize,
        cols: usize,
        len: usize,
    },
    /// A dot-product operand has neither dimension equal to 1.
    NotAVector { rows: usize, cols: usize },
    /// Entry storage could not be allocated.
    Allocation { rows: usize, cols: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::InvalidDimensions { rows, cols } => {
                write!(f, "matrix dimensions must be positive, got {}x{}", rows, cols)
            }
            MatrixError::IndexOutOfBounds { i, j, rows, cols } => {
                write!(
                    f,
                    "index ({}, {}) out of bounds for {}x{} matrix (indices are 1-based)",
                    i, j, rows, cols
                )
            }
            MatrixError::ShapeMismatch { expected, found } => {
                write!(
                    f,
                    "shape mismatch: expected {}x{}, found {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            MatrixError::LengthMismatch { rows, cols, len } => {
                write!(
                    f,
                    "entry buffer of length {} does not hold a {}x{} matrix",
                    len, rows, cols
                )
            }
            MatrixError::NotAVector { rows, cols } => {
                write!(f, "expected a row or column vector, got a {}x{} matrix", rows, cols)
            }
            MatrixError::Allocation { rows, cols } => {
                write!(f, "failed to allocate storage for a {}x{} matrix", rows, cols)
            }
        }
    }
}

impl Error for MatrixError {}
