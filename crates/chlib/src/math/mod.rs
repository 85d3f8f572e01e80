//! Dense matrix types.
//!
//! [`Matrix`] owns its entries; [`MatrixView`] and [`MatrixViewMut`]
//! borrow them from a caller-owned buffer. All three store entries in
//! column-major order and expose 1-based `get`/`set` indexing.
pub mod matrix;
pub mod view;

pub use matrix::Matrix;
pub use view::{MatrixView, MatrixViewMut};

use crate::error::MatrixError;

/// Rejects zero dimensions.
pub(crate) fn check_dims(rows: usize, cols: usize) -> Result<(), MatrixError> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidDimensions { rows, cols });
    }
    Ok(())
}

/// Total entry count, rejecting `rows * cols` overflow.
pub(crate) fn entry_count(rows: usize, cols: usize) -> Result<usize, MatrixError> {
    rows.checked_mul(cols)
        .ok_or(MatrixError::Allocation { rows, cols })
}

/// Validates a 1-based index pair against a shape.
pub(crate) fn check_index(
    i: usize,
    j: usize,
    rows: usize,
    cols: usize,
) -> Result<(), MatrixError> {
    if i < 1 || i > rows || j < 1 || j > cols {
        return Err(MatrixError::IndexOutOfBounds { i, j, rows, cols });
    }
    Ok(())
}

/// Column-major offset of 1-based `(i, j)` in a matrix with `rows` rows.
#[inline]
pub(crate) fn offset(i: usize, j: usize, rows: usize) -> usize {
    (j - 1) * rows + (i - 1)
}
