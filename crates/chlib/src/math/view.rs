use crate::error::MatrixError;
use crate::math::matrix::Matrix;
use crate::math::{check_dims, check_index, entry_count, offset};
use crate::real::Real;

/// A read-only matrix over a caller-owned entry buffer.
///
/// The buffer is borrowed, never freed: dropping the view leaves it fully
/// in the caller's hands, and the borrow checker guarantees it outlives
/// the view. Entries must be laid out column-major with length exactly
/// `rows * cols`. Indexing follows the same 1-based convention as
/// [`Matrix`].
#[derive(Clone, Copy, Debug)]
pub struct MatrixView<'a> {
    rows: usize,
    cols: usize,
    entries: &'a [Real],
}

impl<'a> MatrixView<'a> {
    /// Wraps a column-major buffer of exactly `rows * cols` entries.
    pub fn from_slice(rows: usize, cols: usize, entries: &'a [Real]) -> Result<Self, MatrixError> {
        check_buffer(rows, cols, entries.len())?;
        Ok(Self { rows, cols, entries })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets the entry at 1-based `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Result<Real, MatrixError> {
        check_index(i, j, self.rows, self.cols)?;
        Ok(self.entries[offset(i, j, self.rows)])
    }

    /// Copies the viewed entries into an owning [`Matrix`].
    pub fn to_matrix(&self) -> Result<Matrix, MatrixError> {
        Matrix::from_entries(self.rows, self.cols, self.entries.to_vec())
    }
}

/// A mutable matrix over a caller-owned entry buffer.
///
/// Like [`MatrixView`], but additionally supports [`MatrixViewMut::set`].
/// The buffer is still owned by the caller and is never freed by the view.
#[derive(Debug)]
pub struct MatrixViewMut<'a> {
    rows: usize,
    cols: usize,
    entries: &'a mut [Real],
}

impl<'a> MatrixViewMut<'a> {
    /// Wraps a column-major buffer of exactly `rows * cols` entries.
    pub fn from_slice(
        rows: usize,
        cols: usize,
        entries: &'a mut [Real],
    ) -> Result<Self, MatrixError> {
        check_buffer(rows, cols, entries.len())?;
        Ok(Self { rows, cols, entries })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets the entry at 1-based `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Result<Real, MatrixError> {
        check_index(i, j, self.rows, self.cols)?;
        Ok(self.entries[offset(i, j, self.rows)])
    }

    /// Sets the entry at 1-based `(i, j)`, writing through to the
    /// caller's buffer.
    pub fn set(&mut self, i: usize, j: usize, value: Real) -> Result<(), MatrixError> {
        check_index(i, j, self.rows, self.cols)?;
        self.entries[offset(i, j, self.rows)] = value;
        Ok(())
    }

    /// Reborrows as a read-only view.
    pub fn as_view(&self) -> MatrixView<'_> {
        MatrixView {
            rows: self.rows,
            cols: self.cols,
            entries: &*self.entries,
        }
    }

    /// Copies the viewed entries into an owning [`Matrix`].
    pub fn to_matrix(&self) -> Result<Matrix, MatrixError> {
        Matrix::from_entries(self.rows, self.cols, self.entries.to_vec())
    }
}

fn check_buffer(rows: usize, cols: usize, len: usize) -> Result<(), MatrixError> {
    check_dims(rows, cols)?;
    if len != entry_count(rows, cols)? {
        return Err(MatrixError::LengthMismatch { rows, cols, len });
    }
    Ok(())
}
