use std::fmt;
use std::ops::{Add, Mul};

use log::trace;

use crate::error::MatrixError;
use crate::math::{check_dims, check_index, entry_count, offset};
use crate::real::Real;

/// An owned dense matrix of [`Real`] entries.
///
/// Entries are stored in column-major order and addressed through
/// [`Matrix::get`] and [`Matrix::set`] with 1-based indices: the valid
/// range is `[1, rows] x [1, cols]`. Every live matrix has positive
/// dimensions; fallible constructors reject anything else.
///
/// Binary operations validate operand shapes before touching any output.
/// The allocating forms (`add`, `mult`, ...) return a fresh matrix; the
/// `*_into` forms reuse a caller-supplied output whose shape must equal
/// the required result shape exactly.
#[derive(Clone, Debug)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    // column-major: entry (i, j) lives at (j - 1) * rows + (i - 1)
    entries: Vec<Real>,
}

fn alloc_entries(rows: usize, cols: usize) -> Result<Vec<Real>, MatrixError> {
    let len = entry_count(rows, cols)?;
    let mut entries = Vec::new();
    entries
        .try_reserve_exact(len)
        .map_err(|_| MatrixError::Allocation { rows, cols })?;
    entries.resize(len, 0.0);
    Ok(entries)
}

impl Matrix {
    /// Creates a new `rows` by `cols` matrix with unspecified entries.
    ///
    /// The storage happens to be zeroed, but callers must not rely on
    /// entry values until they have written them; use [`Matrix::zeros`]
    /// for guaranteed contents.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        check_dims(rows, cols)?;
        let entries = alloc_entries(rows, cols)?;
        Ok(Self { rows, cols, entries })
    }

    /// Creates a new `rows` by `cols` matrix with every entry zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::new(rows, cols)
    }

    /// Creates a new `n` by `n` identity matrix.
    pub fn eye(n: usize) -> Result<Self, MatrixError> {
        let mut m = Self::zeros(n, n)?;
        for k in 1..=n {
            m.set(k, k, 1.0)?;
        }
        Ok(m)
    }

    /// Creates a new uninitialized matrix with the same shape as `a`.
    pub fn new_like(a: &Matrix) -> Result<Self, MatrixError> {
        Self::new(a.rows, a.cols)
    }

    /// Creates a matrix that takes ownership of a column-major entry
    /// buffer. The buffer length must be exactly `rows * cols`.
    pub fn from_entries(rows: usize, cols: usize, entries: Vec<Real>) -> Result<Self, MatrixError> {
        check_dims(rows, cols)?;
        let len = entry_count(rows, cols)?;
        if entries.len() != len {
            return Err(MatrixError::LengthMismatch {
                rows,
                cols,
                len: entries.len(),
            });
        }
        Ok(Self { rows, cols, entries })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Entries in column-major order.
    pub fn as_slice(&self) -> &[Real] {
        &self.entries
    }

    /// Entries in column-major order, mutable.
    pub fn as_mut_slice(&mut self) -> &mut [Real] {
        &mut self.entries
    }

    /// Column `j` (1-based) as a slice of `rows` entries.
    pub fn col_slice(&self, j: usize) -> Result<&[Real], MatrixError> {
        check_index(1, j, self.rows, self.cols)?;
        let start = (j - 1) * self.rows;
        Ok(&self.entries[start..start + self.rows])
    }

    /// Gets the entry at 1-based `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Result<Real, MatrixError> {
        check_index(i, j, self.rows, self.cols)?;
        Ok(self.entries[offset(i, j, self.rows)])
    }

    /// Sets the entry at 1-based `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, value: Real) -> Result<(), MatrixError> {
        check_index(i, j, self.rows, self.cols)?;
        self.entries[offset(i, j, self.rows)] = value;
        Ok(())
    }

    fn check_same_shape(&self, other: &Matrix) -> Result<(), MatrixError> {
        if self.shape() != other.shape() {
            trace!(
                "rejecting entrywise op: {}x{} vs {}x{}",
                self.rows,
                self.cols,
                other.rows,
                other.cols
            );
            return Err(MatrixError::ShapeMismatch {
                expected: self.shape(),
                found: other.shape(),
            });
        }
        Ok(())
    }

    fn check_output_shape(out: &Matrix, shape: (usize, usize)) -> Result<(), MatrixError> {
        if out.shape() != shape {
            return Err(MatrixError::ShapeMismatch {
                expected: shape,
                found: out.shape(),
            });
        }
        Ok(())
    }

    /// Entrywise sum. The operands must have identical shapes.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.check_same_shape(other)?;
        let mut out = Matrix::new_like(self)?;
        self.add_unchecked(other, &mut out);
        Ok(out)
    }

    /// Entrywise sum written into `out`, which must already have the
    /// operands' shape. `out` is untouched on error.
    pub fn add_into(&self, other: &Matrix, out: &mut Matrix) -> Result<(), MatrixError> {
        self.check_same_shape(other)?;
        Self::check_output_shape(out, self.shape())?;
        self.add_unchecked(other, out);
        Ok(())
    }

    fn add_unchecked(&self, other: &Matrix, out: &mut Matrix) {
        for (dst, (x, y)) in out
            .entries
            .iter_mut()
            .zip(self.entries.iter().zip(other.entries.iter()))
        {
            *dst = x + y;
        }
    }

    /// Matrix product. Requires `self.cols == other.rows`; the result is
    /// `self.rows` by `other.cols`, accumulated in [`Real`] precision.
    pub fn mult(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.check_inner_dims(other)?;
        let mut out = Matrix::new(self.rows, other.cols)?;
        self.mult_unchecked(other, &mut out);
        Ok(out)
    }

    /// Matrix product written into `out`, which must already be
    /// `self.rows` by `other.cols`. `out` is untouched on error.
    pub fn mult_into(&self, other: &Matrix, out: &mut Matrix) -> Result<(), MatrixError> {
        self.check_inner_dims(other)?;
        Self::check_output_shape(out, (self.rows, other.cols))?;
        self.mult_unchecked(other, out);
        Ok(())
    }

    fn check_inner_dims(&self, other: &Matrix) -> Result<(), MatrixError> {
        if self.cols != other.rows {
            trace!(
                "rejecting product: {}x{} times {}x{}",
                self.rows,
                self.cols,
                other.rows,
                other.cols
            );
            return Err(MatrixError::ShapeMismatch {
                expected: (self.cols, other.cols),
                found: other.shape(),
            });
        }
        Ok(())
    }

    fn mult_unchecked(&self, other: &Matrix, out: &mut Matrix) {
        let inner = self.cols;
        for j in 1..=other.cols {
            for i in 1..=self.rows {
                let mut acc: Real = 0.0;
                for k in 1..=inner {
                    acc += self.entries[offset(i, k, self.rows)]
                        * other.entries[offset(k, j, other.rows)];
                }
                out.entries[offset(i, j, out.rows)] = acc;
            }
        }
    }

    /// Multiplies every entry by the scalar `c`.
    pub fn scalar_mult(&self, c: Real) -> Result<Matrix, MatrixError> {
        let mut out = Matrix::new_like(self)?;
        self.scalar_mult_unchecked(c, &mut out);
        Ok(out)
    }

    /// Scalar product written into `out`, which must have `self`'s shape.
    pub fn scalar_mult_into(&self, c: Real, out: &mut Matrix) -> Result<(), MatrixError> {
        Self::check_output_shape(out, self.shape())?;
        self.scalar_mult_unchecked(c, out);
        Ok(())
    }

    fn scalar_mult_unchecked(&self, c: Real, out: &mut Matrix) {
        for (dst, x) in out.entries.iter_mut().zip(self.entries.iter()) {
            *dst = c * x;
        }
    }

    /// Transpose: the result is `self.cols` by `self.rows` with
    /// `out[i][j] = self[j][i]`.
    pub fn transpose(&self) -> Result<Matrix, MatrixError> {
        let mut out = Matrix::new(self.cols, self.rows)?;
        self.transpose_unchecked(&mut out);
        Ok(out)
    }

    /// Transpose written into `out`, which must be `self.cols` by
    /// `self.rows`. `out` is untouched on error.
    pub fn transpose_into(&self, out: &mut Matrix) -> Result<(), MatrixError> {
        Self::check_output_shape(out, (self.cols, self.rows))?;
        self.transpose_unchecked(out);
        Ok(())
    }

    fn transpose_unchecked(&self, out: &mut Matrix) {
        for j in 1..=self.cols {
            for i in 1..=self.rows {
                out.entries[offset(j, i, out.rows)] = self.entries[offset(i, j, self.rows)];
            }
        }
    }

    /// Dot product of two vectors of equal length. Each operand must be a
    /// row or column vector; any mix of orientations is accepted.
    pub fn dot(&self, other: &Matrix) -> Result<Real, MatrixError> {
        let a = self.as_vector()?;
        let b = other.as_vector()?;
        if a.len() != b.len() {
            return Err(MatrixError::ShapeMismatch {
                expected: self.shape(),
                found: other.shape(),
            });
        }
        Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
    }

    // For a 1 x n or n x 1 matrix the column-major entries are already in
    // vector order.
    fn as_vector(&self) -> Result<&[Real], MatrixError> {
        if self.rows != 1 && self.cols != 1 {
            return Err(MatrixError::NotAVector {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(&self.entries)
    }
}

/// Exact structural equality: identical shape and exactly equal entries in
/// every column, including the last. A matrix compares equal to itself by
/// identity, so self-comparison holds even when entries are NaN.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        if self.shape() != other.shape() {
            return false;
        }
        self.entries
            .iter()
            .zip(other.entries.iter())
            .all(|(x, y)| x == y)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 1..=self.rows {
            write!(f, "[")?;
            for j in 1..=self.cols {
                write!(f, "{}", self.entries[offset(i, j, self.rows)])?;
                if j != self.cols {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if i != self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Add<&Matrix> for &Matrix {
    type Output = Matrix;

    /// Panicking convenience for [`Matrix::add`].
    fn add(self, rhs: &Matrix) -> Matrix {
        match Matrix::add(self, rhs) {
            Ok(out) => out,
            Err(err) => panic!("matrix addition failed: {}", err),
        }
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    /// Panicking convenience for [`Matrix::mult`].
    fn mul(self, rhs: &Matrix) -> Matrix {
        match Matrix::mult(self, rhs) {
            Ok(out) => out,
            Err(err) => panic!("matrix multiplication failed: {}", err),
        }
    }
}

impl Mul<Real> for &Matrix {
    type Output = Matrix;

    /// Panicking convenience for [`Matrix::scalar_mult`].
    fn mul(self, rhs: Real) -> Matrix {
        match Matrix::scalar_mult(self, rhs) {
            Ok(out) => out,
            Err(err) => panic!("matrix scalar multiplication failed: {}", err),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Matrix;
    use crate::real::Real;

    #[derive(Serialize, Deserialize)]
    struct RawMatrix {
        rows: usize,
        cols: usize,
        entries: Vec<Real>,
    }

    impl Serialize for Matrix {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            RawMatrix {
                rows: self.rows(),
                cols: self.cols(),
                entries: self.as_slice().to_vec(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Matrix {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = RawMatrix::deserialize(deserializer)?;
            Matrix::from_entries(raw.rows, raw.cols, raw.entries).map_err(serde::de::Error::custom)
        }
    }
}
