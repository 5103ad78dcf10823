// src/matrix/square.rs
// Dynamic N x N matrix with anti-diagonal mirroring, the generic core of
// the engine. Row-major Vec<T> backing so flatten is a straight copy.

use tracing::trace;

use super::error::MatrixError;
use super::traits::Scalar;

/// A square matrix of scalar values that stays symmetric across its
/// anti-diagonal.
///
/// The invariant is `M[a][b] == M[N-1-b][N-1-a]` for every valid `(a, b)`:
/// mirroring runs through the reverse diagonal, not the main one, matching
/// the collision-matrix convention the engine models. Every write goes
/// through [`SquareMatrix::set`], which maintains the invariant; there is no
/// way to alias the raw cells from outside.
///
/// A fresh matrix is 1x1 and zeroed. [`SquareMatrix::resize`] keeps the
/// overlapping block when the dimension changes.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T: Scalar> {
    dim: usize,
    cells: Vec<T>,
}

impl<T: Scalar> Default for SquareMatrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> SquareMatrix<T> {
    /// A zeroed 1x1 matrix, the shape a store starts with before its first
    /// dimension sync.
    pub fn new() -> Self {
        Self::with_dim(1)
    }

    /// A zeroed matrix of the given dimension. `dim` may be 0.
    pub fn with_dim(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![T::zero(); dim * dim],
        }
    }

    /// Current dimension N. The logical size is N x N.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The scalar kind tag of this matrix's cell type.
    pub fn kind(&self) -> super::store::ScalarKind {
        T::KIND
    }

    /// The anti-diagonal mirror of `(a, b)`, i.e. `(N-1-b, N-1-a)`.
    ///
    /// A cell lies on the anti-diagonal exactly when it equals its own
    /// mirror. Only meaningful for in-range indices.
    pub fn mirror_of(&self, a: usize, b: usize) -> (usize, usize) {
        (self.dim - 1 - b, self.dim - 1 - a)
    }

    fn check_bounds(&self, a: usize, b: usize) -> Result<(), MatrixError> {
        if a >= self.dim || b >= self.dim {
            return Err(MatrixError::IndexOutOfRange {
                a,
                b,
                dim: self.dim,
            });
        }
        Ok(())
    }

    fn index(&self, a: usize, b: usize) -> usize {
        a * self.dim + b
    }

    /// Reads the value at `(a, b)`.
    ///
    /// No mirror lookup is needed: the write path already guarantees the
    /// mirror cell holds the same value.
    pub fn get(&self, a: usize, b: usize) -> Result<T, MatrixError> {
        self.check_bounds(a, b)?;
        Ok(self.cells[self.index(a, b)])
    }

    /// Writes `value` at `(a, b)` and at the anti-diagonal mirror cell.
    ///
    /// Cells on the anti-diagonal are their own mirror and are written
    /// exactly once. Out-of-range indices fail with
    /// [`MatrixError::IndexOutOfRange`] before any cell is touched.
    pub fn set(&mut self, a: usize, b: usize, value: T) -> Result<(), MatrixError> {
        self.check_bounds(a, b)?;

        let (ma, mb) = self.mirror_of(a, b);
        let primary = self.index(a, b);
        self.cells[primary] = value;

        if (ma, mb) != (a, b) {
            let mirror = self.index(ma, mb);
            self.cells[mirror] = value;
        }
        Ok(())
    }

    /// Resizes to `new_dim` x `new_dim`, keeping every value in the
    /// overlapping `[0, min) x [0, min)` block and zero-filling the rest.
    ///
    /// A no-op when the dimension already matches, so repeated syncs never
    /// churn data.
    pub fn resize(&mut self, new_dim: usize) {
        if new_dim == self.dim {
            return;
        }
        trace!(old_dim = self.dim, new_dim, "resizing square matrix");

        let mut next = vec![T::zero(); new_dim * new_dim];
        let keep = self.dim.min(new_dim);
        for i in 0..keep {
            for j in 0..keep {
                next[i * new_dim + j] = self.cells[i * self.dim + j];
            }
        }
        self.dim = new_dim;
        self.cells = next;
    }

    /// Flattens to a row-major sequence of length N^2: element `i * N + j`
    /// holds `M[i][j]`.
    pub fn flatten(&self) -> Vec<T> {
        self.cells.clone()
    }

    /// Rebuilds a square matrix from a row-major flat sequence.
    ///
    /// Fails with [`MatrixError::LengthMismatch`] when the sequence length
    /// is not `dim * dim`; no partially built matrix is produced.
    pub fn from_flat(values: Vec<T>, dim: usize) -> Result<Self, MatrixError> {
        let expected = dim * dim;
        if values.len() != expected {
            return Err(MatrixError::LengthMismatch {
                expected,
                actual: values.len(),
                dim,
            });
        }
        Ok(Self { dim, cells: values })
    }
}
