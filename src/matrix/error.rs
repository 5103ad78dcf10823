// src/matrix/error.rs
// Failure taxonomy for the matrix engine. All failures are local and
// synchronous; there are no transient conditions to retry.

use thiserror::Error;

use super::store::ScalarKind;

/// Errors produced by the matrix store and the flatten/unflatten codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A read or write addressed a cell outside `[0, dim)`.
    ///
    /// Indices are never clamped or wrapped; the call fails and the matrix
    /// is left untouched.
    #[error("cell ({a}, {b}) is out of range for a {dim}x{dim} matrix")]
    IndexOutOfRange { a: usize, b: usize, dim: usize },

    /// A flat sequence of the wrong length was offered for reconstruction.
    ///
    /// A `dim`-sized matrix needs exactly `dim * dim` values.
    #[error("flat sequence of length {actual} cannot fill a {dim}x{dim} matrix (expected {expected})")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        dim: usize,
    },

    /// A write carried a value of a different scalar kind than the store
    /// was created with. Rejected before any mutation.
    #[error("value kind {got:?} does not match the matrix kind {expected:?}")]
    KindMismatch { expected: ScalarKind, got: ScalarKind },
}
