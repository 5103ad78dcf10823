// src/matrix/store.rs
// Kind-tagged wrapper around SquareMatrix. One variant per scalar kind,
// exactly one active per store; the original host kept three parallel
// arrays because its serializer could not express this.

use serde::{Deserialize, Serialize};

use super::error::MatrixError;
use super::square::SquareMatrix;

/// The value type a matrix instance holds, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    Bool,
    Float,
    Int,
}

impl ScalarKind {
    pub fn all() -> [Self; 3] {
        [ScalarKind::Bool, ScalarKind::Float, ScalarKind::Int]
    }

    /// The kind's zero value, what new cells take on resize.
    pub fn zero(self) -> Value {
        match self {
            ScalarKind::Bool => Value::Bool(false),
            ScalarKind::Float => Value::Float(0.0),
            ScalarKind::Int => Value::Int(0),
        }
    }
}

/// A single cell value of any scalar kind.
///
/// Carried across the store's untyped read/write surface; the store checks
/// the kind tag against its own before mutating anything.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Float(f32),
    Int(i32),
}

impl Value {
    pub fn kind(self) -> ScalarKind {
        match self {
            Value::Bool(_) => ScalarKind::Bool,
            Value::Float(_) => ScalarKind::Float,
            Value::Int(_) => ScalarKind::Int,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

/// The flat persisted form of a store: the active kind's row-major cells
/// and nothing else.
///
/// This is the single source of truth across save/load; the square form is
/// rebuilt from it on every load via [`MatrixStore::from_snapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatrixSnapshot {
    Bool(Vec<bool>),
    Float(Vec<f32>),
    Int(Vec<i32>),
}

impl MatrixSnapshot {
    pub fn kind(&self) -> ScalarKind {
        match self {
            MatrixSnapshot::Bool(_) => ScalarKind::Bool,
            MatrixSnapshot::Float(_) => ScalarKind::Float,
            MatrixSnapshot::Int(_) => ScalarKind::Int,
        }
    }

    /// Number of flat cells, N^2 at the time the snapshot was taken.
    pub fn len(&self) -> usize {
        match self {
            MatrixSnapshot::Bool(v) => v.len(),
            MatrixSnapshot::Float(v) => v.len(),
            MatrixSnapshot::Int(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The symmetric matrix store: exactly one square matrix of the configured
/// scalar kind, with mirrored dimension-safe access.
///
/// The raw matrix is never exposed; all traffic goes through
/// [`MatrixStore::read`] / [`MatrixStore::write`] and the snapshot codec,
/// so the anti-diagonal invariant cannot be broken from outside.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixStore {
    Bool(SquareMatrix<bool>),
    Float(SquareMatrix<f32>),
    Int(SquareMatrix<i32>),
}

impl MatrixStore {
    /// A fresh 1x1 store of the given kind.
    pub fn new(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::Bool => MatrixStore::Bool(SquareMatrix::new()),
            ScalarKind::Float => MatrixStore::Float(SquareMatrix::new()),
            ScalarKind::Int => MatrixStore::Int(SquareMatrix::new()),
        }
    }

    /// The scalar kind this store was created with.
    pub fn kind(&self) -> ScalarKind {
        match self {
            MatrixStore::Bool(m) => m.kind(),
            MatrixStore::Float(m) => m.kind(),
            MatrixStore::Int(m) => m.kind(),
        }
    }

    /// Current matrix dimension N.
    pub fn dim(&self) -> usize {
        match self {
            MatrixStore::Bool(m) => m.dim(),
            MatrixStore::Float(m) => m.dim(),
            MatrixStore::Int(m) => m.dim(),
        }
    }

    /// Resizes the matrix, preserving the overlapping block. No-op when the
    /// dimension already matches.
    pub fn resize(&mut self, new_dim: usize) {
        match self {
            MatrixStore::Bool(m) => m.resize(new_dim),
            MatrixStore::Float(m) => m.resize(new_dim),
            MatrixStore::Int(m) => m.resize(new_dim),
        }
    }

    /// Reads the cell at `(a, b)` as a tagged value.
    pub fn read(&self, a: usize, b: usize) -> Result<Value, MatrixError> {
        match self {
            MatrixStore::Bool(m) => m.get(a, b).map(Value::Bool),
            MatrixStore::Float(m) => m.get(a, b).map(Value::Float),
            MatrixStore::Int(m) => m.get(a, b).map(Value::Int),
        }
    }

    /// Writes `value` at `(a, b)` with anti-diagonal mirroring.
    ///
    /// The value's kind must match the store's; a mismatch is rejected with
    /// [`MatrixError::KindMismatch`] before any cell changes.
    pub fn write(&mut self, a: usize, b: usize, value: Value) -> Result<(), MatrixError> {
        match (self, value) {
            (MatrixStore::Bool(m), Value::Bool(v)) => m.set(a, b, v),
            (MatrixStore::Float(m), Value::Float(v)) => m.set(a, b, v),
            (MatrixStore::Int(m), Value::Int(v)) => m.set(a, b, v),
            (store, value) => Err(MatrixError::KindMismatch {
                expected: store.kind(),
                got: value.kind(),
            }),
        }
    }

    /// Flattens the live square form into its persisted flat form.
    pub fn snapshot(&self) -> MatrixSnapshot {
        match self {
            MatrixStore::Bool(m) => MatrixSnapshot::Bool(m.flatten()),
            MatrixStore::Float(m) => MatrixSnapshot::Float(m.flatten()),
            MatrixStore::Int(m) => MatrixSnapshot::Int(m.flatten()),
        }
    }

    /// Rebuilds the square form from a flat snapshot of dimension `dim`.
    ///
    /// Fails with [`MatrixError::LengthMismatch`] when the snapshot does not
    /// hold exactly `dim * dim` cells.
    pub fn from_snapshot(snapshot: MatrixSnapshot, dim: usize) -> Result<Self, MatrixError> {
        match snapshot {
            MatrixSnapshot::Bool(v) => SquareMatrix::from_flat(v, dim).map(MatrixStore::Bool),
            MatrixSnapshot::Float(v) => SquareMatrix::from_flat(v, dim).map(MatrixStore::Float),
            MatrixSnapshot::Int(v) => SquareMatrix::from_flat(v, dim).map(MatrixStore::Int),
        }
    }
}
