//! relmatrix - symmetric relationship-matrix storage
//!
//! An ordered registry of named elements, one square matrix logically sized
//! to the registry length, anti-diagonal-mirrored writes, data-preserving
//! resize, and a row-major flatten/unflatten codec behind a compact binary
//! persistence format.

pub mod document;
pub mod matrix;
pub mod registry;

pub use document::{MatrixDocument, PersistError};
pub use matrix::{MatrixError, MatrixSnapshot, MatrixStore, ScalarKind, SquareMatrix, Value};
pub use registry::{Element, ElementRegistry};
