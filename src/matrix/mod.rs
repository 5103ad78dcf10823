// src/matrix/mod.rs
// Top-level matrix module: the symmetric storage engine.

pub mod error;
pub mod square;
pub mod store;
pub mod traits;

pub use error::MatrixError;
pub use square::SquareMatrix;
pub use store::{MatrixSnapshot, MatrixStore, ScalarKind, Value};
pub use traits::Scalar;
