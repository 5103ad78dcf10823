// src/matrix/traits.rs
// Small Scalar marker trait for the types a matrix may hold.

use super::store::ScalarKind;

/// Scalar is the marker trait for values storable in a [`super::square::SquareMatrix`].
///
/// Each implementor names its [`ScalarKind`] tag and its zero value, which is
/// what newly introduced cells take on resize.
pub trait Scalar: Copy + PartialEq + core::fmt::Debug {
    /// The kind tag matching this type.
    const KIND: ScalarKind;

    fn zero() -> Self;
}

impl Scalar for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn zero() -> Self {
        false
    }
}

impl Scalar for f32 {
    const KIND: ScalarKind = ScalarKind::Float;

    fn zero() -> Self {
        0.0
    }
}

impl Scalar for i32 {
    const KIND: ScalarKind = ScalarKind::Int;

    fn zero() -> Self {
        0
    }
}
