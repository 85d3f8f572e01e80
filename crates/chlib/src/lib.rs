//! chlib: a small dense-matrix library.
//!
//! The core type is [`Matrix`], an owned 2-D container of [`Real`] values
//! with shape queries, 1-based element access, and the usual dense
//! operations: addition, multiplication, scalar multiplication, transpose,
//! vector dot product, and exact equality. [`MatrixView`] and
//! [`MatrixViewMut`] provide the same element access over caller-owned
//! buffers without taking ownership of them.
//!
//! Arithmetic comes in two forms: allocating methods (`add`, `mult`, ...)
//! that hand back a fresh matrix, and `*_into` methods that write into a
//! caller-supplied output whose shape must match the required result shape
//! exactly. Failed operations never leave a partially written output.
//!
//! The entry precision is fixed for the whole build by the `real-f32`
//! cargo feature; see the [`real`] module.
pub mod error;
pub mod math;
pub mod real;
pub mod wave;

pub use error::MatrixError;
pub use math::{Matrix, MatrixView, MatrixViewMut};
pub use real::Real;
