//! # Linear algebra primitives
//!
//! An offset indexed, dense `Vector` and an upper triangular `Matrix` that stores its rows as
//! vectors of decreasing length.

pub mod error;
pub mod matrix;
pub mod vector;

/// Largest number of elements a `Vector` may hold.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;
/// Largest dimension of a `Matrix`.
pub const MAX_MATRIX_SIZE: usize = 10_000;
