//! # Offset indexed vectors and upper triangular matrices
//!
//! A `Vector` is a fixed length, owning sequence whose first value lives at an arbitrary start
//! index. A `Matrix` stores only the upper triangle of a square matrix: row `i` is a `Vector`
//! starting at column `i`.
//!
//! All bounds are checked. Failures are reported through
//! `data::linear_algebra::error::Error`, reading from text through `io::error::ReadError`.
#![warn(missing_docs)]

pub mod data;
pub mod io;
