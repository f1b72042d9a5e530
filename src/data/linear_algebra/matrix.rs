//! # Upper triangular matrices
//!
//! Only the cells on or above the diagonal are stored. Row `i` of a matrix of size `n` is a
//! `Vector` of length `n - i` that starts at logical column `i`, so cell `(i, j)` is addressed as
//! `matrix[i][j]` for `j >= i`.
use std::fmt;
use std::ops::{Add, Index, IndexMut, Sub};
use std::slice::Iter;

use log::trace;

use crate::data::linear_algebra::MAX_MATRIX_SIZE;
use crate::data::linear_algebra::error::Error;
use crate::data::linear_algebra::vector::Vector;

/// Size of a `Matrix` created through `Default`.
const DEFAULT_LEN: usize = 10;

/// A square, upper triangular matrix stored as a vector of row vectors.
///
/// Equality, cloning and arithmetic all go through the row vector; scalar operations are not
/// provided.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Matrix<T> {
    rows: Vector<Vector<T>>,
}

impl<T> Matrix<T> {
    /// Create an upper triangular matrix of default values.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of rows (and columns).
    ///
    /// # Errors
    ///
    /// `InvalidSize` if `len` exceeds `MAX_MATRIX_SIZE`, `NegativeLength` if it is negative.
    pub fn new(len: isize) -> Result<Self, Error>
    where
        T: Default + Clone,
    {
        if len > MAX_MATRIX_SIZE as isize {
            return Err(Error::InvalidSize { requested: len as usize, maximum: MAX_MATRIX_SIZE });
        }
        let len = usize::try_from(len).map_err(|_| Error::NegativeLength)?;

        Ok(Self::upper_triangular(len))
    }

    fn upper_triangular(len: usize) -> Self
    where
        T: Default + Clone,
    {
        debug_assert!(len <= MAX_MATRIX_SIZE);
        trace!("Building an upper triangular matrix of size {}", len);

        let rows = (0..len)
            .map(|i| Vector::from_parts(vec![T::default(); len - i], i))
            .collect();

        Self { rows: Vector::from_parts(rows, 0) }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The underlying vector of rows.
    pub fn rows(&self) -> &Vector<Vector<T>> {
        &self.rows
    }

    /// Iterate over the rows in order.
    pub fn iter_rows(&self) -> Iter<'_, Vector<T>> {
        self.rows.iter()
    }

    /// Unwrap the underlying vector of rows.
    pub fn into_rows(self) -> Vector<Vector<T>> {
        self.rows
    }

    /// Retrieve a row.
    ///
    /// # Errors
    ///
    /// Same as `Vector::get`.
    pub fn get(&self, row: isize) -> Result<&Vector<T>, Error> {
        self.rows.get(row)
    }

    /// Retrieve a row mutably.
    ///
    /// # Errors
    ///
    /// Same as `Matrix::get`.
    pub fn get_mut(&mut self, row: isize) -> Result<&mut Vector<T>, Error> {
        self.rows.get_mut(row)
    }

    /// Retrieve the value in cell `(row, column)`.
    ///
    /// # Errors
    ///
    /// `NegativeIndex` if the cell lies below the diagonal, as those cells are not stored.
    pub fn cell(&self, row: isize, column: isize) -> Result<&T, Error> {
        self.get(row)?.get(column)
    }

    /// Retrieve the value in cell `(row, column)` mutably.
    ///
    /// # Errors
    ///
    /// Same as `Matrix::cell`.
    pub fn cell_mut(&mut self, row: isize, column: isize) -> Result<&mut T, Error> {
        self.get_mut(row)?.get_mut(column)
    }

    /// Set the value in cell `(row, column)`.
    ///
    /// # Errors
    ///
    /// Same as `Matrix::cell`; the matrix is left untouched.
    pub fn set_cell(&mut self, row: isize, column: isize, value: T) -> Result<(), Error> {
        self.get_mut(row)?.set(column, value)
    }

    /// Add another matrix row by row.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the number of rows differs. Matrices created with `Matrix::new` have
    /// matching row lengths whenever their sizes match.
    pub fn add_matrix(&self, other: &Self) -> Result<Self, Error>
    where
        T: Clone + Add<Output = T>,
    {
        self.rows.add_rows(&other.rows).map(Self::from)
    }

    /// Subtract another matrix row by row.
    ///
    /// # Errors
    ///
    /// Same as `Matrix::add_matrix`.
    pub fn sub_matrix(&self, other: &Self) -> Result<Self, Error>
    where
        T: Clone + Sub<Output = T>,
    {
        self.rows.sub_rows(&other.rows).map(Self::from)
    }
}

impl<T: Default + Clone> Default for Matrix<T> {
    fn default() -> Self {
        Self::upper_triangular(DEFAULT_LEN)
    }
}

/// Adopt rows as they are, the shape is not validated.
impl<T> From<Vector<Vector<T>>> for Matrix<T> {
    fn from(rows: Vector<Vector<T>>) -> Self {
        Self { rows }
    }
}

impl<T> Index<isize> for Matrix<T> {
    type Output = Vector<T>;

    /// # Panics
    ///
    /// When `Matrix::get` would return an error.
    fn index(&self, row: isize) -> &Self::Output {
        &self.rows[row]
    }
}

impl<T> IndexMut<isize> for Matrix<T> {
    /// # Panics
    ///
    /// When `Matrix::get_mut` would return an error.
    fn index_mut(&mut self, row: isize) -> &mut Self::Output {
        &mut self.rows[row]
    }
}

/// One row per line, each terminated by a line break.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.iter_rows() {
            writeln!(f, "{}", row)?;
        }

        Ok(())
    }
}
