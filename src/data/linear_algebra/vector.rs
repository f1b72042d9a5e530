//! # Offset indexed vectors
//!
//! A `Vector` owns a contiguous buffer of values that are addressed by logical indices starting at
//! an arbitrary non-negative start index. Lengths are fixed at creation, except through
//! assignment.
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::{Iter, IterMut};

use itertools::Itertools;
use num_traits::Zero;

use crate::data::linear_algebra::MAX_VECTOR_SIZE;
use crate::data::linear_algebra::error::Error;

/// Length of a `Vector` created through `Default`.
const DEFAULT_LEN: usize = 10;

/// Uses a `Vec` as underlying data structure, with the first value living at `start_index`.
///
/// Two vectors are equal when they have the same start index, the same length and pairwise equal
/// values.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
    start_index: usize,
}

/// Validate a requested length and start index.
///
/// The maximum size is checked before the signs, so that an oversized request with a negative
/// start index reports `InvalidSize`.
fn checked_dimensions(len: isize, start_index: isize) -> Result<(usize, usize), Error> {
    if len > MAX_VECTOR_SIZE as isize {
        return Err(Error::InvalidSize { requested: len as usize, maximum: MAX_VECTOR_SIZE });
    }

    match (usize::try_from(len), usize::try_from(start_index)) {
        (Ok(len), Ok(start_index)) => Ok((len, start_index)),
        _ => Err(Error::NegativeLength),
    }
}

impl<T> Vector<T> {
    /// Create a vector of default values.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of elements.
    /// * `start_index`: Logical index of the first element.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if `len` exceeds `MAX_VECTOR_SIZE`, `NegativeLength` if either argument is
    /// negative.
    pub fn new(len: isize, start_index: isize) -> Result<Self, Error>
    where
        T: Default + Clone,
    {
        Self::constant(T::default(), len, start_index)
    }

    /// Create a vector with all values being equal to a given value.
    ///
    /// # Errors
    ///
    /// Same as `Vector::new`.
    pub fn constant(value: T, len: isize, start_index: isize) -> Result<Self, Error>
    where
        T: Clone,
    {
        let (len, start_index) = checked_dimensions(len, start_index)?;

        Ok(Self::from_parts(vec![value; len], start_index))
    }

    /// Wrap existing values, the first of which will live at `start_index`.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if there are more than `MAX_VECTOR_SIZE` values, or if the last value would
    /// live past `isize::MAX`, where no logical index can reach it.
    pub fn from_data(data: Vec<T>, start_index: usize) -> Result<Self, Error> {
        if data.len() > MAX_VECTOR_SIZE {
            return Err(Error::InvalidSize { requested: data.len(), maximum: MAX_VECTOR_SIZE });
        }
        let maximum_start = isize::MAX as usize - data.len();
        if start_index > maximum_start {
            return Err(Error::InvalidSize { requested: start_index, maximum: maximum_start });
        }

        Ok(Self::from_parts(data, start_index))
    }

    /// Assemble a vector from parts that are already known to be within bounds.
    pub(crate) fn from_parts(data: Vec<T>, start_index: usize) -> Self {
        debug_assert!(data.len() <= MAX_VECTOR_SIZE);
        debug_assert!(start_index <= isize::MAX as usize - data.len());

        Self { data, start_index }
    }

    /// Number of values stored.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no values are stored.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Logical index of the first value.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// One past the last valid logical index.
    pub fn end_index(&self) -> usize {
        self.start_index + self.len()
    }

    /// Translate a logical index into a position in the buffer.
    fn physical_index(&self, index: isize) -> Result<usize, Error> {
        let end_index = self.end_index();
        let too_large = Error::IndexTooLarge { index, end_index };
        if index > MAX_VECTOR_SIZE as isize {
            return Err(too_large);
        }

        match index.checked_sub_unsigned(self.start_index) {
            Some(offset) if offset >= 0 => {
                let offset = offset as usize;
                if offset < self.len() {
                    Ok(offset)
                } else {
                    Err(too_large)
                }
            },
            _ => Err(Error::NegativeIndex { index, start_index: self.start_index }),
        }
    }

    /// Retrieve the value at a logical index.
    ///
    /// # Errors
    ///
    /// `NegativeIndex` before the start index, `IndexTooLarge` at or after `end_index()`.
    pub fn get(&self, index: isize) -> Result<&T, Error> {
        self.physical_index(index).map(|i| &self.data[i])
    }

    /// Retrieve a mutable reference to the value at a logical index.
    ///
    /// # Errors
    ///
    /// Same as `Vector::get`.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T, Error> {
        let i = self.physical_index(index)?;

        Ok(&mut self.data[i])
    }

    /// Set the value at a logical index.
    ///
    /// # Errors
    ///
    /// Same as `Vector::get`; the vector is left untouched.
    pub fn set(&mut self, index: isize, value: T) -> Result<(), Error> {
        *self.get_mut(index)? = value;

        Ok(())
    }

    /// Iterate over the values in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over the values in index order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// The values, without their offset.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Apply `f` to each value, keeping the start index.
    fn map_values(&self, f: impl FnMut(&T) -> T) -> Self {
        Self::from_parts(self.data.iter().map(f).collect(), self.start_index)
    }

    fn check_same_len(&self, other: &Self) -> Result<(), Error> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(Error::SizeMismatch { left: self.len(), right: other.len() })
        }
    }

    /// Combine two vectors of equal length value by value.
    ///
    /// The result has the start index of `self`; the start index of `other` is not compared.
    fn try_zip_with(
        &self,
        other: &Self,
        mut f: impl FnMut(&T, &T) -> Result<T, Error>,
    ) -> Result<Self, Error> {
        self.check_same_len(other)?;

        let data = self.data.iter()
            .zip_eq(&other.data)
            .map(|(left, right)| f(left, right))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_parts(data, self.start_index))
    }

    /// Add a value to every element, leaving `self` unchanged.
    pub fn add_scalar(&self, value: &T) -> Self
    where
        T: Clone + Add<Output = T>,
    {
        self.map_values(|v| v.clone() + value.clone())
    }

    /// Subtract a value from every element, leaving `self` unchanged.
    pub fn sub_scalar(&self, value: &T) -> Self
    where
        T: Clone + Sub<Output = T>,
    {
        self.map_values(|v| v.clone() - value.clone())
    }

    /// Multiply every element by a value, leaving `self` unchanged.
    pub fn mul_scalar(&self, value: &T) -> Self
    where
        T: Clone + Mul<Output = T>,
    {
        self.map_values(|v| v.clone() * value.clone())
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the lengths differ.
    pub fn add_vector(&self, other: &Self) -> Result<Self, Error>
    where
        T: Clone + Add<Output = T>,
    {
        self.try_zip_with(other, |left, right| Ok(left.clone() + right.clone()))
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the lengths differ.
    pub fn sub_vector(&self, other: &Self) -> Result<Self, Error>
    where
        T: Clone + Sub<Output = T>,
    {
        self.try_zip_with(other, |left, right| Ok(left.clone() - right.clone()))
    }

    /// Compute the inner product with another vector of the same length.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the lengths differ.
    pub fn inner_product(&self, other: &Self) -> Result<T, Error>
    where
        T: Zero + Clone + Mul<Output = T>,
    {
        self.check_same_len(other)?;

        Ok(self.data.iter()
            .zip_eq(&other.data)
            .fold(T::zero(), |total, (left, right)| total + left.clone() * right.clone()))
    }
}

impl<T> Vector<Vector<T>> {
    /// Add two vectors of vectors row by row.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the number of rows differs, or if any pair of rows differs in length.
    pub fn add_rows(&self, other: &Self) -> Result<Self, Error>
    where
        T: Clone + Add<Output = T>,
    {
        self.try_zip_with(other, |row, other_row| row.add_vector(other_row))
    }

    /// Subtract two vectors of vectors row by row.
    ///
    /// # Errors
    ///
    /// Same as `add_rows`.
    pub fn sub_rows(&self, other: &Self) -> Result<Self, Error>
    where
        T: Clone + Sub<Output = T>,
    {
        self.try_zip_with(other, |row, other_row| row.sub_vector(other_row))
    }
}

impl<T: Default + Clone> Default for Vector<T> {
    fn default() -> Self {
        Self::from_parts(vec![T::default(); DEFAULT_LEN], 0)
    }
}

impl<T> Index<isize> for Vector<T> {
    type Output = T;

    /// # Panics
    ///
    /// When `Vector::get` would return an error.
    fn index(&self, index: isize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> IndexMut<isize> for Vector<T> {
    /// # Panics
    ///
    /// When `Vector::get_mut` would return an error.
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone + Add<Output = T>> Add<T> for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, value: T) -> Self::Output {
        self.add_scalar(&value)
    }
}

impl<T: Clone + Add<Output = T>> Add<T> for Vector<T> {
    type Output = Vector<T>;

    fn add(mut self, value: T) -> Self::Output {
        self.data = self.data.into_iter().map(|v| v + value.clone()).collect();
        self
    }
}

impl<T: Clone + Sub<Output = T>> Sub<T> for &Vector<T> {
    type Output = Vector<T>;

    fn sub(self, value: T) -> Self::Output {
        self.sub_scalar(&value)
    }
}

impl<T: Clone + Sub<Output = T>> Sub<T> for Vector<T> {
    type Output = Vector<T>;

    fn sub(mut self, value: T) -> Self::Output {
        self.data = self.data.into_iter().map(|v| v - value.clone()).collect();
        self
    }
}

impl<T: Clone + Mul<Output = T>> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, value: T) -> Self::Output {
        self.mul_scalar(&value)
    }
}

impl<T: Clone + Mul<Output = T>> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(mut self, value: T) -> Self::Output {
        self.data = self.data.into_iter().map(|v| v * value.clone()).collect();
        self
    }
}

/// Values separated by a single space, without a trailing separator.
impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.data.iter().format(" "))
    }
}
