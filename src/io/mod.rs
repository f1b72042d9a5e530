//! # Reading of vectors and matrices
//!
//! Containers are read from whitespace separated text into storage that already has the right
//! shape: the length of a vector (or the size of a matrix) is never inferred from the input.
//! Writing is done through the `Display` implementations of the containers.
//!
//! Either all values are read and stored, or the container is left untouched.
use std::fmt::Display;
use std::io::Read;
use std::str::{FromStr, SplitWhitespace};

use itertools::Itertools;
use log::debug;

use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::vector::Vector;
use crate::io::error::{ParseError, ReadError};

pub mod error;

/// Whitespace separated tokens, counting how many were consumed.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    consumed: usize,
}

impl<'a> Tokens<'a> {
    /// Split `text` on whitespace.
    pub fn new(text: &'a str) -> Self {
        Self { inner: text.split_whitespace(), consumed: 0 }
    }

    /// Number of tokens taken so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Parse a single token, counting it as consumed.
    fn parse<T: FromStr>(&mut self, token: &str) -> Result<T, ReadError>
    where
        T::Err: Display,
    {
        let position = self.consumed;
        self.consumed += 1;

        token.parse()
            .map_err(|error: T::Err| ParseError::new(error.to_string(), token, position).into())
    }

    /// Parse exactly `len` tokens.
    fn next_values<T: FromStr>(&mut self, len: usize) -> Result<Vec<T>, ReadError>
    where
        T::Err: Display,
    {
        let mut values = Vec::with_capacity(len);
        for found in 0..len {
            let token = self.inner.next()
                .ok_or(ReadError::UnexpectedEnd { expected: len, found })?;
            values.push(self.parse(token)?);
        }

        Ok(values)
    }
}

/// Overwrite the values of `vector` with the next `vector.len()` tokens, in index order.
///
/// # Errors
///
/// When a token can't be parsed or the tokens run out. The vector is not modified in that case.
pub fn read_values<T: FromStr>(vector: &mut Vector<T>, tokens: &mut Tokens<'_>) -> Result<(), ReadError>
where
    T::Err: Display,
{
    let values = tokens.next_values(vector.len())?;
    store(vector, values);

    Ok(())
}

/// Overwrite each row of `matrix`, in row order, with the next tokens.
///
/// # Errors
///
/// When a token can't be parsed or the tokens run out. The matrix is not modified in that case.
pub fn read_rows<T: FromStr>(matrix: &mut Matrix<T>, tokens: &mut Tokens<'_>) -> Result<(), ReadError>
where
    T::Err: Display,
{
    let lens = matrix.iter_rows().map(|row| row.len()).collect::<Vec<_>>();
    let mut values = tokens.next_values(lens.iter().sum())?.into_iter();

    for (i, len) in lens.into_iter().enumerate() {
        store(&mut matrix[i as isize], values.by_ref().take(len));
    }

    Ok(())
}

fn store<T>(vector: &mut Vector<T>, values: impl IntoIterator<Item = T>) {
    for (slot, value) in vector.iter_mut().zip_eq(values) {
        *slot = value;
    }
}

/// Read the values of `vector` from a stream.
///
/// Tokens following the last value are ignored.
///
/// # Errors
///
/// When the stream can't be read, or for the reasons given at `read_values`.
pub fn read_vector<T: FromStr, R: Read>(mut reader: R, vector: &mut Vector<T>) -> Result<(), ReadError>
where
    T::Err: Display,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    read_values(vector, &mut Tokens::new(&text))
        .inspect_err(|error| debug!("Rejected vector input: {}", error))
}

/// Read the rows of `matrix` from a stream.
///
/// # Errors
///
/// When the stream can't be read, or for the reasons given at `read_rows`.
pub fn read_matrix<T: FromStr, R: Read>(mut reader: R, matrix: &mut Matrix<T>) -> Result<(), ReadError>
where
    T::Err: Display,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    read_rows(matrix, &mut Tokens::new(&text))
        .inspect_err(|error| debug!("Rejected matrix input: {}", error))
}
