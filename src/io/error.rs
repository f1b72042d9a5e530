//! # Error reporting for reading of containers from text
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt;
use std::io;

/// A `ReadError` is created when an error was encountered during IO or parsing.
#[derive(Debug)]
pub enum ReadError {
    /// The stream couldn't be read.
    IO(io::Error),
    /// A token could not be parsed into a value of the element type.
    Parse(ParseError),
    /// The stream ended before every element of the container was filled.
    UnexpectedEnd {
        /// Number of values the container needs.
        expected: usize,
        /// Number of values present before the stream ran out.
        found: usize,
    },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReadError::IO(error) => error.fmt(f),
            ReadError::Parse(error) => error.fmt(f),
            ReadError::UnexpectedEnd { expected, found } => write!(
                f, "Input ended after {} of {} values", found, expected,
            ),
        }
    }
}

impl Error for ReadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReadError::IO(error) => Some(error),
            ReadError::Parse(error) => Some(error),
            ReadError::UnexpectedEnd { .. } => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(error: io::Error) -> Self {
        ReadError::IO(error)
    }
}

impl From<ParseError> for ReadError {
    fn from(error: ParseError) -> Self {
        ReadError::Parse(error)
    }
}

/// A `ParseError` points at the token that could not be parsed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseError {
    description: String,
    token: String,
    position: usize,
}

impl ParseError {
    /// Create a new `ParseError`.
    ///
    /// # Arguments
    ///
    /// * `description`: Why the token was rejected, typically the element type's own parse error.
    /// * `token`: The offending token.
    /// * `position`: Zero based number of the token in the input.
    pub fn new(description: impl Into<String>, token: impl Into<String>, position: usize) -> Self {
        Self { description: description.into(), token: token.into(), position }
    }

    /// The offending token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Zero based number of the token in the input.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f, "ParseError: could not read token {} (\"{}\"): {}",
            self.position, self.token, self.description,
        )
    }
}

impl Error for ParseError {}
