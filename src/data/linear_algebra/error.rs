//! # Errors raised by the containers
//!
//! Construction, element access and elementwise arithmetic all report failures through the same
//! closed set of error kinds.
use std::error;
use std::fmt;

/// Everything that can go wrong when building, indexing or combining a `Vector` or `Matrix`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error {
    /// A requested length or dimension is larger than the configured maximum.
    InvalidSize {
        #[allow(missing_docs)]
        requested: usize,
        #[allow(missing_docs)]
        maximum: usize,
    },
    /// A requested length or start index is negative.
    NegativeLength,
    /// A logical index lies before the start index.
    NegativeIndex {
        #[allow(missing_docs)]
        index: isize,
        #[allow(missing_docs)]
        start_index: usize,
    },
    /// A logical index lies at or after the end of the stored values, or exceeds the maximum
    /// vector size.
    IndexTooLarge {
        #[allow(missing_docs)]
        index: isize,
        /// One past the last valid logical index.
        end_index: usize,
    },
    /// The operands of a binary operation differ in length.
    SizeMismatch {
        #[allow(missing_docs)]
        left: usize,
        #[allow(missing_docs)]
        right: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidSize { requested, maximum } => write!(
                f, "InvalidSize: requested size {} exceeds the maximum of {}", requested, maximum,
            ),
            Error::NegativeLength => write!(f, "NegativeLength: size and start index can't be negative"),
            Error::NegativeIndex { index, start_index } => write!(
                f, "NegativeIndex: index {} lies before the start index {}", index, start_index,
            ),
            Error::IndexTooLarge { index, end_index } => write!(
                f, "IndexTooLarge: index {} is not below {}", index, end_index,
            ),
            Error::SizeMismatch { left, right } => write!(
                f, "SizeMismatch: can't combine operands of size {} and {}", left, right,
            ),
        }
    }
}

impl error::Error for Error {}
