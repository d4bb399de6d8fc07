//! Error types for container, view and assignment operations
//!
//! Every failure in this crate is an invalid argument detected before any
//! element is touched: a mismatched shape on assignment, a view that does not
//! fit its backing operand, a duplicate sparse index or a zero divisor.
//!
//! # Examples
//!
//! ```
//! use lazalg_core::error::{MathError, MathResult};
//!
//! fn check_window(offset: usize, n: usize, size: usize) -> MathResult<()> {
//!     if n == 0 || offset + n > size {
//!         return Err(MathError::InvalidSubvector { offset, n, size });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_window(2, 3, 5).is_ok());
//! assert!(check_window(3, 3, 5).is_err());
//! ```

use thiserror::Error;

/// Errors raised by containers, views and the assignment engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Vector sizes differ on assignment or comparison
    #[error("Vector sizes do not match: expected {expected}, got {found}")]
    SizeMismatch { expected: usize, found: usize },

    /// Matrix dimensions differ on assignment or comparison
    #[error(
        "Matrix sizes do not match: expected {}x{}, got {}x{}",
        expected.0,
        expected.1,
        found.0,
        found.1
    )]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// Subvector window is empty or exceeds the underlying vector
    #[error("Invalid subvector specification: offset {offset}, size {n} on a vector of size {size}")]
    InvalidSubvector { offset: usize, n: usize, size: usize },

    /// Submatrix window is empty or exceeds the underlying matrix
    #[error(
        "Invalid submatrix specification: {m}x{n} block at ({row}, {column}) on a {rows}x{columns} matrix"
    )]
    InvalidSubmatrix {
        row: usize,
        column: usize,
        m: usize,
        n: usize,
        rows: usize,
        columns: usize,
    },

    /// Row index outside the matrix
    #[error("Invalid row access index: {index} (rows: {rows})")]
    InvalidRow { index: usize, rows: usize },

    /// Column index outside the matrix
    #[error("Invalid column access index: {index} (columns: {columns})")]
    InvalidColumn { index: usize, columns: usize },

    /// Sparse vector already holds an element at this index
    #[error("Bad access index: element {index} already exists")]
    DuplicateIndex { index: usize },

    /// Sparse matrix already holds an element at this position
    #[error("Bad access index: element ({row}, {column}) already exists")]
    DuplicateElement { row: usize, column: usize },

    /// Element index outside the container
    #[error("Index {index} out of bounds for size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    /// Division by a zero scalar
    #[error("Division by zero scalar")]
    DivisionByZero,

    /// Any other rejected argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias used throughout lazalg
pub type MathResult<T> = Result<T, MathError>;

impl MathError {
    /// Create a generic invalid-argument error
    pub fn invalid(msg: impl Into<String>) -> Self {
        MathError::InvalidArgument(msg.into())
    }

    /// Size check for two vector extents
    pub fn check_size(expected: usize, found: usize) -> MathResult<()> {
        if expected != found {
            return Err(MathError::SizeMismatch { expected, found });
        }
        Ok(())
    }

    /// Dimension check for two matrix shapes
    pub fn check_dims(expected: (usize, usize), found: (usize, usize)) -> MathResult<()> {
        if expected != found {
            return Err(MathError::DimensionMismatch { expected, found });
        }
        Ok(())
    }

    /// Index check against a container extent
    pub fn check_index(index: usize, size: usize) -> MathResult<()> {
        if index >= size {
            return Err(MathError::IndexOutOfBounds { index, size });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::SizeMismatch {
            expected: 3,
            found: 4,
        };
        assert_eq!(
            err.to_string(),
            "Vector sizes do not match: expected 3, got 4"
        );

        let err = MathError::DimensionMismatch {
            expected: (2, 3),
            found: (3, 2),
        };
        assert_eq!(
            err.to_string(),
            "Matrix sizes do not match: expected 2x3, got 3x2"
        );
    }

    #[test]
    fn test_checks() {
        assert!(MathError::check_size(3, 3).is_ok());
        assert_eq!(
            MathError::check_size(3, 2),
            Err(MathError::SizeMismatch {
                expected: 3,
                found: 2
            })
        );
        assert!(MathError::check_dims((2, 2), (2, 2)).is_ok());
        assert!(MathError::check_dims((2, 2), (2, 3)).is_err());
        assert!(MathError::check_index(4, 4).is_err());
        assert!(MathError::check_index(3, 4).is_ok());
    }

    #[test]
    fn test_invalid_helper() {
        let err = MathError::invalid("bad");
        assert_eq!(err.to_string(), "Invalid argument: bad");
    }
}
