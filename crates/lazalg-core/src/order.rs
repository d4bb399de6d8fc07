//! Storage order and storage kind descriptors

use std::fmt;

/// Layout of a two-dimensional container
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StorageOrder {
    /// Rows are stored contiguously
    #[default]
    RowMajor,
    /// Columns are stored contiguously
    ColumnMajor,
}

impl StorageOrder {
    /// The opposite order
    pub fn flip(self) -> Self {
        match self {
            StorageOrder::RowMajor => StorageOrder::ColumnMajor,
            StorageOrder::ColumnMajor => StorageOrder::RowMajor,
        }
    }

    /// Number of storage lines of a `rows x columns` matrix
    pub fn lines(self, rows: usize, columns: usize) -> usize {
        match self {
            StorageOrder::RowMajor => rows,
            StorageOrder::ColumnMajor => columns,
        }
    }

    /// Split `(i, j)` into `(line, index within line)`
    #[inline]
    pub fn split(self, i: usize, j: usize) -> (usize, usize) {
        match self {
            StorageOrder::RowMajor => (i, j),
            StorageOrder::ColumnMajor => (j, i),
        }
    }

    /// Inverse of [`StorageOrder::split`]
    #[inline]
    pub fn join(self, line: usize, index: usize) -> (usize, usize) {
        self.split(line, index)
    }
}

impl fmt::Display for StorageOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageOrder::RowMajor => write!(f, "row-major"),
            StorageOrder::ColumnMajor => write!(f, "column-major"),
        }
    }
}

/// Whether an operand stores every element or only non-default ones
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageKind {
    Dense,
    Sparse,
}

impl StorageKind {
    pub fn is_dense(self) -> bool {
        self == StorageKind::Dense
    }

    pub fn is_sparse(self) -> bool {
        self == StorageKind::Sparse
    }

    /// Result kind of an addition or subtraction: dense as soon as one side is dense
    pub fn additive(self, other: Self) -> Self {
        if self.is_dense() || other.is_dense() {
            StorageKind::Dense
        } else {
            StorageKind::Sparse
        }
    }

    /// Result kind of an elementwise or outer product: sparse as soon as one side is sparse
    pub fn multiplicative(self, other: Self) -> Self {
        if self.is_sparse() || other.is_sparse() {
            StorageKind::Sparse
        } else {
            StorageKind::Dense
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::Dense => write!(f, "dense"),
            StorageKind::Sparse => write!(f, "sparse"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_join() {
        assert_eq!(StorageOrder::RowMajor.split(2, 5), (2, 5));
        assert_eq!(StorageOrder::ColumnMajor.split(2, 5), (5, 2));
        assert_eq!(StorageOrder::ColumnMajor.join(5, 2), (2, 5));
        assert_eq!(StorageOrder::ColumnMajor.lines(3, 7), 7);
        assert_eq!(StorageOrder::RowMajor.flip(), StorageOrder::ColumnMajor);
    }

    #[test]
    fn test_kind_rules() {
        use StorageKind::*;
        assert_eq!(Sparse.additive(Sparse), Sparse);
        assert_eq!(Sparse.additive(Dense), Dense);
        assert_eq!(Dense.multiplicative(Sparse), Sparse);
        assert_eq!(Dense.multiplicative(Dense), Dense);
    }
}
