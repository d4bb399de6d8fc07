//! Result containers chosen by storage kind

use std::fmt;
use std::ops::Range;

use crate::dense::{DynamicMatrix, DynamicVector};
use crate::display::{fmt_matrix, fmt_vector};
use crate::element::Element;
use crate::order::{StorageKind, StorageOrder};
use crate::sparse::{CompressedMatrix, CompressedVector};
use crate::traits::{Address, Entries, Matrix, Vector};

/// Evaluated vector expression
///
/// Dense expressions evaluate into a [`DynamicVector`], sparse ones into a
/// [`CompressedVector`].
#[derive(Clone, Debug, PartialEq)]
pub enum TempVector<T> {
    Dense(DynamicVector<T>),
    Sparse(CompressedVector<T>),
}

impl<T: Element> TempVector<T> {
    pub fn from_expr<V: Vector<Elem = T> + ?Sized>(operand: &V) -> Self {
        match operand.kind() {
            StorageKind::Dense => TempVector::Dense(DynamicVector::from_expr(operand)),
            StorageKind::Sparse => TempVector::Sparse(CompressedVector::from_expr(operand)),
        }
    }

    pub fn as_dense(&self) -> Option<&DynamicVector<T>> {
        match self {
            TempVector::Dense(v) => Some(v),
            TempVector::Sparse(_) => None,
        }
    }

    pub fn as_sparse(&self) -> Option<&CompressedVector<T>> {
        match self {
            TempVector::Sparse(v) => Some(v),
            TempVector::Dense(_) => None,
        }
    }

    /// Convert into a dense vector regardless of the stored kind
    pub fn into_dense(self) -> DynamicVector<T> {
        match self {
            TempVector::Dense(v) => v,
            TempVector::Sparse(v) => DynamicVector::from_expr(&v),
        }
    }
}

impl<T: Element> Vector for TempVector<T> {
    type Elem = T;

    fn size(&self) -> usize {
        match self {
            TempVector::Dense(v) => v.size(),
            TempVector::Sparse(v) => v.size(),
        }
    }

    fn kind(&self) -> StorageKind {
        match self {
            TempVector::Dense(_) => StorageKind::Dense,
            TempVector::Sparse(_) => StorageKind::Sparse,
        }
    }

    fn get(&self, index: usize) -> T {
        match self {
            TempVector::Dense(v) => v.get(index),
            TempVector::Sparse(v) => v.get(index),
        }
    }

    fn entries(&self) -> Entries<'_, T> {
        match self {
            TempVector::Dense(v) => v.entries(),
            TempVector::Sparse(v) => v.entries(),
        }
    }

    fn entries_in(&self, range: Range<usize>) -> Entries<'_, T> {
        match self {
            TempVector::Dense(v) => v.entries_in(range),
            TempVector::Sparse(v) => v.entries_in(range),
        }
    }

    fn nonzeros(&self) -> usize {
        match self {
            TempVector::Dense(v) => v.nonzeros(),
            TempVector::Sparse(v) => v.nonzeros(),
        }
    }

    fn is_aliased(&self, address: Address) -> bool {
        Address::of(self) == address
    }
}

impl<T: Element> fmt::Display for TempVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_vector(self, f)
    }
}

/// Evaluated matrix expression, stored in the operand's preferred order
#[derive(Clone, Debug, PartialEq)]
pub enum TempMatrix<T> {
    Dense(DynamicMatrix<T>),
    Sparse(CompressedMatrix<T>),
}

impl<T: Element> TempMatrix<T> {
    pub fn from_expr<M: Matrix<Elem = T> + ?Sized>(operand: &M) -> Self {
        let order = operand.order();
        match operand.kind() {
            StorageKind::Dense => TempMatrix::Dense(DynamicMatrix::from_expr(operand, order)),
            StorageKind::Sparse => TempMatrix::Sparse(CompressedMatrix::from_expr(operand, order)),
        }
    }

    pub fn as_dense(&self) -> Option<&DynamicMatrix<T>> {
        match self {
            TempMatrix::Dense(m) => Some(m),
            TempMatrix::Sparse(_) => None,
        }
    }

    pub fn as_sparse(&self) -> Option<&CompressedMatrix<T>> {
        match self {
            TempMatrix::Sparse(m) => Some(m),
            TempMatrix::Dense(_) => None,
        }
    }

    pub fn into_dense(self) -> DynamicMatrix<T> {
        match self {
            TempMatrix::Dense(m) => m,
            TempMatrix::Sparse(m) => {
                let order = m.storage_order();
                DynamicMatrix::from_expr(&m, order)
            }
        }
    }
}

impl<T: Element> Matrix for TempMatrix<T> {
    type Elem = T;

    fn rows(&self) -> usize {
        match self {
            TempMatrix::Dense(m) => m.rows(),
            TempMatrix::Sparse(m) => m.rows(),
        }
    }

    fn columns(&self) -> usize {
        match self {
            TempMatrix::Dense(m) => m.columns(),
            TempMatrix::Sparse(m) => m.columns(),
        }
    }

    fn kind(&self) -> StorageKind {
        match self {
            TempMatrix::Dense(_) => StorageKind::Dense,
            TempMatrix::Sparse(_) => StorageKind::Sparse,
        }
    }

    fn order(&self) -> StorageOrder {
        match self {
            TempMatrix::Dense(m) => m.order(),
            TempMatrix::Sparse(m) => m.order(),
        }
    }

    fn get(&self, i: usize, j: usize) -> T {
        match self {
            TempMatrix::Dense(m) => m.get(i, j),
            TempMatrix::Sparse(m) => m.get(i, j),
        }
    }

    fn row_entries(&self, i: usize) -> Entries<'_, T> {
        match self {
            TempMatrix::Dense(m) => m.row_entries(i),
            TempMatrix::Sparse(m) => m.row_entries(i),
        }
    }

    fn column_entries(&self, j: usize) -> Entries<'_, T> {
        match self {
            TempMatrix::Dense(m) => m.column_entries(j),
            TempMatrix::Sparse(m) => m.column_entries(j),
        }
    }

    fn row_entries_in(&self, i: usize, range: Range<usize>) -> Entries<'_, T> {
        match self {
            TempMatrix::Dense(m) => m.row_entries_in(i, range),
            TempMatrix::Sparse(m) => m.row_entries_in(i, range),
        }
    }

    fn column_entries_in(&self, j: usize, range: Range<usize>) -> Entries<'_, T> {
        match self {
            TempMatrix::Dense(m) => m.column_entries_in(j, range),
            TempMatrix::Sparse(m) => m.column_entries_in(j, range),
        }
    }

    fn nonzeros(&self) -> usize {
        match self {
            TempMatrix::Dense(m) => m.nonzeros(),
            TempMatrix::Sparse(m) => m.nonzeros(),
        }
    }

    fn is_aliased(&self, address: Address) -> bool {
        Address::of(self) == address
    }
}

impl<T: Element> fmt::Display for TempMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_matrix(self, f)
    }
}

vector_ops!(impl['a, T: Element,] &'a TempVector<T>);
vector_abs!(impl['a, T: Element,] &'a TempVector<T>);
matrix_ops!(impl['a, T: Element,] &'a TempMatrix<T>);
matrix_abs!(impl['a, T: Element,] &'a TempMatrix<T>);
matrix_trans!(impl['a, T: Element,] &'a TempMatrix<T>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_selects_container() {
        let a = DynamicVector::from_vec(vec![1.0, 0.0, 2.0]);
        let s = CompressedVector::from_pairs(3, &[(1, 4.0)]).unwrap();

        let dense = TempVector::from_expr(&(&a + &s));
        assert!(dense.as_dense().is_some());
        assert_eq!(dense.get(1), 4.0);

        let sparse = TempVector::from_expr(&(&a * &s));
        assert_eq!(sparse.kind(), StorageKind::Sparse);
        assert_eq!(sparse.nonzeros(), 0);
        assert_eq!(sparse.into_dense().as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_matrix_temporary_keeps_order() {
        let m = CompressedMatrix::from_triplets(
            2,
            3,
            StorageOrder::ColumnMajor,
            &[(0, 2, 1.0), (1, 0, -1.0)],
        )
        .unwrap();
        let t = TempMatrix::from_expr(&-&m);
        assert_eq!(t.order(), StorageOrder::ColumnMajor);
        assert_eq!(t.as_sparse().map(|s| s.nonzeros()), Some(2));
        assert_eq!(t.get(1, 0), 1.0);
    }
}
