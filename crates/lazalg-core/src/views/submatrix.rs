//! Rectangular blocks of matrices

use std::fmt;
use std::ops::Range;

use crate::display::fmt_matrix;
use crate::error::{MathError, MathResult};
use crate::order::{StorageKind, StorageOrder};
use crate::traits::{rebase, Address, Entries, Matrix, MatrixMut};

pub(crate) fn check_block(
    (rows, columns): (usize, usize),
    row: usize,
    column: usize,
    m: usize,
    n: usize,
) -> MathResult<()> {
    if m == 0 || n == 0 || m > rows || n > columns || row > rows - m || column > columns - n {
        return Err(MathError::InvalidSubmatrix {
            row,
            column,
            m,
            n,
            rows,
            columns,
        });
    }
    Ok(())
}

fn shift(range: Range<usize>, offset: usize) -> Range<usize> {
    offset + range.start..offset + range.end
}

/// Read-only `m x n` block of a matrix operand starting at `(row, column)`
#[derive(Clone, Copy, Debug)]
pub struct Submatrix<M> {
    matrix: M,
    row: usize,
    column: usize,
    m: usize,
    n: usize,
}

impl<M: Matrix> Submatrix<M> {
    /// Fails with [`MathError::InvalidSubmatrix`] for an empty or oversized block
    pub fn new(matrix: M, row: usize, column: usize, m: usize, n: usize) -> MathResult<Self> {
        check_block(matrix.dims(), row, column, m, n)?;
        Ok(Self {
            matrix,
            row,
            column,
            m,
            n,
        })
    }

    /// Block of the same operand, relative to this one
    pub fn narrow(self, row: usize, column: usize, m: usize, n: usize) -> MathResult<Self> {
        check_block((self.m, self.n), row, column, m, n)?;
        Ok(Self {
            matrix: self.matrix,
            row: self.row + row,
            column: self.column + column,
            m,
            n,
        })
    }

    /// Position of the upper left corner in the underlying matrix
    pub fn corner(&self) -> (usize, usize) {
        (self.row, self.column)
    }
}

impl<M: Matrix> Matrix for Submatrix<M> {
    type Elem = M::Elem;

    fn rows(&self) -> usize {
        self.m
    }

    fn columns(&self) -> usize {
        self.n
    }

    fn kind(&self) -> StorageKind {
        self.matrix.kind()
    }

    fn order(&self) -> StorageOrder {
        self.matrix.order()
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> M::Elem {
        debug_assert!(i < self.m && j < self.n, "Invalid submatrix access index");
        self.matrix.get(self.row + i, self.column + j)
    }

    fn row_entries(&self, i: usize) -> Entries<'_, M::Elem> {
        self.row_entries_in(i, 0..self.n)
    }

    fn column_entries(&self, j: usize) -> Entries<'_, M::Elem> {
        self.column_entries_in(j, 0..self.m)
    }

    fn row_entries_in(&self, i: usize, range: Range<usize>) -> Entries<'_, M::Elem> {
        let entries = self
            .matrix
            .row_entries_in(self.row + i, shift(range, self.column));
        rebase(entries, self.column)
    }

    fn column_entries_in(&self, j: usize, range: Range<usize>) -> Entries<'_, M::Elem> {
        let entries = self
            .matrix
            .column_entries_in(self.column + j, shift(range, self.row));
        rebase(entries, self.row)
    }

    fn can_alias(&self, address: Address) -> bool {
        self.matrix.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.matrix.is_aliased(address)
    }
}

/// Writable `m x n` block of a matrix destination
///
/// # Examples
///
/// ```
/// use lazalg_core::prelude::*;
///
/// let mut a = DynamicMatrix::<i32>::new(3, 3, StorageOrder::RowMajor);
/// let b = StaticMatrix::<i32, 2, 2>::from_rows([[1, 2], [3, 4]]);
/// submatrix_mut(&mut a, 1, 1, 2, 2).unwrap().assign(&b).unwrap();
/// assert_eq!(a.get(2, 2), 4);
/// assert_eq!(a.get(0, 0), 0);
/// ```
#[derive(Debug)]
pub struct SubmatrixMut<'a, M> {
    matrix: &'a mut M,
    row: usize,
    column: usize,
    m: usize,
    n: usize,
}

impl<'a, M: MatrixMut> SubmatrixMut<'a, M> {
    pub fn new(matrix: &'a mut M, row: usize, column: usize, m: usize, n: usize) -> MathResult<Self> {
        check_block(matrix.dims(), row, column, m, n)?;
        Ok(Self {
            matrix,
            row,
            column,
            m,
            n,
        })
    }

    pub fn corner(&self) -> (usize, usize) {
        (self.row, self.column)
    }
}

impl<M: MatrixMut> Matrix for SubmatrixMut<'_, M> {
    type Elem = M::Elem;

    fn rows(&self) -> usize {
        self.m
    }

    fn columns(&self) -> usize {
        self.n
    }

    fn kind(&self) -> StorageKind {
        self.matrix.kind()
    }

    fn order(&self) -> StorageOrder {
        self.matrix.order()
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> M::Elem {
        self.matrix.get(self.row + i, self.column + j)
    }

    fn row_entries(&self, i: usize) -> Entries<'_, M::Elem> {
        self.row_entries_in(i, 0..self.n)
    }

    fn column_entries(&self, j: usize) -> Entries<'_, M::Elem> {
        self.column_entries_in(j, 0..self.m)
    }

    fn row_entries_in(&self, i: usize, range: Range<usize>) -> Entries<'_, M::Elem> {
        let entries = self
            .matrix
            .row_entries_in(self.row + i, shift(range, self.column));
        rebase(entries, self.column)
    }

    fn column_entries_in(&self, j: usize, range: Range<usize>) -> Entries<'_, M::Elem> {
        let entries = self
            .matrix
            .column_entries_in(self.column + j, shift(range, self.row));
        rebase(entries, self.row)
    }

    fn can_alias(&self, address: Address) -> bool {
        self.matrix.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.matrix.is_aliased(address)
    }
}

impl<M: MatrixMut> MatrixMut for SubmatrixMut<'_, M> {
    fn address(&self) -> Address {
        self.matrix.address()
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: M::Elem) {
        debug_assert!(i < self.m && j < self.n, "Invalid submatrix access index");
        self.matrix.set(self.row + i, self.column + j, value);
    }

    fn clear_block(&mut self, rows: Range<usize>, columns: Range<usize>) {
        let (r, c) = (self.row, self.column);
        self.matrix
            .clear_block(r + rows.start..r + rows.end, c + columns.start..c + columns.end);
    }

    fn for_each_stored(&mut self, f: &mut dyn FnMut(usize, usize, &mut M::Elem)) {
        let rows = self.row..self.row + self.m;
        let columns = self.column..self.column + self.n;
        let (r, c) = (self.row, self.column);
        self.matrix.for_each_stored(&mut |i, j, v| {
            if rows.contains(&i) && columns.contains(&j) {
                f(i - r, j - c, v);
            }
        });
    }
}

impl<M: Matrix> fmt::Display for Submatrix<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_matrix(self, f)
    }
}

impl<M: MatrixMut> fmt::Display for SubmatrixMut<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_matrix(self, f)
    }
}

matrix_ops!(impl[M,] Submatrix<M>);
matrix_abs!(impl[M,] Submatrix<M>);
matrix_trans!(impl[M,] Submatrix<M>);
matrix_ops!(impl['b, 'a, M,] &'b SubmatrixMut<'a, M>);
matrix_abs!(impl['b, 'a, M,] &'b SubmatrixMut<'a, M>);
matrix_trans!(impl['b, 'a, M,] &'b SubmatrixMut<'a, M>);
matrix_assign_ops!(impl['a, M,] SubmatrixMut<'a, M>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::DynamicMatrix;
    use crate::sparse::CompressedMatrix;

    fn numbered(order: StorageOrder) -> DynamicMatrix<i32> {
        DynamicMatrix::from_fn(4, 4, order, |i, j| (10 * i + j) as i32)
    }

    #[test]
    fn test_block_validation() {
        let a = numbered(StorageOrder::RowMajor);
        assert!(Submatrix::new(&a, 1, 1, 3, 3).is_ok());
        assert!(Submatrix::new(&a, 2, 0, 3, 1).is_err());
        assert!(Submatrix::new(&a, 0, 0, 0, 1).is_err());
    }

    #[test]
    fn test_block_overflow_is_rejected() {
        let mut a = numbered(StorageOrder::RowMajor);
        assert!(Submatrix::new(&a, usize::MAX, 0, 2, 2).is_err());
        assert!(Submatrix::new(&a, 0, usize::MAX, 1, 1).is_err());
        assert!(Submatrix::new(&a, 1, 1, usize::MAX, 1).is_err());
        assert!(Submatrix::new(&a, 1, 1, 2, 2)
            .unwrap()
            .narrow(0, usize::MAX, 1, 1)
            .is_err());
        assert!(SubmatrixMut::new(&mut a, 2, usize::MAX - 1, 1, 3).is_err());
    }

    #[test]
    fn test_sparse_block_entries_start_inside_line() {
        for order in [StorageOrder::RowMajor, StorageOrder::ColumnMajor] {
            let a = CompressedMatrix::from_triplets(
                3,
                6,
                order,
                &[(1, 0, 1), (1, 2, 2), (1, 4, 3), (1, 5, 4), (0, 3, 9)],
            )
            .unwrap();
            let s = Submatrix::new(&a, 0, 3, 2, 3).unwrap();
            assert_eq!(s.row_entries(1).collect::<Vec<_>>(), vec![(1, 3), (2, 4)]);
            assert_eq!(s.row_entries(0).collect::<Vec<_>>(), vec![(0, 9)]);
            assert_eq!(s.column_entries(0).collect::<Vec<_>>(), vec![(0, 9)]);
            assert_eq!(s.row_entries_in(1, 2..3).collect::<Vec<_>>(), vec![(2, 4)]);
        }
    }

    #[test]
    fn test_block_reads() {
        let a = numbered(StorageOrder::ColumnMajor);
        let s = Submatrix::new(&a, 1, 2, 2, 2).unwrap();
        assert_eq!(s.dims(), (2, 2));
        assert_eq!(s.get(1, 0), 22);
        assert_eq!(s.row_entries(0).collect::<Vec<_>>(), vec![(0, 12), (1, 13)]);
        assert_eq!(s.column_entries(1).collect::<Vec<_>>(), vec![(0, 13), (1, 23)]);
        let t = s.narrow(1, 1, 1, 1).unwrap();
        assert_eq!(t.get(0, 0), 23);
        assert_eq!(t.corner(), (2, 3));
    }

    #[test]
    fn test_sparse_block_assignment() {
        for order in [StorageOrder::RowMajor, StorageOrder::ColumnMajor] {
            let mut a = CompressedMatrix::from_triplets(
                3,
                3,
                order,
                &[(0, 0, 1), (1, 1, 2), (2, 2, 3), (1, 2, 4)],
            )
            .unwrap();
            let b = DynamicMatrix::from_row_slice(2, 2, StorageOrder::RowMajor, &[5, 0, 0, 6])
                .unwrap();
            {
                let mut s = SubmatrixMut::new(&mut a, 1, 1, 2, 2).unwrap();
                s.assign(&b).unwrap();
                s *= 2;
            }
            assert_eq!(a.get(0, 0), 1);
            assert_eq!(a.get(1, 1), 10);
            assert_eq!(a.get(1, 2), 0);
            assert_eq!(a.get(2, 2), 12);
            assert_eq!(a.nonzeros(), 3);
            assert!(a.is_sorted());
        }
    }
}
