//! Dynamically sized dense matrix

use std::fmt;
use std::ops::{Index, IndexMut, Range};

use crate::display::fmt_matrix;
use crate::element::Element;
use crate::error::{MathError, MathResult};
use crate::order::{StorageKind, StorageOrder};
use crate::traits::{Address, Entries, Matrix, MatrixMut};

/// Heap-allocated dense matrix in row-major or column-major layout
#[derive(Clone, Debug, PartialEq)]
pub struct DynamicMatrix<T> {
    rows: usize,
    columns: usize,
    order: StorageOrder,
    data: Vec<T>,
}

impl<T: Element> DynamicMatrix<T> {
    /// `rows x columns` matrix of default elements
    pub fn new(rows: usize, columns: usize, order: StorageOrder) -> Self {
        Self {
            rows,
            columns,
            order,
            data: vec![T::zero(); rows * columns],
        }
    }

    pub fn filled(rows: usize, columns: usize, order: StorageOrder, value: T) -> Self {
        Self {
            rows,
            columns,
            order,
            data: vec![value; rows * columns],
        }
    }

    pub fn from_fn<F: FnMut(usize, usize) -> T>(
        rows: usize,
        columns: usize,
        order: StorageOrder,
        mut f: F,
    ) -> Self {
        let mut m = Self::new(rows, columns, order);
        for i in 0..rows {
            for j in 0..columns {
                let k = m.offset(i, j);
                m.data[k] = f(i, j);
            }
        }
        m
    }

    /// Build from row-major `values`
    pub fn from_row_slice(
        rows: usize,
        columns: usize,
        order: StorageOrder,
        values: &[T],
    ) -> MathResult<Self> {
        if values.len() != rows * columns {
            return Err(MathError::SizeMismatch {
                expected: rows * columns,
                found: values.len(),
            });
        }
        Ok(Self::from_fn(rows, columns, order, |i, j| {
            values[i * columns + j]
        }))
    }

    /// Materialize any matrix operand in the given storage order
    pub fn from_expr<M: Matrix<Elem = T> + ?Sized>(operand: &M, order: StorageOrder) -> Self {
        let (rows, columns) = operand.dims();
        let mut out = Self::new(rows, columns, order);
        let src = operand.order();
        for k in 0..src.lines(rows, columns) {
            for (x, v) in operand.line_entries(src, k) {
                let (i, j) = src.join(k, x);
                let pos = out.offset(i, j);
                out.data[pos] = v;
            }
        }
        out
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.rows && j < self.columns, "Invalid matrix access index");
        match self.order {
            StorageOrder::RowMajor => i * self.columns + j,
            StorageOrder::ColumnMajor => j * self.rows + i,
        }
    }

    pub fn storage_order(&self) -> StorageOrder {
        self.order
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Change the dimensions; with `preserve` the overlapping block is kept
    pub fn resize(&mut self, rows: usize, columns: usize, preserve: bool) {
        let mut out = Self::new(rows, columns, self.order);
        if preserve {
            for i in 0..rows.min(self.rows) {
                for j in 0..columns.min(self.columns) {
                    let k = out.offset(i, j);
                    out.data[k] = self.data[self.offset(i, j)];
                }
            }
        }
        *self = out;
    }

    /// Transpose in place; the storage order is kept
    pub fn transpose(&mut self) {
        let t = Self::from_fn(self.columns, self.rows, self.order, |i, j| {
            self.data[self.offset(j, i)]
        });
        *self = t;
    }

    /// Remove all elements; the matrix becomes `0 x 0`
    pub fn clear(&mut self) {
        self.rows = 0;
        self.columns = 0;
        self.data.clear();
    }
}

impl<T: Element> Index<(usize, usize)> for DynamicMatrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[self.offset(i, j)]
    }
}

impl<T: Element> IndexMut<(usize, usize)> for DynamicMatrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        let k = self.offset(i, j);
        &mut self.data[k]
    }
}

impl<T: Element> Matrix for DynamicMatrix<T> {
    type Elem = T;

    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn kind(&self) -> StorageKind {
        StorageKind::Dense
    }

    fn order(&self) -> StorageOrder {
        self.order
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> T {
        self.data[self.offset(i, j)]
    }

    fn row_entries(&self, i: usize) -> Entries<'_, T> {
        match self.order {
            StorageOrder::RowMajor => {
                let start = i * self.columns;
                Box::new(
                    self.data[start..start + self.columns]
                        .iter()
                        .copied()
                        .enumerate(),
                )
            }
            StorageOrder::ColumnMajor => {
                let rows = self.rows;
                Box::new(
                    self.data
                        .iter()
                        .skip(i)
                        .step_by(rows.max(1))
                        .copied()
                        .enumerate(),
                )
            }
        }
    }

    fn column_entries(&self, j: usize) -> Entries<'_, T> {
        match self.order {
            StorageOrder::ColumnMajor => {
                let start = j * self.rows;
                Box::new(self.data[start..start + self.rows].iter().copied().enumerate())
            }
            StorageOrder::RowMajor => {
                let columns = self.columns;
                Box::new(
                    self.data
                        .iter()
                        .skip(j)
                        .step_by(columns.max(1))
                        .copied()
                        .enumerate(),
                )
            }
        }
    }

    fn is_aliased(&self, address: Address) -> bool {
        Address::of(self) == address
    }
}

impl<T: Element> MatrixMut for DynamicMatrix<T> {
    fn address(&self) -> Address {
        Address::of(self)
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: T) {
        let k = self.offset(i, j);
        self.data[k] = value;
    }

    fn clear_block(&mut self, rows: Range<usize>, columns: Range<usize>) {
        for i in rows {
            for j in columns.clone() {
                let k = self.offset(i, j);
                self.data[k] = T::zero();
            }
        }
    }

    fn reset(&mut self) {
        self.data.fill(T::zero());
    }

    fn for_each_stored(&mut self, f: &mut dyn FnMut(usize, usize, &mut T)) {
        let (rows, columns, order) = (self.rows, self.columns, self.order);
        let lines = order.lines(rows, columns);
        let len = if lines == 0 { 0 } else { self.data.len() / lines };
        for (k, v) in self.data.iter_mut().enumerate() {
            let (i, j) = order.join(k / len, k % len);
            f(i, j, v);
        }
    }
}

impl<T: Element> fmt::Display for DynamicMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_matrix(self, f)
    }
}

matrix_ops!(impl['a, T: Element,] &'a DynamicMatrix<T>);
matrix_abs!(impl['a, T: Element,] &'a DynamicMatrix<T>);
matrix_trans!(impl['a, T: Element,] &'a DynamicMatrix<T>);
matrix_assign_ops!(impl[T: Element,] DynamicMatrix<T>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts_agree() {
        for order in [StorageOrder::RowMajor, StorageOrder::ColumnMajor] {
            let m = DynamicMatrix::from_row_slice(2, 3, order, &[1, 2, 3, 4, 5, 6]).unwrap();
            assert_eq!(m[(1, 0)], 4);
            assert_eq!(m.get(0, 2), 3);
            let row: Vec<_> = m.row_entries(1).collect();
            assert_eq!(row, vec![(0, 4), (1, 5), (2, 6)]);
            let col: Vec<_> = m.column_entries(2).collect();
            assert_eq!(col, vec![(0, 3), (1, 6)]);
        }
    }

    #[test]
    fn test_from_row_slice_checks_length() {
        assert!(DynamicMatrix::from_row_slice(2, 2, StorageOrder::RowMajor, &[1.0; 3]).is_err());
    }

    #[test]
    fn test_resize_and_transpose() {
        let mut m =
            DynamicMatrix::from_row_slice(2, 2, StorageOrder::ColumnMajor, &[1.0, 2.0, 3.0, 4.0])
                .unwrap();
        m.transpose();
        assert_eq!(m[(0, 1)], 3.0);
        m.resize(3, 1, true);
        assert_eq!(m.dims(), (3, 1));
        assert_eq!(m[(1, 0)], 2.0);
        assert_eq!(m[(2, 0)], 0.0);
    }

    #[test]
    fn test_for_each_stored_visits_coordinates() {
        let mut m = DynamicMatrix::<i32>::new(2, 3, StorageOrder::ColumnMajor);
        m.for_each_stored(&mut |i, j, v| *v = (10 * i + j) as i32);
        assert_eq!(m[(1, 2)], 12);
        assert_eq!(m[(0, 1)], 1);
    }

    #[test]
    fn test_scalar_assign_ops() {
        let mut m = DynamicMatrix::filled(2, 2, StorageOrder::RowMajor, 3.0);
        m *= 2.0;
        m /= 4.0;
        assert!(m.as_slice().iter().all(|&x| x == 1.5));
        let n = m.clone();
        m += &n;
        m -= &n * 0.5;
        assert!(m.as_slice().iter().all(|&x| x == 2.25));
    }

    #[test]
    fn test_display() {
        let m = DynamicMatrix::from_row_slice(2, 2, StorageOrder::ColumnMajor, &[1, 2, 3, 4])
            .unwrap();
        assert_eq!(m.to_string(), "( 1 2 )\n( 3 4 )\n");
    }
}
