//! Single rows and columns of matrices as vectors

use std::fmt;
use std::ops::Range;

use crate::display::fmt_vector;
use crate::element::Element;
use crate::error::{MathError, MathResult};
use crate::order::{StorageKind, StorageOrder};
use crate::traits::{Address, Entries, Matrix, MatrixMut, Vector, VectorMut};

pub(crate) fn check_row(index: usize, rows: usize) -> MathResult<()> {
    if index >= rows {
        return Err(MathError::InvalidRow { index, rows });
    }
    Ok(())
}

pub(crate) fn check_column(index: usize, columns: usize) -> MathResult<()> {
    if index >= columns {
        return Err(MathError::InvalidColumn { index, columns });
    }
    Ok(())
}

/// Row `i` of a matrix operand
#[derive(Clone, Copy, Debug)]
pub struct Row<M> {
    matrix: M,
    row: usize,
}

impl<M: Matrix> Row<M> {
    pub fn new(matrix: M, row: usize) -> MathResult<Self> {
        check_row(row, matrix.rows())?;
        Ok(Self { matrix, row })
    }

    pub fn index(&self) -> usize {
        self.row
    }
}

impl<M: Matrix> Vector for Row<M> {
    type Elem = M::Elem;

    fn size(&self) -> usize {
        self.matrix.columns()
    }

    fn kind(&self) -> StorageKind {
        self.matrix.kind()
    }

    #[inline]
    fn get(&self, index: usize) -> M::Elem {
        self.matrix.get(self.row, index)
    }

    fn entries(&self) -> Entries<'_, M::Elem> {
        self.matrix.row_entries(self.row)
    }

    fn entries_in(&self, range: Range<usize>) -> Entries<'_, M::Elem> {
        self.matrix.row_entries_in(self.row, range)
    }

    fn can_alias(&self, address: Address) -> bool {
        self.matrix.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.matrix.is_aliased(address)
    }
}

/// Column `j` of a matrix operand
#[derive(Clone, Copy, Debug)]
pub struct Column<M> {
    matrix: M,
    column: usize,
}

impl<M: Matrix> Column<M> {
    pub fn new(matrix: M, column: usize) -> MathResult<Self> {
        check_column(column, matrix.columns())?;
        Ok(Self { matrix, column })
    }

    pub fn index(&self) -> usize {
        self.column
    }
}

impl<M: Matrix> Vector for Column<M> {
    type Elem = M::Elem;

    fn size(&self) -> usize {
        self.matrix.rows()
    }

    fn kind(&self) -> StorageKind {
        self.matrix.kind()
    }

    #[inline]
    fn get(&self, index: usize) -> M::Elem {
        self.matrix.get(index, self.column)
    }

    fn entries(&self) -> Entries<'_, M::Elem> {
        self.matrix.column_entries(self.column)
    }

    fn entries_in(&self, range: Range<usize>) -> Entries<'_, M::Elem> {
        self.matrix.column_entries_in(self.column, range)
    }

    fn can_alias(&self, address: Address) -> bool {
        self.matrix.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.matrix.is_aliased(address)
    }
}

/// Writable row `i` of a matrix destination
#[derive(Debug)]
pub struct RowMut<'a, M> {
    matrix: &'a mut M,
    row: usize,
}

impl<'a, M: MatrixMut> RowMut<'a, M> {
    pub fn new(matrix: &'a mut M, row: usize) -> MathResult<Self> {
        check_row(row, matrix.rows())?;
        Ok(Self { matrix, row })
    }

    pub fn index(&self) -> usize {
        self.row
    }
}

impl<M: MatrixMut> Vector for RowMut<'_, M> {
    type Elem = M::Elem;

    fn size(&self) -> usize {
        self.matrix.columns()
    }

    fn kind(&self) -> StorageKind {
        self.matrix.kind()
    }

    #[inline]
    fn get(&self, index: usize) -> M::Elem {
        self.matrix.get(self.row, index)
    }

    fn entries(&self) -> Entries<'_, M::Elem> {
        self.matrix.row_entries(self.row)
    }

    fn entries_in(&self, range: Range<usize>) -> Entries<'_, M::Elem> {
        self.matrix.row_entries_in(self.row, range)
    }

    fn can_alias(&self, address: Address) -> bool {
        self.matrix.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.matrix.is_aliased(address)
    }
}

impl<M: MatrixMut> VectorMut for RowMut<'_, M> {
    fn address(&self) -> Address {
        self.matrix.address()
    }

    fn set(&mut self, index: usize, value: M::Elem) {
        self.matrix.set(self.row, index, value);
    }

    fn append(&mut self, index: usize, value: M::Elem, check: bool) {
        // Only a row-major storage line ends where the row ends.
        if self.matrix.order() == StorageOrder::RowMajor {
            self.matrix.append(self.row, index, value, check);
        } else if !check || !value.is_default() {
            self.matrix.set(self.row, index, value);
        }
    }

    fn clear_range(&mut self, range: Range<usize>) {
        self.matrix.clear_block(self.row..self.row + 1, range);
    }

    fn for_each_stored(&mut self, f: &mut dyn FnMut(usize, &mut M::Elem)) {
        let row = self.row;
        self.matrix.for_each_stored(&mut |i, j, v| {
            if i == row {
                f(j, v);
            }
        });
    }
}

/// Writable column `j` of a matrix destination
#[derive(Debug)]
pub struct ColumnMut<'a, M> {
    matrix: &'a mut M,
    column: usize,
}

impl<'a, M: MatrixMut> ColumnMut<'a, M> {
    pub fn new(matrix: &'a mut M, column: usize) -> MathResult<Self> {
        check_column(column, matrix.columns())?;
        Ok(Self { matrix, column })
    }

    pub fn index(&self) -> usize {
        self.column
    }
}

impl<M: MatrixMut> Vector for ColumnMut<'_, M> {
    type Elem = M::Elem;

    fn size(&self) -> usize {
        self.matrix.rows()
    }

    fn kind(&self) -> StorageKind {
        self.matrix.kind()
    }

    #[inline]
    fn get(&self, index: usize) -> M::Elem {
        self.matrix.get(index, self.column)
    }

    fn entries(&self) -> Entries<'_, M::Elem> {
        self.matrix.column_entries(self.column)
    }

    fn entries_in(&self, range: Range<usize>) -> Entries<'_, M::Elem> {
        self.matrix.column_entries_in(self.column, range)
    }

    fn can_alias(&self, address: Address) -> bool {
        self.matrix.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.matrix.is_aliased(address)
    }
}

impl<M: MatrixMut> VectorMut for ColumnMut<'_, M> {
    fn address(&self) -> Address {
        self.matrix.address()
    }

    fn set(&mut self, index: usize, value: M::Elem) {
        self.matrix.set(index, self.column, value);
    }

    fn append(&mut self, index: usize, value: M::Elem, check: bool) {
        if self.matrix.order() == StorageOrder::ColumnMajor {
            self.matrix.append(index, self.column, value, check);
        } else if !check || !value.is_default() {
            self.matrix.set(index, self.column, value);
        }
    }

    fn clear_range(&mut self, range: Range<usize>) {
        self.matrix.clear_block(range, self.column..self.column + 1);
    }

    fn for_each_stored(&mut self, f: &mut dyn FnMut(usize, &mut M::Elem)) {
        let column = self.column;
        self.matrix.for_each_stored(&mut |i, j, v| {
            if j == column {
                f(i, v);
            }
        });
    }
}

macro_rules! line_display {
    (impl[$($g:tt)*] $ty:ty) => {
        impl<$($g)*> fmt::Display for $ty
        where
            $ty: Vector,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_vector(self, f)
            }
        }
    };
}

line_display!(impl[M] Row<M>);
line_display!(impl[M] Column<M>);
line_display!(impl['a, M] RowMut<'a, M>);
line_display!(impl['a, M] ColumnMut<'a, M>);

vector_ops!(impl[M,] Row<M>);
vector_abs!(impl[M,] Row<M>);
vector_ops!(impl[M,] Column<M>);
vector_abs!(impl[M,] Column<M>);
vector_ops!(impl['b, 'a, M,] &'b RowMut<'a, M>);
vector_abs!(impl['b, 'a, M,] &'b RowMut<'a, M>);
vector_ops!(impl['b, 'a, M,] &'b ColumnMut<'a, M>);
vector_abs!(impl['b, 'a, M,] &'b ColumnMut<'a, M>);
vector_assign_ops!(impl['a, M,] RowMut<'a, M>);
vector_assign_ops!(impl['a, M,] ColumnMut<'a, M>);
