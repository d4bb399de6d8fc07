//! Compressed sparse matrix
//!
//! Elements are stored per row (row-major) or per column (column-major) in a
//! [`SparseLine`]. Search functions take a row and a column and return
//! positions within the storage line the element belongs to.

use std::fmt;
use std::ops::Range;

use super::line::SparseLine;
use crate::display::fmt_matrix;
use crate::element::Element;
use crate::error::{MathError, MathResult};
use crate::order::{StorageKind, StorageOrder};
use crate::traits::{Address, Entries, Matrix, MatrixMut};

/// Sparse matrix with sorted per-line storage
#[derive(Clone, Debug, PartialEq)]
pub struct CompressedMatrix<T> {
    rows: usize,
    columns: usize,
    order: StorageOrder,
    lines: Vec<SparseLine<T>>,
}

impl<T: Element> CompressedMatrix<T> {
    /// Empty `rows x columns` matrix
    pub fn new(rows: usize, columns: usize, order: StorageOrder) -> Self {
        let lines = (0..order.lines(rows, columns))
            .map(|_| SparseLine::new())
            .collect();
        Self {
            rows,
            columns,
            order,
            lines,
        }
    }

    /// Empty matrix with room for `nonzeros` elements
    pub fn with_capacity(rows: usize, columns: usize, nonzeros: usize, order: StorageOrder) -> Self {
        let mut m = Self::new(rows, columns, order);
        m.reserve(nonzeros);
        m
    }

    /// Build from `(row, column, value)` triplets in any order
    pub fn from_triplets(
        rows: usize,
        columns: usize,
        order: StorageOrder,
        triplets: &[(usize, usize, T)],
    ) -> MathResult<Self> {
        let mut m = Self::new(rows, columns, order);
        for &(i, j, v) in triplets {
            m.insert(i, j, v)?;
        }
        Ok(m)
    }

    /// Materialize any matrix operand in the given storage order, dropping default values
    pub fn from_expr<M: Matrix<Elem = T> + ?Sized>(operand: &M, order: StorageOrder) -> Self {
        let (rows, columns) = operand.dims();
        let mut m = Self::new(rows, columns, order);
        for (k, line) in m.lines.iter_mut().enumerate() {
            for (x, v) in operand.line_entries(order, k) {
                line.append(x, v, true);
            }
        }
        m
    }

    pub fn storage_order(&self) -> StorageOrder {
        self.order
    }

    fn check(&self, i: usize, j: usize) -> MathResult<()> {
        if i >= self.rows {
            return Err(MathError::InvalidRow {
                index: i,
                rows: self.rows,
            });
        }
        if j >= self.columns {
            return Err(MathError::InvalidColumn {
                index: j,
                columns: self.columns,
            });
        }
        Ok(())
    }

    /// Insert a new element
    ///
    /// Fails with [`MathError::DuplicateElement`] if `(i, j)` is already stored.
    pub fn insert(&mut self, i: usize, j: usize, value: T) -> MathResult<&mut T> {
        self.check(i, j)?;
        let (k, x) = self.order.split(i, j);
        let line = &mut self.lines[k];
        match line.insert(x, value) {
            Ok(pos) => Ok(line.value_at_mut(pos)),
            Err(_) => Err(MathError::DuplicateElement { row: i, column: j }),
        }
    }

    /// Mutable access to `(i, j)`, inserting a default entry if absent
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is out of bounds.
    pub fn get_or_insert(&mut self, i: usize, j: usize) -> &mut T {
        assert!(
            i < self.rows && j < self.columns,
            "Invalid sparse matrix access index"
        );
        let (k, x) = self.order.split(i, j);
        self.lines[k].get_or_insert(x)
    }

    /// Line `k` in storage order, if it exists
    fn check_line(&self, k: usize) -> MathResult<&SparseLine<T>> {
        match (self.lines.get(k), self.order) {
            (Some(line), _) => Ok(line),
            (None, StorageOrder::RowMajor) => Err(MathError::InvalidRow {
                index: k,
                rows: self.rows,
            }),
            (None, StorageOrder::ColumnMajor) => Err(MathError::InvalidColumn {
                index: k,
                columns: self.columns,
            }),
        }
    }

    /// Remove the element at `(i, j)`; returns whether one was stored
    ///
    /// Returns `false` for an out-of-bounds position.
    pub fn erase(&mut self, i: usize, j: usize) -> bool {
        if i >= self.rows || j >= self.columns {
            return false;
        }
        let (k, x) = self.order.split(i, j);
        self.lines[k].erase(x)
    }

    /// Remove the element at position `pos` of line `k`
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not a stored position of the line.
    pub fn erase_at(&mut self, k: usize, pos: usize) -> MathResult<usize> {
        self.check_line(k)?;
        Ok(self.lines[k].erase_at(pos))
    }

    /// Remove the elements at positions `first..last` of line `k`
    ///
    /// # Panics
    ///
    /// Panics if the positions exceed the stored entries of the line.
    pub fn erase_range(&mut self, k: usize, positions: Range<usize>) -> MathResult<usize> {
        self.check_line(k)?;
        Ok(self.lines[k].erase_range(positions))
    }

    /// Position of `(i, j)` within its storage line; `None` if absent or out of bounds
    pub fn find(&self, i: usize, j: usize) -> Option<usize> {
        if i >= self.rows || j >= self.columns {
            return None;
        }
        let (k, x) = self.order.split(i, j);
        self.lines[k].find(x)
    }

    /// Position of the first entry of the line of `(i, j)` not before `(i, j)`
    pub fn lower_bound(&self, i: usize, j: usize) -> MathResult<usize> {
        let (k, x) = self.order.split(i, j);
        Ok(self.check_line(k)?.lower_bound(x))
    }

    /// Position of the first entry of the line of `(i, j)` after `(i, j)`
    pub fn upper_bound(&self, i: usize, j: usize) -> MathResult<usize> {
        let (k, x) = self.order.split(i, j);
        Ok(self.check_line(k)?.upper_bound(x))
    }

    /// Storage line `k` (row `k` if row-major, column `k` otherwise)
    pub fn line(&self, k: usize) -> &SparseLine<T> {
        &self.lines[k]
    }

    /// Number of stored elements in line `k`
    pub fn nonzeros_line(&self, k: usize) -> usize {
        self.lines[k].len()
    }

    pub fn capacity(&self) -> usize {
        self.lines.iter().map(SparseLine::capacity).sum()
    }

    pub fn capacity_line(&self, k: usize) -> usize {
        self.lines[k].capacity()
    }

    /// Grow the total capacity to at least `n`, spread evenly over the lines
    pub fn reserve(&mut self, n: usize) {
        let capacity = self.capacity();
        if n <= capacity || self.lines.is_empty() {
            return;
        }
        let per_line = (n - capacity).div_ceil(self.lines.len());
        for line in &mut self.lines {
            let target = line.capacity() + per_line;
            line.reserve(target);
        }
    }

    /// Grow the capacity of line `k` to at least `n`
    pub fn reserve_line(&mut self, k: usize, n: usize) {
        self.lines[k].reserve(n);
    }

    /// Release unused capacity in every line
    pub fn trim(&mut self) {
        for line in &mut self.lines {
            line.trim();
        }
    }

    /// Remove all elements of line `k`
    pub fn reset_line(&mut self, k: usize) {
        self.lines[k].clear();
    }

    /// Stored elements of line `k` as `(index, &value)`
    pub fn iter_line(&self, k: usize) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.lines[k].iter()
    }

    /// Stored elements of line `k` with mutable values
    pub fn iter_line_mut(&mut self, k: usize) -> impl Iterator<Item = (usize, &mut T)> + '_ {
        self.lines[k].iter_mut()
    }

    /// Change the dimensions; with `preserve` the elements inside the new bounds are kept
    pub fn resize(&mut self, rows: usize, columns: usize, preserve: bool) {
        let (lines, bound) = match self.order {
            StorageOrder::RowMajor => (rows, columns),
            StorageOrder::ColumnMajor => (columns, rows),
        };
        if preserve {
            for line in &mut self.lines {
                line.truncate_indices(bound);
            }
        } else {
            for line in &mut self.lines {
                line.clear();
            }
        }
        self.lines.resize_with(lines, SparseLine::new);
        self.rows = rows;
        self.columns = columns;
    }

    /// Transpose in place; the storage order is kept
    pub fn transpose(&mut self) {
        let t = Self::from_expr(&crate::expr::MatTrans::new(&*self), self.order);
        *self = t;
    }

    /// Remove all elements; the matrix becomes `0 x 0`
    pub fn clear(&mut self) {
        self.rows = 0;
        self.columns = 0;
        self.lines.clear();
    }

    /// Whether every line keeps strictly increasing indices
    pub fn is_sorted(&self) -> bool {
        self.lines.iter().all(SparseLine::is_sorted)
    }

    /// Entries of the line perpendicular to the storage order, crossing the lines in `range`
    fn cross_entries(&self, k: usize, range: Range<usize>) -> Entries<'_, T> {
        let start = range.start.min(self.lines.len());
        let end = range.end.clamp(start, self.lines.len());
        Box::new(
            self.lines[start..end]
                .iter()
                .enumerate()
                .filter_map(move |(x, line)| line.find(k).map(|pos| (start + x, line.value_at(pos)))),
        )
    }
}

impl<T: Element> Matrix for CompressedMatrix<T> {
    type Elem = T;

    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn kind(&self) -> StorageKind {
        StorageKind::Sparse
    }

    fn order(&self) -> StorageOrder {
        self.order
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> T {
        debug_assert!(
            i < self.rows && j < self.columns,
            "Invalid sparse matrix access index"
        );
        let (k, x) = self.order.split(i, j);
        self.lines[k].get(x)
    }

    fn row_entries(&self, i: usize) -> Entries<'_, T> {
        match self.order {
            StorageOrder::RowMajor => self.lines[i].entries(),
            StorageOrder::ColumnMajor => self.cross_entries(i, 0..self.columns),
        }
    }

    fn column_entries(&self, j: usize) -> Entries<'_, T> {
        match self.order {
            StorageOrder::ColumnMajor => self.lines[j].entries(),
            StorageOrder::RowMajor => self.cross_entries(j, 0..self.rows),
        }
    }

    fn row_entries_in(&self, i: usize, range: Range<usize>) -> Entries<'_, T> {
        match self.order {
            StorageOrder::RowMajor => self.lines[i].entries_in(range),
            StorageOrder::ColumnMajor => self.cross_entries(i, range),
        }
    }

    fn column_entries_in(&self, j: usize, range: Range<usize>) -> Entries<'_, T> {
        match self.order {
            StorageOrder::ColumnMajor => self.lines[j].entries_in(range),
            StorageOrder::RowMajor => self.cross_entries(j, range),
        }
    }

    fn nonzeros(&self) -> usize {
        self.lines.iter().map(SparseLine::len).sum()
    }

    fn is_aliased(&self, address: Address) -> bool {
        Address::of(self) == address
    }
}

impl<T: Element> MatrixMut for CompressedMatrix<T> {
    fn address(&self) -> Address {
        Address::of(self)
    }

    fn set(&mut self, i: usize, j: usize, value: T) {
        let (k, x) = self.order.split(i, j);
        self.lines[k].set(x, value);
    }

    #[inline]
    fn append(&mut self, i: usize, j: usize, value: T, check: bool) {
        let (k, x) = self.order.split(i, j);
        self.lines[k].append(x, value, check);
    }

    fn clear_block(&mut self, rows: Range<usize>, columns: Range<usize>) {
        let (lines, indices) = match self.order {
            StorageOrder::RowMajor => (rows, columns),
            StorageOrder::ColumnMajor => (columns, rows),
        };
        for line in &mut self.lines[lines] {
            line.erase_indices(indices.clone());
        }
    }

    fn reset(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
    }

    fn reserve(&mut self, nonzeros: usize) {
        CompressedMatrix::reserve(self, nonzeros);
    }

    fn for_each_stored(&mut self, f: &mut dyn FnMut(usize, usize, &mut T)) {
        let order = self.order;
        for (k, line) in self.lines.iter_mut().enumerate() {
            for (x, v) in line.iter_mut() {
                let (i, j) = order.join(k, x);
                f(i, j, v);
            }
        }
    }
}

impl<T: Element> fmt::Display for CompressedMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_matrix(self, f)
    }
}

matrix_ops!(impl['a, T: Element,] &'a CompressedMatrix<T>);
matrix_abs!(impl['a, T: Element,] &'a CompressedMatrix<T>);
matrix_trans!(impl['a, T: Element,] &'a CompressedMatrix<T>);
matrix_assign_ops!(impl[T: Element,] CompressedMatrix<T>);
