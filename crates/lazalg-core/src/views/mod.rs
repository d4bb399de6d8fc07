//! Views into vectors and matrices
//!
//! A view addresses part of an operand without copying it: a window of a
//! vector ([`Subvector`]), a single row or column of a matrix ([`Row`],
//! [`Column`]) or a rectangular block ([`Submatrix`]). Read-only views take
//! the operand by value, so they work on container references and on
//! expressions alike; the `*Mut` views borrow a container or another view
//! mutably and accept assignments.
//!
//! Views are checked on construction. An empty window or one that exceeds
//! the operand fails with a [`MathError`](crate::MathError). Indices passed
//! to a view are relative to the view; sparse positions returned by `find`,
//! `lower_bound` and `upper_bound` count from the first stored entry inside
//! the view.
//!
//! # Examples
//!
//! ```
//! use lazalg_core::prelude::*;
//!
//! let a = DynamicVector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
//! let b = DynamicVector::from_vec(vec![4.0, 3.0, 2.0, 1.0]);
//!
//! // Only the two selected elements of the sum are computed
//! let s = subvector(&a + &b, 1, 2).unwrap();
//! assert_eq!(s.get(0), 5.0);
//!
//! let mut m = DynamicMatrix::<f64>::new(2, 4, StorageOrder::RowMajor);
//! row_mut(&mut m, 1).unwrap().assign(&a * 2.0).unwrap();
//! assert_eq!(m.get(1, 3), 8.0);
//! ```

mod lines;
mod restructure;
mod submatrix;
mod subvector;

pub use lines::{Column, ColumnMut, Row, RowMut};
pub use restructure::{IntoLines, IntoSubmatrix, IntoSubvector};
pub use submatrix::{Submatrix, SubmatrixMut};
pub use subvector::{Subvector, SubvectorMut};

use crate::error::MathResult;
use crate::traits::{MatrixMut, VectorMut};

/// Window `offset..offset + n` of a vector operand or expression
pub fn subvector<V: IntoSubvector>(operand: V, offset: usize, n: usize) -> MathResult<V::Output> {
    operand.into_subvector(offset, n)
}

/// Writable window `offset..offset + n` of a vector destination
pub fn subvector_mut<V: VectorMut>(
    vector: &mut V,
    offset: usize,
    n: usize,
) -> MathResult<SubvectorMut<'_, V>> {
    SubvectorMut::new(vector, offset, n)
}

/// Row `i` of a matrix operand or expression
pub fn row<M: IntoLines>(operand: M, i: usize) -> MathResult<M::Row> {
    operand.into_row(i)
}

/// Column `j` of a matrix operand or expression
pub fn column<M: IntoLines>(operand: M, j: usize) -> MathResult<M::Column> {
    operand.into_column(j)
}

pub fn row_mut<M: MatrixMut>(matrix: &mut M, i: usize) -> MathResult<RowMut<'_, M>> {
    RowMut::new(matrix, i)
}

pub fn column_mut<M: MatrixMut>(matrix: &mut M, j: usize) -> MathResult<ColumnMut<'_, M>> {
    ColumnMut::new(matrix, j)
}

/// `m x n` block at `(row, column)` of a matrix operand or expression
pub fn submatrix<M: IntoSubmatrix>(
    operand: M,
    row: usize,
    column: usize,
    m: usize,
    n: usize,
) -> MathResult<M::Output> {
    operand.into_submatrix(row, column, m, n)
}

/// Writable `m x n` block at `(row, column)` of a matrix destination
pub fn submatrix_mut<M: MatrixMut>(
    matrix: &mut M,
    row: usize,
    column: usize,
    m: usize,
    n: usize,
) -> MathResult<SubmatrixMut<'_, M>> {
    SubmatrixMut::new(matrix, row, column, m, n)
}
