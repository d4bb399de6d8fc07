//! Fixed-size dense matrix stored inline

use std::fmt;
use std::ops::{Index, IndexMut, Range};

use crate::display::fmt_matrix;
use crate::element::Element;
use crate::order::{StorageKind, StorageOrder};
use crate::traits::{Address, Entries, Matrix, MatrixMut};

/// Row-major `M x N` matrix with dimensions known at compile time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticMatrix<T, const M: usize, const N: usize> {
    data: [[T; N]; M],
}

pub type Mat2x2f = StaticMatrix<f32, 2, 2>;
pub type Mat3x3f = StaticMatrix<f32, 3, 3>;
pub type Mat4x4f = StaticMatrix<f32, 4, 4>;
pub type Mat2x2d = StaticMatrix<f64, 2, 2>;
pub type Mat3x3d = StaticMatrix<f64, 3, 3>;
pub type Mat4x4d = StaticMatrix<f64, 4, 4>;
pub type Mat6x6d = StaticMatrix<f64, 6, 6>;

impl<T: Element, const M: usize, const N: usize> StaticMatrix<T, M, N> {
    pub fn new() -> Self {
        Self {
            data: [[T::zero(); N]; M],
        }
    }

    pub fn filled(value: T) -> Self {
        Self {
            data: [[value; N]; M],
        }
    }

    pub fn from_rows(data: [[T; N]; M]) -> Self {
        Self { data }
    }

    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        let mut m = Self::new();
        for (i, row) in m.data.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = f(i, j);
            }
        }
        m
    }

    /// Materialize any `M x N` matrix operand
    ///
    /// # Panics
    ///
    /// Panics if the operand dimensions differ from `M x N`.
    pub fn from_expr<X: Matrix<Elem = T> + ?Sized>(operand: &X) -> Self {
        assert_eq!(operand.dims(), (M, N), "Matrix sizes do not match");
        let mut out = Self::new();
        for i in 0..M {
            for (j, v) in operand.row_entries(i) {
                out.data[i][j] = v;
            }
        }
        out
    }

    /// Identity matrix for square dimensions
    pub fn identity() -> Self {
        Self::from_fn(|i, j| if i == j { T::one() } else { T::zero() })
    }

    pub fn transpose(&self) -> StaticMatrix<T, N, M> {
        StaticMatrix::<T, N, M>::from_fn(|i, j| self.data[j][i])
    }

    pub fn row(&self, i: usize) -> &[T; N] {
        &self.data[i]
    }

    pub fn into_rows(self) -> [[T; N]; M] {
        self.data
    }
}

impl<T: Element, const M: usize, const N: usize> Default for StaticMatrix<T, M, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const M: usize, const N: usize> Index<(usize, usize)> for StaticMatrix<T, M, N> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[i][j]
    }
}

impl<T, const M: usize, const N: usize> IndexMut<(usize, usize)> for StaticMatrix<T, M, N> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.data[i][j]
    }
}

impl<T: Element, const M: usize, const N: usize> Matrix for StaticMatrix<T, M, N> {
    type Elem = T;

    fn rows(&self) -> usize {
        M
    }

    fn columns(&self) -> usize {
        N
    }

    fn kind(&self) -> StorageKind {
        StorageKind::Dense
    }

    fn order(&self) -> StorageOrder {
        StorageOrder::RowMajor
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> T {
        self.data[i][j]
    }

    fn row_entries(&self, i: usize) -> Entries<'_, T> {
        Box::new(self.data[i].iter().copied().enumerate())
    }

    fn is_aliased(&self, address: Address) -> bool {
        Address::of(self) == address
    }
}

impl<T: Element, const M: usize, const N: usize> MatrixMut for StaticMatrix<T, M, N> {
    fn address(&self) -> Address {
        Address::of(self)
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: T) {
        self.data[i][j] = value;
    }

    fn clear_block(&mut self, rows: Range<usize>, columns: Range<usize>) {
        for row in &mut self.data[rows] {
            row[columns.clone()].fill(T::zero());
        }
    }

    fn for_each_stored(&mut self, f: &mut dyn FnMut(usize, usize, &mut T)) {
        for (i, row) in self.data.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                f(i, j, v);
            }
        }
    }
}

impl<T: Element, const M: usize, const N: usize> fmt::Display for StaticMatrix<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_matrix(self, f)
    }
}

matrix_ops!(impl['a, T: Element, const M: usize, const N: usize,] &'a StaticMatrix<T, M, N>);
matrix_abs!(impl['a, T: Element, const M: usize, const N: usize,] &'a StaticMatrix<T, M, N>);
matrix_trans!(impl['a, T: Element, const M: usize, const N: usize,] &'a StaticMatrix<T, M, N>);
matrix_assign_ops!(impl[T: Element, const M: usize, const N: usize,] StaticMatrix<T, M, N>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::DynamicMatrix;
    use crate::expr::trans;

    #[test]
    fn test_static_matrix_basics() {
        let m = Mat2x2d::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.dims(), (2, 2));
        assert_eq!(m[(1, 0)], 3.0);
        let t = m.transpose();
        assert_eq!(t[(0, 1)], 3.0);
        assert_eq!(Mat3x3d::identity().get(2, 2), 1.0);
        assert_eq!(Mat3x3d::identity().get(0, 2), 0.0);
    }

    #[test]
    fn test_static_assignment_from_expression() {
        let a = StaticMatrix::<i32, 2, 3>::from_fn(|i, j| (i + j) as i32);
        let b = DynamicMatrix::filled(3, 2, StorageOrder::ColumnMajor, 1);
        let mut c = StaticMatrix::<i32, 3, 2>::new();
        c.assign(trans(&a) - &b).unwrap();
        assert_eq!(c.row(2), &[1, 2]);
        c *= 3i32;
        assert_eq!(c[(2, 1)], 6);
        assert!(c.assign(&a).is_err());
    }
}
