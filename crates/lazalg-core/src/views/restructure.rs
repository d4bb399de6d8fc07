//! Views over expressions
//!
//! Taking a view of an expression node produces the same node built from
//! views of its operands, so that only the selected elements are ever
//! computed:
//!
//! - `sub(a + b) == sub(a) + sub(b)`, likewise for `-`, elementwise `*`,
//!   negation, `abs`, and scaling or division by a scalar
//! - `row(trans(m), i) == column(m, i)` and `sub(trans(m)) == trans(sub'(m))`
//!   with the block dimensions swapped
//! - `row(a * trans(b), i) == b * a[i]` and
//!   `sub(a * trans(b)) == sub(a) * trans(sub(b))`
//!
//! Containers, evaluated temporaries and views are the leaves: they are
//! wrapped in a [`Subvector`], [`Row`], [`Column`] or [`Submatrix`].

use super::lines::{check_column, check_row, Column, Row, RowMut, ColumnMut};
use super::submatrix::{check_block, Submatrix, SubmatrixMut};
use super::subvector::{Subvector, SubvectorMut};
use crate::dense::{DynamicMatrix, DynamicVector, StaticMatrix, StaticVector};
use crate::element::Element;
use crate::engine::{TempMatrix, TempVector};
use crate::error::MathResult;
use crate::expr::{
    MatAbs, MatAdd, MatDiv, MatNeg, MatScale, MatSub, MatTrans, Outer, VecAbs, VecAdd, VecDiv,
    VecMul, VecNeg, VecScale, VecSub,
};
use crate::sparse::{CompressedMatrix, CompressedVector};
use crate::traits::{Matrix, MatrixMut, Vector, VectorMut};

/// Operands that can be narrowed to a contiguous window
pub trait IntoSubvector: Sized {
    type Output: Vector;

    fn into_subvector(self, offset: usize, n: usize) -> MathResult<Self::Output>;
}

/// Matrix operands that can be reduced to a single row or column
pub trait IntoLines: Sized {
    type Row: Vector;
    type Column: Vector;

    fn into_row(self, i: usize) -> MathResult<Self::Row>;

    fn into_column(self, j: usize) -> MathResult<Self::Column>;
}

/// Matrix operands that can be narrowed to a rectangular block
pub trait IntoSubmatrix: Sized {
    type Output: Matrix;

    fn into_submatrix(self, row: usize, column: usize, m: usize, n: usize)
        -> MathResult<Self::Output>;
}

macro_rules! vector_leaf {
    (impl[$($g:tt)*] $ty:ty) => {
        impl<$($g)*> IntoSubvector for $ty
        where
            $ty: Vector,
        {
            type Output = Subvector<$ty>;

            fn into_subvector(self, offset: usize, n: usize) -> MathResult<Self::Output> {
                Subvector::new(self, offset, n)
            }
        }
    };
}

vector_leaf!(impl['a, T: Element] &'a DynamicVector<T>);
vector_leaf!(impl['a, T: Element] &'a CompressedVector<T>);
vector_leaf!(impl['a, T: Element, const N: usize] &'a StaticVector<T, N>);
vector_leaf!(impl['a, T: Element] &'a TempVector<T>);
vector_leaf!(impl[T: Element] TempVector<T>);
vector_leaf!(impl[M: Matrix] Row<M>);
vector_leaf!(impl[M: Matrix] Column<M>);
vector_leaf!(impl['b, 'a, V: VectorMut] &'b SubvectorMut<'a, V>);
vector_leaf!(impl['b, 'a, M: MatrixMut] &'b RowMut<'a, M>);
vector_leaf!(impl['b, 'a, M: MatrixMut] &'b ColumnMut<'a, M>);

impl<V: Vector> IntoSubvector for Subvector<V> {
    type Output = Subvector<V>;

    fn into_subvector(self, offset: usize, n: usize) -> MathResult<Self::Output> {
        self.narrow(offset, n)
    }
}

macro_rules! vector_binary {
    ($node:ident) => {
        impl<L, R> IntoSubvector for $node<L, R>
        where
            L: IntoSubvector + Vector,
            R: IntoSubvector + Vector<Elem = L::Elem>,
            R::Output: Vector<Elem = <L::Output as Vector>::Elem>,
        {
            type Output = $node<L::Output, R::Output>;

            fn into_subvector(self, offset: usize, n: usize) -> MathResult<Self::Output> {
                let (lhs, rhs) = self.into_parts();
                Ok($node::new(
                    lhs.into_subvector(offset, n)?,
                    rhs.into_subvector(offset, n)?,
                ))
            }
        }
    };
}

vector_binary!(VecAdd);
vector_binary!(VecSub);
vector_binary!(VecMul);

impl<V: IntoSubvector + Vector> IntoSubvector for VecNeg<V> {
    type Output = VecNeg<V::Output>;

    fn into_subvector(self, offset: usize, n: usize) -> MathResult<Self::Output> {
        Ok(VecNeg::new(self.into_inner().into_subvector(offset, n)?))
    }
}

impl<V: IntoSubvector + Vector> IntoSubvector for VecAbs<V> {
    type Output = VecAbs<V::Output>;

    fn into_subvector(self, offset: usize, n: usize) -> MathResult<Self::Output> {
        Ok(VecAbs::new(self.into_inner().into_subvector(offset, n)?))
    }
}

impl<V> IntoSubvector for VecScale<V>
where
    V: IntoSubvector + Vector,
    V::Output: Vector<Elem = V::Elem>,
{
    type Output = VecScale<V::Output>;

    fn into_subvector(self, offset: usize, n: usize) -> MathResult<Self::Output> {
        let (operand, scalar) = self.into_parts();
        Ok(VecScale::new(operand.into_subvector(offset, n)?, scalar))
    }
}

impl<V> IntoSubvector for VecDiv<V>
where
    V: IntoSubvector + Vector,
    V::Output: Vector<Elem = V::Elem>,
{
    type Output = VecDiv<V::Output>;

    fn into_subvector(self, offset: usize, n: usize) -> MathResult<Self::Output> {
        let (operand, scalar, divisor) = self.into_parts();
        Ok(VecDiv::from_parts(
            operand.into_subvector(offset, n)?,
            scalar,
            divisor,
        ))
    }
}

macro_rules! matrix_leaf {
    (impl[$($g:tt)*] $ty:ty) => {
        impl<$($g)*> IntoLines for $ty
        where
            $ty: Matrix,
        {
            type Row = Row<$ty>;
            type Column = Column<$ty>;

            fn into_row(self, i: usize) -> MathResult<Self::Row> {
                Row::new(self, i)
            }

            fn into_column(self, j: usize) -> MathResult<Self::Column> {
                Column::new(self, j)
            }
        }

        impl<$($g)*> IntoSubmatrix for $ty
        where
            $ty: Matrix,
        {
            type Output = Submatrix<$ty>;

            fn into_submatrix(
                self,
                row: usize,
                column: usize,
                m: usize,
                n: usize,
            ) -> MathResult<Self::Output> {
                Submatrix::new(self, row, column, m, n)
            }
        }
    };
}

matrix_leaf!(impl['a, T: Element] &'a DynamicMatrix<T>);
matrix_leaf!(impl['a, T: Element] &'a CompressedMatrix<T>);
matrix_leaf!(impl['a, T: Element, const M: usize, const N: usize] &'a StaticMatrix<T, M, N>);
matrix_leaf!(impl['a, T: Element] &'a TempMatrix<T>);
matrix_leaf!(impl[T: Element] TempMatrix<T>);
matrix_leaf!(impl['b, 'a, M: MatrixMut] &'b SubmatrixMut<'a, M>);

impl<M: Matrix> IntoLines for Submatrix<M> {
    type Row = Row<Submatrix<M>>;
    type Column = Column<Submatrix<M>>;

    fn into_row(self, i: usize) -> MathResult<Self::Row> {
        Row::new(self, i)
    }

    fn into_column(self, j: usize) -> MathResult<Self::Column> {
        Column::new(self, j)
    }
}

impl<M: Matrix> IntoSubmatrix for Submatrix<M> {
    type Output = Submatrix<M>;

    fn into_submatrix(self, row: usize, column: usize, m: usize, n: usize) -> MathResult<Self::Output> {
        self.narrow(row, column, m, n)
    }
}

macro_rules! matrix_binary {
    ($node:ident, $vnode:ident) => {
        impl<L, R> IntoLines for $node<L, R>
        where
            L: IntoLines + Matrix,
            R: IntoLines + Matrix<Elem = L::Elem>,
            R::Row: Vector<Elem = <L::Row as Vector>::Elem>,
            R::Column: Vector<Elem = <L::Column as Vector>::Elem>,
        {
            type Row = $vnode<L::Row, R::Row>;
            type Column = $vnode<L::Column, R::Column>;

            fn into_row(self, i: usize) -> MathResult<Self::Row> {
                let (lhs, rhs) = self.into_parts();
                Ok($vnode::new(lhs.into_row(i)?, rhs.into_row(i)?))
            }

            fn into_column(self, j: usize) -> MathResult<Self::Column> {
                let (lhs, rhs) = self.into_parts();
                Ok($vnode::new(lhs.into_column(j)?, rhs.into_column(j)?))
            }
        }

        impl<L, R> IntoSubmatrix for $node<L, R>
        where
            L: IntoSubmatrix + Matrix,
            R: IntoSubmatrix + Matrix<Elem = L::Elem>,
            R::Output: Matrix<Elem = <L::Output as Matrix>::Elem>,
        {
            type Output = $node<L::Output, R::Output>;

            fn into_submatrix(
                self,
                row: usize,
                column: usize,
                m: usize,
                n: usize,
            ) -> MathResult<Self::Output> {
                let (lhs, rhs) = self.into_parts();
                Ok($node::new(
                    lhs.into_submatrix(row, column, m, n)?,
                    rhs.into_submatrix(row, column, m, n)?,
                ))
            }
        }
    };
}

matrix_binary!(MatAdd, VecAdd);
matrix_binary!(MatSub, VecSub);

macro_rules! matrix_unary {
    ($node:ident, $vnode:ident) => {
        impl<M: IntoLines + Matrix> IntoLines for $node<M> {
            type Row = $vnode<M::Row>;
            type Column = $vnode<M::Column>;

            fn into_row(self, i: usize) -> MathResult<Self::Row> {
                Ok($vnode::new(self.into_inner().into_row(i)?))
            }

            fn into_column(self, j: usize) -> MathResult<Self::Column> {
                Ok($vnode::new(self.into_inner().into_column(j)?))
            }
        }

        impl<M: IntoSubmatrix + Matrix> IntoSubmatrix for $node<M> {
            type Output = $node<M::Output>;

            fn into_submatrix(
                self,
                row: usize,
                column: usize,
                m: usize,
                n: usize,
            ) -> MathResult<Self::Output> {
                Ok($node::new(self.into_inner().into_submatrix(row, column, m, n)?))
            }
        }
    };
}

matrix_unary!(MatNeg, VecNeg);
matrix_unary!(MatAbs, VecAbs);

impl<M> IntoLines for MatScale<M>
where
    M: IntoLines + Matrix,
    M::Row: Vector<Elem = M::Elem>,
    M::Column: Vector<Elem = M::Elem>,
{
    type Row = VecScale<M::Row>;
    type Column = VecScale<M::Column>;

    fn into_row(self, i: usize) -> MathResult<Self::Row> {
        let (operand, scalar) = self.into_parts();
        Ok(VecScale::new(operand.into_row(i)?, scalar))
    }

    fn into_column(self, j: usize) -> MathResult<Self::Column> {
        let (operand, scalar) = self.into_parts();
        Ok(VecScale::new(operand.into_column(j)?, scalar))
    }
}

impl<M> IntoSubmatrix for MatScale<M>
where
    M: IntoSubmatrix + Matrix,
    M::Output: Matrix<Elem = M::Elem>,
{
    type Output = MatScale<M::Output>;

    fn into_submatrix(self, row: usize, column: usize, m: usize, n: usize) -> MathResult<Self::Output> {
        let (operand, scalar) = self.into_parts();
        Ok(MatScale::new(operand.into_submatrix(row, column, m, n)?, scalar))
    }
}

impl<M> IntoLines for MatDiv<M>
where
    M: IntoLines + Matrix,
    M::Row: Vector<Elem = M::Elem>,
    M::Column: Vector<Elem = M::Elem>,
{
    type Row = VecDiv<M::Row>;
    type Column = VecDiv<M::Column>;

    fn into_row(self, i: usize) -> MathResult<Self::Row> {
        let (operand, scalar, divisor) = self.into_parts();
        Ok(VecDiv::from_parts(operand.into_row(i)?, scalar, divisor))
    }

    fn into_column(self, j: usize) -> MathResult<Self::Column> {
        let (operand, scalar, divisor) = self.into_parts();
        Ok(VecDiv::from_parts(operand.into_column(j)?, scalar, divisor))
    }
}

impl<M> IntoSubmatrix for MatDiv<M>
where
    M: IntoSubmatrix + Matrix,
    M::Output: Matrix<Elem = M::Elem>,
{
    type Output = MatDiv<M::Output>;

    fn into_submatrix(self, row: usize, column: usize, m: usize, n: usize) -> MathResult<Self::Output> {
        let (operand, scalar, divisor) = self.into_parts();
        Ok(MatDiv::from_parts(
            operand.into_submatrix(row, column, m, n)?,
            scalar,
            divisor,
        ))
    }
}

impl<M: IntoLines + Matrix> IntoLines for MatTrans<M> {
    type Row = M::Column;
    type Column = M::Row;

    fn into_row(self, i: usize) -> MathResult<Self::Row> {
        check_row(i, self.rows())?;
        self.into_inner().into_column(i)
    }

    fn into_column(self, j: usize) -> MathResult<Self::Column> {
        check_column(j, self.columns())?;
        self.into_inner().into_row(j)
    }
}

impl<M: IntoSubmatrix + Matrix> IntoSubmatrix for MatTrans<M> {
    type Output = MatTrans<M::Output>;

    fn into_submatrix(self, row: usize, column: usize, m: usize, n: usize) -> MathResult<Self::Output> {
        check_block(self.dims(), row, column, m, n)?;
        Ok(MatTrans::new(
            self.into_inner().into_submatrix(column, row, n, m)?,
        ))
    }
}

impl<L, R> IntoLines for Outer<L, R>
where
    L: Vector,
    R: Vector<Elem = L::Elem>,
{
    type Row = VecScale<R>;
    type Column = VecScale<L>;

    fn into_row(self, i: usize) -> MathResult<Self::Row> {
        check_row(i, self.rows())?;
        let (lhs, rhs) = self.into_parts();
        let factor = lhs.get(i);
        Ok(VecScale::new(rhs, factor))
    }

    fn into_column(self, j: usize) -> MathResult<Self::Column> {
        check_column(j, self.columns())?;
        let (lhs, rhs) = self.into_parts();
        let factor = rhs.get(j);
        Ok(VecScale::new(lhs, factor))
    }
}

impl<L, R> IntoSubmatrix for Outer<L, R>
where
    L: IntoSubvector + Vector,
    R: IntoSubvector + Vector<Elem = L::Elem>,
    R::Output: Vector<Elem = <L::Output as Vector>::Elem>,
{
    type Output = Outer<L::Output, R::Output>;

    fn into_submatrix(self, row: usize, column: usize, m: usize, n: usize) -> MathResult<Self::Output> {
        check_block((self.lhs().size(), self.rhs().size()), row, column, m, n)?;
        let (lhs, rhs) = self.into_parts();
        Ok(Outer::new(
            lhs.into_subvector(row, m)?,
            rhs.into_subvector(column, n)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{abs, trans};
    use crate::order::StorageOrder;
    use crate::views::{column, row, submatrix, subvector};

    #[test]
    fn test_subvector_of_expression() {
        let a = DynamicVector::from_vec(vec![1.0, -2.0, 3.0, -4.0]);
        let b = CompressedVector::from_pairs(4, &[(1, 1.0), (3, 2.0)]).unwrap();
        let expr = abs(-(&a - &b) * 2.0) / 2.0;
        let direct = DynamicVector::from_expr(&expr);

        let sub = subvector(expr, 1, 3).unwrap();
        assert_eq!(sub.size(), 3);
        for i in 0..3 {
            assert_eq!(sub.get(i), direct[i + 1]);
        }
    }

    #[test]
    fn test_row_of_transpose_is_column() {
        let m = DynamicMatrix::from_fn(2, 3, StorageOrder::RowMajor, |i, j| (i * 3 + j) as i32);
        let r = row(trans(&m), 2).unwrap();
        assert_eq!(r.entries().collect::<Vec<_>>(), vec![(0, 2), (1, 5)]);
        assert!(row(trans(&m), 3).is_err());
        let c = column(trans(&m) * 2, 1).unwrap();
        assert_eq!(c.entries().collect::<Vec<_>>(), vec![(0, 6), (1, 8), (2, 10)]);
    }

    #[test]
    fn test_lines_of_outer_product() {
        let a = DynamicVector::from_vec(vec![1, 2, 3]);
        let b = DynamicVector::from_vec(vec![4, 5]);
        let r = row(&a * trans(&b), 2).unwrap();
        assert_eq!(r.entries().collect::<Vec<_>>(), vec![(0, 12), (1, 15)]);
        let c = column(&a * trans(&b), 0).unwrap();
        assert_eq!(c.entries().collect::<Vec<_>>(), vec![(0, 4), (1, 8), (2, 12)]);
    }

    #[test]
    fn test_submatrix_of_expression() {
        let a = DynamicMatrix::from_fn(3, 4, StorageOrder::ColumnMajor, |i, j| (i + j) as f64);
        let b = CompressedMatrix::from_triplets(4, 3, StorageOrder::RowMajor, &[(1, 2, 5.0)])
            .unwrap();
        let expr = &a - trans(&b);
        let direct = DynamicMatrix::from_expr(&expr, StorageOrder::RowMajor);
        let s = submatrix(expr, 1, 1, 2, 3).unwrap();
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(s.get(i, j), direct[(i + 1, j + 1)]);
            }
        }

        let x = DynamicVector::from_vec(vec![1.0, 2.0, 3.0]);
        let outer = submatrix(&x * trans(&x), 1, 0, 2, 2).unwrap();
        assert_eq!(outer.get(1, 1), 6.0);
        assert!(submatrix(&x * trans(&x), 2, 2, 2, 2).is_err());
    }
}
