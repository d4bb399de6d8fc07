//! Matrix expression nodes

use super::merge::{dense_column, dense_row, Union};
use super::{Absolute, Transpose};
use crate::element::Element;
use crate::error::{MathError, MathResult};
use crate::order::{StorageKind, StorageOrder};
use crate::traits::{Address, Entries, Matrix, Vector};

/// Lazy sum of two matrices
///
/// The result adopts the storage order of the left operand.
#[derive(Clone, Debug)]
pub struct MatAdd<L, R> {
    lhs: L,
    rhs: R,
}

impl<L: Matrix, R: Matrix<Elem = L::Elem>> MatAdd<L, R> {
    /// # Panics
    ///
    /// Panics if the operand dimensions differ.
    pub fn new(lhs: L, rhs: R) -> Self {
        assert_eq!(lhs.dims(), rhs.dims(), "Matrix sizes do not match");
        Self { lhs, rhs }
    }
}

impl<L, R> MatAdd<L, R> {
    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    pub fn rhs(&self) -> &R {
        &self.rhs
    }

    pub(crate) fn into_parts(self) -> (L, R) {
        (self.lhs, self.rhs)
    }
}

impl<L: Matrix, R: Matrix<Elem = L::Elem>> Matrix for MatAdd<L, R> {
    type Elem = L::Elem;

    fn rows(&self) -> usize {
        self.lhs.rows()
    }

    fn columns(&self) -> usize {
        self.lhs.columns()
    }

    fn kind(&self) -> StorageKind {
        self.lhs.kind().additive(self.rhs.kind())
    }

    fn order(&self) -> StorageOrder {
        self.lhs.order()
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> L::Elem {
        self.lhs.get(i, j) + self.rhs.get(i, j)
    }

    fn row_entries(&self, i: usize) -> Entries<'_, L::Elem> {
        match self.kind() {
            StorageKind::Sparse => Box::new(Union::new(
                self.lhs.row_entries(i),
                self.rhs.row_entries(i),
                |a, b| a + b,
            )),
            StorageKind::Dense => dense_row(self, i),
        }
    }

    fn column_entries(&self, j: usize) -> Entries<'_, L::Elem> {
        match self.kind() {
            StorageKind::Sparse => Box::new(Union::new(
                self.lhs.column_entries(j),
                self.rhs.column_entries(j),
                |a, b| a + b,
            )),
            StorageKind::Dense => dense_column(self, j),
        }
    }

    fn can_alias(&self, address: Address) -> bool {
        self.lhs.can_alias(address) || self.rhs.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.lhs.is_aliased(address) || self.rhs.is_aliased(address)
    }
}

/// Lazy difference of two matrices
#[derive(Clone, Debug)]
pub struct MatSub<L, R> {
    lhs: L,
    rhs: R,
}

impl<L: Matrix, R: Matrix<Elem = L::Elem>> MatSub<L, R> {
    /// # Panics
    ///
    /// Panics if the operand dimensions differ.
    pub fn new(lhs: L, rhs: R) -> Self {
        assert_eq!(lhs.dims(), rhs.dims(), "Matrix sizes do not match");
        Self { lhs, rhs }
    }
}

impl<L, R> MatSub<L, R> {
    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    pub fn rhs(&self) -> &R {
        &self.rhs
    }

    pub(crate) fn into_parts(self) -> (L, R) {
        (self.lhs, self.rhs)
    }
}

impl<L: Matrix, R: Matrix<Elem = L::Elem>> Matrix for MatSub<L, R> {
    type Elem = L::Elem;

    fn rows(&self) -> usize {
        self.lhs.rows()
    }

    fn columns(&self) -> usize {
        self.lhs.columns()
    }

    fn kind(&self) -> StorageKind {
        self.lhs.kind().additive(self.rhs.kind())
    }

    fn order(&self) -> StorageOrder {
        self.lhs.order()
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> L::Elem {
        self.lhs.get(i, j) - self.rhs.get(i, j)
    }

    fn row_entries(&self, i: usize) -> Entries<'_, L::Elem> {
        match self.kind() {
            StorageKind::Sparse => Box::new(Union::new(
                self.lhs.row_entries(i),
                self.rhs.row_entries(i),
                |a, b| a - b,
            )),
            StorageKind::Dense => dense_row(self, i),
        }
    }

    fn column_entries(&self, j: usize) -> Entries<'_, L::Elem> {
        match self.kind() {
            StorageKind::Sparse => Box::new(Union::new(
                self.lhs.column_entries(j),
                self.rhs.column_entries(j),
                |a, b| a - b,
            )),
            StorageKind::Dense => dense_column(self, j),
        }
    }

    fn can_alias(&self, address: Address) -> bool {
        self.lhs.can_alias(address) || self.rhs.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.lhs.is_aliased(address) || self.rhs.is_aliased(address)
    }
}

/// Lazy negation of a matrix
#[derive(Clone, Debug)]
pub struct MatNeg<M> {
    operand: M,
}

impl<M: Matrix> MatNeg<M> {
    pub fn new(operand: M) -> Self {
        Self { operand }
    }
}

impl<M> MatNeg<M> {
    pub fn operand(&self) -> &M {
        &self.operand
    }

    pub(crate) fn into_inner(self) -> M {
        self.operand
    }
}

impl<M: Matrix> Matrix for MatNeg<M> {
    type Elem = M::Elem;

    fn rows(&self) -> usize {
        self.operand.rows()
    }

    fn columns(&self) -> usize {
        self.operand.columns()
    }

    fn kind(&self) -> StorageKind {
        self.operand.kind()
    }

    fn order(&self) -> StorageOrder {
        self.operand.order()
    }

    fn get(&self, i: usize, j: usize) -> M::Elem {
        -self.operand.get(i, j)
    }

    fn row_entries(&self, i: usize) -> Entries<'_, M::Elem> {
        Box::new(self.operand.row_entries(i).map(|(j, v)| (j, -v)))
    }

    fn column_entries(&self, j: usize) -> Entries<'_, M::Elem> {
        Box::new(self.operand.column_entries(j).map(|(i, v)| (i, -v)))
    }

    fn can_alias(&self, address: Address) -> bool {
        self.operand.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.operand.is_aliased(address)
    }
}

/// Lazy scaling of a matrix
#[derive(Clone, Debug)]
pub struct MatScale<M: Matrix> {
    operand: M,
    scalar: M::Elem,
}

impl<M: Matrix> MatScale<M> {
    pub fn new(operand: M, scalar: M::Elem) -> Self {
        Self { operand, scalar }
    }

    pub fn operand(&self) -> &M {
        &self.operand
    }

    pub fn scalar(&self) -> M::Elem {
        self.scalar
    }

    pub(crate) fn into_parts(self) -> (M, M::Elem) {
        (self.operand, self.scalar)
    }
}

impl<M: Matrix> Matrix for MatScale<M> {
    type Elem = M::Elem;

    fn rows(&self) -> usize {
        self.operand.rows()
    }

    fn columns(&self) -> usize {
        self.operand.columns()
    }

    fn kind(&self) -> StorageKind {
        self.operand.kind()
    }

    fn order(&self) -> StorageOrder {
        self.operand.order()
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> M::Elem {
        self.operand.get(i, j) * self.scalar
    }

    fn row_entries(&self, i: usize) -> Entries<'_, M::Elem> {
        let s = self.scalar;
        Box::new(self.operand.row_entries(i).map(move |(j, v)| (j, v * s)))
    }

    fn column_entries(&self, j: usize) -> Entries<'_, M::Elem> {
        let s = self.scalar;
        Box::new(self.operand.column_entries(j).map(move |(i, v)| (i, v * s)))
    }

    fn can_alias(&self, address: Address) -> bool {
        self.operand.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.operand.is_aliased(address)
    }
}

/// Lazy division of a matrix by a nonzero scalar
#[derive(Clone, Debug)]
pub struct MatDiv<M: Matrix> {
    operand: M,
    scalar: M::Elem,
    divisor: M::Elem,
}

impl<M: Matrix> MatDiv<M> {
    /// # Panics
    ///
    /// Panics if `scalar` is zero; see [`MatDiv::try_new`].
    pub fn new(operand: M, scalar: M::Elem) -> Self {
        match Self::try_new(operand, scalar) {
            Ok(node) => node,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_new(operand: M, scalar: M::Elem) -> MathResult<Self> {
        if scalar.is_default() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self {
            operand,
            scalar,
            divisor: M::Elem::divisor(scalar),
        })
    }

    pub fn operand(&self) -> &M {
        &self.operand
    }

    pub fn scalar(&self) -> M::Elem {
        self.scalar
    }

    pub(crate) fn into_parts(self) -> (M, M::Elem, M::Elem) {
        (self.operand, self.scalar, self.divisor)
    }

    pub(crate) fn from_parts(operand: M, scalar: M::Elem, divisor: M::Elem) -> Self {
        Self {
            operand,
            scalar,
            divisor,
        }
    }
}

impl<M: Matrix> Matrix for MatDiv<M> {
    type Elem = M::Elem;

    fn rows(&self) -> usize {
        self.operand.rows()
    }

    fn columns(&self) -> usize {
        self.operand.columns()
    }

    fn kind(&self) -> StorageKind {
        self.operand.kind()
    }

    fn order(&self) -> StorageOrder {
        self.operand.order()
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> M::Elem {
        self.operand.get(i, j).apply_divisor(self.divisor)
    }

    fn row_entries(&self, i: usize) -> Entries<'_, M::Elem> {
        let d = self.divisor;
        Box::new(
            self.operand
                .row_entries(i)
                .map(move |(j, v)| (j, v.apply_divisor(d))),
        )
    }

    fn column_entries(&self, j: usize) -> Entries<'_, M::Elem> {
        let d = self.divisor;
        Box::new(
            self.operand
                .column_entries(j)
                .map(move |(i, v)| (i, v.apply_divisor(d))),
        )
    }

    fn can_alias(&self, address: Address) -> bool {
        self.operand.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.operand.is_aliased(address)
    }
}

/// Lazy elementwise absolute value of a matrix
#[derive(Clone, Debug)]
pub struct MatAbs<M> {
    operand: M,
}

impl<M: Matrix> MatAbs<M> {
    pub fn new(operand: M) -> Self {
        Self { operand }
    }
}

impl<M> MatAbs<M> {
    pub fn operand(&self) -> &M {
        &self.operand
    }

    pub(crate) fn into_inner(self) -> M {
        self.operand
    }
}

impl<M: Matrix> Matrix for MatAbs<M> {
    type Elem = M::Elem;

    fn rows(&self) -> usize {
        self.operand.rows()
    }

    fn columns(&self) -> usize {
        self.operand.columns()
    }

    fn kind(&self) -> StorageKind {
        self.operand.kind()
    }

    fn order(&self) -> StorageOrder {
        self.operand.order()
    }

    fn get(&self, i: usize, j: usize) -> M::Elem {
        Element::abs(self.operand.get(i, j))
    }

    fn row_entries(&self, i: usize) -> Entries<'_, M::Elem> {
        Box::new(
            self.operand
                .row_entries(i)
                .map(|(j, v)| (j, Element::abs(v))),
        )
    }

    fn column_entries(&self, j: usize) -> Entries<'_, M::Elem> {
        Box::new(
            self.operand
                .column_entries(j)
                .map(|(i, v)| (i, Element::abs(v))),
        )
    }

    fn can_alias(&self, address: Address) -> bool {
        self.operand.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.operand.is_aliased(address)
    }
}

impl<M: Matrix> Absolute for MatAbs<M> {
    type Output = MatAbs<M>;

    fn abs(self) -> Self::Output {
        self
    }
}

/// Lazy transpose of a matrix
///
/// Rows of the node are columns of the operand and the storage order flips.
#[derive(Clone, Debug)]
pub struct MatTrans<M> {
    operand: M,
}

impl<M: Matrix> MatTrans<M> {
    pub fn new(operand: M) -> Self {
        Self { operand }
    }
}

impl<M> MatTrans<M> {
    pub fn operand(&self) -> &M {
        &self.operand
    }

    pub fn into_inner(self) -> M {
        self.operand
    }
}

impl<M: Matrix> Matrix for MatTrans<M> {
    type Elem = M::Elem;

    fn rows(&self) -> usize {
        self.operand.columns()
    }

    fn columns(&self) -> usize {
        self.operand.rows()
    }

    fn kind(&self) -> StorageKind {
        self.operand.kind()
    }

    fn order(&self) -> StorageOrder {
        self.operand.order().flip()
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> M::Elem {
        self.operand.get(j, i)
    }

    fn row_entries(&self, i: usize) -> Entries<'_, M::Elem> {
        self.operand.column_entries(i)
    }

    fn column_entries(&self, j: usize) -> Entries<'_, M::Elem> {
        self.operand.row_entries(j)
    }

    fn nonzeros(&self) -> usize {
        self.operand.nonzeros()
    }

    fn can_alias(&self, address: Address) -> bool {
        self.operand.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.operand.is_aliased(address)
    }
}

impl<M> Transpose for MatTrans<M> {
    type Output = M;

    fn trans(self) -> M {
        self.operand
    }
}

/// Lazy outer product `lhs * trans(rhs)`
///
/// The result is sparse if either vector is sparse. A sparse left operand
/// yields a column-major result, everything else is row-major.
#[derive(Clone, Debug)]
pub struct Outer<L, R> {
    lhs: L,
    rhs: R,
}

impl<L: Vector, R: Vector<Elem = L::Elem>> Outer<L, R> {
    pub fn new(lhs: L, rhs: R) -> Self {
        Self { lhs, rhs }
    }
}

impl<L, R> Outer<L, R> {
    /// Column operand
    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    /// Row operand
    pub fn rhs(&self) -> &R {
        &self.rhs
    }

    pub(crate) fn into_parts(self) -> (L, R) {
        (self.lhs, self.rhs)
    }
}

impl<L: Vector, R: Vector<Elem = L::Elem>> Matrix for Outer<L, R> {
    type Elem = L::Elem;

    fn rows(&self) -> usize {
        self.lhs.size()
    }

    fn columns(&self) -> usize {
        self.rhs.size()
    }

    fn kind(&self) -> StorageKind {
        self.lhs.kind().multiplicative(self.rhs.kind())
    }

    fn order(&self) -> StorageOrder {
        if self.lhs.kind().is_sparse() {
            StorageOrder::ColumnMajor
        } else {
            StorageOrder::RowMajor
        }
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> L::Elem {
        self.lhs.get(i) * self.rhs.get(j)
    }

    fn row_entries(&self, i: usize) -> Entries<'_, L::Elem> {
        let a = self.lhs.get(i);
        if self.kind().is_sparse() && a.is_default() {
            return Box::new(std::iter::empty());
        }
        Box::new(self.rhs.entries().map(move |(j, b)| (j, a * b)))
    }

    fn column_entries(&self, j: usize) -> Entries<'_, L::Elem> {
        let b = self.rhs.get(j);
        if self.kind().is_sparse() && b.is_default() {
            return Box::new(std::iter::empty());
        }
        Box::new(self.lhs.entries().map(move |(i, a)| (i, a * b)))
    }

    fn can_alias(&self, address: Address) -> bool {
        self.lhs.can_alias(address) || self.rhs.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.lhs.is_aliased(address) || self.rhs.is_aliased(address)
    }
}

matrix_ops!(impl[L, R,] MatAdd<L, R>);
matrix_abs!(impl[L, R,] MatAdd<L, R>);
matrix_trans!(impl[L, R,] MatAdd<L, R>);
matrix_ops!(impl[L, R,] MatSub<L, R>);
matrix_abs!(impl[L, R,] MatSub<L, R>);
matrix_trans!(impl[L, R,] MatSub<L, R>);
matrix_ops!(impl[M,] MatNeg<M>);
matrix_abs!(impl[M,] MatNeg<M>);
matrix_trans!(impl[M,] MatNeg<M>);
matrix_ops!(impl[M: Matrix,] MatScale<M>);
matrix_abs!(impl[M: Matrix,] MatScale<M>);
matrix_trans!(impl[M: Matrix,] MatScale<M>);
matrix_ops!(impl[M: Matrix,] MatDiv<M>);
matrix_abs!(impl[M: Matrix,] MatDiv<M>);
matrix_trans!(impl[M: Matrix,] MatDiv<M>);
matrix_ops!(impl[M,] MatAbs<M>);
matrix_trans!(impl[M,] MatAbs<M>);
matrix_ops!(impl[M,] MatTrans<M>);
matrix_abs!(impl[M,] MatTrans<M>);
matrix_ops!(impl[L, R,] Outer<L, R>);
matrix_abs!(impl[L, R,] Outer<L, R>);
matrix_trans!(impl[L, R,] Outer<L, R>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::{DynamicMatrix, DynamicVector};
    use crate::expr::{abs, trans};
    use crate::sparse::{CompressedMatrix, CompressedVector};

    fn dense(order: StorageOrder) -> DynamicMatrix<f64> {
        DynamicMatrix::from_fn(2, 3, order, |i, j| (i * 3 + j) as f64 - 2.0)
    }

    #[test]
    fn test_dense_arithmetic() {
        let a = dense(StorageOrder::RowMajor);
        let b = dense(StorageOrder::ColumnMajor);

        let sum = &a + &b;
        assert_eq!(sum.dims(), (2, 3));
        assert_eq!(sum.order(), StorageOrder::RowMajor);
        assert_eq!(sum.get(1, 2), 6.0);
        assert_eq!((&b - &a).order(), StorageOrder::ColumnMajor);
        assert_eq!((&a - &b).get(0, 1), 0.0);
        assert_eq!((-&a).get(0, 0), 2.0);
        assert_eq!((&a * 3.0).get(1, 0), 3.0);
        assert_eq!((3.0 * &a).get(1, 0), 3.0);
        assert_eq!((&a / 2.0).get(1, 2), 1.5);
        assert_eq!(abs(&a).get(0, 0), 2.0);
    }

    #[test]
    fn test_transpose() {
        let a = dense(StorageOrder::RowMajor);
        let t = trans(&a);
        assert_eq!(t.dims(), (3, 2));
        assert_eq!(t.order(), StorageOrder::ColumnMajor);
        assert_eq!(t.get(2, 1), a.get(1, 2));
        let row: Vec<_> = t.row_entries(1).collect();
        assert_eq!(row, vec![(0, -1.0), (1, 2.0)]);

        let back = trans(trans(&a));
        assert_eq!(back.get(1, 1), a.get(1, 1));
    }

    #[test]
    fn test_sparse_difference_rows() {
        let mut a = CompressedMatrix::new(3, 3, StorageOrder::RowMajor);
        a.insert(0, 1, 2.0).unwrap();
        a.insert(2, 2, 1.0).unwrap();
        let mut b = CompressedMatrix::new(3, 3, StorageOrder::ColumnMajor);
        b.insert(0, 0, 1.0).unwrap();
        b.insert(0, 1, 2.0).unwrap();

        let diff = &a - &b;
        assert_eq!(diff.kind(), StorageKind::Sparse);
        let row: Vec<_> = diff.row_entries(0).collect();
        assert_eq!(row, vec![(0, -1.0), (1, 0.0)]);
        assert_eq!(diff.get(2, 2), 1.0);
    }

    #[test]
    fn test_outer_product() {
        let a = DynamicVector::from_vec(vec![1.0, 2.0, 3.0]);
        let b = DynamicVector::from_vec(vec![4.0, 5.0]);
        let outer = &a * trans(&b);
        assert_eq!(outer.dims(), (3, 2));
        assert_eq!(outer.kind(), StorageKind::Dense);
        assert_eq!(outer.get(2, 1), 15.0);

        let mut s = CompressedVector::new(3);
        s.insert(1, 2.0).unwrap();
        let sparse_outer = &s * trans(&b);
        assert_eq!(sparse_outer.kind(), StorageKind::Sparse);
        assert_eq!(sparse_outer.order(), StorageOrder::ColumnMajor);
        assert_eq!(sparse_outer.row_entries(0).count(), 0);
        let col: Vec<_> = sparse_outer.column_entries(1).collect();
        assert_eq!(col, vec![(1, 10.0)]);
    }
}
