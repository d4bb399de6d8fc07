//! Operand traits shared by containers, views and expression nodes
//!
//! [`Vector`] and [`Matrix`] are the read side: shape, storage kind, element
//! access, ordered iteration over entries and the aliasing queries.
//! [`VectorMut`] and [`MatrixMut`] are the write side used by the assignment
//! engine, plus the user-facing assignment methods.
//!
//! # Entries
//!
//! `entries()` (vectors) and `row_entries()`/`column_entries()` (matrices)
//! yield `(index, value)` pairs in strictly increasing index order. Dense
//! operands yield every index, sparse operands only their stored entries.
//!
//! # Aliasing
//!
//! Every operand can report whether it reads from a given [`Address`]. The
//! address of a container is the address of the container itself; views
//! report the address of their backing container. `can_alias` may answer
//! conservatively, `is_aliased` must be exact.

use std::ops::Range;

use crate::element::Element;
use crate::engine::{self, Staging, TempMatrix, TempVector};
use crate::error::MathResult;
use crate::order::{StorageKind, StorageOrder};

/// Boxed iterator over `(index, value)` pairs in increasing index order
pub type Entries<'a, T> = Box<dyn Iterator<Item = (usize, T)> + 'a>;

/// Identity of a container, used for alias detection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address(usize);

impl Address {
    /// Address of any value
    pub fn of<T: ?Sized>(value: &T) -> Self {
        Address(value as *const T as *const () as usize)
    }
}

/// Entries of an ordered stream with an index in `range`
fn clip<'a, T: 'a>(entries: Entries<'a, T>, range: Range<usize>) -> Entries<'a, T> {
    let Range { start, end } = range;
    Box::new(
        entries
            .skip_while(move |&(i, _)| i < start)
            .take_while(move |&(i, _)| i < end),
    )
}

/// Shift the indices of an entry stream down by `offset`
pub(crate) fn rebase<'a, T: 'a>(entries: Entries<'a, T>, offset: usize) -> Entries<'a, T> {
    Box::new(entries.map(move |(i, v)| (i - offset, v)))
}

/// Marker selecting the vector implementation of shape-generic traits
#[derive(Clone, Copy, Debug)]
pub struct VectorShape;

/// Marker selecting the matrix implementation of shape-generic traits
#[derive(Clone, Copy, Debug)]
pub struct MatrixShape;

/// Read access to a one-dimensional operand
pub trait Vector {
    type Elem: Element;

    /// Number of elements
    fn size(&self) -> usize;

    /// Storage kind of the operand or of the result of an expression
    fn kind(&self) -> StorageKind;

    /// Element at `index`; default value for absent sparse entries
    fn get(&self, index: usize) -> Self::Elem;

    /// Entries in increasing index order
    fn entries(&self) -> Entries<'_, Self::Elem> {
        let n = self.size();
        Box::new((0..n).map(move |i| (i, self.get(i))))
    }

    /// Entries with an index in `range`, in increasing index order
    ///
    /// Sparse containers start at the first stored entry of the range
    /// instead of scanning from the beginning.
    fn entries_in(&self, range: Range<usize>) -> Entries<'_, Self::Elem> {
        match self.kind() {
            StorageKind::Dense => Box::new(range.map(move |i| (i, self.get(i)))),
            StorageKind::Sparse => clip(self.entries(), range),
        }
    }

    /// Number of non-default elements (dense) or stored entries (sparse)
    fn nonzeros(&self) -> usize {
        match self.kind() {
            StorageKind::Dense => self.entries().filter(|(_, v)| !v.is_default()).count(),
            StorageKind::Sparse => self.entries().count(),
        }
    }

    /// Conservative alias query
    fn can_alias(&self, address: Address) -> bool {
        self.is_aliased(address)
    }

    /// Exact alias query
    fn is_aliased(&self, address: Address) -> bool;
}

/// Read access to a two-dimensional operand
pub trait Matrix {
    type Elem: Element;

    fn rows(&self) -> usize;

    fn columns(&self) -> usize;

    fn kind(&self) -> StorageKind;

    /// Preferred traversal order of the operand
    fn order(&self) -> StorageOrder;

    /// Element at `(i, j)`; default value for absent sparse entries
    fn get(&self, i: usize, j: usize) -> Self::Elem;

    /// Entries of row `i` in increasing column order
    fn row_entries(&self, i: usize) -> Entries<'_, Self::Elem> {
        let n = self.columns();
        Box::new((0..n).map(move |j| (j, self.get(i, j))))
    }

    /// Entries of column `j` in increasing row order
    fn column_entries(&self, j: usize) -> Entries<'_, Self::Elem> {
        let m = self.rows();
        Box::new((0..m).map(move |i| (i, self.get(i, j))))
    }

    /// Entries of row `i` with a column index in `range`
    fn row_entries_in(&self, i: usize, range: Range<usize>) -> Entries<'_, Self::Elem> {
        match self.kind() {
            StorageKind::Dense => Box::new(range.map(move |j| (j, self.get(i, j)))),
            StorageKind::Sparse => clip(self.row_entries(i), range),
        }
    }

    /// Entries of column `j` with a row index in `range`
    fn column_entries_in(&self, j: usize, range: Range<usize>) -> Entries<'_, Self::Elem> {
        match self.kind() {
            StorageKind::Dense => Box::new(range.map(move |i| (i, self.get(i, j)))),
            StorageKind::Sparse => clip(self.column_entries(j), range),
        }
    }

    /// Entries of row or column `k`, depending on `order`
    fn line_entries(&self, order: StorageOrder, k: usize) -> Entries<'_, Self::Elem> {
        match order {
            StorageOrder::RowMajor => self.row_entries(k),
            StorageOrder::ColumnMajor => self.column_entries(k),
        }
    }

    fn dims(&self) -> (usize, usize) {
        (self.rows(), self.columns())
    }

    /// Number of non-default elements (dense) or stored entries (sparse)
    fn nonzeros(&self) -> usize {
        let order = self.order();
        let sparse = self.kind().is_sparse();
        (0..order.lines(self.rows(), self.columns()))
            .map(|k| {
                self.line_entries(order, k)
                    .filter(|(_, v)| sparse || !v.is_default())
                    .count()
            })
            .sum()
    }

    fn can_alias(&self, address: Address) -> bool {
        self.is_aliased(address)
    }

    fn is_aliased(&self, address: Address) -> bool;
}

/// Write access used by the assignment engine
pub trait VectorMut: Vector {
    /// Identity checked against right-hand sides
    fn address(&self) -> Address;

    /// Store `value` at `index`, inserting a sparse entry if needed
    fn set(&mut self, index: usize, value: Self::Elem);

    /// Store a value whose index is larger than every stored index
    ///
    /// With `check` set, default values are skipped.
    fn append(&mut self, index: usize, value: Self::Elem, check: bool) {
        if !check || !value.is_default() {
            self.set(index, value);
        }
    }

    /// Reset the elements in `range` to the default value
    fn clear_range(&mut self, range: Range<usize>);

    /// Reset all elements to the default value
    fn reset(&mut self) {
        let n = self.size();
        self.clear_range(0..n);
    }

    /// Capacity hint for sparse destinations
    fn reserve(&mut self, _nonzeros: usize) {}

    /// Visit every stored element mutably
    fn for_each_stored(&mut self, f: &mut dyn FnMut(usize, &mut Self::Elem));

    /// Visit the stored elements with an index in `range` mutably
    fn for_each_stored_in(&mut self, range: Range<usize>, f: &mut dyn FnMut(usize, &mut Self::Elem)) {
        self.for_each_stored(&mut |i, v| {
            if range.contains(&i) {
                f(i, v);
            }
        });
    }

    /// `self = rhs`
    fn assign<R>(&mut self, rhs: R) -> MathResult<()>
    where
        Self: Sized,
        R: Vector<Elem = Self::Elem>,
    {
        engine::assign_vector(self, &rhs)
    }

    /// `self += rhs`
    fn add_assign_from<R>(&mut self, rhs: R) -> MathResult<()>
    where
        Self: Sized,
        R: Vector<Elem = Self::Elem>,
    {
        engine::add_assign_vector(self, &rhs)
    }

    /// `self -= rhs`
    fn sub_assign_from<R>(&mut self, rhs: R) -> MathResult<()>
    where
        Self: Sized,
        R: Vector<Elem = Self::Elem>,
    {
        engine::sub_assign_vector(self, &rhs)
    }

    /// Elementwise `self *= rhs`
    fn mul_assign_from<R>(&mut self, rhs: R) -> MathResult<()>
    where
        Self: Sized,
        R: Vector<Elem = Self::Elem>,
    {
        engine::mul_assign_vector(self, &rhs)
    }

    /// Multiply every stored element by `scalar`
    fn scale(&mut self, scalar: Self::Elem)
    where
        Self: Sized,
    {
        engine::scale_vector(self, scalar)
    }

    /// Divide every stored element by `scalar`; rejects a zero scalar
    fn try_div_assign(&mut self, scalar: Self::Elem) -> MathResult<()>
    where
        Self: Sized,
    {
        engine::div_assign_vector(self, scalar)
    }

    /// Assign an expression that may read from `self`
    ///
    /// The closure receives the current contents and stages the new value;
    /// the staged expression is evaluated into a temporary before `self` is
    /// overwritten.
    ///
    /// ```
    /// use lazalg_core::prelude::*;
    ///
    /// let mut c = DynamicVector::from_vec(vec![1.0, 2.0, 3.0]);
    /// let b = DynamicVector::from_vec(vec![1.0, 1.0, 1.0]);
    /// c.assign_with(|c, out| out.evaluate(c * 2.0 + &b)).unwrap();
    /// assert_eq!(c.as_slice(), &[3.0, 5.0, 7.0]);
    /// ```
    fn assign_with<F>(&mut self, f: F) -> MathResult<()>
    where
        Self: Sized,
        F: FnOnce(&Self, &mut Staging<TempVector<Self::Elem>>) -> MathResult<()>,
    {
        let mut staging = Staging::new(self.address(), (self.size(), 1));
        f(self, &mut staging)?;
        let tmp = staging.finish()?;
        engine::assign_vector_temporary(self, &tmp)
    }
}

/// Write access for two-dimensional destinations
pub trait MatrixMut: Matrix {
    fn address(&self) -> Address;

    /// Store `value` at `(i, j)`, inserting a sparse entry if needed
    fn set(&mut self, i: usize, j: usize, value: Self::Elem);

    /// Store a value at the end of its storage line
    fn append(&mut self, i: usize, j: usize, value: Self::Elem, check: bool) {
        if !check || !value.is_default() {
            self.set(i, j, value);
        }
    }

    /// Reset the block `rows x columns` to the default value
    fn clear_block(&mut self, rows: Range<usize>, columns: Range<usize>);

    fn reset(&mut self) {
        let (m, n) = self.dims();
        self.clear_block(0..m, 0..n);
    }

    fn reserve(&mut self, _nonzeros: usize) {}

    fn for_each_stored(&mut self, f: &mut dyn FnMut(usize, usize, &mut Self::Elem));

    /// `self = rhs`
    fn assign<R>(&mut self, rhs: R) -> MathResult<()>
    where
        Self: Sized,
        R: Matrix<Elem = Self::Elem>,
    {
        engine::assign_matrix(self, &rhs)
    }

    /// `self += rhs`
    fn add_assign_from<R>(&mut self, rhs: R) -> MathResult<()>
    where
        Self: Sized,
        R: Matrix<Elem = Self::Elem>,
    {
        engine::add_assign_matrix(self, &rhs)
    }

    /// `self -= rhs`
    fn sub_assign_from<R>(&mut self, rhs: R) -> MathResult<()>
    where
        Self: Sized,
        R: Matrix<Elem = Self::Elem>,
    {
        engine::sub_assign_matrix(self, &rhs)
    }

    fn scale(&mut self, scalar: Self::Elem)
    where
        Self: Sized,
    {
        engine::scale_matrix(self, scalar)
    }

    fn try_div_assign(&mut self, scalar: Self::Elem) -> MathResult<()>
    where
        Self: Sized,
    {
        engine::div_assign_matrix(self, scalar)
    }

    /// Assign an expression that may read from `self`, see [`VectorMut::assign_with`]
    fn assign_with<F>(&mut self, f: F) -> MathResult<()>
    where
        Self: Sized,
        F: FnOnce(&Self, &mut Staging<TempMatrix<Self::Elem>>) -> MathResult<()>,
    {
        let mut staging = Staging::new(self.address(), self.dims());
        f(self, &mut staging)?;
        let tmp = staging.finish()?;
        engine::assign_matrix_temporary(self, &tmp)
    }
}

impl<V: Vector + ?Sized> Vector for &V {
    type Elem = V::Elem;

    fn size(&self) -> usize {
        (**self).size()
    }

    fn kind(&self) -> StorageKind {
        (**self).kind()
    }

    fn get(&self, index: usize) -> V::Elem {
        (**self).get(index)
    }

    fn entries(&self) -> Entries<'_, V::Elem> {
        (**self).entries()
    }

    fn nonzeros(&self) -> usize {
        (**self).nonzeros()
    }

    fn can_alias(&self, address: Address) -> bool {
        (**self).can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        (**self).is_aliased(address)
    }
}

impl<V: Vector + ?Sized> Vector for Box<V> {
    type Elem = V::Elem;

    fn size(&self) -> usize {
        (**self).size()
    }

    fn kind(&self) -> StorageKind {
        (**self).kind()
    }

    fn get(&self, index: usize) -> V::Elem {
        (**self).get(index)
    }

    fn entries(&self) -> Entries<'_, V::Elem> {
        (**self).entries()
    }

    fn nonzeros(&self) -> usize {
        (**self).nonzeros()
    }

    fn can_alias(&self, address: Address) -> bool {
        (**self).can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        (**self).is_aliased(address)
    }
}

impl<M: Matrix + ?Sized> Matrix for &M {
    type Elem = M::Elem;

    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn columns(&self) -> usize {
        (**self).columns()
    }

    fn kind(&self) -> StorageKind {
        (**self).kind()
    }

    fn order(&self) -> StorageOrder {
        (**self).order()
    }

    fn get(&self, i: usize, j: usize) -> M::Elem {
        (**self).get(i, j)
    }

    fn row_entries(&self, i: usize) -> Entries<'_, M::Elem> {
        (**self).row_entries(i)
    }

    fn column_entries(&self, j: usize) -> Entries<'_, M::Elem> {
        (**self).column_entries(j)
    }

    fn nonzeros(&self) -> usize {
        (**self).nonzeros()
    }

    fn can_alias(&self, address: Address) -> bool {
        (**self).can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        (**self).is_aliased(address)
    }
}

impl<M: Matrix + ?Sized> Matrix for Box<M> {
    type Elem = M::Elem;

    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn columns(&self) -> usize {
        (**self).columns()
    }

    fn kind(&self) -> StorageKind {
        (**self).kind()
    }

    fn order(&self) -> StorageOrder {
        (**self).order()
    }

    fn get(&self, i: usize, j: usize) -> M::Elem {
        (**self).get(i, j)
    }

    fn row_entries(&self, i: usize) -> Entries<'_, M::Elem> {
        (**self).row_entries(i)
    }

    fn column_entries(&self, j: usize) -> Entries<'_, M::Elem> {
        (**self).column_entries(j)
    }

    fn nonzeros(&self) -> usize {
        (**self).nonzeros()
    }

    fn can_alias(&self, address: Address) -> bool {
        (**self).can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        (**self).is_aliased(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_identity() {
        let a = vec![1.0f64, 2.0];
        let b = a.clone();
        assert_eq!(Address::of(&a), Address::of(&a));
        assert_ne!(Address::of(&a), Address::of(&b));
    }
}
