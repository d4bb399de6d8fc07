//! Contiguous windows into vectors

use std::fmt;
use std::ops::Range;

use crate::display::fmt_vector;
use crate::element::Element;
use crate::error::{MathError, MathResult};
use crate::order::StorageKind;
use crate::sparse::CompressedVector;
use crate::traits::{rebase, Address, Entries, Vector, VectorMut};

fn check_window(offset: usize, n: usize, size: usize) -> MathResult<()> {
    if n == 0 || n > size || offset > size - n {
        return Err(MathError::InvalidSubvector { offset, n, size });
    }
    Ok(())
}

/// Window-relative `range` as indices of the underlying vector
fn shift(range: Range<usize>, offset: usize) -> Range<usize> {
    offset + range.start..offset + range.end
}

/// Read-only window `offset..offset + n` of a vector operand
#[derive(Clone, Copy, Debug)]
pub struct Subvector<V> {
    operand: V,
    offset: usize,
    size: usize,
}

impl<V: Vector> Subvector<V> {
    /// Fails with [`MathError::InvalidSubvector`] for an empty or oversized window
    pub fn new(operand: V, offset: usize, n: usize) -> MathResult<Self> {
        check_window(offset, n, operand.size())?;
        Ok(Self {
            operand,
            offset,
            size: n,
        })
    }

    /// Window over the same operand, relative to this one
    pub fn narrow(self, offset: usize, n: usize) -> MathResult<Self> {
        check_window(offset, n, self.size)?;
        Ok(Self {
            operand: self.operand,
            offset: self.offset + offset,
            size: n,
        })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Window extent
    pub fn capacity(&self) -> usize {
        self.size
    }

    pub fn operand(&self) -> &V {
        &self.operand
    }
}

impl<V: Vector> Vector for Subvector<V> {
    type Elem = V::Elem;

    fn size(&self) -> usize {
        self.size
    }

    fn kind(&self) -> StorageKind {
        self.operand.kind()
    }

    #[inline]
    fn get(&self, index: usize) -> V::Elem {
        debug_assert!(index < self.size, "Invalid subvector access index");
        self.operand.get(self.offset + index)
    }

    fn entries(&self) -> Entries<'_, V::Elem> {
        self.entries_in(0..self.size)
    }

    fn entries_in(&self, range: Range<usize>) -> Entries<'_, V::Elem> {
        rebase(self.operand.entries_in(shift(range, self.offset)), self.offset)
    }

    fn can_alias(&self, address: Address) -> bool {
        self.operand.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.operand.is_aliased(address)
    }
}

impl<V: Vector> fmt::Display for Subvector<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_vector(self, f)
    }
}

/// Sparse search inside the window; positions count from the first entry of the window
impl<T: Element> Subvector<&CompressedVector<T>> {
    fn first(&self) -> usize {
        self.operand.lower_bound(self.offset)
    }

    pub fn find(&self, index: usize) -> Option<usize> {
        if index >= self.size {
            return None;
        }
        let first = self.first();
        self.operand.find(self.offset + index).map(|pos| pos - first)
    }

    pub fn lower_bound(&self, index: usize) -> usize {
        self.operand.lower_bound(self.offset + index.min(self.size)) - self.first()
    }

    pub fn upper_bound(&self, index: usize) -> usize {
        let end = self.operand.lower_bound(self.offset + self.size);
        self.operand.upper_bound(self.offset + index).min(end) - self.first()
    }

    /// Stored elements of the window as `(index, &value)`
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        let offset = self.offset;
        self.operand
            .iter_in(shift(0..self.size, offset))
            .map(move |(i, v)| (i - offset, v))
    }
}

/// Writable window `offset..offset + n` of a vector destination
///
/// # Examples
///
/// ```
/// use lazalg_core::prelude::*;
///
/// let mut v = DynamicVector::from_vec(vec![0; 6]);
/// let other = DynamicVector::from_vec(vec![7, 8, 9]);
/// subvector_mut(&mut v, 2, 3).unwrap().assign(&other).unwrap();
/// assert_eq!(v.as_slice(), &[0, 0, 7, 8, 9, 0]);
///
/// assert!(subvector_mut(&mut v, 4, 3).is_err());
/// ```
#[derive(Debug)]
pub struct SubvectorMut<'a, V> {
    vector: &'a mut V,
    offset: usize,
    size: usize,
}

impl<'a, V: VectorMut> SubvectorMut<'a, V> {
    pub fn new(vector: &'a mut V, offset: usize, n: usize) -> MathResult<Self> {
        check_window(offset, n, vector.size())?;
        Ok(Self {
            vector,
            offset,
            size: n,
        })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn capacity(&self) -> usize {
        self.size
    }

    fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.size
    }
}

impl<V: VectorMut> Vector for SubvectorMut<'_, V> {
    type Elem = V::Elem;

    fn size(&self) -> usize {
        self.size
    }

    fn kind(&self) -> StorageKind {
        self.vector.kind()
    }

    #[inline]
    fn get(&self, index: usize) -> V::Elem {
        debug_assert!(index < self.size, "Invalid subvector access index");
        self.vector.get(self.offset + index)
    }

    fn entries(&self) -> Entries<'_, V::Elem> {
        self.entries_in(0..self.size)
    }

    fn entries_in(&self, range: Range<usize>) -> Entries<'_, V::Elem> {
        rebase(self.vector.entries_in(shift(range, self.offset)), self.offset)
    }

    fn can_alias(&self, address: Address) -> bool {
        self.vector.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.vector.is_aliased(address)
    }
}

impl<V: VectorMut> VectorMut for SubvectorMut<'_, V> {
    fn address(&self) -> Address {
        self.vector.address()
    }

    #[inline]
    fn set(&mut self, index: usize, value: V::Elem) {
        debug_assert!(index < self.size, "Invalid subvector access index");
        self.vector.set(self.offset + index, value);
    }

    // Entries behind the window may exist, so appends go through `set`.

    fn clear_range(&mut self, range: Range<usize>) {
        let offset = self.offset;
        self.vector
            .clear_range(offset + range.start..offset + range.end);
    }

    fn for_each_stored(&mut self, f: &mut dyn FnMut(usize, &mut V::Elem)) {
        let range = self.range();
        let offset = self.offset;
        self.vector.for_each_stored_in(range, &mut |i, v| f(i - offset, v));
    }
}

impl<V: VectorMut> fmt::Display for SubvectorMut<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_vector(self, f)
    }
}

/// Sparse element management inside the window; positions count from the
/// first entry of the window
impl<T: Element> SubvectorMut<'_, CompressedVector<T>> {
    fn first(&self) -> usize {
        self.vector.lower_bound(self.offset)
    }

    /// Insert a new element; fails if it already exists or lies outside the window
    pub fn insert(&mut self, index: usize, value: T) -> MathResult<&mut T> {
        MathError::check_index(index, self.size)?;
        self.vector.insert(self.offset + index, value)
    }

    pub fn erase(&mut self, index: usize) -> bool {
        index < self.size && self.vector.erase(self.offset + index)
    }

    pub fn erase_at(&mut self, pos: usize) -> usize {
        let first = self.first();
        self.vector.erase_at(first + pos) - first
    }

    pub fn erase_range(&mut self, positions: Range<usize>) -> usize {
        let first = self.first();
        self.vector
            .erase_range(first + positions.start..first + positions.end)
            - first
    }

    pub fn find(&self, index: usize) -> Option<usize> {
        if index >= self.size {
            return None;
        }
        let first = self.first();
        self.vector.find(self.offset + index).map(|pos| pos - first)
    }

    pub fn lower_bound(&self, index: usize) -> usize {
        self.vector.lower_bound(self.offset + index.min(self.size)) - self.first()
    }

    pub fn upper_bound(&self, index: usize) -> usize {
        let end = self.vector.lower_bound(self.offset + self.size);
        self.vector.upper_bound(self.offset + index).min(end) - self.first()
    }

    /// Mutable access to `index`, inserting a default entry if absent
    ///
    /// # Panics
    ///
    /// Panics if `index` lies outside the window.
    pub fn get_or_insert(&mut self, index: usize) -> &mut T {
        assert!(index < self.size, "Invalid subvector access index");
        self.vector.get_or_insert(self.offset + index)
    }

    /// Stored elements of the window with mutable values
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> + '_ {
        let offset = self.offset;
        let range = self.range();
        self.vector
            .iter_mut_in(range)
            .map(move |(i, v)| (i - offset, v))
    }
}

vector_ops!(impl[V,] Subvector<V>);
vector_abs!(impl[V,] Subvector<V>);
vector_ops!(impl['b, 'a, V,] &'b SubvectorMut<'a, V>);
vector_abs!(impl['b, 'a, V,] &'b SubvectorMut<'a, V>);
vector_assign_ops!(impl['a, V,] SubvectorMut<'a, V>);
