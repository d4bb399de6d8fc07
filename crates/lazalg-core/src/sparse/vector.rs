//! Compressed sparse vector

use std::fmt;
use std::ops::Range;

use super::line::SparseLine;
use crate::display::fmt_vector;
use crate::element::Element;
use crate::error::{MathError, MathResult};
use crate::order::StorageKind;
use crate::traits::{Address, Entries, Vector, VectorMut};

/// Sparse vector storing only non-default elements, sorted by index
///
/// # Examples
///
/// ```
/// use lazalg_core::prelude::*;
///
/// let mut v = CompressedVector::<f64>::new(10);
/// v.reserve(3);
/// v.insert(7, 1.5).unwrap();
/// v.insert(2, -1.0).unwrap();
/// assert!(v.insert(7, 2.0).is_err());
///
/// v.append(9, 4.0, false);
/// assert_eq!(v.nonzeros(), 3);
/// assert_eq!(v.get(7), 1.5);
/// assert_eq!(v.get(3), 0.0);
/// assert_eq!(v.find(3), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CompressedVector<T> {
    size: usize,
    line: SparseLine<T>,
}

impl<T: Element> CompressedVector<T> {
    /// Empty vector of the given size
    pub fn new(size: usize) -> Self {
        Self {
            size,
            line: SparseLine::new(),
        }
    }

    pub fn with_capacity(size: usize, nonzeros: usize) -> Self {
        Self {
            size,
            line: SparseLine::with_capacity(nonzeros),
        }
    }

    /// Build from `(index, value)` pairs in any order
    pub fn from_pairs(size: usize, pairs: &[(usize, T)]) -> MathResult<Self> {
        let mut v = Self::with_capacity(size, pairs.len());
        for &(i, x) in pairs {
            v.insert(i, x)?;
        }
        Ok(v)
    }

    /// Materialize any vector operand, dropping default values
    pub fn from_expr<V: Vector<Elem = T> + ?Sized>(operand: &V) -> Self {
        let mut v = Self::new(operand.size());
        if operand.kind().is_sparse() {
            v.line.reserve(operand.nonzeros());
        }
        for (i, x) in operand.entries() {
            v.line.append(i, x, true);
        }
        v
    }

    /// Number of entries that fit without reallocation
    pub fn capacity(&self) -> usize {
        self.line.capacity()
    }

    /// Grow the capacity to at least `n`; contents are unchanged
    pub fn reserve(&mut self, n: usize) {
        self.line.reserve(n);
    }

    /// Release unused capacity
    pub fn trim(&mut self) {
        self.line.trim();
    }

    /// Insert a new element
    ///
    /// Fails with [`MathError::DuplicateIndex`] if `index` is already stored
    /// and with [`MathError::IndexOutOfBounds`] if it exceeds the size.
    pub fn insert(&mut self, index: usize, value: T) -> MathResult<&mut T> {
        MathError::check_index(index, self.size)?;
        match self.line.insert(index, value) {
            Ok(pos) => Ok(self.line.value_at_mut(pos)),
            Err(_) => Err(MathError::DuplicateIndex { index }),
        }
    }

    /// Mutable access to the element at `index`, inserting a default entry if absent
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn get_or_insert(&mut self, index: usize) -> &mut T {
        assert!(index < self.size, "Invalid sparse vector access index");
        self.line.get_or_insert(index)
    }

    /// Mutable access to a stored element
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.line.get_mut(index)
    }

    /// Remove the element at `index`; returns whether one was stored
    pub fn erase(&mut self, index: usize) -> bool {
        self.line.erase(index)
    }

    /// Remove the element at position `pos`; returns the position of the following entry
    pub fn erase_at(&mut self, pos: usize) -> usize {
        self.line.erase_at(pos)
    }

    /// Remove the elements at positions `first..last`
    pub fn erase_range(&mut self, positions: Range<usize>) -> usize {
        self.line.erase_range(positions)
    }

    pub fn find(&self, index: usize) -> Option<usize> {
        self.line.find(index)
    }

    pub fn lower_bound(&self, index: usize) -> usize {
        self.line.lower_bound(index)
    }

    pub fn upper_bound(&self, index: usize) -> usize {
        self.line.upper_bound(index)
    }

    /// Stored elements as `(index, &value)`
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.line.iter()
    }

    /// Stored elements with immutable indices and mutable values
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> + '_ {
        self.line.iter_mut()
    }

    /// Stored elements with an index in `range`
    pub fn iter_in(&self, range: Range<usize>) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.line.iter_in(range)
    }

    /// Stored elements with an index in `range` with mutable values
    pub fn iter_mut_in(&mut self, range: Range<usize>) -> impl Iterator<Item = (usize, &mut T)> + '_ {
        self.line.iter_mut_in(range)
    }

    pub fn line(&self) -> &SparseLine<T> {
        &self.line
    }

    /// Change the size; with `preserve` the elements below the new size are kept
    pub fn resize(&mut self, size: usize, preserve: bool) {
        if preserve {
            self.line.truncate_indices(size);
        } else {
            self.line.clear();
        }
        self.size = size;
    }

    /// Remove all elements; the size becomes zero
    pub fn clear(&mut self) {
        self.line.clear();
        self.size = 0;
    }
}

impl<T: Element> Vector for CompressedVector<T> {
    type Elem = T;

    fn size(&self) -> usize {
        self.size
    }

    fn kind(&self) -> StorageKind {
        StorageKind::Sparse
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        debug_assert!(index < self.size, "Invalid sparse vector access index");
        self.line.get(index)
    }

    fn entries(&self) -> Entries<'_, T> {
        self.line.entries()
    }

    fn entries_in(&self, range: Range<usize>) -> Entries<'_, T> {
        self.line.entries_in(range)
    }

    fn nonzeros(&self) -> usize {
        self.line.len()
    }

    fn is_aliased(&self, address: Address) -> bool {
        Address::of(self) == address
    }
}

impl<T: Element> VectorMut for CompressedVector<T> {
    fn address(&self) -> Address {
        Address::of(self)
    }

    fn set(&mut self, index: usize, value: T) {
        debug_assert!(index < self.size, "Invalid sparse vector access index");
        self.line.set(index, value);
    }

    #[inline]
    fn append(&mut self, index: usize, value: T, check: bool) {
        debug_assert!(index < self.size, "Invalid sparse vector access index");
        self.line.append(index, value, check);
    }

    fn clear_range(&mut self, range: Range<usize>) {
        self.line.erase_indices(range);
    }

    fn reset(&mut self) {
        self.line.clear();
    }

    fn reserve(&mut self, nonzeros: usize) {
        self.line.reserve(nonzeros);
    }

    fn for_each_stored(&mut self, f: &mut dyn FnMut(usize, &mut T)) {
        for (i, v) in self.line.iter_mut() {
            f(i, v);
        }
    }

    fn for_each_stored_in(&mut self, range: Range<usize>, f: &mut dyn FnMut(usize, &mut T)) {
        for (i, v) in self.line.iter_mut_in(range) {
            f(i, v);
        }
    }
}

impl<T: Element> fmt::Display for CompressedVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_vector(self, f)
    }
}

vector_ops!(impl['a, T: Element,] &'a CompressedVector<T>);
vector_abs!(impl['a, T: Element,] &'a CompressedVector<T>);
vector_assign_ops!(impl[T: Element,] CompressedVector<T>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::DynamicVector;

    fn sample() -> CompressedVector<f64> {
        CompressedVector::from_pairs(8, &[(5, 5.0), (1, 1.0), (3, 3.0)]).unwrap()
    }

    #[test]
    fn test_insert_errors() {
        let mut v = sample();
        assert_eq!(v.insert(3, 9.0).err(), Some(MathError::DuplicateIndex { index: 3 }));
        assert_eq!(
            v.insert(8, 1.0).err(),
            Some(MathError::IndexOutOfBounds { index: 8, size: 8 })
        );
        *v.insert(4, 4.0).unwrap() *= 2.0;
        assert_eq!(v.get(4), 8.0);
        assert!(v.line().is_sorted());
    }

    #[test]
    fn test_search_positions() {
        let v = sample();
        assert_eq!(v.find(3), Some(1));
        assert_eq!(v.lower_bound(2), 1);
        assert_eq!(v.upper_bound(3), 2);
        assert_eq!(v.upper_bound(7), 3);
    }

    #[test]
    fn test_erase_forms() {
        let mut v = sample();
        assert!(v.erase(3));
        assert_eq!(v.nonzeros(), 2);

        let mut v = sample();
        let next = v.erase_at(0);
        assert_eq!(next, 0);
        assert_eq!(v.iter().next(), Some((3, &3.0)));

        let mut v = sample();
        v.erase_range(0..2);
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![(5, &5.0)]);
    }

    #[test]
    fn test_reserve_keeps_contents() {
        let mut v = sample();
        v.reserve(32);
        assert!(v.capacity() >= 32);
        assert_eq!(v.nonzeros(), 3);
        assert_eq!(v.get(5), 5.0);
        v.trim();
        assert!(v.capacity() >= v.nonzeros());
    }

    #[test]
    fn test_iter_mut_modifies_values() {
        let mut v = sample();
        for (i, x) in v.iter_mut() {
            *x += i as f64;
        }
        assert_eq!(v.get(5), 10.0);
    }

    #[test]
    fn test_get_or_insert() {
        let mut v = CompressedVector::<i32>::new(4);
        *v.get_or_insert(2) += 3;
        *v.get_or_insert(2) += 3;
        assert_eq!(v.get(2), 6);
        assert_eq!(v.nonzeros(), 1);
    }

    #[test]
    fn test_resize() {
        let mut v = sample();
        v.resize(4, true);
        assert_eq!(v.size(), 4);
        assert_eq!(v.nonzeros(), 2);
        v.resize(6, false);
        assert_eq!(v.nonzeros(), 0);
    }

    #[test]
    fn test_assign_from_dense_elides_defaults() {
        let d = DynamicVector::from_vec(vec![0.0, 2.0, 0.0, -1.0]);
        let mut v = CompressedVector::new(4);
        v.assign(&d).unwrap();
        assert_eq!(v.nonzeros(), 2);
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![(1, &2.0), (3, &-1.0)]);
    }

    #[test]
    fn test_compound_assignment() {
        let mut v = sample();
        let w = CompressedVector::from_pairs(8, &[(0, 1.0), (3, -3.0)]).unwrap();
        v += &w;
        assert_eq!(v.get(0), 1.0);
        assert_eq!(v.get(3), 0.0);
        assert_eq!(v.nonzeros(), 3);
        assert!(v.line().is_sorted());

        v -= &w;
        assert_eq!(v.get(3), 3.0);

        v *= &w;
        assert_eq!(v.nonzeros(), 1);
        assert_eq!(v.get(3), -9.0);

        v /= 3.0;
        assert_eq!(v.get(3), -3.0);
    }
}
