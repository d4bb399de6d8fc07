//! Ordered `(index, value)` storage for one sparse line
//!
//! A [`SparseLine`] backs a [`CompressedVector`](super::CompressedVector)
//! and every row (row-major) or column (column-major) of a
//! [`CompressedMatrix`](super::CompressedMatrix). Indices are kept strictly
//! increasing, so lookups are binary searches and appending at the end is
//! amortized constant.
//!
//! Positions returned by [`SparseLine::find`], [`SparseLine::lower_bound`]
//! and [`SparseLine::upper_bound`] are offsets into the stored entries and
//! stay valid until the next structural change.

use std::ops::Range;

use crate::element::Element;
use crate::traits::Entries;

/// Sorted sparse storage of a single vector or matrix line
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SparseLine<T> {
    indices: Vec<usize>,
    values: Vec<T>,
}

impl<T: Element> SparseLine<T> {
    pub fn new() -> Self {
        Self {
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Number of stored entries
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of entries that fit without reallocation
    pub fn capacity(&self) -> usize {
        self.indices.capacity().min(self.values.capacity())
    }

    /// Grow the capacity to at least `n`; contents are unchanged
    pub fn reserve(&mut self, n: usize) {
        if n > self.capacity() {
            let extra = n - self.len();
            self.indices.reserve_exact(extra);
            self.values.reserve_exact(extra);
        }
    }

    /// Release unused capacity
    pub fn trim(&mut self) {
        self.indices.shrink_to_fit();
        self.values.shrink_to_fit();
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Position of the entry with `index`, if stored
    #[inline]
    pub fn find(&self, index: usize) -> Option<usize> {
        self.indices.binary_search(&index).ok()
    }

    /// Position of the first entry with an index not less than `index`
    #[inline]
    pub fn lower_bound(&self, index: usize) -> usize {
        self.indices.partition_point(|&i| i < index)
    }

    /// Position of the first entry with an index greater than `index`
    #[inline]
    pub fn upper_bound(&self, index: usize) -> usize {
        self.indices.partition_point(|&i| i <= index)
    }

    /// Value at `index`, or the default value if absent
    #[inline]
    pub fn get(&self, index: usize) -> T {
        match self.find(index) {
            Some(pos) => self.values[pos],
            None => T::zero(),
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.find(index) {
            Some(pos) => Some(&mut self.values[pos]),
            None => None,
        }
    }

    pub fn index_at(&self, pos: usize) -> usize {
        self.indices[pos]
    }

    pub fn value_at(&self, pos: usize) -> T {
        self.values[pos]
    }

    pub fn value_at_mut(&mut self, pos: usize) -> &mut T {
        &mut self.values[pos]
    }

    /// Insert a new entry
    ///
    /// Returns `Ok(position)` of the new entry, or `Err(position)` of the
    /// entry already stored at `index`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, usize> {
        match self.indices.binary_search(&index) {
            Ok(pos) => Err(pos),
            Err(pos) => {
                self.indices.insert(pos, index);
                self.values.insert(pos, value);
                Ok(pos)
            }
        }
    }

    /// Overwrite the entry at `index` or insert it
    pub fn set(&mut self, index: usize, value: T) {
        match self.indices.binary_search(&index) {
            Ok(pos) => self.values[pos] = value,
            Err(pos) => {
                self.indices.insert(pos, index);
                self.values.insert(pos, value);
            }
        }
    }

    /// Mutable access to the entry at `index`, inserting a default entry if absent
    pub fn get_or_insert(&mut self, index: usize) -> &mut T {
        let pos = match self.indices.binary_search(&index) {
            Ok(pos) => pos,
            Err(pos) => {
                self.indices.insert(pos, index);
                self.values.insert(pos, T::zero());
                pos
            }
        };
        &mut self.values[pos]
    }

    /// Push an entry behind all stored entries
    ///
    /// `index` must be larger than every stored index. With `check` set,
    /// default values are not stored.
    #[inline]
    pub fn append(&mut self, index: usize, value: T, check: bool) {
        debug_assert!(
            self.indices.last().map_or(true, |&last| last < index),
            "Index is not strictly increasing"
        );
        if !check || !value.is_default() {
            self.indices.push(index);
            self.values.push(value);
        }
    }

    /// Remove the entry at `index`; returns whether one was stored
    pub fn erase(&mut self, index: usize) -> bool {
        match self.find(index) {
            Some(pos) => {
                self.erase_at(pos);
                true
            }
            None => false,
        }
    }

    /// Remove the entry at position `pos`; returns the position of the following entry
    pub fn erase_at(&mut self, pos: usize) -> usize {
        self.indices.remove(pos);
        self.values.remove(pos);
        pos
    }

    /// Remove the entries at positions `first..last`
    pub fn erase_range(&mut self, positions: Range<usize>) -> usize {
        let start = positions.start;
        self.indices.drain(positions.clone());
        self.values.drain(positions);
        start
    }

    /// Remove all entries whose index lies in `range`
    pub fn erase_indices(&mut self, range: Range<usize>) {
        let first = self.lower_bound(range.start);
        let last = self.lower_bound(range.end);
        if first < last {
            self.erase_range(first..last);
        }
    }

    /// Remove all entries, keeping the capacity
    pub fn clear(&mut self) {
        self.indices.clear();
        self.values.clear();
    }

    /// Drop entries with an index of at least `bound`
    pub fn truncate_indices(&mut self, bound: usize) {
        let pos = self.lower_bound(bound);
        self.indices.truncate(pos);
        self.values.truncate(pos);
    }

    /// Stored entries with immutable indices
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.indices.iter().copied().zip(self.values.iter())
    }

    /// Stored entries with immutable indices and mutable values
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> + '_ {
        self.indices.iter().copied().zip(self.values.iter_mut())
    }

    /// Stored entries by value, boxed for expression evaluation
    pub fn entries(&self) -> Entries<'_, T> {
        Box::new(self.indices.iter().copied().zip(self.values.iter().copied()))
    }

    /// Positions of the entries with an index in `range`
    pub fn positions(&self, range: Range<usize>) -> Range<usize> {
        let first = self.lower_bound(range.start);
        first..self.lower_bound(range.end).max(first)
    }

    /// Stored entries with an index in `range`
    pub fn entries_in(&self, range: Range<usize>) -> Entries<'_, T> {
        let span = self.positions(range);
        Box::new(
            self.indices[span.clone()]
                .iter()
                .copied()
                .zip(self.values[span].iter().copied()),
        )
    }

    /// Stored elements with an index in `range` as `(index, &value)`
    pub fn iter_in(&self, range: Range<usize>) -> impl Iterator<Item = (usize, &T)> + '_ {
        let span = self.positions(range);
        self.indices[span.clone()].iter().copied().zip(&self.values[span])
    }

    /// Stored elements with an index in `range` with mutable values
    pub fn iter_mut_in(&mut self, range: Range<usize>) -> impl Iterator<Item = (usize, &mut T)> + '_ {
        let span = self.positions(range);
        self.indices[span.clone()]
            .iter()
            .copied()
            .zip(self.values[span].iter_mut())
    }

    /// Stored entries with an index in `range`, re-based to `range.start`
    pub fn window(&self, range: Range<usize>) -> Entries<'_, T> {
        let offset = range.start;
        Box::new(self.entries_in(range).map(move |(i, v)| (i - offset, v)))
    }

    /// Whether the indices are strictly increasing
    pub fn is_sorted(&self) -> bool {
        self.indices.windows(2).all(|w| w[0] < w[1]) && self.indices.len() == self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> SparseLine<f64> {
        let mut line = SparseLine::new();
        line.append(1, 1.0, false);
        line.append(4, 4.0, false);
        line.append(7, 7.0, false);
        line
    }

    #[test]
    fn test_search() {
        let line = line();
        assert_eq!(line.find(4), Some(1));
        assert_eq!(line.find(5), None);
        assert_eq!(line.lower_bound(4), 1);
        assert_eq!(line.upper_bound(4), 2);
        assert_eq!(line.lower_bound(5), 2);
        assert_eq!(line.upper_bound(9), 3);
        assert_eq!(line.get(7), 7.0);
        assert_eq!(line.get(2), 0.0);
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut line = line();
        assert_eq!(line.insert(3, 3.0), Ok(1));
        assert_eq!(line.insert(4, 9.0), Err(2));
        assert_eq!(line.get(4), 4.0);
        assert_eq!(line.indices(), &[1, 3, 4, 7]);
        assert!(line.is_sorted());
    }

    #[test]
    fn test_append_elision() {
        let mut line = SparseLine::<f64>::new();
        line.append(0, 0.0, true);
        line.append(1, 0.0, false);
        line.append(2, 2.0, true);
        assert_eq!(line.indices(), &[1, 2]);
    }

    #[test]
    fn test_erase_variants() {
        let mut line = line();
        assert!(line.erase(4));
        assert!(!line.erase(4));
        assert_eq!(line.indices(), &[1, 7]);

        let mut line = self::line();
        assert_eq!(line.erase_at(0), 0);
        assert_eq!(line.indices(), &[4, 7]);

        let mut line = self::line();
        line.erase_range(1..3);
        assert_eq!(line.indices(), &[1]);

        let mut line = self::line();
        line.erase_indices(2..8);
        assert_eq!(line.indices(), &[1]);
    }

    #[test]
    fn test_reserve_and_get_or_insert() {
        let mut line = line();
        line.reserve(16);
        assert!(line.capacity() >= 16);
        assert_eq!(line.indices(), &[1, 4, 7]);

        *line.get_or_insert(5) += 2.5;
        *line.get_or_insert(4) += 1.0;
        assert_eq!(line.get(5), 2.5);
        assert_eq!(line.get(4), 5.0);
        assert!(line.is_sorted());
    }

    #[test]
    fn test_window() {
        let line = line();
        let got: Vec<_> = line.window(2..8).collect();
        assert_eq!(got, vec![(2, 4.0), (5, 7.0)]);
    }

    #[test]
    fn test_positioned_ranges() {
        let mut line = line();
        assert_eq!(line.positions(2..7), 1..2);
        assert_eq!(line.positions(5..5), 2..2);
        assert_eq!(line.positions(8..20), 3..3);

        let got: Vec<_> = line.entries_in(4..8).collect();
        assert_eq!(got, vec![(4, 4.0), (7, 7.0)]);
        assert_eq!(line.iter_in(0..2).count(), 1);

        for (_, v) in line.iter_mut_in(2..5) {
            *v = -1.0;
        }
        assert_eq!(line.values(), &[1.0, -1.0, 7.0]);
    }
}
