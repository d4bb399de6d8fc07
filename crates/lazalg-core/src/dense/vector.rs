//! Dynamically sized dense vector

use std::fmt;
use std::ops::{Index, IndexMut, Range};

use crate::display::fmt_vector;
use crate::element::Element;
use crate::order::StorageKind;
use crate::traits::{Address, Entries, Vector, VectorMut};

/// Heap-allocated dense vector
#[derive(Clone, Debug, PartialEq)]
pub struct DynamicVector<T> {
    data: Vec<T>,
}

impl<T: Element> DynamicVector<T> {
    /// Vector of `size` default elements
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![T::zero(); size],
        }
    }

    /// Vector of `size` copies of `value`
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            data: vec![value; size],
        }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn from_fn<F: FnMut(usize) -> T>(size: usize, f: F) -> Self {
        Self {
            data: (0..size).map(f).collect(),
        }
    }

    /// Materialize any vector operand
    pub fn from_expr<V: Vector<Elem = T> + ?Sized>(operand: &V) -> Self {
        let mut out = Self::new(operand.size());
        for (i, v) in operand.entries() {
            out.data[i] = v;
        }
        out
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Change the size; with `preserve` the leading elements are kept
    ///
    /// New elements are default-initialized.
    pub fn resize(&mut self, size: usize, preserve: bool) {
        if !preserve {
            self.data.clear();
        }
        self.data.resize(size, T::zero());
    }

    /// Grow by `n` default elements
    pub fn extend(&mut self, n: usize) {
        let size = self.data.len() + n;
        self.data.resize(size, T::zero());
    }

    /// Remove all elements; the size becomes zero
    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Element> From<Vec<T>> for DynamicVector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Element> FromIterator<T> for DynamicVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for DynamicVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for DynamicVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Element> Vector for DynamicVector<T> {
    type Elem = T;

    fn size(&self) -> usize {
        self.data.len()
    }

    fn kind(&self) -> StorageKind {
        StorageKind::Dense
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self.data[index]
    }

    fn entries(&self) -> Entries<'_, T> {
        Box::new(self.data.iter().copied().enumerate())
    }

    fn is_aliased(&self, address: Address) -> bool {
        Address::of(self) == address
    }
}

impl<T: Element> VectorMut for DynamicVector<T> {
    fn address(&self) -> Address {
        Address::of(self)
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self.data[index] = value;
    }

    fn clear_range(&mut self, range: Range<usize>) {
        self.data[range].fill(T::zero());
    }

    fn for_each_stored(&mut self, f: &mut dyn FnMut(usize, &mut T)) {
        for (i, v) in self.data.iter_mut().enumerate() {
            f(i, v);
        }
    }
}

impl<T: Element> fmt::Display for DynamicVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_vector(self, f)
    }
}

vector_ops!(impl['a, T: Element,] &'a DynamicVector<T>);
vector_abs!(impl['a, T: Element,] &'a DynamicVector<T>);
vector_assign_ops!(impl[T: Element,] DynamicVector<T>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;

    #[test]
    fn test_construction() {
        let v = DynamicVector::<f64>::new(4);
        assert_eq!(v.size(), 4);
        assert!(v.iter().all(|&x| x == 0.0));

        let w = DynamicVector::from_fn(3, |i| i as i32 * 2);
        assert_eq!(w.as_slice(), &[0, 2, 4]);

        let u: DynamicVector<f32> = vec![1.0, 2.0].into();
        assert_eq!(u[1], 2.0);
    }

    #[test]
    fn test_resize() {
        let mut v = DynamicVector::from_vec(vec![1.0, 2.0, 3.0]);
        v.resize(5, true);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 0.0, 0.0]);
        v.resize(2, true);
        assert_eq!(v.as_slice(), &[1.0, 2.0]);
        v.resize(3, false);
        assert_eq!(v.as_slice(), &[0.0, 0.0, 0.0]);
        v.extend(1);
        assert_eq!(v.len(), 4);
    }

    #[test]
    fn test_assign_expression() {
        let a = DynamicVector::from_vec(vec![1.0, 2.0, 3.0]);
        let b = DynamicVector::from_vec(vec![4.0, 5.0, 6.0]);
        let mut c = DynamicVector::new(3);

        c.assign(&a + &b).unwrap();
        assert_eq!(c.as_slice(), &[5.0, 7.0, 9.0]);

        c += &a;
        assert_eq!(c.as_slice(), &[6.0, 9.0, 12.0]);

        c -= &b * 2.0;
        assert_eq!(c.as_slice(), &[-2.0, -1.0, 0.0]);

        c *= &a;
        assert_eq!(c.as_slice(), &[-2.0, -2.0, 0.0]);

        c /= 2.0;
        assert_eq!(c.as_slice(), &[-1.0, -1.0, 0.0]);
    }

    #[test]
    fn test_assign_size_mismatch_leaves_destination() {
        let a = DynamicVector::from_vec(vec![1.0, 2.0]);
        let mut c = DynamicVector::from_vec(vec![9.0, 9.0, 9.0]);
        assert_eq!(
            c.assign(&a),
            Err(MathError::SizeMismatch {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(c.as_slice(), &[9.0, 9.0, 9.0]);
    }

    #[test]
    fn test_division_by_zero_before_mutation() {
        let mut c = DynamicVector::from_vec(vec![1.0, 2.0]);
        assert_eq!(c.try_div_assign(0.0), Err(MathError::DivisionByZero));
        assert_eq!(c.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_display() {
        let v = DynamicVector::from_vec(vec![1, -2, 3]);
        assert_eq!(v.to_string(), "( 1 -2 3 )\n");
    }
}
