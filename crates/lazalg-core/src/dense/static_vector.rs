//! Fixed-size dense vector stored inline

use std::fmt;
use std::ops::{Index, IndexMut, Range};

use crate::display::fmt_vector;
use crate::element::Element;
use crate::order::StorageKind;
use crate::traits::{Address, Entries, Vector, VectorMut};

/// Dense vector with `N` elements known at compile time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticVector<T, const N: usize> {
    data: [T; N],
}

pub type Vec2f = StaticVector<f32, 2>;
pub type Vec3f = StaticVector<f32, 3>;
pub type Vec4f = StaticVector<f32, 4>;
pub type Vec6f = StaticVector<f32, 6>;
pub type Vec2d = StaticVector<f64, 2>;
pub type Vec3d = StaticVector<f64, 3>;
pub type Vec4d = StaticVector<f64, 4>;
pub type Vec6d = StaticVector<f64, 6>;
pub type Vec2i = StaticVector<i32, 2>;
pub type Vec3i = StaticVector<i32, 3>;

impl<T: Element, const N: usize> StaticVector<T, N> {
    /// Vector of default elements
    pub fn new() -> Self {
        Self {
            data: [T::zero(); N],
        }
    }

    pub fn filled(value: T) -> Self {
        Self { data: [value; N] }
    }

    pub fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self {
            data: std::array::from_fn(f),
        }
    }

    /// Materialize any vector operand of size `N`
    ///
    /// # Panics
    ///
    /// Panics if the operand size is not `N`.
    pub fn from_expr<V: Vector<Elem = T> + ?Sized>(operand: &V) -> Self {
        assert_eq!(operand.size(), N, "Vector sizes do not match");
        let mut out = Self::new();
        for (i, v) in operand.entries() {
            out.data[i] = v;
        }
        out
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
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

    pub fn into_array(self) -> [T; N] {
        self.data
    }
}

impl<T: Element, const N: usize> Default for StaticVector<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element, const N: usize> From<[T; N]> for StaticVector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<T, const N: usize> Index<usize> for StaticVector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for StaticVector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Element, const N: usize> Vector for StaticVector<T, N> {
    type Elem = T;

    fn size(&self) -> usize {
        N
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

impl<T: Element, const N: usize> VectorMut for StaticVector<T, N> {
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

impl<T: Element, const N: usize> fmt::Display for StaticVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_vector(self, f)
    }
}

vector_ops!(impl['a, T: Element, const N: usize,] &'a StaticVector<T, N>);
vector_abs!(impl['a, T: Element, const N: usize,] &'a StaticVector<T, N>);
vector_assign_ops!(impl[T: Element, const N: usize,] StaticVector<T, N>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::DynamicVector;

    #[test]
    fn test_static_vector_basics() {
        let v = Vec3d::from_array([1.0, 2.0, 3.0]);
        assert_eq!(v.size(), 3);
        assert_eq!(v[2], 3.0);
        assert_eq!(Vec4f::new().as_slice(), &[0.0; 4]);
        assert_eq!(Vec2i::from_fn(|i| i as i32 + 1).as_slice(), &[1, 2]);
    }

    #[test]
    fn test_mixed_with_dynamic() {
        let a = Vec3d::from_array([1.0, 2.0, 3.0]);
        let b = DynamicVector::from_vec(vec![1.0, 1.0, 1.0]);
        let mut c = Vec3d::new();
        c.assign(&a - &b).unwrap();
        assert_eq!(c.as_slice(), &[0.0, 1.0, 2.0]);
        c *= 2.0;
        assert_eq!(c.as_slice(), &[0.0, 2.0, 4.0]);
        let d = Vec3d::from_expr(&(&a + &c));
        assert_eq!(d.as_slice(), &[1.0, 4.0, 7.0]);
    }
}
