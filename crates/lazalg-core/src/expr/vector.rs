//! Vector expression nodes

use std::ops::Mul;

use scirs2_core::numeric::Zero;

use super::merge::{dense_entries, Intersection, Union};
use super::{Absolute, Outer, Transpose, VectorProduct};
use crate::element::Element;
use crate::error::{MathError, MathResult};
use crate::order::StorageKind;
use crate::traits::{Address, Entries, Vector};

/// Lazy sum of two vectors
#[derive(Clone, Debug)]
pub struct VecAdd<L, R> {
    lhs: L,
    rhs: R,
}

impl<L: Vector, R: Vector<Elem = L::Elem>> VecAdd<L, R> {
    /// # Panics
    ///
    /// Panics if the operand sizes differ.
    pub fn new(lhs: L, rhs: R) -> Self {
        assert_eq!(lhs.size(), rhs.size(), "Vector sizes do not match");
        Self { lhs, rhs }
    }
}

impl<L, R> VecAdd<L, R> {
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

impl<L: Vector, R: Vector<Elem = L::Elem>> Vector for VecAdd<L, R> {
    type Elem = L::Elem;

    fn size(&self) -> usize {
        self.lhs.size()
    }

    fn kind(&self) -> StorageKind {
        self.lhs.kind().additive(self.rhs.kind())
    }

    #[inline]
    fn get(&self, index: usize) -> L::Elem {
        self.lhs.get(index) + self.rhs.get(index)
    }

    fn entries(&self) -> Entries<'_, L::Elem> {
        match self.kind() {
            StorageKind::Sparse => Box::new(Union::new(
                self.lhs.entries(),
                self.rhs.entries(),
                |a, b| a + b,
            )),
            StorageKind::Dense => dense_entries(self),
        }
    }

    fn can_alias(&self, address: Address) -> bool {
        self.lhs.can_alias(address) || self.rhs.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.lhs.is_aliased(address) || self.rhs.is_aliased(address)
    }
}

/// Lazy difference of two vectors
#[derive(Clone, Debug)]
pub struct VecSub<L, R> {
    lhs: L,
    rhs: R,
}

impl<L: Vector, R: Vector<Elem = L::Elem>> VecSub<L, R> {
    /// # Panics
    ///
    /// Panics if the operand sizes differ.
    pub fn new(lhs: L, rhs: R) -> Self {
        assert_eq!(lhs.size(), rhs.size(), "Vector sizes do not match");
        Self { lhs, rhs }
    }
}

impl<L, R> VecSub<L, R> {
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

impl<L: Vector, R: Vector<Elem = L::Elem>> Vector for VecSub<L, R> {
    type Elem = L::Elem;

    fn size(&self) -> usize {
        self.lhs.size()
    }

    fn kind(&self) -> StorageKind {
        self.lhs.kind().additive(self.rhs.kind())
    }

    #[inline]
    fn get(&self, index: usize) -> L::Elem {
        self.lhs.get(index) - self.rhs.get(index)
    }

    fn entries(&self) -> Entries<'_, L::Elem> {
        match self.kind() {
            StorageKind::Sparse => Box::new(Union::new(
                self.lhs.entries(),
                self.rhs.entries(),
                |a, b| a - b,
            )),
            StorageKind::Dense => dense_entries(self),
        }
    }

    fn can_alias(&self, address: Address) -> bool {
        self.lhs.can_alias(address) || self.rhs.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.lhs.is_aliased(address) || self.rhs.is_aliased(address)
    }
}

/// Lazy elementwise product of two vectors
#[derive(Clone, Debug)]
pub struct VecMul<L, R> {
    lhs: L,
    rhs: R,
}

impl<L: Vector, R: Vector<Elem = L::Elem>> VecMul<L, R> {
    /// # Panics
    ///
    /// Panics if the operand sizes differ.
    pub fn new(lhs: L, rhs: R) -> Self {
        assert_eq!(lhs.size(), rhs.size(), "Vector sizes do not match");
        Self { lhs, rhs }
    }
}

impl<L, R> VecMul<L, R> {
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

impl<L: Vector, R: Vector<Elem = L::Elem>> Vector for VecMul<L, R> {
    type Elem = L::Elem;

    fn size(&self) -> usize {
        self.lhs.size()
    }

    fn kind(&self) -> StorageKind {
        self.lhs.kind().multiplicative(self.rhs.kind())
    }

    #[inline]
    fn get(&self, index: usize) -> L::Elem {
        self.lhs.get(index) * self.rhs.get(index)
    }

    fn entries(&self) -> Entries<'_, L::Elem> {
        match (self.lhs.kind(), self.rhs.kind()) {
            (StorageKind::Sparse, StorageKind::Sparse) => Box::new(Intersection::new(
                self.lhs.entries(),
                self.rhs.entries(),
                |a, b| a * b,
            )),
            (StorageKind::Sparse, StorageKind::Dense) => {
                let rhs = &self.rhs;
                Box::new(self.lhs.entries().map(move |(i, a)| (i, a * rhs.get(i))))
            }
            (StorageKind::Dense, StorageKind::Sparse) => {
                let lhs = &self.lhs;
                Box::new(self.rhs.entries().map(move |(i, b)| (i, lhs.get(i) * b)))
            }
            (StorageKind::Dense, StorageKind::Dense) => dense_entries(self),
        }
    }

    fn can_alias(&self, address: Address) -> bool {
        self.lhs.can_alias(address) || self.rhs.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.lhs.is_aliased(address) || self.rhs.is_aliased(address)
    }
}

/// Lazy negation
#[derive(Clone, Debug)]
pub struct VecNeg<V> {
    operand: V,
}

impl<V: Vector> VecNeg<V> {
    pub fn new(operand: V) -> Self {
        Self { operand }
    }
}

impl<V> VecNeg<V> {
    pub fn operand(&self) -> &V {
        &self.operand
    }

    pub(crate) fn into_inner(self) -> V {
        self.operand
    }
}

impl<V: Vector> Vector for VecNeg<V> {
    type Elem = V::Elem;

    fn size(&self) -> usize {
        self.operand.size()
    }

    fn kind(&self) -> StorageKind {
        self.operand.kind()
    }

    #[inline]
    fn get(&self, index: usize) -> V::Elem {
        -self.operand.get(index)
    }

    fn entries(&self) -> Entries<'_, V::Elem> {
        Box::new(self.operand.entries().map(|(i, v)| (i, -v)))
    }

    fn can_alias(&self, address: Address) -> bool {
        self.operand.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.operand.is_aliased(address)
    }
}

/// Lazy multiplication of every element with a scalar
#[derive(Clone, Debug)]
pub struct VecScale<V: Vector> {
    operand: V,
    scalar: V::Elem,
}

impl<V: Vector> VecScale<V> {
    pub fn new(operand: V, scalar: V::Elem) -> Self {
        Self { operand, scalar }
    }

    pub fn operand(&self) -> &V {
        &self.operand
    }

    pub fn scalar(&self) -> V::Elem {
        self.scalar
    }

    pub(crate) fn into_parts(self) -> (V, V::Elem) {
        (self.operand, self.scalar)
    }
}

impl<V: Vector> Vector for VecScale<V> {
    type Elem = V::Elem;

    fn size(&self) -> usize {
        self.operand.size()
    }

    fn kind(&self) -> StorageKind {
        self.operand.kind()
    }

    #[inline]
    fn get(&self, index: usize) -> V::Elem {
        self.operand.get(index) * self.scalar
    }

    fn entries(&self) -> Entries<'_, V::Elem> {
        let scalar = self.scalar;
        Box::new(self.operand.entries().map(move |(i, v)| (i, v * scalar)))
    }

    fn can_alias(&self, address: Address) -> bool {
        self.operand.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.operand.is_aliased(address)
    }
}

/// Lazy division of every element by a nonzero scalar
///
/// Floating-point elements are multiplied by the reciprocal of the scalar,
/// integral elements are divided.
#[derive(Clone, Debug)]
pub struct VecDiv<V: Vector> {
    operand: V,
    scalar: V::Elem,
    divisor: V::Elem,
}

impl<V: Vector> VecDiv<V> {
    /// # Panics
    ///
    /// Panics if `scalar` is zero; see [`VecDiv::try_new`].
    pub fn new(operand: V, scalar: V::Elem) -> Self {
        match Self::try_new(operand, scalar) {
            Ok(node) => node,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_new(operand: V, scalar: V::Elem) -> MathResult<Self> {
        if scalar.is_default() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self {
            operand,
            scalar,
            divisor: V::Elem::divisor(scalar),
        })
    }

    pub fn operand(&self) -> &V {
        &self.operand
    }

    pub fn scalar(&self) -> V::Elem {
        self.scalar
    }

    pub(crate) fn into_parts(self) -> (V, V::Elem, V::Elem) {
        (self.operand, self.scalar, self.divisor)
    }

    pub(crate) fn from_parts(operand: V, scalar: V::Elem, divisor: V::Elem) -> Self {
        Self {
            operand,
            scalar,
            divisor,
        }
    }
}

impl<V: Vector> Vector for VecDiv<V> {
    type Elem = V::Elem;

    fn size(&self) -> usize {
        self.operand.size()
    }

    fn kind(&self) -> StorageKind {
        self.operand.kind()
    }

    #[inline]
    fn get(&self, index: usize) -> V::Elem {
        self.operand.get(index).apply_divisor(self.divisor)
    }

    fn entries(&self) -> Entries<'_, V::Elem> {
        let divisor = self.divisor;
        Box::new(
            self.operand
                .entries()
                .map(move |(i, v)| (i, v.apply_divisor(divisor))),
        )
    }

    fn can_alias(&self, address: Address) -> bool {
        self.operand.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.operand.is_aliased(address)
    }
}

/// Lazy elementwise absolute value
#[derive(Clone, Debug)]
pub struct VecAbs<V> {
    operand: V,
}

impl<V: Vector> VecAbs<V> {
    pub fn new(operand: V) -> Self {
        Self { operand }
    }
}

impl<V> VecAbs<V> {
    pub fn operand(&self) -> &V {
        &self.operand
    }

    pub(crate) fn into_inner(self) -> V {
        self.operand
    }
}

impl<V: Vector> Vector for VecAbs<V> {
    type Elem = V::Elem;

    fn size(&self) -> usize {
        self.operand.size()
    }

    fn kind(&self) -> StorageKind {
        self.operand.kind()
    }

    #[inline]
    fn get(&self, index: usize) -> V::Elem {
        Element::abs(self.operand.get(index))
    }

    fn entries(&self) -> Entries<'_, V::Elem> {
        Box::new(self.operand.entries().map(|(i, v)| (i, Element::abs(v))))
    }

    fn can_alias(&self, address: Address) -> bool {
        self.operand.can_alias(address)
    }

    fn is_aliased(&self, address: Address) -> bool {
        self.operand.is_aliased(address)
    }
}

impl<V: Vector> Absolute for VecAbs<V> {
    type Output = VecAbs<V>;

    fn abs(self) -> Self::Output {
        self
    }
}

/// Transposed (row) vector
///
/// A transposed vector multiplies a vector from the left to an inner
/// product, and is multiplied by a vector from the right to an outer
/// product:
///
/// ```
/// use lazalg_core::prelude::*;
///
/// let a = DynamicVector::from_vec(vec![1.0, 2.0]);
/// let b = DynamicVector::from_vec(vec![3.0, 4.0]);
///
/// assert_eq!(trans(&a) * &b, 11.0);
///
/// let outer = &a * trans(&b);
/// assert_eq!(outer.dims(), (2, 2));
/// assert_eq!(outer.get(1, 0), 6.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Trans<V> {
    operand: V,
}

impl<V: Vector> Trans<V> {
    pub fn new(operand: V) -> Self {
        Self { operand }
    }

    pub fn size(&self) -> usize {
        self.operand.size()
    }

    pub fn get(&self, index: usize) -> V::Elem {
        self.operand.get(index)
    }
}

impl<V> Trans<V> {
    pub fn inner(&self) -> &V {
        &self.operand
    }

    pub fn into_inner(self) -> V {
        self.operand
    }
}

impl<V> Transpose for Trans<V> {
    type Output = V;

    fn trans(self) -> V {
        self.operand
    }
}

impl<L, S> VectorProduct<L> for S
where
    S: Element,
    L: Vector<Elem = S>,
{
    type Output = VecScale<L>;

    fn product(self, lhs: L) -> VecScale<L> {
        VecScale::new(lhs, self)
    }
}

impl<L, W> VectorProduct<L> for Trans<W>
where
    L: Vector,
    W: Vector<Elem = L::Elem>,
{
    type Output = Outer<L, W>;

    fn product(self, lhs: L) -> Outer<L, W> {
        Outer::new(lhs, self.operand)
    }
}

impl<V: Vector, Rhs: Vector<Elem = V::Elem>> Mul<Rhs> for Trans<V> {
    type Output = V::Elem;

    /// # Panics
    ///
    /// Panics if the operand sizes differ.
    fn mul(self, rhs: Rhs) -> V::Elem {
        match inner(&self.operand, &rhs) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Inner product of two vectors
///
/// The sum runs in increasing index order over the stored entries of the
/// sparse operand, or over all indices if both are dense.
pub fn inner<L, R>(lhs: &L, rhs: &R) -> MathResult<L::Elem>
where
    L: Vector + ?Sized,
    R: Vector<Elem = L::Elem> + ?Sized,
{
    MathError::check_size(lhs.size(), rhs.size())?;
    let mut sum = <L::Elem as Zero>::zero();
    match (lhs.kind(), rhs.kind()) {
        (StorageKind::Sparse, StorageKind::Sparse) => {
            for (_, v) in Intersection::new(lhs.entries(), rhs.entries(), |a, b| a * b) {
                sum = sum + v;
            }
        }
        (StorageKind::Sparse, StorageKind::Dense) => {
            for (i, a) in lhs.entries() {
                sum = sum + a * rhs.get(i);
            }
        }
        (StorageKind::Dense, StorageKind::Sparse) => {
            for (i, b) in rhs.entries() {
                sum = sum + lhs.get(i) * b;
            }
        }
        (StorageKind::Dense, StorageKind::Dense) => {
            for i in 0..lhs.size() {
                sum = sum + lhs.get(i) * rhs.get(i);
            }
        }
    }
    Ok(sum)
}

vector_ops!(impl[L, R,] VecAdd<L, R>);
vector_abs!(impl[L, R,] VecAdd<L, R>);
vector_ops!(impl[L, R,] VecSub<L, R>);
vector_abs!(impl[L, R,] VecSub<L, R>);
vector_ops!(impl[L, R,] VecMul<L, R>);
vector_abs!(impl[L, R,] VecMul<L, R>);
vector_ops!(impl[V,] VecNeg<V>);
vector_abs!(impl[V,] VecNeg<V>);
vector_ops!(impl[V: Vector,] VecScale<V>);
vector_abs!(impl[V: Vector,] VecScale<V>);
vector_ops!(impl[V: Vector,] VecDiv<V>);
vector_abs!(impl[V: Vector,] VecDiv<V>);
vector_ops!(impl[V,] VecAbs<V>);
