//! Random containers for tests and benchmarks
//!
//! All generators take an explicit RNG so that runs are reproducible from a
//! seed. [`Creator`] bundles a seeded `StdRng` with a value range and builds
//! every container type; sparse containers receive exactly the requested
//! number of non-zero elements at distinct random positions.
//!
//! ```
//! use lazalg_core::prelude::*;
//!
//! let mut creator = Creator::new(42).with_range(-5.0, 5.0);
//! let v: CompressedVector<f64> = creator.sparse_vector(100, 10).unwrap();
//! assert_eq!(v.nonzeros(), 10);
//! assert!(v.iter().all(|(_, x)| (-5.0..=5.0).contains(x)));
//! ```

use std::collections::BTreeSet;

use scirs2_core::random::{Rng, SeedableRng, StdRng};

use crate::dense::{DynamicMatrix, DynamicVector, StaticMatrix, StaticVector};
use crate::element::Element;
use crate::error::{MathError, MathResult};
use crate::order::StorageOrder;
use crate::sparse::{CompressedMatrix, CompressedVector};
use crate::traits::{MatrixMut, VectorMut};

/// Lower bound of generated values unless configured otherwise
pub const DEFAULT_MIN: f64 = 0.0;

/// Upper bound of generated values unless configured otherwise
pub const DEFAULT_MAX: f64 = 10.0;

/// Uniform value in `[min, max]`; integral types round to the nearest value
pub fn rand_range<T: Element, R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> T {
    let u: f64 = rng.random();
    T::from_f64(min + (max - min) * u)
}

/// Uniform value in `[min, max]` that is not the default value
///
/// Falls back to one if the range yields only zeros.
pub fn rand_nonzero<T: Element, R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> T {
    for _ in 0..64 {
        let value: T = rand_range(rng, min, max);
        if !value.is_default() {
            return value;
        }
    }
    T::one()
}

/// `count` distinct indices below `n` in increasing order
fn distinct_indices<R: Rng + ?Sized>(rng: &mut R, n: usize, count: usize) -> MathResult<Vec<usize>> {
    if count > n {
        return Err(MathError::invalid(format!(
            "cannot place {count} non-zero elements in {n} slots"
        )));
    }
    // Floyd's sampling
    let mut chosen = BTreeSet::new();
    for j in n - count..n {
        let t = rng.random_range(0..=j);
        if !chosen.insert(t) {
            chosen.insert(j);
        }
    }
    Ok(chosen.into_iter().collect())
}

/// Overwrite every stored element of a vector with a random value
pub fn randomize_vector<V: VectorMut, R: Rng + ?Sized>(vector: &mut V, rng: &mut R, min: f64, max: f64) {
    vector.for_each_stored(&mut |_, v| *v = rand_range(rng, min, max));
}

/// Overwrite every stored element of a matrix with a random value
pub fn randomize_matrix<M: MatrixMut, R: Rng + ?Sized>(matrix: &mut M, rng: &mut R, min: f64, max: f64) {
    matrix.for_each_stored(&mut |_, _, v| *v = rand_range(rng, min, max));
}

/// Seeded factory for random containers
#[derive(Debug, Clone)]
pub struct Creator {
    rng: StdRng,
    min: f64,
    max: f64,
}

impl Creator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }

    /// Set the value range
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min.min(max);
        self.max = max.max(min);
        self
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn value<T: Element>(&mut self) -> T {
        rand_range(&mut self.rng, self.min, self.max)
    }

    pub fn vector<T: Element>(&mut self, n: usize) -> DynamicVector<T> {
        let (min, max) = (self.min, self.max);
        DynamicVector::from_fn(n, |_| rand_range(&mut self.rng, min, max))
    }

    pub fn static_vector<T: Element, const N: usize>(&mut self) -> StaticVector<T, N> {
        let (min, max) = (self.min, self.max);
        StaticVector::from_fn(|_| rand_range(&mut self.rng, min, max))
    }

    /// Sparse vector with exactly `nonzeros` non-default elements
    pub fn sparse_vector<T: Element>(&mut self, n: usize, nonzeros: usize) -> MathResult<CompressedVector<T>> {
        let indices = distinct_indices(&mut self.rng, n, nonzeros)?;
        let mut v = CompressedVector::with_capacity(n, nonzeros);
        for i in indices {
            let value = rand_nonzero(&mut self.rng, self.min, self.max);
            v.append(i, value, false);
        }
        Ok(v)
    }

    pub fn matrix<T: Element>(&mut self, rows: usize, columns: usize, order: StorageOrder) -> DynamicMatrix<T> {
        let (min, max) = (self.min, self.max);
        DynamicMatrix::from_fn(rows, columns, order, |_, _| rand_range(&mut self.rng, min, max))
    }

    pub fn static_matrix<T: Element, const M: usize, const N: usize>(&mut self) -> StaticMatrix<T, M, N> {
        let (min, max) = (self.min, self.max);
        StaticMatrix::from_fn(|_, _| rand_range(&mut self.rng, min, max))
    }

    /// Sparse matrix with exactly `nonzeros` non-default elements
    pub fn sparse_matrix<T: Element>(
        &mut self,
        rows: usize,
        columns: usize,
        nonzeros: usize,
        order: StorageOrder,
    ) -> MathResult<CompressedMatrix<T>> {
        let lines = order.lines(rows, columns);
        let length = if lines == 0 { 0 } else { rows * columns / lines };
        let positions = distinct_indices(&mut self.rng, rows * columns, nonzeros)?;
        let mut m = CompressedMatrix::with_capacity(rows, columns, nonzeros, order);
        for p in positions {
            let (i, j) = order.join(p / length, p % length);
            let value = rand_nonzero(&mut self.rng, self.min, self.max);
            m.append(i, j, value, false);
        }
        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Matrix, Vector};

    #[test]
    fn test_seed_reproducibility() {
        let a: DynamicVector<f64> = Creator::new(7).vector(16);
        let b: DynamicVector<f64> = Creator::new(7).vector(16);
        let c: DynamicVector<f64> = Creator::new(8).vector(16);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_sparse_counts() {
        let mut creator = Creator::new(1);
        let v: CompressedVector<i32> = creator.sparse_vector(20, 20).unwrap();
        assert_eq!(v.nonzeros(), 20);
        assert!(v.line().is_sorted());
        assert!(creator.sparse_vector::<i32>(5, 6).is_err());

        for order in [StorageOrder::RowMajor, StorageOrder::ColumnMajor] {
            let m: CompressedMatrix<f64> = creator.sparse_matrix(7, 5, 12, order).unwrap();
            assert_eq!(m.nonzeros(), 12);
            assert_eq!(m.dims(), (7, 5));
            assert!(m.is_sorted());
        }
    }

    #[test]
    fn test_value_range() {
        let mut creator = Creator::new(3).with_range(4.0, -2.0);
        assert_eq!(creator.range(), (-2.0, 4.0));
        let m: DynamicMatrix<i64> = creator.matrix(6, 6, StorageOrder::ColumnMajor);
        assert!(m.as_slice().iter().all(|x| (-2..=4).contains(x)));
        let s: StaticVector<f32, 8> = creator.static_vector();
        assert!(s.iter().all(|x| (-2.0..=4.0).contains(x)));
    }

    #[test]
    fn test_randomize_only_touches_stored_elements() {
        let mut creator = Creator::new(9).with_range(1.0, 2.0);
        let mut v = CompressedVector::from_pairs(10, &[(2, 0.5), (7, 0.5)]).unwrap();
        let (min, max) = creator.range();
        randomize_vector(&mut v, creator.rng(), min, max);
        assert_eq!(v.nonzeros(), 2);
        assert!(v.get(2) >= 1.0 && v.get(7) >= 1.0);

        let mut m = StaticMatrix::<f64, 2, 2>::new();
        randomize_matrix(&mut m, creator.rng(), min, max);
        assert!(m.get(1, 1) >= 1.0);
    }
}
