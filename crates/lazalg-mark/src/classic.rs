//! Classic eagerly evaluated containers
//!
//! The baseline the expression kernels are measured against: every operator
//! allocates and fills a new result immediately, the way a naive
//! operator-overloading library would.

use std::ops::{Add, Mul, Sub};

use lazalg_core::random::rand_range;
use lazalg_core::Element;
use scirs2_core::random::Rng;

/// Dense vector with eager arithmetic
#[derive(Debug, Clone, PartialEq)]
pub struct ClassicVector<T> {
    data: Vec<T>,
}

impl<T: Element> ClassicVector<T> {
    pub fn new(n: usize) -> Self {
        Self {
            data: vec![T::zero(); n],
        }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, i: usize) -> T {
        self.data[i]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Fill with random values in `[0, 10]`
    pub fn init<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for x in &mut self.data {
            *x = rand_range(rng, 0.0, 10.0);
        }
    }
}

impl<T: Element> Add for &ClassicVector<T> {
    type Output = ClassicVector<T>;

    fn add(self, rhs: Self) -> ClassicVector<T> {
        assert_eq!(self.len(), rhs.len(), "Vector sizes do not match");
        ClassicVector::from_vec(self.data.iter().zip(&rhs.data).map(|(&a, &b)| a + b).collect())
    }
}

/// Dense row-major matrix with eager arithmetic
#[derive(Debug, Clone, PartialEq)]
pub struct ClassicMatrix<T> {
    rows: usize,
    columns: usize,
    data: Vec<T>,
}

impl<T: Element> ClassicMatrix<T> {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            data: vec![T::zero(); rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.columns + j]
    }

    pub fn init<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for x in &mut self.data {
            *x = rand_range(rng, 0.0, 10.0);
        }
    }
}

impl<T: Element> Mul<T> for &ClassicMatrix<T> {
    type Output = ClassicMatrix<T>;

    fn mul(self, scalar: T) -> ClassicMatrix<T> {
        ClassicMatrix {
            rows: self.rows,
            columns: self.columns,
            data: self.data.iter().map(|&x| x * scalar).collect(),
        }
    }
}

/// Outer product `a * b^T`
pub fn outer<T: Element>(a: &ClassicVector<T>, b: &ClassicVector<T>) -> ClassicMatrix<T> {
    let mut data = Vec::with_capacity(a.len() * b.len());
    for &x in &a.data {
        data.extend(b.data.iter().map(|&y| x * y));
    }
    ClassicMatrix {
        rows: a.len(),
        columns: b.len(),
        data,
    }
}

/// Row-major sparse matrix of `(column, value)` rows with eager arithmetic
#[derive(Debug, Clone, PartialEq)]
pub struct ClassicSparse<T> {
    columns: usize,
    rows: Vec<Vec<(usize, T)>>,
}

impl<T: Element> ClassicSparse<T> {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            columns,
            rows: vec![Vec::new(); rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn nonzeros(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn get(&self, i: usize, j: usize) -> T {
        match self.rows[i].binary_search_by_key(&j, |&(k, _)| k) {
            Ok(pos) => self.rows[i][pos].1,
            Err(_) => T::zero(),
        }
    }

    /// Fill every row with `fill` random non-zero elements at distinct columns
    pub fn init<R: Rng + ?Sized>(&mut self, fill: usize, rng: &mut R) {
        let fill = fill.min(self.columns);
        for row in &mut self.rows {
            row.clear();
            while row.len() < fill {
                let j = rng.random_range(0..self.columns);
                if let Err(pos) = row.binary_search_by_key(&j, |&(k, _)| k) {
                    row.insert(pos, (j, lazalg_core::random::rand_nonzero(rng, 0.0, 10.0)));
                }
            }
        }
    }

    /// Row-major triplets, for handing the same data to other containers
    pub fn triplets(&self) -> Vec<(usize, usize, T)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().map(move |&(j, v)| (i, j, v)))
            .collect()
    }
}

impl<T: Element> Sub for &ClassicSparse<T> {
    type Output = ClassicSparse<T>;

    fn sub(self, rhs: Self) -> ClassicSparse<T> {
        assert_eq!(
            (self.rows(), self.columns),
            (rhs.rows(), rhs.columns),
            "Matrix sizes do not match"
        );
        let rows = self
            .rows
            .iter()
            .zip(&rhs.rows)
            .map(|(a, b)| {
                let mut out = Vec::with_capacity(a.len() + b.len());
                let (mut x, mut y) = (0, 0);
                while x < a.len() || y < b.len() {
                    let take_a = y == b.len() || (x < a.len() && a[x].0 < b[y].0);
                    let take_b = x == a.len() || (y < b.len() && b[y].0 < a[x].0);
                    if take_a {
                        out.push(a[x]);
                        x += 1;
                    } else if take_b {
                        out.push((b[y].0, -b[y].1));
                        y += 1;
                    } else {
                        out.push((a[x].0, a[x].1 - b[y].1));
                        x += 1;
                        y += 1;
                    }
                }
                out
            })
            .collect();
        ClassicSparse {
            columns: self.columns,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::random::{SeedableRng, StdRng};

    #[test]
    fn test_outer() {
        let a = ClassicVector::from_vec(vec![1.0, 2.0]);
        let b = ClassicVector::from_vec(vec![3.0, 4.0, 5.0]);
        let m = outer(&a, &b);
        assert_eq!((m.rows(), m.columns()), (2, 3));
        assert_eq!(m.get(1, 2), 10.0);
        assert_eq!((&m * 0.5).get(0, 1), 2.0);
    }

    #[test]
    fn test_sparse_subtraction() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut a = ClassicSparse::<f64>::new(5, 6);
        let mut b = ClassicSparse::<f64>::new(5, 6);
        a.init(3, &mut rng);
        b.init(2, &mut rng);
        assert_eq!(a.nonzeros(), 15);
        let c = &a - &b;
        for i in 0..5 {
            assert!(c.rows[i].windows(2).all(|w| w[0].0 < w[1].0));
            for j in 0..6 {
                assert_eq!(c.get(i, j), a.get(i, j) - b.get(i, j));
            }
        }
    }

    #[test]
    fn test_vector_add() {
        let a = ClassicVector::from_vec(vec![1, 2, 3]);
        let b = ClassicVector::from_vec(vec![3, 2, 1]);
        assert_eq!((&a + &b).as_slice(), &[4, 4, 4]);
    }
}
