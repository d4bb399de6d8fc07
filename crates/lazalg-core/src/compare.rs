//! Tolerance-aware comparison of operands
//!
//! Any two vectors or any two matrices of the same element type can be
//! compared, whatever their storage kind, storage order or whether they are
//! containers, views or unevaluated expressions. Entries missing on a sparse
//! side compare as the default value.
//!
//! ```
//! use lazalg_core::prelude::*;
//!
//! let a = DynamicVector::from_vec(vec![0.0, 1.0, 0.0]);
//! let b = CompressedVector::from_pairs(3, &[(1, 1.0 + 1e-12)]).unwrap();
//! assert!(is_equal(&a, &b));
//! assert!(!is_equal_with(&a, &b, &Accuracy::exact()));
//! ```

use std::iter::Peekable;

use crate::config::Accuracy;
use crate::element::Element;
use crate::traits::{Entries, Matrix, MatrixShape, Vector, VectorShape};

/// Comparison of two operands of the same shape class
///
/// The marker parameter selects between the vector and matrix
/// implementations and is inferred at the call site.
pub trait ApproxEq<Rhs, Marker> {
    fn approx_eq(&self, rhs: &Rhs, accuracy: &Accuracy) -> bool;
}

impl<L, R> ApproxEq<R, VectorShape> for L
where
    L: Vector,
    R: Vector<Elem = L::Elem>,
{
    fn approx_eq(&self, rhs: &R, accuracy: &Accuracy) -> bool {
        if self.size() != rhs.size() {
            return false;
        }
        match first_mismatch(self.entries(), rhs.entries(), accuracy) {
            Some(index) => {
                tracing::trace!(index, "vector element mismatch");
                false
            }
            None => true,
        }
    }
}

impl<L, R> ApproxEq<R, MatrixShape> for L
where
    L: Matrix,
    R: Matrix<Elem = L::Elem>,
{
    fn approx_eq(&self, rhs: &R, accuracy: &Accuracy) -> bool {
        if self.dims() != rhs.dims() {
            return false;
        }
        let order = self.order();
        let (rows, columns) = self.dims();
        for k in 0..order.lines(rows, columns) {
            let lhs_line = self.line_entries(order, k);
            let rhs_line = rhs.line_entries(order, k);
            if let Some(x) = first_mismatch(lhs_line, rhs_line, accuracy) {
                let (row, column) = order.join(k, x);
                tracing::trace!(row, column, "matrix element mismatch");
                return false;
            }
        }
        true
    }
}

/// Index of the first differing element of two ordered entry streams
fn first_mismatch<T: Element>(lhs: Entries<'_, T>, rhs: Entries<'_, T>, accuracy: &Accuracy) -> Option<usize> {
    let mut lhs: Peekable<Entries<'_, T>> = lhs.peekable();
    let mut rhs: Peekable<Entries<'_, T>> = rhs.peekable();
    loop {
        let (index, a, b) = match (lhs.peek().copied(), rhs.peek().copied()) {
            (None, None) => return None,
            (Some((i, a)), None) => {
                lhs.next();
                (i, a, T::zero())
            }
            (None, Some((j, b))) => {
                rhs.next();
                (j, T::zero(), b)
            }
            (Some((i, a)), Some((j, b))) => {
                if i < j {
                    lhs.next();
                    (i, a, T::zero())
                } else if j < i {
                    rhs.next();
                    (j, T::zero(), b)
                } else {
                    lhs.next();
                    rhs.next();
                    (i, a, b)
                }
            }
        };
        if !a.equal(b, accuracy) {
            return Some(index);
        }
    }
}

/// Compare two operands with the default [`Accuracy`]
pub fn is_equal<L, R, K>(lhs: L, rhs: R) -> bool
where
    L: ApproxEq<R, K>,
{
    lhs.approx_eq(&rhs, &Accuracy::default())
}

/// Compare two operands with an explicit [`Accuracy`]
pub fn is_equal_with<L, R, K>(lhs: L, rhs: R, accuracy: &Accuracy) -> bool
where
    L: ApproxEq<R, K>,
{
    lhs.approx_eq(&rhs, accuracy)
}
