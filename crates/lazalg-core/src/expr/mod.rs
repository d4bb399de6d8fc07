//! Lazy expression nodes
//!
//! Arithmetic on operands builds a tree of nodes without computing
//! anything. A node stores its operands by value: nested nodes are moved in,
//! persistent containers are captured as references (`&DynamicVector<T>`),
//! so the operand type records whether the node owns or borrows it. Every
//! element access recomputes from the operands; the tree is evaluated once
//! when it is assigned to a destination or passed to [`eval`].
//!
//! # Example
//!
//! ```
//! use lazalg_core::prelude::*;
//!
//! let a = DynamicVector::from_vec(vec![1.0, -2.0, 3.0]);
//! let b = DynamicVector::from_vec(vec![0.5, 0.5, 0.5]);
//!
//! // Nothing is computed here
//! let expr = abs(&a - &b) * 2.0;
//! assert_eq!(expr.get(1), 5.0);
//!
//! let mut c = DynamicVector::new(3);
//! c.assign(expr).unwrap();
//! assert_eq!(c.as_slice(), &[1.0, 5.0, 5.0]);
//! ```

pub(crate) mod merge;

mod matrix;
mod vector;

pub use matrix::{MatAbs, MatAdd, MatDiv, MatNeg, MatScale, MatSub, MatTrans, Outer};
pub use vector::{inner, Trans, VecAbs, VecAdd, VecDiv, VecMul, VecNeg, VecScale, VecSub};

use crate::engine::{TempMatrix, TempVector};
use crate::traits::{Matrix, MatrixShape, Vector, VectorShape};

/// Transposition
///
/// Transposing a vector yields a [`Trans`] wrapper, transposing a matrix a
/// [`MatTrans`] node. Transposing either of those again returns the original
/// operand.
pub trait Transpose {
    type Output;

    fn trans(self) -> Self::Output;
}

/// Right-hand operand of `*` on a column vector
///
/// A scalar of the element type scales the vector, a column vector
/// multiplies it elementwise and a transposed vector forms the outer product.
pub trait VectorProduct<Lhs> {
    type Output;

    fn product(self, lhs: Lhs) -> Self::Output;
}

/// Elementwise absolute value; applying it to an absolute-value node is a no-op
pub trait Absolute {
    type Output;

    fn abs(self) -> Self::Output;
}

/// Eager evaluation into a temporary container
///
/// The marker parameter selects the vector or matrix implementation.
pub trait Evaluate<Marker> {
    type Output;

    fn evaluate(&self) -> Self::Output;
}

impl<V: Vector> Evaluate<VectorShape> for V {
    type Output = TempVector<V::Elem>;

    fn evaluate(&self) -> Self::Output {
        TempVector::from_expr(self)
    }
}

impl<M: Matrix> Evaluate<MatrixShape> for M {
    type Output = TempMatrix<M::Elem>;

    fn evaluate(&self) -> Self::Output {
        TempMatrix::from_expr(self)
    }
}

/// Transpose of a vector or matrix operand
pub fn trans<X: Transpose>(x: X) -> X::Output {
    x.trans()
}

/// Elementwise absolute value of a vector or matrix operand
pub fn abs<X: Absolute>(x: X) -> X::Output {
    x.abs()
}

/// Evaluate an operand into a dense or sparse temporary, matching its storage kind
pub fn eval<X: Evaluate<K>, K>(x: X) -> X::Output {
    x.evaluate()
}
