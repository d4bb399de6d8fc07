//! Assignment engine
//!
//! Every assignment of an operand to a container or view runs through this
//! module. The engine first checks the shapes, then asks the right-hand side
//! whether it reads from the destination:
//!
//! - **No alias**: the right-hand side is written straight into the
//!   destination. Dense destinations receive `set` calls in the operand's
//!   traversal order; sparse destinations are reset and refilled with
//!   `append`, which relies on the increasing index order of
//!   [`Vector::entries`](crate::traits::Vector::entries).
//! - **Alias**: the right-hand side is first evaluated into a temporary
//!   ([`TempVector`] / [`TempMatrix`]), the destination is reset and the
//!   temporary is copied in with the same discipline.
//!
//! The borrow rules already keep a destination out of its own right-hand
//! side for plain assignment. Self-referential updates go through
//! `assign_with`, which hands the current contents to a closure together
//! with a [`Staging`] area and always takes the temporary path.

mod assign;
mod temporary;

pub(crate) use assign::*;
pub use temporary::{TempMatrix, TempVector};

use crate::element::Element;
use crate::error::{MathError, MathResult};
use crate::traits::{Address, Matrix, Vector};

/// Holding area for an expression that may read from its own destination
///
/// Created by `assign_with`; the closure calls [`Staging::evaluate`] exactly
/// once with the new value of the destination.
#[derive(Debug)]
pub struct Staging<Tmp> {
    address: Address,
    dims: (usize, usize),
    aliased: bool,
    result: Option<Tmp>,
}

impl<Tmp> Staging<Tmp> {
    pub(crate) fn new(address: Address, dims: (usize, usize)) -> Self {
        Self {
            address,
            dims,
            aliased: false,
            result: None,
        }
    }

    /// Whether the staged expression reads from the destination
    pub fn is_aliased(&self) -> bool {
        self.aliased
    }

    pub(crate) fn finish(self) -> MathResult<Tmp> {
        self.result
            .ok_or_else(|| MathError::invalid("no expression was staged"))
    }
}

impl<T: Element> Staging<TempVector<T>> {
    /// Evaluate `rhs` into a temporary that replaces the destination afterwards
    pub fn evaluate<R: Vector<Elem = T>>(&mut self, rhs: R) -> MathResult<()> {
        MathError::check_size(self.dims.0, rhs.size())?;
        self.aliased = rhs.can_alias(self.address) && rhs.is_aliased(self.address);
        tracing::debug!(
            size = rhs.size(),
            kind = %rhs.kind(),
            aliased = self.aliased,
            "staging vector expression"
        );
        self.result = Some(TempVector::from_expr(&rhs));
        Ok(())
    }
}

impl<T: Element> Staging<TempMatrix<T>> {
    /// Evaluate `rhs` into a temporary that replaces the destination afterwards
    pub fn evaluate<R: Matrix<Elem = T>>(&mut self, rhs: R) -> MathResult<()> {
        MathError::check_dims(self.dims, rhs.dims())?;
        self.aliased = rhs.can_alias(self.address) && rhs.is_aliased(self.address);
        tracing::debug!(
            rows = rhs.rows(),
            columns = rhs.columns(),
            kind = %rhs.kind(),
            order = %rhs.order(),
            aliased = self.aliased,
            "staging matrix expression"
        );
        self.result = Some(TempMatrix::from_expr(&rhs));
        Ok(())
    }
}
