//! # lazalg-core
//!
//! Dense and sparse vectors and matrices combined through lazy expressions.
//!
//! This crate provides the building blocks of the lazalg stack:
//!
//! - **Containers**: [`DynamicVector`], [`StaticVector`], [`DynamicMatrix`] and
//!   [`StaticMatrix`] for dense data, [`CompressedVector`] and
//!   [`CompressedMatrix`] for sparse data in either storage order
//! - **Views** ([`views`]): subvectors, rows, columns and submatrices of
//!   containers and expressions
//! - **Expressions** ([`expr`]): addition, subtraction, scaling, division,
//!   negation, transposition, absolute values, outer and inner products
//! - **Assignment engine** ([`engine`]): evaluates an expression tree exactly
//!   once into a container or view, with a temporary when the right-hand side
//!   reads from the destination
//! - **Comparison** ([`compare`]) with a configurable relative [`Accuracy`]
//! - **Random creators** ([`random`]) for reproducible test and benchmark data
//!
//! ## Quick Start
//!
//! ```
//! use lazalg_core::prelude::*;
//!
//! let a = DynamicMatrix::from_row_slice(2, 2, StorageOrder::RowMajor, &[1.0, 2.0, 3.0, 4.0])
//!     .unwrap();
//! let b = CompressedMatrix::from_triplets(2, 2, StorageOrder::ColumnMajor, &[(0, 1, 1.0)])
//!     .unwrap();
//!
//! // Builds a tree; nothing is computed yet
//! let expr = trans(&a) - &b * 2.0;
//!
//! let mut c = DynamicMatrix::new(2, 2, StorageOrder::ColumnMajor);
//! c.assign(expr).unwrap();
//! assert_eq!(c.get(0, 1), 1.0);
//! assert_eq!(c.get(1, 0), 2.0);
//! ```
//!
//! ## Self-Referential Updates
//!
//! A destination cannot be borrowed by its own right-hand side. Updates of
//! the form `c = f(c)` go through `assign_with`, which evaluates into a
//! temporary first:
//!
//! ```
//! use lazalg_core::prelude::*;
//!
//! let mut c = DynamicMatrix::from_row_slice(2, 2, StorageOrder::RowMajor, &[1, 2, 3, 4]).unwrap();
//! c.assign_with(|c, out| out.evaluate(trans(c))).unwrap();
//! assert_eq!(c.get(0, 1), 3);
//! ```
//!
//! ## Error Handling
//!
//! Operations that check shapes or indices return [`MathResult`]:
//!
//! ```
//! use lazalg_core::prelude::*;
//!
//! let mut a = DynamicVector::<f64>::new(3);
//! let b = DynamicVector::<f64>::new(4);
//! assert!(matches!(a.assign(&b), Err(MathError::SizeMismatch { .. })));
//! assert!(subvector(&b, 3, 2).is_err());
//! ```

#[macro_use]
mod macros;

mod display;

pub mod compare;
pub mod config;
pub mod dense;
pub mod element;
pub mod engine;
pub mod error;
pub mod expr;
pub mod order;
pub mod random;
pub mod sparse;
pub mod traits;
pub mod views;

#[cfg(test)]
mod property_tests;

pub use compare::{is_equal, is_equal_with, ApproxEq};
pub use config::Accuracy;
pub use dense::{DynamicMatrix, DynamicVector, StaticMatrix, StaticVector};
pub use element::Element;
pub use engine::{Staging, TempMatrix, TempVector};
pub use error::{MathError, MathResult};
pub use expr::{abs, eval, inner, trans, Absolute, Evaluate, Transpose, VectorProduct};
pub use order::{StorageKind, StorageOrder};
pub use random::Creator;
pub use sparse::{CompressedMatrix, CompressedVector, SparseLine};
pub use traits::{Address, Matrix, MatrixMut, Vector, VectorMut};

/// Everything needed to build and evaluate expressions
pub mod prelude {
    pub use crate::compare::{is_equal, is_equal_with, ApproxEq};
    pub use crate::config::Accuracy;
    pub use crate::dense::{
        DynamicMatrix, DynamicVector, Mat2x2d, Mat2x2f, Mat3x3d, Mat3x3f, Mat4x4d, Mat4x4f,
        Mat6x6d, StaticMatrix, StaticVector, Vec2d, Vec2f, Vec2i, Vec3d, Vec3f, Vec3i, Vec4d,
        Vec4f, Vec6d, Vec6f,
    };
    pub use crate::element::Element;
    pub use crate::engine::{Staging, TempMatrix, TempVector};
    pub use crate::error::{MathError, MathResult};
    pub use crate::expr::{abs, eval, inner, trans, Absolute, Evaluate, Transpose, VectorProduct};
    pub use crate::order::{StorageKind, StorageOrder};
    pub use crate::random::Creator;
    pub use crate::sparse::{CompressedMatrix, CompressedVector};
    pub use crate::traits::{Address, Matrix, MatrixMut, Vector, VectorMut};
    pub use crate::views::{
        column, column_mut, row, row_mut, submatrix, submatrix_mut, subvector, subvector_mut,
        Column, ColumnMut, IntoLines, IntoSubmatrix, IntoSubvector, Row, RowMut, Submatrix,
        SubmatrixMut, Subvector, SubvectorMut,
    };
}
