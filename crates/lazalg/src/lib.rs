//! # lazalg - Expression-Template Linear Algebra
//!
//! Dense and sparse vectors and matrices whose arithmetic builds lazy
//! expression trees, evaluated exactly once on assignment.
//!
//! This is the **meta crate** that re-exports the lazalg components.
//!
//! ## Quick Start
//!
//! ```
//! use lazalg::prelude::*;
//!
//! let a = DynamicVector::from_vec(vec![1.0, 2.0, 3.0]);
//! let b = CompressedVector::from_pairs(3, &[(1, 4.0)])?;
//!
//! let mut c = DynamicVector::new(3);
//! c.assign(abs(&a - &b) * 2.0)?;
//! assert_eq!(c.as_slice(), &[2.0, 4.0, 6.0]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Containers, Views and Expressions ([`core`])
//!
//! Containers in both storage orders, subvector/row/column/submatrix views,
//! lazy expression nodes and the assignment engine.
//!
//! ```
//! use lazalg::prelude::*;
//!
//! let mut m = CompressedMatrix::<i32>::new(4, 4, StorageOrder::ColumnMajor);
//! m.insert(2, 1, 5)?;
//! m.insert(0, 3, -1)?;
//!
//! let mut d = DynamicMatrix::new(4, 4, StorageOrder::RowMajor);
//! d.assign(trans(&m))?;
//! assert_eq!(d.get(1, 2), 5);
//!
//! submatrix_mut(&mut d, 0, 0, 2, 2)?.assign(submatrix(&m, 2, 0, 2, 2)?)?;
//! assert_eq!(d.get(0, 1), 5);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ### Benchmarks ([`mark`])
//!
//! Classic eager baseline containers, the wall-clock timer and the kernel
//! runners used by the `lazalg-mark` binary.
//!
//! ```
//! use lazalg::mark::{BenchConfig, Flavour, Kernel};
//!
//! let config = BenchConfig::new().with_reps(1).with_steps(1).with_sizes(vec![8]);
//! for kernel in Kernel::ALL {
//!     kernel.run(Flavour::Lazalg, 8, &config)?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub use lazalg_core as core;
pub use lazalg_mark as mark;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use lazalg::prelude::*;
    //!
    //! let v = Vec3d::from_array([1.0, 2.0, 3.0]);
    //! assert_eq!(inner(&v, &v).unwrap(), 14.0);
    //! ```

    pub use crate::core::prelude::*;
}
