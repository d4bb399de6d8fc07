//! Dense containers
//!
//! - [`DynamicVector`] / [`DynamicMatrix`]: heap storage, sizes chosen at run time
//! - [`StaticVector`] / [`StaticMatrix`]: inline storage, sizes fixed at compile time

mod matrix;
mod static_matrix;
mod static_vector;
mod vector;

pub use matrix::DynamicMatrix;
pub use static_matrix::*;
pub use static_vector::*;
pub use vector::DynamicVector;
