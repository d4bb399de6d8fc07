//! Sparse containers
//!
//! Both containers keep their stored elements in [`SparseLine`]s: parallel
//! index and value arrays with strictly increasing indices. Absent elements
//! read as the default value.

pub mod line;

mod matrix;
mod vector;

pub use line::SparseLine;
pub use matrix::CompressedMatrix;
pub use vector::CompressedVector;
