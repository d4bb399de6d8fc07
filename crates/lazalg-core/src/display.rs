//! Text rendering of vectors and matrices
//!
//! Vectors print on one line as `( a b c )`, matrices print one such line
//! per row.

use std::fmt;

use crate::traits::{Matrix, Vector};

pub(crate) fn fmt_vector<V: Vector + ?Sized>(v: &V, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "(")?;
    for i in 0..v.size() {
        write!(f, " {}", v.get(i))?;
    }
    writeln!(f, " )")
}

pub(crate) fn fmt_matrix<M: Matrix + ?Sized>(m: &M, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for i in 0..m.rows() {
        write!(f, "(")?;
        for j in 0..m.columns() {
            write!(f, " {}", m.get(i, j))?;
        }
        writeln!(f, " )")?;
    }
    Ok(())
}
