//! Ordered merges of sparse entry streams

use std::iter::Peekable;

use crate::element::Element;
use crate::traits::{Entries, Matrix, Vector};

/// Union of two ordered entry streams
///
/// An index present in only one stream is combined with the default value
/// on the other side, so `op(a, 0)` or `op(0, b)`.
pub(crate) struct Union<'a, T: Element> {
    left: Peekable<Entries<'a, T>>,
    right: Peekable<Entries<'a, T>>,
    op: fn(T, T) -> T,
}

impl<'a, T: Element> Union<'a, T> {
    pub(crate) fn new(left: Entries<'a, T>, right: Entries<'a, T>, op: fn(T, T) -> T) -> Self {
        Self {
            left: left.peekable(),
            right: right.peekable(),
            op,
        }
    }
}

impl<'a, T: Element> Iterator for Union<'a, T> {
    type Item = (usize, T);

    fn next(&mut self) -> Option<(usize, T)> {
        let op = self.op;
        match (self.left.peek(), self.right.peek()) {
            (Some(&(i, a)), Some(&(j, b))) => {
                if i < j {
                    self.left.next();
                    Some((i, op(a, T::zero())))
                } else if j < i {
                    self.right.next();
                    Some((j, op(T::zero(), b)))
                } else {
                    self.left.next();
                    self.right.next();
                    Some((i, op(a, b)))
                }
            }
            (Some(_), None) => self.left.next().map(|(i, a)| (i, op(a, T::zero()))),
            (None, Some(_)) => self.right.next().map(|(j, b)| (j, op(T::zero(), b))),
            (None, None) => None,
        }
    }
}

/// Intersection of two ordered entry streams
pub(crate) struct Intersection<'a, T: Element> {
    left: Peekable<Entries<'a, T>>,
    right: Peekable<Entries<'a, T>>,
    op: fn(T, T) -> T,
}

impl<'a, T: Element> Intersection<'a, T> {
    pub(crate) fn new(left: Entries<'a, T>, right: Entries<'a, T>, op: fn(T, T) -> T) -> Self {
        Self {
            left: left.peekable(),
            right: right.peekable(),
            op,
        }
    }
}

impl<'a, T: Element> Iterator for Intersection<'a, T> {
    type Item = (usize, T);

    fn next(&mut self) -> Option<(usize, T)> {
        loop {
            let (i, a) = *self.left.peek()?;
            let (j, b) = *self.right.peek()?;
            if i < j {
                self.left.next();
            } else if j < i {
                self.right.next();
            } else {
                self.left.next();
                self.right.next();
                return Some((i, (self.op)(a, b)));
            }
        }
    }
}

pub(crate) fn dense_entries<V: Vector + ?Sized>(v: &V) -> Entries<'_, V::Elem> {
    let n = v.size();
    Box::new((0..n).map(move |i| (i, v.get(i))))
}

pub(crate) fn dense_row<M: Matrix + ?Sized>(m: &M, i: usize) -> Entries<'_, M::Elem> {
    let n = m.columns();
    Box::new((0..n).map(move |j| (j, m.get(i, j))))
}

pub(crate) fn dense_column<M: Matrix + ?Sized>(m: &M, j: usize) -> Entries<'_, M::Elem> {
    let rows = m.rows();
    Box::new((0..rows).map(move |i| (i, m.get(i, j))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(pairs: &[(usize, f64)]) -> Entries<'static, f64> {
        Box::new(pairs.to_vec().into_iter())
    }

    #[test]
    fn test_union_subtraction_sides() {
        let got: Vec<_> = Union::new(
            stream(&[(0, 1.0), (2, 2.0)]),
            stream(&[(1, 5.0), (2, 1.0), (4, 3.0)]),
            |a, b| a - b,
        )
        .collect();
        assert_eq!(got, vec![(0, 1.0), (1, -5.0), (2, 1.0), (4, -3.0)]);
    }

    #[test]
    fn test_intersection() {
        let got: Vec<_> = Intersection::new(
            stream(&[(0, 1.0), (2, 2.0), (3, 4.0)]),
            stream(&[(2, 3.0), (3, 0.5), (7, 1.0)]),
            |a, b| a * b,
        )
        .collect();
        assert_eq!(got, vec![(2, 6.0), (3, 2.0)]);
    }
}
