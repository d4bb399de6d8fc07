//! Assignment kernels for vector and matrix destinations

use super::{TempMatrix, TempVector};
use crate::element::Element;
use crate::error::{MathError, MathResult};
use crate::expr::merge::Union;
use crate::order::StorageKind;
use crate::sparse::{CompressedMatrix, CompressedVector};
use crate::traits::{Matrix, MatrixMut, Vector, VectorMut};

fn add<T: Element>(a: T, b: T) -> T {
    a + b
}

fn sub<T: Element>(a: T, b: T) -> T {
    a - b
}

fn vector_aliased<D, R>(dst: &D, rhs: &R) -> bool
where
    D: VectorMut,
    R: Vector + ?Sized,
{
    let address = dst.address();
    rhs.can_alias(address) && rhs.is_aliased(address)
}

fn matrix_aliased<D, R>(dst: &D, rhs: &R) -> bool
where
    D: MatrixMut,
    R: Matrix + ?Sized,
{
    let address = dst.address();
    rhs.can_alias(address) && rhs.is_aliased(address)
}

/// Write the entries of `rhs` into a destination whose affected range is already reset
fn copy_vector<D, R>(dst: &mut D, rhs: &R)
where
    D: VectorMut,
    R: Vector<Elem = D::Elem> + ?Sized,
{
    match dst.kind() {
        StorageKind::Dense => {
            for (i, v) in rhs.entries() {
                dst.set(i, v);
            }
        }
        StorageKind::Sparse => {
            if rhs.kind().is_sparse() {
                dst.reserve(rhs.nonzeros());
            }
            for (i, v) in rhs.entries() {
                dst.append(i, v, true);
            }
        }
    }
}

/// `dst = rhs`
pub(crate) fn assign_vector<D, R>(dst: &mut D, rhs: &R) -> MathResult<()>
where
    D: VectorMut,
    R: Vector<Elem = D::Elem> + ?Sized,
{
    MathError::check_size(dst.size(), rhs.size())?;
    if vector_aliased(dst, rhs) {
        tracing::debug!(size = rhs.size(), "aliased vector assignment through a temporary");
        let tmp = TempVector::from_expr(rhs);
        return assign_vector_temporary(dst, &tmp);
    }
    if dst.kind().is_sparse() || rhs.kind().is_sparse() {
        dst.reset();
    }
    copy_vector(dst, rhs);
    Ok(())
}

/// Replace the contents of `dst` by an already evaluated temporary
pub(crate) fn assign_vector_temporary<D>(dst: &mut D, tmp: &TempVector<D::Elem>) -> MathResult<()>
where
    D: VectorMut,
{
    MathError::check_size(dst.size(), tmp.size())?;
    dst.reset();
    copy_vector(dst, tmp);
    Ok(())
}

fn combine_vector<D, R>(dst: &mut D, rhs: &R, op: fn(D::Elem, D::Elem) -> D::Elem)
where
    D: VectorMut,
    R: Vector<Elem = D::Elem> + ?Sized,
{
    match dst.kind() {
        StorageKind::Dense => {
            for (i, v) in rhs.entries() {
                let current = dst.get(i);
                dst.set(i, op(current, v));
            }
        }
        StorageKind::Sparse => {
            let mut merged = CompressedVector::new(dst.size());
            merged.reserve(dst.nonzeros() + rhs.nonzeros());
            for (i, v) in Union::new(dst.entries(), rhs.entries(), op) {
                merged.append(i, v, true);
            }
            dst.reset();
            copy_vector(dst, &merged);
        }
    }
}

fn compound_vector<D, R>(dst: &mut D, rhs: &R, op: fn(D::Elem, D::Elem) -> D::Elem) -> MathResult<()>
where
    D: VectorMut,
    R: Vector<Elem = D::Elem> + ?Sized,
{
    MathError::check_size(dst.size(), rhs.size())?;
    if vector_aliased(dst, rhs) {
        tracing::debug!(size = rhs.size(), "aliased compound vector assignment through a temporary");
        let tmp = TempVector::from_expr(rhs);
        combine_vector(dst, &tmp, op);
    } else {
        combine_vector(dst, rhs, op);
    }
    Ok(())
}

/// `dst += rhs`
pub(crate) fn add_assign_vector<D, R>(dst: &mut D, rhs: &R) -> MathResult<()>
where
    D: VectorMut,
    R: Vector<Elem = D::Elem> + ?Sized,
{
    compound_vector(dst, rhs, add)
}

/// `dst -= rhs`
pub(crate) fn sub_assign_vector<D, R>(dst: &mut D, rhs: &R) -> MathResult<()>
where
    D: VectorMut,
    R: Vector<Elem = D::Elem> + ?Sized,
{
    compound_vector(dst, rhs, sub)
}

/// Elementwise `dst *= rhs`
pub(crate) fn mul_assign_vector<D, R>(dst: &mut D, rhs: &R) -> MathResult<()>
where
    D: VectorMut,
    R: Vector<Elem = D::Elem> + ?Sized,
{
    MathError::check_size(dst.size(), rhs.size())?;
    let products: Vec<(usize, D::Elem)> = match dst.kind() {
        StorageKind::Dense => (0..dst.size()).map(|i| (i, dst.get(i) * rhs.get(i))).collect(),
        StorageKind::Sparse => dst.entries().map(|(i, a)| (i, a * rhs.get(i))).collect(),
    };
    if dst.kind().is_sparse() {
        dst.reset();
        for (i, v) in products {
            dst.append(i, v, true);
        }
    } else {
        for (i, v) in products {
            dst.set(i, v);
        }
    }
    Ok(())
}

/// `dst *= scalar`; a zero scalar drops every stored entry of a sparse destination
pub(crate) fn scale_vector<D: VectorMut>(dst: &mut D, scalar: D::Elem) {
    if scalar.is_default() && dst.kind().is_sparse() {
        dst.reset();
        return;
    }
    dst.for_each_stored(&mut |_, v| *v = *v * scalar);
}

/// `dst /= scalar`; a zero scalar is rejected before any element changes
pub(crate) fn div_assign_vector<D: VectorMut>(dst: &mut D, scalar: D::Elem) -> MathResult<()> {
    if scalar.is_default() {
        return Err(MathError::DivisionByZero);
    }
    let divisor = D::Elem::divisor(scalar);
    dst.for_each_stored(&mut |_, v| *v = v.apply_divisor(divisor));
    Ok(())
}

/// Write the entries of `rhs` into a destination whose affected block is already reset
fn copy_matrix<D, R>(dst: &mut D, rhs: &R)
where
    D: MatrixMut,
    R: Matrix<Elem = D::Elem> + ?Sized,
{
    let (rows, columns) = rhs.dims();
    match dst.kind() {
        StorageKind::Dense => {
            let order = rhs.order();
            for k in 0..order.lines(rows, columns) {
                for (x, v) in rhs.line_entries(order, k) {
                    let (i, j) = order.join(k, x);
                    dst.set(i, j, v);
                }
            }
        }
        StorageKind::Sparse => {
            let order = dst.order();
            if rhs.kind().is_sparse() {
                dst.reserve(rhs.nonzeros());
            }
            for k in 0..order.lines(rows, columns) {
                for (x, v) in rhs.line_entries(order, k) {
                    let (i, j) = order.join(k, x);
                    dst.append(i, j, v, true);
                }
            }
        }
    }
}

/// `dst = rhs`
pub(crate) fn assign_matrix<D, R>(dst: &mut D, rhs: &R) -> MathResult<()>
where
    D: MatrixMut,
    R: Matrix<Elem = D::Elem> + ?Sized,
{
    MathError::check_dims(dst.dims(), rhs.dims())?;
    if matrix_aliased(dst, rhs) {
        tracing::debug!(
            rows = rhs.rows(),
            columns = rhs.columns(),
            "aliased matrix assignment through a temporary"
        );
        let tmp = TempMatrix::from_expr(rhs);
        return assign_matrix_temporary(dst, &tmp);
    }
    if dst.kind().is_sparse() || rhs.kind().is_sparse() {
        dst.reset();
    }
    copy_matrix(dst, rhs);
    Ok(())
}

/// Replace the contents of `dst` by an already evaluated temporary
pub(crate) fn assign_matrix_temporary<D>(dst: &mut D, tmp: &TempMatrix<D::Elem>) -> MathResult<()>
where
    D: MatrixMut,
{
    MathError::check_dims(dst.dims(), tmp.dims())?;
    dst.reset();
    copy_matrix(dst, tmp);
    Ok(())
}

fn combine_matrix<D, R>(dst: &mut D, rhs: &R, op: fn(D::Elem, D::Elem) -> D::Elem)
where
    D: MatrixMut,
    R: Matrix<Elem = D::Elem> + ?Sized,
{
    let (rows, columns) = dst.dims();
    match dst.kind() {
        StorageKind::Dense => {
            let order = rhs.order();
            for k in 0..order.lines(rows, columns) {
                for (x, v) in rhs.line_entries(order, k) {
                    let (i, j) = order.join(k, x);
                    let current = dst.get(i, j);
                    dst.set(i, j, op(current, v));
                }
            }
        }
        StorageKind::Sparse => {
            let order = dst.order();
            let mut merged = CompressedMatrix::new(rows, columns, order);
            for k in 0..order.lines(rows, columns) {
                let line = Union::new(dst.line_entries(order, k), rhs.line_entries(order, k), op);
                for (x, v) in line {
                    let (i, j) = order.join(k, x);
                    merged.append(i, j, v, true);
                }
            }
            dst.reset();
            copy_matrix(dst, &merged);
        }
    }
}

fn compound_matrix<D, R>(dst: &mut D, rhs: &R, op: fn(D::Elem, D::Elem) -> D::Elem) -> MathResult<()>
where
    D: MatrixMut,
    R: Matrix<Elem = D::Elem> + ?Sized,
{
    MathError::check_dims(dst.dims(), rhs.dims())?;
    if matrix_aliased(dst, rhs) {
        tracing::debug!(
            rows = rhs.rows(),
            columns = rhs.columns(),
            "aliased compound matrix assignment through a temporary"
        );
        let tmp = TempMatrix::from_expr(rhs);
        combine_matrix(dst, &tmp, op);
    } else {
        combine_matrix(dst, rhs, op);
    }
    Ok(())
}

/// `dst += rhs`
pub(crate) fn add_assign_matrix<D, R>(dst: &mut D, rhs: &R) -> MathResult<()>
where
    D: MatrixMut,
    R: Matrix<Elem = D::Elem> + ?Sized,
{
    compound_matrix(dst, rhs, add)
}

/// `dst -= rhs`
pub(crate) fn sub_assign_matrix<D, R>(dst: &mut D, rhs: &R) -> MathResult<()>
where
    D: MatrixMut,
    R: Matrix<Elem = D::Elem> + ?Sized,
{
    compound_matrix(dst, rhs, sub)
}

pub(crate) fn scale_matrix<D: MatrixMut>(dst: &mut D, scalar: D::Elem) {
    if scalar.is_default() && dst.kind().is_sparse() {
        dst.reset();
        return;
    }
    dst.for_each_stored(&mut |_, _, v| *v = *v * scalar);
}

/// `dst /= scalar`; a zero scalar is rejected before any element changes
pub(crate) fn div_assign_matrix<D: MatrixMut>(dst: &mut D, scalar: D::Elem) -> MathResult<()> {
    if scalar.is_default() {
        return Err(MathError::DivisionByZero);
    }
    let divisor = D::Elem::divisor(scalar);
    dst.for_each_stored(&mut |_, _, v| *v = v.apply_divisor(divisor));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::dense::{DynamicMatrix, DynamicVector};
    use crate::order::StorageOrder;
    use crate::sparse::{CompressedMatrix, CompressedVector};
    use crate::traits::{Matrix, MatrixMut, Vector, VectorMut};
    use crate::views::subvector_mut;

    #[test]
    fn test_sparse_destination_from_dense_expression() {
        let a = DynamicVector::from_vec(vec![1.0, 0.0, -2.0, 0.0]);
        let mut s = CompressedVector::from_pairs(4, &[(1, 7.0)]).unwrap();
        s.assign(&a * 2.0).unwrap();
        assert_eq!(s.nonzeros(), 2);
        assert_eq!(s.get(1), 0.0);
        assert_eq!(s.get(2), -4.0);
    }

    #[test]
    fn test_dense_destination_from_sparse_expression() {
        let s = CompressedVector::from_pairs(3, &[(2, 5.0)]).unwrap();
        let mut d = DynamicVector::filled(3, 1.0);
        d.assign(&s).unwrap();
        assert_eq!(d.as_slice(), &[0.0, 0.0, 5.0]);
        d += &s;
        assert_eq!(d.as_slice(), &[0.0, 0.0, 10.0]);
    }

    #[test]
    fn test_sparse_matrix_compound_in_both_orders() {
        for order in [StorageOrder::RowMajor, StorageOrder::ColumnMajor] {
            let mut m =
                CompressedMatrix::from_triplets(3, 3, order, &[(0, 0, 1.0), (2, 1, 2.0)]).unwrap();
            let n = CompressedMatrix::from_triplets(
                3,
                3,
                order.flip(),
                &[(0, 0, -1.0), (1, 2, 3.0)],
            )
            .unwrap();
            m += &n;
            assert_eq!(m.nonzeros(), 2);
            assert_eq!(m.get(1, 2), 3.0);
            assert!(m.is_sorted());
            m -= &n;
            assert_eq!(m.get(0, 0), 1.0);
            assert_eq!(m.get(1, 2), 0.0);
        }
    }

    #[test]
    fn test_matrix_assignment_across_orders() {
        let a = DynamicMatrix::from_row_slice(2, 3, StorageOrder::RowMajor, &[1, 2, 3, 4, 5, 6])
            .unwrap();
        let mut c = DynamicMatrix::new(2, 3, StorageOrder::ColumnMajor);
        c.assign(&a).unwrap();
        assert_eq!(c.get(1, 2), 6);

        let mut s = CompressedMatrix::new(2, 3, StorageOrder::ColumnMajor);
        s.assign(&a - &c).unwrap();
        assert_eq!(s.nonzeros(), 0);

        assert!(s.assign(&DynamicMatrix::<i32>::new(3, 2, StorageOrder::RowMajor)).is_err());
    }

    #[test]
    fn test_sparse_matrix_division() {
        let mut m = CompressedMatrix::from_triplets(2, 2, StorageOrder::RowMajor, &[(1, 1, 8)])
            .unwrap();
        assert!(m.try_div_assign(0).is_err());
        m.try_div_assign(3).unwrap();
        assert_eq!(m.get(1, 1), 2);
        m.scale(5);
        assert_eq!(m.get(1, 1), 10);
    }

    #[test]
    fn test_scaling_sparse_by_zero_drops_entries() {
        let mut s = CompressedVector::from_pairs(5, &[(0, 1.0), (3, -2.0)]).unwrap();
        s.scale(0.0);
        assert_eq!(s.size(), 5);
        assert_eq!(s.nonzeros(), 0);

        let mut s = CompressedVector::from_pairs(5, &[(0, 1.0), (3, -2.0)]).unwrap();
        subvector_mut(&mut s, 2, 3).unwrap().scale(0.0);
        assert_eq!(s.nonzeros(), 1);
        assert_eq!(s.get(0), 1.0);

        for order in [StorageOrder::RowMajor, StorageOrder::ColumnMajor] {
            let mut m =
                CompressedMatrix::from_triplets(2, 3, order, &[(0, 1, 4), (1, 2, 5)]).unwrap();
            m.scale(0);
            assert_eq!(m.dims(), (2, 3));
            assert_eq!(m.nonzeros(), 0);
        }

        let mut d = DynamicVector::filled(3, 2.0);
        d.scale(0.0);
        assert_eq!(d.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_sparse_operand_scaled_by_zero() {
        let a = CompressedVector::from_pairs(4, &[(1, 3.0), (2, -1.0)]).unwrap();
        let mut s = CompressedVector::from_pairs(4, &[(0, 9.0)]).unwrap();
        s.assign(&a * 0.0).unwrap();
        assert_eq!(s.nonzeros(), 0);

        let m = CompressedMatrix::from_triplets(2, 2, StorageOrder::RowMajor, &[(0, 1, 2.0)])
            .unwrap();
        let mut n = CompressedMatrix::new(2, 2, StorageOrder::ColumnMajor);
        n.assign(&m * 0.0).unwrap();
        assert_eq!(n.nonzeros(), 0);
        assert_eq!((&m * 0.0).get(0, 1), 0.0);
    }
}
