//! Integration tests for lazalg-core
//!
//! End-to-end checks of expression evaluation across containers, views and
//! storage orders.

use lazalg_core::prelude::*;

#[test]
fn test_outer_product_of_six_element_vectors() {
    let mut creator = Creator::new(11).with_range(-4.0, 4.0);
    let a: Vec6d = creator.static_vector();
    let b: DynamicVector<f64> = creator.vector(6);

    let mut outer = DynamicMatrix::new(6, 6, StorageOrder::RowMajor);
    outer.assign(&a * trans(&b)).unwrap();
    assert_eq!(outer.rows(), 6);
    assert_eq!(outer.columns(), 6);
    for i in 0..6 {
        for j in 0..6 {
            assert_eq!(outer.get(i, j), a[i] * b[j]);
        }
    }

    // Same result through a column-major destination and a static matrix
    let mut column_major = DynamicMatrix::new(6, 6, StorageOrder::ColumnMajor);
    column_major.assign(&a * trans(&b)).unwrap();
    assert!(is_equal(&column_major, &outer));
    let fixed = Mat6x6d::from_expr(&(&a * trans(&b)));
    assert!(is_equal(&fixed, &outer));
}

#[test]
fn test_sparse_difference_dense_and_sparse_paths_agree() -> anyhow::Result<()> {
    let mut creator = Creator::new(5);
    let l1: CompressedMatrix<i32> = creator.sparse_matrix(4, 4, 7, StorageOrder::RowMajor)?;
    let l2: CompressedMatrix<i32> = creator.sparse_matrix(4, 4, 5, StorageOrder::RowMajor)?;

    let mut dense = DynamicMatrix::new(4, 4, StorageOrder::RowMajor);
    dense.assign(&l1 - &l2)?;
    let mut sparse = CompressedMatrix::new(4, 4, StorageOrder::ColumnMajor);
    sparse.assign(&l1 - &l2)?;

    let d1 = DynamicMatrix::from_expr(&eval(&l1), StorageOrder::RowMajor);
    let d2 = DynamicMatrix::from_expr(&eval(&l2), StorageOrder::ColumnMajor);
    let mut reference = DynamicMatrix::new(4, 4, StorageOrder::RowMajor);
    reference.assign(&d1 - &d2)?;

    assert!(is_equal(&dense, &sparse));
    assert!(is_equal(&dense, &reference));
    assert!(sparse.is_sorted());
    assert!(sparse.nonzeros() <= 12);
    Ok(())
}

#[test]
fn test_subvector_assignment_changes_only_its_window() {
    let mut v = DynamicVector::from_vec(vec![1, 2, 3, 4, 5, 6, 7]);
    let other = DynamicVector::from_vec(vec![-1, -2, -3]);
    subvector_mut(&mut v, 2, 3).unwrap().assign(&other).unwrap();
    assert_eq!(v.as_slice(), &[1, 2, -1, -2, -3, 6, 7]);

    let mut s = CompressedVector::from_pairs(7, &[(0, 9), (3, 9), (6, 9)]).unwrap();
    subvector_mut(&mut s, 2, 3).unwrap().assign(&other).unwrap();
    assert_eq!(s.get(0), 9);
    assert_eq!(s.get(3), -2);
    assert_eq!(s.get(6), 9);
    assert_eq!(s.nonzeros(), 5);

    let err = subvector_mut(&mut v, 5, 3).unwrap_err();
    assert_eq!(
        err,
        MathError::InvalidSubvector {
            offset: 5,
            n: 3,
            size: 7
        }
    );
}

#[test]
fn test_self_referential_update_matches_two_step_evaluation() {
    let b = DynamicMatrix::from_row_slice(3, 3, StorageOrder::RowMajor, &[1, 0, 2, 0, 3, 0, 4, 0, 5])
        .unwrap();
    let mut c = DynamicMatrix::from_fn(3, 3, StorageOrder::ColumnMajor, |i, j| (i * 3 + j) as i32);

    let mut expected = DynamicMatrix::new(3, 3, StorageOrder::RowMajor);
    expected.assign(trans(&c) * 2 - &b).unwrap();

    c.assign_with(|c, out| out.evaluate(trans(c) * 2 - &b)).unwrap();
    assert!(is_equal(&c, &expected));

    let mut v = CompressedVector::from_pairs(5, &[(1, 2.0), (4, -1.0)]).unwrap();
    let w = DynamicVector::from_vec(vec![0.0, -2.0, 0.0, 0.0, 3.0]);
    v.assign_with(|v, out| {
        let shifted = subvector(v, 1, 4)?;
        out.evaluate(v + &w + shifted.get(0) * &w)
    })
    .unwrap();
    assert_eq!(v.get(1), -4.0);
    assert_eq!(v.get(4), 8.0);
    assert_eq!(v.nonzeros(), 2);
}

#[test]
fn test_views_of_expressions_compute_only_selection() {
    let a = DynamicMatrix::from_fn(4, 5, StorageOrder::RowMajor, |i, j| (i + j) as f64);
    let b = CompressedMatrix::from_triplets(4, 5, StorageOrder::ColumnMajor, &[(2, 3, 10.0)]).unwrap();

    let r = row(&a + &b, 2).unwrap();
    assert_eq!(r.size(), 5);
    assert_eq!(r.get(3), 15.0);

    let c = column(trans(&a), 1).unwrap();
    assert_eq!(c.size(), 5);
    assert_eq!(c.get(4), 5.0);

    let block = submatrix(&a - &b, 1, 2, 3, 2).unwrap();
    assert_eq!(block.dims(), (3, 2));
    assert_eq!(block.get(1, 1), -5.0);

    let mut m = DynamicMatrix::<f64>::new(4, 5, StorageOrder::ColumnMajor);
    row_mut(&mut m, 0).unwrap().assign(row(&a + &b, 3).unwrap()).unwrap();
    column_mut(&mut m, 4)
        .unwrap()
        .add_assign_from(4.0 * column(&a, 4).unwrap())
        .unwrap();
    assert_eq!(m.get(0, 0), 3.0);
    assert_eq!(m.get(0, 4), 7.0 + 16.0);
    assert_eq!(m.get(3, 4), 28.0);
}

#[test]
fn test_scaling_and_division_laws() {
    let a = DynamicVector::from_vec(vec![1.5, -3.0, 4.5]);
    let b = CompressedVector::from_pairs(3, &[(0, 0.5)]).unwrap();

    assert!(is_equal((&a + &b) * 2.0, 2.0 * (&a + &b)));
    assert!(is_equal((&a - &b) / 4.0, (&a - &b) * 0.25));

    let ints = DynamicVector::from_vec(vec![7, -7, 9]);
    let mut halved = DynamicVector::new(3);
    halved.assign(&ints / 2).unwrap();
    assert_eq!(halved.as_slice(), &[3, -3, 4]);

    let mut c = a.clone();
    assert_eq!(c.try_div_assign(0.0), Err(MathError::DivisionByZero));
    assert_eq!(c, a);
}

#[test]
fn test_mismatched_assignment_leaves_destination_untouched() {
    let mut m = DynamicMatrix::filled(2, 3, StorageOrder::RowMajor, 1);
    let n = DynamicMatrix::filled(3, 2, StorageOrder::RowMajor, 5);
    let result = m.assign(&n);
    assert_eq!(
        result,
        Err(MathError::DimensionMismatch {
            expected: (2, 3),
            found: (3, 2)
        })
    );
    assert!(m.as_slice().iter().all(|&x| x == 1));

    let mut s = CompressedMatrix::from_triplets(2, 3, StorageOrder::RowMajor, &[(1, 1, 4)]).unwrap();
    assert!(s.add_assign_from(&n).is_err());
    assert_eq!(s.nonzeros(), 1);
}

#[test]
fn test_display_prints_rows() {
    let m = DynamicMatrix::from_row_slice(2, 2, StorageOrder::ColumnMajor, &[1, 2, 3, 4]).unwrap();
    let text = m.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains('1') && lines[0].contains('2'));
    assert!(lines[1].contains('3') && lines[1].contains('4'));
}
