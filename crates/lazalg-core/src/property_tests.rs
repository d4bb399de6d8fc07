//! Property-based tests for expression evaluation
//!
//! Every property builds random operands from a seeded [`Creator`] and checks
//! the lazy result against an eagerly computed reference, for dense and sparse
//! destinations in both storage orders.

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use proptest::prelude::*;

    fn order_strategy() -> impl Strategy<Value = StorageOrder> {
        prop_oneof![Just(StorageOrder::RowMajor), Just(StorageOrder::ColumnMajor)]
    }

    fn creator(seed: u64) -> Creator {
        Creator::new(seed).with_range(-9.0, 9.0)
    }

    #[test]
    fn test_proptest_smoke() {
        let v: DynamicVector<i64> = creator(0).vector(4);
        assert_eq!(v.size(), 4);
    }

    proptest! {
        #[test]
        fn prop_vector_sum_matches_eager(seed in any::<u64>(), n in 1usize..24, fill in 0usize..24) {
            let mut c = creator(seed);
            let nnz = fill.min(n);
            let a: CompressedVector<i64> = c.sparse_vector(n, nnz).unwrap();
            let b: DynamicVector<i64> = c.vector(n);

            let expected: Vec<i64> = (0..n).map(|i| a.get(i) + b.get(i) * 3).collect();

            let mut dense = DynamicVector::new(n);
            dense.assign(&a + &b * 3).unwrap();
            prop_assert_eq!(dense.as_slice(), expected.as_slice());

            let mut sparse = CompressedVector::new(n);
            sparse.assign(&a + &b * 3).unwrap();
            prop_assert!(is_equal(&sparse, &dense));
            prop_assert!(sparse.iter().all(|(_, v)| *v != 0));
        }

        #[test]
        fn prop_sparse_difference_matches_dense(
            seed in any::<u64>(),
            rows in 1usize..8,
            columns in 1usize..8,
            lo in order_strategy(),
            ro in order_strategy(),
            to in order_strategy(),
        ) {
            let mut c = creator(seed);
            let cap = rows * columns;
            let l1: CompressedMatrix<i64> = c.sparse_matrix(rows, columns, cap / 2, lo).unwrap();
            let l2: CompressedMatrix<i64> = c.sparse_matrix(rows, columns, cap / 3, ro).unwrap();
            let d1 = DynamicMatrix::from_expr(&l1, lo);
            let d2 = DynamicMatrix::from_expr(&l2, ro);

            let mut lazy = CompressedMatrix::new(rows, columns, to);
            lazy.assign(&l1 - &l2).unwrap();
            let mut eager = DynamicMatrix::new(rows, columns, to);
            eager.assign(&d1 - &d2).unwrap();

            prop_assert!(lazy.is_sorted());
            prop_assert!(is_equal(&lazy, &eager));
            for i in 0..rows {
                for j in 0..columns {
                    prop_assert_eq!(eager.get(i, j), l1.get(i, j) - l2.get(i, j));
                }
            }
        }

        #[test]
        fn prop_double_transpose_is_identity(seed in any::<u64>(), rows in 1usize..7, columns in 1usize..7, order in order_strategy()) {
            let mut c = creator(seed);
            let a: DynamicMatrix<i64> = c.matrix(rows, columns, order);
            let s: CompressedMatrix<i64> = c.sparse_matrix(rows, columns, rows, order).unwrap();
            prop_assert!(is_equal(trans(trans(&a)), &a));
            prop_assert!(is_equal(trans(trans(&s)), &s));
            prop_assert!(is_equal(trans(trans(&a + &s)), &a + &s));
        }

        #[test]
        fn prop_abs_is_idempotent(seed in any::<u64>(), n in 1usize..16) {
            let mut c = creator(seed);
            let v: DynamicVector<i64> = c.vector(n);
            let m: DynamicMatrix<i64> = c.matrix(n, 2, StorageOrder::RowMajor);
            prop_assert!(is_equal(abs(abs(&v)), abs(&v)));
            prop_assert!(is_equal(abs(abs(&m)), abs(&m)));
            prop_assert!(abs(&v).entries().all(|(_, x)| x >= 0));
        }

        #[test]
        fn prop_eval_matches_lazy(seed in any::<u64>(), n in 1usize..10, order in order_strategy()) {
            let mut c = creator(seed);
            let a: DynamicMatrix<i64> = c.matrix(n, n, order);
            let b: CompressedMatrix<i64> = c.sparse_matrix(n, n, n, order.flip()).unwrap();
            let evaluated = eval(&a - &b);
            prop_assert!(is_equal(&evaluated, &a - &b));
            prop_assert_eq!(evaluated.kind(), StorageKind::Dense);
            prop_assert_eq!(eval(&b).kind(), StorageKind::Sparse);
        }

        #[test]
        fn prop_subvector_assignment_is_local(seed in any::<u64>(), n in 1usize..20, offset in 0usize..20, len in 0usize..20) {
            let offset = offset % n;
            let len = 1 + len % (n - offset);
            let mut c = creator(seed);
            let original: DynamicVector<i64> = c.vector(n);
            let rhs: DynamicVector<i64> = c.vector(len);

            let mut dense = original.clone();
            subvector_mut(&mut dense, offset, len).unwrap().assign(&rhs).unwrap();
            let mut sparse = CompressedVector::from_expr(&original);
            subvector_mut(&mut sparse, offset, len).unwrap().assign(&rhs).unwrap();

            for i in 0..n {
                let expected = if (offset..offset + len).contains(&i) {
                    rhs.get(i - offset)
                } else {
                    original.get(i)
                };
                prop_assert_eq!(dense.get(i), expected);
                prop_assert_eq!(sparse.get(i), expected);
            }
        }

        #[test]
        fn prop_self_referential_update(seed in any::<u64>(), n in 1usize..8, order in order_strategy()) {
            let mut c = creator(seed);
            let b: DynamicMatrix<i64> = c.matrix(n, n, order);
            let mut dense: DynamicMatrix<i64> = c.matrix(n, n, order.flip());
            let mut sparse = CompressedMatrix::from_expr(&dense, order);
            let expected = DynamicMatrix::from_expr(&(trans(&dense) - &b), order);

            dense.assign_with(|d, out| out.evaluate(trans(d) - &b)).unwrap();
            sparse.assign_with(|s, out| out.evaluate(trans(s) - &b)).unwrap();

            prop_assert!(is_equal(&dense, &expected));
            prop_assert!(is_equal(&sparse, &expected));
            prop_assert!(sparse.is_sorted());
        }

        #[test]
        fn prop_sparse_order_survives_edits(
            ops in prop::collection::vec((0usize..6, 0usize..6, -5i64..5, any::<bool>()), 0..40),
            order in order_strategy(),
        ) {
            let mut m = CompressedMatrix::new(6, 6, order);
            let mut reference = DynamicMatrix::new(6, 6, order);
            for (i, j, v, erase) in ops {
                if erase {
                    m.erase(i, j);
                    reference.set(i, j, 0);
                } else {
                    *m.get_or_insert(i, j) = v;
                    reference.set(i, j, v);
                }
            }
            prop_assert!(m.is_sorted());
            prop_assert!(is_equal(&m, &reference));
        }
    }
}
