//! Kernels on the eager baseline containers

use anyhow::Result;
use scirs2_core::random::{SeedableRng, StdRng};

use super::{measure, Flavour, Kernel};
use crate::classic::{outer, ClassicMatrix, ClassicSparse, ClassicVector};
use crate::config::BenchConfig;

pub fn dvectdvecmult(n: usize, steps: usize, config: &BenchConfig) -> Result<f64> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut a = ClassicVector::<f64>::new(n);
    let mut b = ClassicVector::<f64>::new(n);
    a.init(&mut rng);
    b.init(&mut rng);

    let mut result = ClassicMatrix::new(n, n);
    measure(
        Kernel::DVecTDVecMult,
        Flavour::Classic,
        config,
        steps,
        &mut result,
        |m| {
            *m = outer(&a, &b);
            Ok(())
        },
        |m| m.rows() == n,
    )
}

pub fn dmatscalarmult(n: usize, steps: usize, config: &BenchConfig) -> Result<f64> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut a = ClassicMatrix::<f64>::new(n, n);
    a.init(&mut rng);

    let mut result = ClassicMatrix::new(n, n);
    measure(
        Kernel::DMatScalarMult,
        Flavour::Classic,
        config,
        steps,
        &mut result,
        |m| {
            *m = &a * 2.2;
            Ok(())
        },
        |m| m.rows() == n,
    )
}

pub fn dvecdvecadd(n: usize, steps: usize, config: &BenchConfig) -> Result<f64> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut a = ClassicVector::<f64>::new(n);
    let mut b = ClassicVector::<f64>::new(n);
    a.init(&mut rng);
    b.init(&mut rng);

    let mut result = ClassicVector::new(n);
    measure(
        Kernel::DVecDVecAdd,
        Flavour::Classic,
        config,
        steps,
        &mut result,
        |c| {
            *c = &a + &b;
            Ok(())
        },
        |c| c.len() == n,
    )
}

pub fn smatsmatsub(n: usize, fill: usize, steps: usize, config: &BenchConfig) -> Result<f64> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut a = ClassicSparse::<f64>::new(n, n);
    let mut b = ClassicSparse::<f64>::new(n, n);
    a.init(fill, &mut rng);
    b.init(fill, &mut rng);

    let mut result = ClassicSparse::new(n, n);
    measure(
        Kernel::SMatSMatSub,
        Flavour::Classic,
        config,
        steps,
        &mut result,
        |c| {
            *c = &a - &b;
            Ok(())
        },
        |c| c.rows() == n,
    )
}
