//! Kernels on lazalg containers and expression assignment

use anyhow::Result;
use lazalg_core::prelude::*;

use super::{measure, Flavour, Kernel};
use crate::config::BenchConfig;

pub fn dvectdvecmult(n: usize, steps: usize, config: &BenchConfig) -> Result<f64> {
    let mut creator = Creator::new(config.seed);
    let a: DynamicVector<f64> = creator.vector(n);
    let b: DynamicVector<f64> = creator.vector(n);

    let mut result = DynamicMatrix::new(n, n, StorageOrder::RowMajor);
    measure(
        Kernel::DVecTDVecMult,
        Flavour::Lazalg,
        config,
        steps,
        &mut result,
        |m| Ok(m.assign(&a * trans(&b))?),
        |m| m.rows() == n,
    )
}

pub fn dmatscalarmult(n: usize, steps: usize, config: &BenchConfig) -> Result<f64> {
    let mut creator = Creator::new(config.seed);
    let a: DynamicMatrix<f64> = creator.matrix(n, n, StorageOrder::RowMajor);

    let mut result = DynamicMatrix::new(n, n, StorageOrder::RowMajor);
    measure(
        Kernel::DMatScalarMult,
        Flavour::Lazalg,
        config,
        steps,
        &mut result,
        |m| Ok(m.assign(&a * 2.2)?),
        |m| m.rows() == n,
    )
}

pub fn dvecdvecadd(n: usize, steps: usize, config: &BenchConfig) -> Result<f64> {
    let mut creator = Creator::new(config.seed);
    let a: DynamicVector<f64> = creator.vector(n);
    let b: DynamicVector<f64> = creator.vector(n);

    let mut result = DynamicVector::new(n);
    measure(
        Kernel::DVecDVecAdd,
        Flavour::Lazalg,
        config,
        steps,
        &mut result,
        |c| Ok(c.assign(&a + &b)?),
        |c| c.size() == n,
    )
}

pub fn smatsmatsub(n: usize, fill: usize, steps: usize, config: &BenchConfig) -> Result<f64> {
    let mut creator = Creator::new(config.seed);
    let nonzeros = n * fill.min(n);
    let a: CompressedMatrix<f64> = creator.sparse_matrix(n, n, nonzeros, StorageOrder::RowMajor)?;
    let b: CompressedMatrix<f64> = creator.sparse_matrix(n, n, nonzeros, StorageOrder::RowMajor)?;

    let mut result = CompressedMatrix::with_capacity(n, n, 2 * nonzeros, StorageOrder::RowMajor);
    measure(
        Kernel::SMatSMatSub,
        Flavour::Lazalg,
        config,
        steps,
        &mut result,
        |c| Ok(c.assign(&a - &b)?),
        |c| c.rows() == n,
    )
}
