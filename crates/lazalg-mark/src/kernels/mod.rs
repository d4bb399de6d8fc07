//! Benchmark kernels
//!
//! Every kernel exists in a classic flavour, built on the eager containers
//! of [`crate::classic`], and a lazalg flavour, built on expression
//! assignment. Both follow the same protocol:
//!
//! 1. Create seeded random operands and run the kernel once.
//! 2. Repeat `reps` times: time `steps` kernel invocations, check the result
//!    shape, and stop early once a repetition takes longer than `maxtime`.
//! 3. Warn if the average exceeds the minimum by more than `deviation`
//!    percent, and report the minimum time in seconds.

pub mod classic;
pub mod lazy;

use std::fmt;

use anyhow::Result;

use crate::config::BenchConfig;
use crate::timer::WcTimer;

/// Implementation family of a kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavour {
    Classic,
    Lazalg,
}

impl fmt::Display for Flavour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flavour::Classic => write!(f, "classic"),
            Flavour::Lazalg => write!(f, "lazalg"),
        }
    }
}

/// The measured operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kernel {
    /// Outer product of two dense vectors, `A = a * trans(b)`
    DVecTDVecMult,
    /// Dense matrix scaling, `B = A * s`
    DMatScalarMult,
    /// Dense vector addition, `c = a + b`
    DVecDVecAdd,
    /// Sparse matrix subtraction, `C = A - B`
    SMatSMatSub,
}

impl Kernel {
    pub const ALL: [Kernel; 4] = [
        Kernel::DVecTDVecMult,
        Kernel::DMatScalarMult,
        Kernel::DVecDVecAdd,
        Kernel::SMatSMatSub,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Kernel::DVecTDVecMult => "dvectdvecmult",
            Kernel::DMatScalarMult => "dmatscalarmult",
            Kernel::DVecDVecAdd => "dvecdvecadd",
            Kernel::SMatSMatSub => "smatsmatsub",
        }
    }

    /// Floating-point operations of a single invocation
    pub fn flops(self, n: usize, fill: usize) -> f64 {
        let n = n as f64;
        match self {
            Kernel::DVecTDVecMult | Kernel::DMatScalarMult => n * n,
            Kernel::DVecDVecAdd => n,
            Kernel::SMatSMatSub => n * (fill as f64).min(n) * 2.0,
        }
    }

    /// Minimum time in seconds for `config.steps` invocations at size `n`
    pub fn run(self, flavour: Flavour, n: usize, config: &BenchConfig) -> Result<f64> {
        let steps = config.steps;
        match (flavour, self) {
            (Flavour::Classic, Kernel::DVecTDVecMult) => classic::dvectdvecmult(n, steps, config),
            (Flavour::Classic, Kernel::DMatScalarMult) => classic::dmatscalarmult(n, steps, config),
            (Flavour::Classic, Kernel::DVecDVecAdd) => classic::dvecdvecadd(n, steps, config),
            (Flavour::Classic, Kernel::SMatSMatSub) => {
                classic::smatsmatsub(n, config.fill, steps, config)
            }
            (Flavour::Lazalg, Kernel::DVecTDVecMult) => lazy::dvectdvecmult(n, steps, config),
            (Flavour::Lazalg, Kernel::DMatScalarMult) => lazy::dmatscalarmult(n, steps, config),
            (Flavour::Lazalg, Kernel::DVecDVecAdd) => lazy::dvecdvecadd(n, steps, config),
            (Flavour::Lazalg, Kernel::SMatSMatSub) => lazy::smatsmatsub(n, config.fill, steps, config),
        }
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Million floating-point operations per second
pub fn mflops(flops: f64, seconds: f64) -> f64 {
    if seconds > 0.0 {
        flops / seconds / 1e6
    } else {
        f64::INFINITY
    }
}

/// Run the repetition protocol over `state`
pub(crate) fn measure<S>(
    kernel: Kernel,
    flavour: Flavour,
    config: &BenchConfig,
    steps: usize,
    state: &mut S,
    mut body: impl FnMut(&mut S) -> Result<()>,
    check: impl Fn(&S) -> bool,
) -> Result<f64> {
    body(state)?;

    let mut timer = WcTimer::new();
    for _ in 0..config.reps {
        timer.start();
        for _ in 0..steps {
            body(state)?;
        }
        timer.end();

        if !check(state) {
            tracing::error!(kernel = %kernel, flavour = %flavour, "result check failed");
        }
        if timer.last() > config.maxtime {
            break;
        }
    }

    let min = timer.min();
    let avg = timer.average();
    if min * (1.0 + config.deviation * 0.01) < avg {
        tracing::warn!(kernel = %kernel, flavour = %flavour, min, avg, "Time deviation too large");
    }
    tracing::debug!(kernel = %kernel, flavour = %flavour, laps = timer.laps(), min, "kernel measured");
    Ok(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flops() {
        assert_eq!(Kernel::DVecTDVecMult.flops(10, 0), 100.0);
        assert_eq!(Kernel::DVecDVecAdd.flops(10, 0), 10.0);
        assert_eq!(Kernel::SMatSMatSub.flops(10, 20), 200.0);
        assert!(mflops(1.0, 0.0).is_infinite());
    }

    #[test]
    fn test_measure_stops_after_maxtime() {
        let config = BenchConfig::new().with_reps(50).with_maxtime(-1.0);
        let mut calls = 0usize;
        let time = measure(
            Kernel::DVecDVecAdd,
            Flavour::Lazalg,
            &config,
            2,
            &mut calls,
            |calls| {
                *calls += 1;
                Ok(())
            },
            |_| true,
        )
        .unwrap();
        assert!(time >= 0.0);
        // warm-up plus one repetition
        assert_eq!(calls, 3);
    }
}
