//! Benchmark runner
//!
//! Usage: `lazalg-mark [config.json]`

use std::path::Path;

use anyhow::{Context, Result};
use lazalg_mark::tracing_support::{init_tracing, TracingConfig};
use lazalg_mark::{mflops, BenchConfig, Flavour, Kernel};

fn main() -> Result<()> {
    init_tracing(TracingConfig::default())?;

    let config = match std::env::args().nth(1) {
        Some(path) => BenchConfig::from_file(Path::new(&path))?,
        None => BenchConfig::default(),
    };
    tracing::info!(?config, "starting benchmark run");

    for kernel in Kernel::ALL {
        println!("{kernel}:");
        for &n in &config.sizes {
            let classic = kernel
                .run(Flavour::Classic, n, &config)
                .with_context(|| format!("{kernel} classic kernel failed for N={n}"))?;
            let lazy = kernel
                .run(Flavour::Lazalg, n, &config)
                .with_context(|| format!("{kernel} lazalg kernel failed for N={n}"))?;
            let flops = kernel.flops(n, config.fill) * config.steps as f64;
            println!(
                "  N={:<8} classic {:>12.2} MFlop/s   lazalg {:>12.2} MFlop/s",
                n,
                mflops(flops, classic),
                mflops(flops, lazy)
            );
        }
    }
    Ok(())
}
