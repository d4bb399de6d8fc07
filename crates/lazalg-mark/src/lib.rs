//! # lazalg-mark
//!
//! Micro-benchmarks comparing lazalg expression assignment against classic
//! eagerly evaluated containers.
//!
//! - [`BenchConfig`]: repetitions, time limits, seed and operand sizes
//! - [`WcTimer`]: wall-clock lap timer
//! - [`classic`]: the eager baseline containers
//! - [`kernels`]: the measured operations in both flavours
//!
//! ```
//! use lazalg_mark::{BenchConfig, Flavour, Kernel};
//!
//! let config = BenchConfig::new().with_reps(1).with_steps(1);
//! let seconds = Kernel::DVecDVecAdd.run(Flavour::Lazalg, 16, &config).unwrap();
//! assert!(seconds >= 0.0);
//! ```

pub mod classic;
pub mod config;
pub mod kernels;
pub mod timer;
pub mod tracing_support;

pub use config::BenchConfig;
pub use kernels::{mflops, Flavour, Kernel};
pub use timer::WcTimer;
