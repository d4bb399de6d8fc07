//! Benchmark run parameters

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Parameters shared by every kernel run
///
/// `Default` reads `LAZALG_MARK_SEED` and `LAZALG_MARK_REPS` from the
/// environment so that runs can be pinned without a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Number of timed repetitions per kernel
    pub reps: usize,
    /// A kernel stops repeating once one repetition exceeds this many seconds
    pub maxtime: f64,
    /// Allowed deviation of the average from the minimum time, in percent
    pub deviation: f64,
    /// Seed of the operand generator
    pub seed: u64,
    /// Operand sizes to run
    pub sizes: Vec<usize>,
    /// Kernel invocations per repetition
    pub steps: usize,
    /// Non-zero elements per row of sparse operands
    pub fill: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        let seed = std::env::var("LAZALG_MARK_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(12345);
        let reps = std::env::var("LAZALG_MARK_REPS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3);
        Self {
            reps,
            maxtime: 10.0,
            deviation: 10.0,
            seed,
            sizes: vec![10, 100, 1000],
            steps: 100,
            fill: 4,
        }
    }
}

impl BenchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reps(mut self, reps: usize) -> Self {
        self.reps = reps.max(1);
        self
    }

    pub fn with_maxtime(mut self, seconds: f64) -> Self {
        self.maxtime = seconds;
        self
    }

    pub fn with_deviation(mut self, percent: f64) -> Self {
        self.deviation = percent;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps.max(1);
        self
    }

    pub fn with_fill(mut self, fill: usize) -> Self {
        self.fill = fill;
        self
    }

    /// Parse a JSON document; missing fields take their default value
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid benchmark configuration")
    }

    /// Read a JSON configuration file
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = BenchConfig::new()
            .with_reps(0)
            .with_steps(5)
            .with_seed(7)
            .with_sizes(vec![4]);
        assert_eq!(config.reps, 1);
        assert_eq!(config.steps, 5);
        assert_eq!(config.seed, 7);
        assert_eq!(config.sizes, vec![4]);
    }

    #[test]
    fn test_partial_json() {
        let config = BenchConfig::from_json(r#"{ "maxtime": 0.5, "sizes": [8, 16] }"#).unwrap();
        assert_eq!(config.maxtime, 0.5);
        assert_eq!(config.sizes, vec![8, 16]);
        assert_eq!(config.deviation, 10.0);
        assert!(BenchConfig::from_json("{ \"reps\": \"x\" }").is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = BenchConfig::new().with_fill(2);
        let back = BenchConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }
}
