//! Comparison tolerance configuration

/// Environment variable overriding the default relative tolerance
pub const ACCURACY_ENV: &str = "LAZALG_ACCURACY";

/// Default relative tolerance for floating-point comparisons
pub const DEFAULT_ACCURACY: f64 = 1e-8;

/// Tolerance used by [`crate::compare::is_equal_with`] and [`crate::Element::equal`]
///
/// Two floating-point values `a` and `b` are equal when
/// `|a - b| <= relative * max(1, |a|, |b|)`. Integral values compare exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Accuracy {
    /// Relative tolerance
    pub relative: f64,
}

impl Default for Accuracy {
    fn default() -> Self {
        let relative = std::env::var(ACCURACY_ENV)
            .ok()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v >= 0.0)
            .unwrap_or(DEFAULT_ACCURACY);
        Self { relative }
    }
}

impl Accuracy {
    /// Create the default accuracy
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact comparison
    pub fn exact() -> Self {
        Self { relative: 0.0 }
    }

    /// Set the relative tolerance
    pub fn with_relative(mut self, relative: f64) -> Self {
        self.relative = relative.abs();
        self
    }

    /// Tolerance scaled for two magnitudes
    pub fn tolerance(&self, a: f64, b: f64) -> f64 {
        self.relative * 1.0f64.max(a.abs()).max(b.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let acc = Accuracy::exact().with_relative(-1e-3);
        assert_eq!(acc.relative, 1e-3);
        assert_eq!(Accuracy::exact().relative, 0.0);
    }

    #[test]
    fn test_tolerance_scaling() {
        let acc = Accuracy::exact().with_relative(1e-6);
        assert_eq!(acc.tolerance(0.0, 0.5), 1e-6);
        assert!((acc.tolerance(1000.0, -2.0) - 1e-3).abs() < 1e-15);
    }
}
