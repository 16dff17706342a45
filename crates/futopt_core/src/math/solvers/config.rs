//! Solver configuration types.

use num_traits::Float;

/// Default convergence tolerance: 2% of the target value.
pub const DEFAULT_TOLERANCE: f64 = 0.02;

/// Configuration for root-finding algorithms.
///
/// `tolerance` is interpreted by the caller: the Newton-Raphson solver treats
/// it as an absolute bound on `|f(x)|`, the implied-volatility solver scales
/// it by the target premium first.
///
/// `max_iterations` is `None` by default, meaning the iteration runs until the
/// convergence test passes. Inputs with a vanishing derivative can then loop
/// forever; set a cap with [`SolverConfig::bounded`] when that matters.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use futopt_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.tolerance, 0.02);
/// assert!(config.max_iterations.is_none());
///
/// let capped = SolverConfig::bounded(1e-4, 200);
/// assert_eq!(capped.max_iterations, Some(200));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance.
    pub tolerance: T,

    /// Maximum number of iterations, unbounded when `None`.
    ///
    /// Exceeding the cap yields `SolverError::MaxIterationsExceeded`.
    pub max_iterations: Option<usize>,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 0.02
    /// - `max_iterations`: None (unbounded)
    fn default() -> Self {
        Self {
            tolerance: T::from(DEFAULT_TOLERANCE).unwrap(),
            max_iterations: None,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create an unbounded configuration with the given tolerance.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0`.
    pub fn new(tolerance: T) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        Self {
            tolerance,
            max_iterations: None,
        }
    }

    /// Create a configuration that gives up after `max_iterations` steps.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use futopt_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::bounded(1e-6_f64, 50);
    /// assert!(config.is_bounded());
    /// ```
    pub fn bounded(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations: Some(max_iterations),
        }
    }

    /// Returns a copy with the iteration cap replaced.
    ///
    /// # Panics
    ///
    /// Panics if `max_iterations == Some(0)`.
    pub fn with_max_iterations(self, max_iterations: Option<usize>) -> Self {
        assert!(max_iterations != Some(0), "max_iterations must be > 0");
        Self {
            max_iterations,
            ..self
        }
    }

    /// Whether an iteration cap is set.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.max_iterations.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: SolverConfig<f64> = SolverConfig::default();
        assert!((config.tolerance - 0.02).abs() < 1e-15);
        assert_eq!(config.max_iterations, None);
        assert!(!config.is_bounded());
    }

    #[test]
    fn test_new_config() {
        let config: SolverConfig<f64> = SolverConfig::new(0.001);
        assert!((config.tolerance - 0.001).abs() < 1e-17);
        assert!(!config.is_bounded());
    }

    #[test]
    fn test_bounded_config() {
        let config: SolverConfig<f64> = SolverConfig::bounded(1e-8, 150);
        assert_eq!(config.max_iterations, Some(150));
        assert!(config.is_bounded());
    }

    #[test]
    #[should_panic(expected = "tolerance must be positive")]
    fn test_new_config_zero_tolerance_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(0.0);
    }

    #[test]
    #[should_panic(expected = "tolerance must be positive")]
    fn test_bounded_config_negative_tolerance_panics() {
        let _: SolverConfig<f64> = SolverConfig::bounded(-1e-10, 100);
    }

    #[test]
    #[should_panic(expected = "max_iterations must be > 0")]
    fn test_bounded_config_zero_iterations_panics() {
        let _: SolverConfig<f64> = SolverConfig::bounded(1e-10, 0);
    }

    #[test]
    fn test_with_max_iterations() {
        let config: SolverConfig<f64> = SolverConfig::default().with_max_iterations(Some(10));
        assert_eq!(config.max_iterations, Some(10));
        assert_eq!(config.tolerance, 0.02);

        let unbounded = config.with_max_iterations(None);
        assert!(!unbounded.is_bounded());
    }

    #[test]
    fn test_config_copy() {
        let config1: SolverConfig<f64> = SolverConfig::default();
        let config2 = config1;
        assert_eq!(config1, config2);
    }

    #[test]
    fn test_config_with_f32() {
        let config: SolverConfig<f32> = SolverConfig::default();
        assert!(config.tolerance > 0.0);
        assert_eq!(config.max_iterations, None);
    }
}
