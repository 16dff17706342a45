//! Newton-Raphson root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Outcome of a successful root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult<T: Float> {
    /// Final estimate, one Newton step past the last residual evaluation.
    pub root: T,
    /// Number of Newton steps taken (at least one).
    pub iterations: usize,
    /// Residual `f(x)` at the estimate before the final step.
    pub residual: T,
}

/// Newton-Raphson root finder.
///
/// Each iteration evaluates `f(x)` and `f'(x)`, steps to
/// `x - f(x) / f'(x)` and only then tests the residual it evaluated. The
/// estimate returned on convergence therefore already includes the step taken
/// from the last accepted residual.
///
/// A residual that is NaN ends the iteration too, so degenerate inputs come
/// back as a non-finite root instead of spinning. With an iteration cap set
/// (see [`SolverConfig::bounded`]) non-finite iterates are reported as
/// `SolverError::NumericalInstability` instead.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use futopt_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// // Solve x² - 2 = 0 (find √2)
/// let solver = NewtonRaphsonSolver::new(SolverConfig::bounded(1e-12, 100));
///
/// let f = |x: f64| x * x - 2.0;
/// let f_prime = |x: f64| 2.0 * x;
///
/// let root = solver.find_root(f, f_prime, 1.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` using explicit derivative `f_prime`.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Estimate after the step whose residual satisfied `|f| <= tolerance`
    /// * `Err(SolverError::MaxIterationsExceeded)` - Cap reached (bounded configs only)
    /// * `Err(SolverError::NumericalInstability)` - Non-finite iterate (bounded configs only)
    ///
    /// # Example
    ///
    /// ```
    /// use futopt_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-10));
    ///
    /// // Solve x³ - x - 2 = 0
    /// let f = |x: f64| x * x * x - x - 2.0;
    /// let f_prime = |x: f64| 3.0 * x * x - 1.0;
    ///
    /// let root = solver.find_root(f, f_prime, 1.5).unwrap();
    /// assert!(f(root).abs() < 1e-10);
    /// ```
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        self.find_root_detailed(f, f_prime, x0).map(|result| result.root)
    }

    /// Same as [`find_root`](Self::find_root) but also reports the
    /// iteration count and the last residual.
    pub fn find_root_detailed<F, G>(
        &self,
        f: F,
        f_prime: G,
        x0: T,
    ) -> Result<RootResult<T>, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        self.iterate(
            |x| {
                let f_val = f(x);
                (f_val, -(f_val / f_prime(x)))
            },
            x0,
        )
    }

    /// Runs the iteration with a caller-supplied step.
    ///
    /// `step(x)` returns `(residual, delta)`; the next estimate is
    /// `x + delta` and the residual is tested against the tolerance after the
    /// estimate has moved. Use this when the Newton quotient has to be formed
    /// in a specific order, e.g. when the derivative is carried in scaled
    /// units and the rescaling must happen after the division.
    ///
    /// # Example
    ///
    /// ```
    /// use futopt_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::bounded(1e-10, 50));
    ///
    /// // Derivative reported per 100 units of x
    /// let f = |x: f64| 3.0 * x - 6.0;
    /// let scaled_slope = |_x: f64| 0.03;
    ///
    /// let root = solver
    ///     .iterate(|x| (f(x), (-f(x) / scaled_slope(x)) / 100.0), 0.0)
    ///     .unwrap()
    ///     .root;
    /// assert!((root - 2.0).abs() < 1e-10);
    /// ```
    pub fn iterate<S>(&self, step: S, x0: T) -> Result<RootResult<T>, SolverError>
    where
        S: Fn(T) -> (T, T),
    {
        let tolerance = self.config.tolerance;
        let mut x = x0;
        let mut iterations = 0_usize;

        loop {
            let (residual, delta) = step(x);

            #[allow(clippy::assign_op_pattern)]
            {
                x = x + delta;
            }
            iterations += 1;

            tracing::trace!(
                iteration = iterations,
                x = x.to_f64().unwrap_or(f64::NAN),
                residual = residual.to_f64().unwrap_or(f64::NAN),
                "newton step"
            );

            if self.config.is_bounded() && !x.is_finite() {
                return Err(SolverError::NumericalInstability(format!(
                    "Newton iteration produced non-finite value after {} steps",
                    iterations
                )));
            }

            if residual.abs() <= tolerance || residual.is_nan() {
                return Ok(RootResult {
                    root: x,
                    iterations,
                    residual,
                });
            }

            if let Some(max_iterations) = self.config.max_iterations {
                if iterations >= max_iterations {
                    return Err(SolverError::MaxIterationsExceeded {
                        iterations: max_iterations,
                        last_estimate: x.to_f64().unwrap_or(f64::NAN),
                    });
                }
            }
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
