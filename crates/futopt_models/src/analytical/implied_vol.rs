//! Implied volatility by Newton iteration on the Black-76 price.
//!
//! Starting from σ = 0.2 each step reprices the option (rounded with the
//! pricing functions' `decimals` convention), compares it with the observed
//! premium and moves the volatility by
//!
//! ```text
//! σ ← σ + ((premium - price(σ)) / vega(σ)) / 100
//! ```
//!
//! where the final `/ 100` undoes the per-point scaling of
//! [`Black76::vega`]. The step is applied before the convergence test
//! `|premium - price| <= premium · tolerance`, so the returned volatility is
//! one step past the last accepted residual.
//!
//! By default the iteration is unbounded. Options with vanishing vega (deep
//! out of the money, very short expiry) can then run away; depending on the
//! inputs the result is NaN or the loop does not terminate. Use
//! [`ImpliedVolSolver::bounded`] to cap the iteration count, which also turns
//! non-finite iterates and non-positive premiums into errors.

use futopt_core::math::solvers::{NewtonRaphsonSolver, SolverConfig, DEFAULT_TOLERANCE};
use futopt_core::types::PricingError;
use num_traits::Float;

use super::black76::{Black76, DEFAULT_DECIMALS};
use crate::instruments::OptionType;

/// Volatility the iteration starts from.
pub const IV_INITIAL_GUESS: f64 = 0.2;

/// Default convergence tolerance, as a fraction of the premium.
pub const DEFAULT_IV_TOLERANCE: f64 = DEFAULT_TOLERANCE;

/// Implied volatility together with convergence diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVolResult<T> {
    /// Implied volatility.
    pub volatility: T,
    /// Number of repricing steps taken.
    pub iterations: usize,
    /// `premium - price` at the last accepted step.
    pub residual: T,
}

/// Implied-volatility solver for European options on futures.
///
/// # Examples
/// ```
/// use futopt_models::analytical::{Black76, ImpliedVolSolver};
/// use futopt_models::instruments::OptionType;
///
/// let premium = Black76::new(300.0_f64, 350.0, 0.2, 0.55, 0.05).price_call(2);
///
/// let solver = ImpliedVolSolver::with_defaults();
/// let vol = solver
///     .solve(OptionType::Call, premium, 300.0, 350.0, 0.55, 0.05)
///     .unwrap();
/// assert!((vol - 0.2).abs() < 0.2 * 0.02);
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver<T: Float> {
    config: SolverConfig<T>,
    decimals: u32,
}

impl<T: Float> ImpliedVolSolver<T> {
    /// Creates a solver; `config.tolerance` is relative to the premium.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self {
            config,
            decimals: DEFAULT_DECIMALS,
        }
    }

    /// Unbounded solver with the default 2% tolerance.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Solver that gives up after `max_iterations` steps.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    pub fn bounded(tolerance: T, max_iterations: usize) -> Self {
        Self::new(SolverConfig::bounded(tolerance, max_iterations))
    }

    /// Sets the `decimals` used when repricing during the iteration.
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Returns the `decimals` used when repricing.
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Implied volatility of an option with observed `premium`.
    ///
    /// # Errors
    /// Only bounded solvers fail:
    /// - `PricingError::InvalidInput` if `premium` is not positive and finite
    /// - `PricingError::DidNotConverge` when the iteration cap is reached
    /// - `PricingError::NumericalInstability` when an iterate is non-finite
    pub fn solve(
        &self,
        option_type: OptionType,
        premium: T,
        future: T,
        strike: T,
        expiry: T,
        rate: T,
    ) -> Result<T, PricingError> {
        self.solve_detailed(option_type, premium, future, strike, expiry, rate)
            .map(|result| result.volatility)
    }

    /// Same as [`solve`](Self::solve) with iteration diagnostics.
    pub fn solve_detailed(
        &self,
        option_type: OptionType,
        premium: T,
        future: T,
        strike: T,
        expiry: T,
        rate: T,
    ) -> Result<ImpliedVolResult<T>, PricingError> {
        if self.config.is_bounded() && (premium <= T::zero() || !premium.is_finite()) {
            return Err(PricingError::InvalidInput(format!(
                "premium must be positive and finite, got {}",
                premium.to_f64().unwrap_or(f64::NAN)
            )));
        }

        let hundred = T::from(100.0).unwrap();
        let initial_guess = T::from(IV_INITIAL_GUESS).unwrap();
        let model = Black76::new(future, strike, initial_guess, expiry, rate);
        let decimals = self.decimals;

        let solver = NewtonRaphsonSolver::new(SolverConfig {
            tolerance: premium * self.config.tolerance,
            max_iterations: self.config.max_iterations,
        });

        let outcome = solver.iterate(
            |volatility| {
                let repriced = model.with_volatility(volatility);
                let error = premium - repriced.price(option_type, decimals);
                (error, error / repriced.vega() / hundred)
            },
            initial_guess,
        );

        match outcome {
            Ok(root) => {
                tracing::debug!(
                    option_type = %option_type,
                    volatility = root.root.to_f64().unwrap_or(f64::NAN),
                    iterations = root.iterations,
                    "implied volatility converged"
                );
                Ok(ImpliedVolResult {
                    volatility: root.root,
                    iterations: root.iterations,
                    residual: root.residual,
                })
            }
            Err(err) => {
                tracing::warn!(
                    option_type = %option_type,
                    premium = premium.to_f64().unwrap_or(f64::NAN),
                    error = %err,
                    "implied volatility failed"
                );
                Err(err.into())
            }
        }
    }
}

/// Implied volatility with an unbounded iteration.
///
/// `tolerance` is the convergence threshold as a fraction of `premium`
/// ([`DEFAULT_IV_TOLERANCE`] is 2%).
///
/// # Examples
/// ```
/// use futopt_models::analytical::{call_price, implied_volatility, DEFAULT_IV_TOLERANCE};
/// use futopt_models::instruments::OptionType;
///
/// let premium = call_price(100.0_f64, 100.0, 0.1, 1.0, 0.03, 2);
/// let vol = implied_volatility(OptionType::Call, premium, 100.0, 100.0, 1.0, 0.03, DEFAULT_IV_TOLERANCE)
///     .unwrap();
/// assert!((vol - 0.1).abs() < 1e-3);
/// ```
pub fn implied_volatility<T: Float>(
    option_type: OptionType,
    premium: T,
    future: T,
    strike: T,
    expiry: T,
    rate: T,
    tolerance: T,
) -> Result<T, PricingError> {
    ImpliedVolSolver::new(SolverConfig {
        tolerance,
        max_iterations: None,
    })
    .solve(option_type, premium, future, strike, expiry, rate)
}

/// Implied volatility for an option type given as text.
///
/// The kind is matched case-insensitively against `CALL` and `PUT`.
///
/// # Errors
/// `PricingError::InvalidOptionType` for any other kind.
///
/// # Examples
/// ```
/// use futopt_models::analytical::implied_volatility_by_name;
/// use futopt_core::types::PricingError;
///
/// let err = implied_volatility_by_name("STRADDLE", 10.0_f64, 300.0, 350.0, 0.55, 0.05, 0.02)
///     .unwrap_err();
/// assert!(matches!(err, PricingError::InvalidOptionType(_)));
/// ```
pub fn implied_volatility_by_name<T: Float>(
    kind: &str,
    premium: T,
    future: T,
    strike: T,
    expiry: T,
    rate: T,
    tolerance: T,
) -> Result<T, PricingError> {
    let option_type: OptionType = kind.parse()?;
    implied_volatility(option_type, premium, future, strike, expiry, rate, tolerance)
}
