//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors surfaced by pricing and implied-volatility operations
//! - `SolverError`: Errors from root-finding solvers
//!
//! Closed-form pricing formulas never fail: degenerate inputs such as a zero
//! volatility come back as non-finite numbers. These errors cover the places
//! where a caller has to make a decision: parsing an option type and inverting
//! a price.

use thiserror::Error;

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters
/// - `InvalidOptionType`: Option type text other than CALL or PUT
/// - `DidNotConverge`: Implied-volatility iteration hit its cap
/// - `NumericalInstability`: An iterate became non-finite
///
/// # Examples
/// ```
/// use futopt_core::types::PricingError;
///
/// let err = PricingError::InvalidOptionType("STRADDLE".to_string());
/// assert_eq!(format!("{}", err), "Invalid option type: STRADDLE (expected CALL or PUT)");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Option type is neither CALL nor PUT
    #[error("Invalid option type: {0} (expected CALL or PUT)")]
    InvalidOptionType(String),

    /// Implied volatility did not converge within the iteration cap
    #[error(
        "Implied volatility did not converge after {iterations} iterations (last estimate {last_estimate})"
    )]
    DidNotConverge {
        /// Number of iterations attempted
        iterations: usize,
        /// Volatility estimate when the cap was reached
        last_estimate: f64,
    },

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

/// Root-finding solver errors.
///
/// # Examples
/// ```
/// use futopt_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100, last_estimate: 0.25 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
        /// Estimate after the final iteration
        last_estimate: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl From<SolverError> for PricingError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::MaxIterationsExceeded {
                iterations,
                last_estimate,
            } => PricingError::DidNotConverge {
                iterations,
                last_estimate,
            },
            SolverError::NumericalInstability(msg) => PricingError::NumericalInstability(msg),
        }
    }
}
