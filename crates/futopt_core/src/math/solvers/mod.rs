//! Root-finding solvers for numerical computation.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: Newton iteration with explicit derivative,
//!   used to invert option prices into implied volatility
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance (default: 0.02)
//! - `max_iterations`: Optional iteration cap (default: unbounded)
//!
//! ## Examples
//!
//! ```
//! use futopt_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! // Solve e^x - 2 = 0 (find ln 2)
//! let solver = NewtonRaphsonSolver::new(SolverConfig::bounded(1e-12, 100));
//!
//! let root = solver.find_root(|x: f64| x.exp() - 2.0, |x: f64| x.exp(), 0.5).unwrap();
//! assert!((root - 2.0_f64.ln()).abs() < 1e-12);
//! ```

mod config;
mod newton_raphson;

pub use config::{SolverConfig, DEFAULT_TOLERANCE};
pub use newton_raphson::{NewtonRaphsonSolver, RootResult};
