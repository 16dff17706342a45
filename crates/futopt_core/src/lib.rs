//! # futopt_core: Numerical Foundation for Futures Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! futopt_core is the bottom layer of the workspace, providing:
//! - Standard normal density and the Zelen & Severo CDF approximation (`math::distributions`)
//! - A Newton-Raphson root finder with an optional iteration cap (`math::solvers`)
//! - Error types: `PricingError`, `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other futopt_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support for error types (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use futopt_core::math::distributions::{normal_cdf, normal_density};
//!
//! let p = normal_cdf(0.0_f64);
//! // Zelen & Severo undershoots Φ(0) by about 1.7e-7
//! assert!((p - 0.5).abs() < 2e-7);
//!
//! let d = normal_density(1.0_f64);
//! assert!((d - normal_density(-1.0_f64)).abs() < 1e-15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `PricingError` and `SolverError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

/// Re-export of the `Float` trait every generic function in the workspace is bounded by.
pub use num_traits::Float;
