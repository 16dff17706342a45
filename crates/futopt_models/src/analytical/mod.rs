//! Analytical Black-76 formulas for European options on futures.
//!
//! This module provides:
//! - Rounded call and put prices (`black76::call_price`, `black76::put_price`)
//! - Analytical Greeks: delta, gamma, vega (per volatility point), theta (per day)
//! - Implied volatility by Newton iteration on the rounded price
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: `f64` and `f32` share one implementation
//! - **Struct and free functions**: [`Black76`] caches nothing, so the free
//!   functions are thin wrappers around it for positional-argument callers

pub mod black76;
pub mod implied_vol;

// Re-export main types at module level
pub use black76::{
    call_price, delta_call, delta_put, gamma, put_price, round_price, theta_call, theta_put, vega,
    Black76, Greeks, DEFAULT_DAYS_PER_YEAR, DEFAULT_DECIMALS,
};
pub use implied_vol::{
    implied_volatility, implied_volatility_by_name, ImpliedVolResult, ImpliedVolSolver,
    DEFAULT_IV_TOLERANCE, IV_INITIAL_GUESS,
};
