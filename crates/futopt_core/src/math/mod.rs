//! Mathematical building blocks.
//!
//! - `distributions`: standard normal density and CDF approximation
//! - `solvers`: Newton-Raphson root finding with configurable iteration cap

pub mod distributions;
pub mod solvers;
