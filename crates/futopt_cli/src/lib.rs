//! Command line front end for the futopt pricing kernel.
//!
//! The `futopt` binary prices European options on futures, reports their
//! Greeks and backs out implied volatility from an observed premium. This
//! library half holds everything except argument parsing so the commands can
//! be driven from tests with an in-memory writer.

pub mod commands;
pub mod config;
pub mod error;

pub use error::{CliError, Result};

// Re-export pricer dependencies for integration
pub use futopt_core;
pub use futopt_models;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
