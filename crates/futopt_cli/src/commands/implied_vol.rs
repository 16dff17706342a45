//! Implied volatility command implementation

use serde::Serialize;
use std::io::Write;
use tracing::info;

use futopt_core::math::solvers::SolverConfig;
use futopt_models::analytical::ImpliedVolSolver;
use futopt_models::instruments::OptionType;

use super::{write_report, Report};
use crate::config::CliConfig;
use crate::Result;

/// Arguments of `futopt implied-vol`
#[derive(Debug, Clone, clap::Args)]
pub struct ImpliedVolArgs {
    /// Option type (call or put)
    #[arg(long = "type", value_name = "KIND")]
    pub option_type: OptionType,

    /// Observed option premium
    #[arg(long)]
    pub premium: f64,

    /// Futures price
    #[arg(long)]
    pub future: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Time to expiry in years
    #[arg(long)]
    pub expiry: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rate: f64,

    /// Convergence tolerance as a fraction of the premium (overrides configuration)
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Iteration cap, 0 for unbounded (overrides configuration)
    #[arg(long)]
    pub max_iterations: Option<usize>,
}

/// Output of `futopt implied-vol`
#[derive(Debug, Clone, Serialize)]
pub struct ImpliedVolReport {
    /// Option type the premium belongs to
    pub option_type: OptionType,
    /// Observed premium
    pub premium: f64,
    /// Implied volatility
    pub volatility: f64,
    /// Repricing steps taken
    pub iterations: usize,
}

impl Report for ImpliedVolReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Type", self.option_type.to_string()),
            ("Premium", self.premium.to_string()),
            ("Implied vol", self.volatility.to_string()),
            ("Iterations", self.iterations.to_string()),
        ]
    }
}

/// Back out the volatility that reproduces the premium
pub fn implied_vol(args: &ImpliedVolArgs, config: &CliConfig) -> Result<ImpliedVolReport> {
    let solver = ImpliedVolSolver::new(
        SolverConfig::new(config.iv_tolerance).with_max_iterations(config.iv_max_iterations),
    )
    .with_decimals(config.decimals);

    let result = solver.solve_detailed(
        args.option_type,
        args.premium,
        args.future,
        args.strike,
        args.expiry,
        args.rate,
    )?;

    Ok(ImpliedVolReport {
        option_type: args.option_type,
        premium: args.premium,
        volatility: result.volatility,
        iterations: result.iterations,
    })
}

/// Run the implied-vol command
pub fn run<W: Write>(args: &ImpliedVolArgs, config: &CliConfig, out: &mut W) -> Result<()> {
    info!(
        option_type = %args.option_type,
        premium = args.premium,
        tolerance = config.iv_tolerance,
        max_iterations = ?config.iv_max_iterations,
        "Solving for implied volatility"
    );

    let report = implied_vol(args, config)?;
    write_report(out, config.format, &report)
}
