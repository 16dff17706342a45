//! Greeks command implementation

use serde::Serialize;
use std::io::Write;
use tracing::info;

use futopt_models::analytical::Black76;
use futopt_models::instruments::OptionType;

use super::{write_report, Report};
use crate::config::CliConfig;
use crate::Result;

/// Arguments of `futopt greeks`
#[derive(Debug, Clone, clap::Args)]
pub struct GreeksArgs {
    /// Option type (call or put)
    #[arg(long = "type", value_name = "KIND")]
    pub option_type: OptionType,

    /// Futures price
    #[arg(long)]
    pub future: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Volatility as a decimal (0.2 for 20%)
    #[arg(long = "vol")]
    pub volatility: f64,

    /// Time to expiry in years
    #[arg(long)]
    pub expiry: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rate: f64,

    /// Days per year used for theta (overrides configuration)
    #[arg(long)]
    pub days: Option<u32>,
}

/// Output of `futopt greeks`
#[derive(Debug, Clone, Serialize)]
pub struct GreeksReport {
    /// Option type the Greeks belong to
    pub option_type: OptionType,
    /// Day count theta is expressed in
    pub days_per_year: u32,
    /// ∂V/∂F
    pub delta: f64,
    /// ∂²V/∂F²
    pub gamma: f64,
    /// Price change per volatility point
    pub vega: f64,
    /// Price change per day
    pub theta: f64,
}

impl Report for GreeksReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Type", self.option_type.to_string()),
            ("Delta", self.delta.to_string()),
            ("Gamma", self.gamma.to_string()),
            ("Vega", self.vega.to_string()),
            ("Theta", self.theta.to_string()),
        ]
    }
}

/// Compute delta, gamma, vega and theta
pub fn greeks(args: &GreeksArgs, config: &CliConfig) -> GreeksReport {
    let model = Black76::new(args.future, args.strike, args.volatility, args.expiry, args.rate);
    let greeks = model.greeks(args.option_type, config.days_per_year);

    GreeksReport {
        option_type: args.option_type,
        days_per_year: config.days_per_year,
        delta: greeks.delta,
        gamma: greeks.gamma,
        vega: greeks.vega,
        theta: greeks.theta,
    }
}

/// Run the greeks command
pub fn run<W: Write>(args: &GreeksArgs, config: &CliConfig, out: &mut W) -> Result<()> {
    info!(
        option_type = %args.option_type,
        future = args.future,
        strike = args.strike,
        days_per_year = config.days_per_year,
        "Computing greeks"
    );

    write_report(out, config.format, &greeks(args, config))
}
