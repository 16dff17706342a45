//! Price command implementation
//!
//! Prices the call and the put on the same future with the Black-76 model.

use serde::Serialize;
use std::io::Write;
use tracing::{info, warn};

use futopt_models::analytical::Black76;

use super::{write_report, Report};
use crate::config::CliConfig;
use crate::Result;

/// Arguments of `futopt price`
#[derive(Debug, Clone, clap::Args)]
pub struct PriceArgs {
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

    /// Rounding parameter for the premiums (overrides configuration)
    #[arg(long)]
    pub decimals: Option<u32>,
}

/// Output of `futopt price`
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    /// Rounding parameter the premiums were produced with
    pub decimals: u32,
    /// Call premium
    pub call: f64,
    /// Put premium
    pub put: f64,
}

impl Report for PriceReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![("Call", self.call.to_string()), ("Put", self.put.to_string())]
    }
}

/// Compute call and put premiums
pub fn price(args: &PriceArgs, config: &CliConfig) -> PriceReport {
    let model = Black76::new(args.future, args.strike, args.volatility, args.expiry, args.rate);

    PriceReport {
        decimals: config.decimals,
        call: model.price_call(config.decimals),
        put: model.price_put(config.decimals),
    }
}

/// Run the price command
pub fn run<W: Write>(args: &PriceArgs, config: &CliConfig, out: &mut W) -> Result<()> {
    info!(
        future = args.future,
        strike = args.strike,
        volatility = args.volatility,
        expiry = args.expiry,
        rate = args.rate,
        decimals = config.decimals,
        "Pricing call and put"
    );

    let report = price(args, config);
    if !report.call.is_finite() || !report.put.is_finite() {
        warn!("Non-finite premium: future, strike, volatility and expiry must all be positive");
    }

    write_report(out, config.format, &report)
}
