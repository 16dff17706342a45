//! futopt - Black-76 pricing for European options on futures
//!
//! # Commands
//!
//! - `futopt price` - Call and put premiums
//! - `futopt greeks` - Delta, gamma, vega and theta for a call or a put
//! - `futopt implied-vol` - Volatility implied by an observed premium
//!
//! Results go to stdout, logs to stderr.

use clap::{Parser, Subcommand};
use futopt_cli::commands::{self, greeks::GreeksArgs, implied_vol::ImpliedVolArgs, price::PriceArgs};
use futopt_cli::config::{build_config, CliArgs as ConfigCliArgs};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Black-76 pricing for European options on futures
#[derive(Parser, Debug)]
#[command(name = "futopt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price the call and the put
    Price(PriceArgs),

    /// Compute the Greeks of a call or a put
    Greeks(GreeksArgs),

    /// Back out implied volatility from a premium
    ImpliedVol(ImpliedVolArgs),
}

impl From<&Cli> for ConfigCliArgs {
    fn from(cli: &Cli) -> Self {
        let mut args = ConfigCliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            format: cli.format.clone(),
            ..Default::default()
        };
        match &cli.command {
            Commands::Price(price) => args.decimals = price.decimals,
            Commands::Greeks(greeks) => args.days_per_year = greeks.days,
            Commands::ImpliedVol(iv) => {
                args.iv_tolerance = iv.tolerance;
                args.iv_max_iterations = iv.max_iterations;
            }
        }
        args
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&ConfigCliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());

    tracing::debug!(
        version = futopt_cli::VERSION,
        decimals = config.decimals,
        days_per_year = config.days_per_year,
        iv_tolerance = config.iv_tolerance,
        iv_max_iterations = ?config.iv_max_iterations,
        format = %config.format,
        "Configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Price(args) => commands::price::run(args, &config, &mut out)?,
        Commands::Greeks(args) => commands::greeks::run(args, &config, &mut out)?,
        Commands::ImpliedVol(args) => commands::implied_vol::run(args, &config, &mut out)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use futopt_models::instruments::OptionType;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_price() {
        let cli = Cli::try_parse_from([
            "futopt", "price", "--future", "300", "--strike", "350", "--vol", "0.2", "--expiry",
            "0.55", "--rate", "0.05", "--decimals", "1",
        ])
        .unwrap();

        let args = ConfigCliArgs::from(&cli);
        assert_eq!(args.decimals, Some(1));
        match cli.command {
            Commands::Price(price) => {
                assert_eq!(price.future, 300.0);
                assert_eq!(price.volatility, 0.2);
            }
            other => panic!("Expected price command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_implied_vol_with_globals() {
        let cli = Cli::try_parse_from([
            "futopt", "implied-vol", "--type", "put", "--premium", "52.25", "--future", "300",
            "--strike", "350", "--expiry", "0.55", "--max-iterations", "20", "--format", "json",
        ])
        .unwrap();

        let args = ConfigCliArgs::from(&cli);
        assert_eq!(args.iv_max_iterations, Some(20));
        assert_eq!(args.format.as_deref(), Some("json"));
        match cli.command {
            Commands::ImpliedVol(iv) => {
                assert_eq!(iv.option_type, OptionType::Put);
                assert_eq!(iv.rate, 0.0);
            }
            other => panic!("Expected implied-vol command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        let result = Cli::try_parse_from([
            "futopt", "greeks", "--type", "straddle", "--future", "300", "--strike", "350",
            "--vol", "0.2", "--expiry", "0.55",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_rate() {
        let cli = Cli::try_parse_from([
            "futopt", "price", "--future", "100", "--strike", "100", "--vol", "0.2", "--expiry",
            "1", "--rate", "-0.01",
        ])
        .unwrap();
        match cli.command {
            Commands::Price(price) => assert_eq!(price.rate, -0.01),
            other => panic!("Expected price command, got {:?}", other),
        }
    }
}
