//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use futopt_models::analytical::{DEFAULT_DAYS_PER_YEAR, DEFAULT_DECIMALS, DEFAULT_IV_TOLERANCE};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Rounding parameter
pub const ENV_DECIMALS: &str = "FUTOPT_DECIMALS";
/// Day count for theta
pub const ENV_DAYS_PER_YEAR: &str = "FUTOPT_DAYS_PER_YEAR";
/// Implied-volatility tolerance
pub const ENV_IV_TOLERANCE: &str = "FUTOPT_IV_TOLERANCE";
/// Implied-volatility iteration cap
pub const ENV_IV_MAX_ITERATIONS: &str = "FUTOPT_IV_MAX_ITERATIONS";
/// Log level
pub const ENV_LOG_LEVEL: &str = "FUTOPT_LOG_LEVEL";

/// Iteration cap applied by the CLI unless configured otherwise
pub const DEFAULT_IV_MAX_ITERATIONS: usize = 100;

/// Converts a configured iteration cap, where 0 means unbounded
pub fn iteration_cap(max_iterations: usize) -> Option<usize> {
    (max_iterations > 0).then_some(max_iterations)
}

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid decimals: {0}. Must be at least 1")]
    InvalidDecimals(u32),

    #[error("Invalid days per year: {0}. Must be at least 1")]
    InvalidDaysPerYear(u32),

    #[error("Invalid implied volatility tolerance: {0}. Must be positive and finite")]
    InvalidTolerance(f64),

    #[error("Invalid implied volatility iteration cap: {0}. Must be at least 1")]
    InvalidMaxIterations(usize),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Rounding parameter passed to the pricing functions
    pub decimals: u32,
    /// Day count used to express theta per day
    pub days_per_year: u32,
    /// Implied-volatility tolerance as a fraction of the premium
    pub iv_tolerance: f64,
    /// Implied-volatility iteration cap, `None` (0 in files, env and flags) for unbounded
    #[serde(deserialize_with = "deserialize_iteration_cap")]
    pub iv_max_iterations: Option<usize>,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_iteration_cap<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    usize::deserialize(deserializer).map(iteration_cap)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            days_per_year: DEFAULT_DAYS_PER_YEAR,
            iv_tolerance: DEFAULT_IV_TOLERANCE,
            iv_max_iterations: Some(DEFAULT_IV_MAX_ITERATIONS),
            log_level: LogLevel::default(),
            format: OutputFormat::default(),
        }
    }
}

fn parse_env<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ConfigError::EnvError(format!("{}={}: {}", name, value, e)))
}

impl CliConfig {
    /// Load configuration from a TOML file
    ///
    /// The result is not validated; [`build_config`] validates once all
    /// overrides are applied.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        Ok(config)
    }

    /// Override fields from the variables `lookup` returns a value for
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_DECIMALS) {
            self.decimals = parse_env(ENV_DECIMALS, &value)?;
        }
        if let Some(value) = lookup(ENV_DAYS_PER_YEAR) {
            self.days_per_year = parse_env(ENV_DAYS_PER_YEAR, &value)?;
        }
        if let Some(value) = lookup(ENV_IV_TOLERANCE) {
            self.iv_tolerance = parse_env(ENV_IV_TOLERANCE, &value)?;
        }
        if let Some(value) = lookup(ENV_IV_MAX_ITERATIONS) {
            self.iv_max_iterations = iteration_cap(parse_env(ENV_IV_MAX_ITERATIONS, &value)?);
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&value)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        // decimals = 0 makes every rounded price NaN
        if self.decimals == 0 {
            return Err(ConfigError::InvalidDecimals(self.decimals));
        }
        if self.days_per_year == 0 {
            return Err(ConfigError::InvalidDaysPerYear(self.days_per_year));
        }
        if !(self.iv_tolerance > 0.0 && self.iv_tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance(self.iv_tolerance));
        }
        if self.iv_max_iterations == Some(0) {
            return Err(ConfigError::InvalidMaxIterations(0));
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(decimals) = cli.decimals {
            self.decimals = decimals;
        }
        if let Some(days) = cli.days_per_year {
            self.days_per_year = days;
        }
        if let Some(tolerance) = cli.iv_tolerance {
            self.iv_tolerance = tolerance;
        }
        if let Some(max_iterations) = cli.iv_max_iterations {
            self.iv_max_iterations = iteration_cap(max_iterations);
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub format: Option<String>,
    /// Rounding parameter override
    pub decimals: Option<u32>,
    /// Theta day count override
    pub days_per_year: Option<u32>,
    /// Implied-volatility tolerance override
    pub iv_tolerance: Option<f64>,
    /// Implied-volatility iteration cap override, 0 for unbounded
    pub iv_max_iterations: Option<usize>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |name| std::env::var(name).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // Start with defaults or file config
    let mut config = if let Some(config_path) = &cli.config_file {
        CliConfig::from_file(config_path)?
    } else {
        CliConfig::default()
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.decimals, 2);
        assert_eq!(config.days_per_year, 365);
        assert_eq!(config.iv_tolerance, 0.02);
        assert_eq!(config.iv_max_iterations, Some(DEFAULT_IV_MAX_ITERATIONS));
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("csv").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", LogLevel::Debug), "debug");
        assert_eq!(format!("{}", OutputFormat::Json), "json");
    }

    #[test]
    fn test_validate() {
        let mut config = CliConfig::default();
        config.decimals = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDecimals(0))));

        let mut config = CliConfig::default();
        config.days_per_year = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDaysPerYear(0))));

        let mut config = CliConfig::default();
        config.iv_tolerance = 0.0;
        assert!(config.validate().is_err());
        config.iv_tolerance = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = CliConfig::default();
        config.iv_max_iterations = Some(0);
        assert!(config.validate().is_err());
        config.iv_max_iterations = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            decimals = 1
            days_per_year = 252
            iv_tolerance = 0.001
            iv_max_iterations = 25
            log_level = "debug"
            format = "json"
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.decimals, 1);
        assert_eq!(config.days_per_year, 252);
        assert_eq!(config.iv_tolerance, 0.001);
        assert_eq!(config.iv_max_iterations, Some(25));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: CliConfig = toml::from_str("days_per_year = 252").unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.days_per_year, 252);
        assert_eq!(config.decimals, 2);
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_toml_rejects_unknown_format() {
        assert!(toml::from_str::<CliConfig>(r#"format = "csv""#).is_err());
    }

    #[test]
    fn test_apply_env() {
        let mut config = CliConfig::default();
        config
            .apply_env(env(&[
                (ENV_DECIMALS, "1"),
                (ENV_DAYS_PER_YEAR, " 252 "),
                (ENV_IV_TOLERANCE, "0.005"),
                (ENV_IV_MAX_ITERATIONS, "10"),
                (ENV_LOG_LEVEL, "info"),
            ]))
            .unwrap();

        assert_eq!(config.decimals, 1);
        assert_eq!(config.days_per_year, 252);
        assert_eq!(config.iv_tolerance, 0.005);
        assert_eq!(config.iv_max_iterations, Some(10));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_apply_env_rejects_garbage() {
        let mut config = CliConfig::default();
        let err = config
            .apply_env(env(&[(ENV_DAYS_PER_YEAR, "many")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EnvError(_)));
        assert!(err.to_string().contains(ENV_DAYS_PER_YEAR));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            log_level: Some("debug".to_string()),
            format: Some("json".to_string()),
            decimals: Some(1),
            days_per_year: Some(360),
            iv_tolerance: Some(0.01),
            iv_max_iterations: Some(5),
            config_file: None,
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.decimals, 1);
        assert_eq!(config.days_per_year, 360);
        assert_eq!(config.iv_tolerance, 0.01);
        assert_eq!(config.iv_max_iterations, Some(5));
    }

    #[test]
    fn test_build_config_with_defaults() {
        let config = build_config_with_env(&CliArgs::default(), env(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_build_config_priority() {
        let path = std::env::temp_dir()
            .join(format!("futopt_priority_{}.toml", std::process::id()));
        std::fs::write(&path, "decimals = 1\ndays_per_year = 252\niv_tolerance = 0.01\n").unwrap();

        let cli = CliArgs {
            config_file: Some(path.clone()),
            days_per_year: Some(360),
            ..Default::default()
        };
        let config = build_config_with_env(
            &cli,
            env(&[(ENV_DAYS_PER_YEAR, "300"), (ENV_IV_TOLERANCE, "0.03")]),
        )
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        // file only
        assert_eq!(config.decimals, 1);
        // env over file
        assert_eq!(config.iv_tolerance, 0.03);
        // CLI over env over file
        assert_eq!(config.days_per_year, 360);
    }

    #[test]
    fn test_build_config_validates_cli_overrides() {
        let cli = CliArgs {
            iv_tolerance: Some(-0.5),
            ..Default::default()
        };
        let result = build_config_with_env(&cli, env(&[]));
        assert!(matches!(result, Err(ConfigError::InvalidTolerance(_))));
    }

    #[test]
    fn test_zero_iteration_cap_means_unbounded() {
        assert_eq!(iteration_cap(0), None);
        assert_eq!(iteration_cap(7), Some(7));

        let config: CliConfig = toml::from_str("iv_max_iterations = 0").unwrap();
        assert_eq!(config.iv_max_iterations, None);

        let mut config = CliConfig::default();
        config.apply_env(env(&[(ENV_IV_MAX_ITERATIONS, "0")])).unwrap();
        assert_eq!(config.iv_max_iterations, None);

        let cli = CliArgs {
            iv_max_iterations: Some(0),
            ..Default::default()
        };
        let config = build_config_with_env(&cli, env(&[])).unwrap();
        assert_eq!(config.iv_max_iterations, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_override_repairs_invalid_file_value() {
        let path = std::env::temp_dir()
            .join(format!("futopt_override_{}.toml", std::process::id()));
        std::fs::write(&path, "decimals = 0\n").unwrap();

        let from_file = CliConfig::from_file(&path).unwrap();
        assert_eq!(from_file.decimals, 0);

        let rejected = build_config_with_env(
            &CliArgs {
                config_file: Some(path.clone()),
                ..Default::default()
            },
            env(&[]),
        );
        let repaired = build_config_with_env(
            &CliArgs {
                config_file: Some(path.clone()),
                decimals: Some(1),
                ..Default::default()
            },
            env(&[]),
        );
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(rejected, Err(ConfigError::InvalidDecimals(0))));
        assert_eq!(repaired.unwrap().decimals, 1);
    }

    #[test]
    fn test_missing_config_file() {
        let result = CliConfig::from_file(&PathBuf::from("/nonexistent/futopt.toml"));
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidDaysPerYear(0);
        assert!(err.to_string().contains("Invalid days per year"));

        let err = ConfigError::InvalidLogLevel("bad".to_string());
        assert!(err.to_string().contains("Invalid log level"));

        let err = ConfigError::InvalidFormat("csv".to_string());
        assert!(err.to_string().contains("table, json"));
    }
}
