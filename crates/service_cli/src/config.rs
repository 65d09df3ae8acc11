//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and
//! command-line arguments.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use valuer_models::providers::{LinearRatePredictor, StaticPriceTable, StaticTrendTable};

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "VALUER_LOG_LEVEL";
/// Environment variable overriding the output format.
pub const ENV_OUTPUT_FORMAT: &str = "VALUER_OUTPUT_FORMAT";
/// Environment variable overriding the inflation rate.
pub const ENV_INFLATION_RATE: &str = "VALUER_INFLATION_RATE";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidOutputFormat(String),

    #[error("Invalid inflation rate: {0}. Must be a finite number greater than -1")]
    InvalidInflationRate(String),

    #[error("Invalid market price for {name}: {price}. Must be finite and non-negative")]
    InvalidMarketPrice { name: String, price: f64 },

    #[error("Invalid market trend for {category}: {factor}. Must be finite and non-negative")]
    InvalidMarketTrend { category: String, factor: f64 },

    #[error("Invalid rate model: coefficients must be finite")]
    InvalidRateModel,

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
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
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
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
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
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

/// Valuer configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ValuerConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_output_format")]
    pub output_format: OutputFormat,
    /// Annual inflation rate; no adjustment when unset
    pub inflation_rate: Option<f64>,
    /// Known market prices by product name
    pub market_prices: BTreeMap<String, f64>,
    /// Market trend factors by category
    pub market_trends: BTreeMap<String, f64>,
    /// Linear depreciation-rate model used by `product --predict-rate`
    pub rate_model: Option<LinearRatePredictor<f64>>,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_output_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

fn parse_inflation_rate(s: &str) -> Result<f64, ConfigError> {
    s.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidInflationRate(s.to_string()))
}

impl ValuerConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ValuerConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from environment variables, read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = lookup(ENV_OUTPUT_FORMAT) {
            self.output_format = OutputFormat::from_str(&format)?;
        }
        if let Some(rate) = lookup(ENV_INFLATION_RATE) {
            self.inflation_rate = Some(parse_inflation_rate(&rate)?);
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(format) = &cli.output_format {
            self.output_format = OutputFormat::from_str(format)?;
        }
        if let Some(rate) = cli.inflation_rate {
            self.inflation_rate = Some(rate);
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(rate) = self.inflation_rate {
            if !rate.is_finite() || rate <= -1.0 {
                return Err(ConfigError::InvalidInflationRate(rate.to_string()));
            }
        }

        for (name, &price) in &self.market_prices {
            if !price.is_finite() || price < 0.0 {
                return Err(ConfigError::InvalidMarketPrice {
                    name: name.clone(),
                    price,
                });
            }
        }

        for (category, &factor) in &self.market_trends {
            if !factor.is_finite() || factor < 0.0 {
                return Err(ConfigError::InvalidMarketTrend {
                    category: category.clone(),
                    factor,
                });
            }
        }

        if let Some(model) = &self.rate_model {
            let finite = model.intercept.is_finite()
                && model.coefficients.iter().all(|c| c.is_finite());
            if !finite {
                return Err(ConfigError::InvalidRateModel);
            }
        }

        Ok(())
    }

    /// Market prices as a price fetcher
    pub fn price_table(&self) -> StaticPriceTable<f64> {
        self.market_prices
            .iter()
            .map(|(name, &price)| (name.as_str(), price))
            .collect()
    }

    /// Market trends as a trend source
    pub fn trend_table(&self) -> StaticTrendTable<f64> {
        self.market_trends
            .iter()
            .fold(StaticTrendTable::new(), |table, (category, &factor)| {
                table.with_factor(category, factor)
            })
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
    pub output_format: Option<String>,
    /// Inflation rate override
    pub inflation_rate: Option<f64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<ValuerConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<ValuerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // Start with defaults or file config
    let mut config = if let Some(config_path) = &cli.config_file {
        ValuerConfig::from_file(config_path)?
    } else {
        ValuerConfig::default()
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}
