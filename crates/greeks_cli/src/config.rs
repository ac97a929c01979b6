//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line arguments.

use greeks_core::types::{
    InputField, PricingInputs, PricingResult, REFERENCE_EXPIRY, REFERENCE_RATE, REFERENCE_SPOT,
    REFERENCE_STRIKE, REFERENCE_VOLATILITY,
};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Config file read when `--config` is not given and the file exists.
pub const DEFAULT_CONFIG_FILE: &str = "greeks.toml";

/// Largest accepted number of decimal places.
pub const MAX_PRECISION: usize = 17;

/// Environment variable names.
pub mod env {
    pub const LOG_LEVEL: &str = "GREEKS_LOG_LEVEL";
    pub const FORMAT: &str = "GREEKS_FORMAT";
    pub const PRECISION: &str = "GREEKS_PRECISION";
    pub const SPOT: &str = "GREEKS_SPOT";
    pub const STRIKE: &str = "GREEKS_STRIKE";
    pub const EXPIRY: &str = "GREEKS_EXPIRY";
    pub const RATE: &str = "GREEKS_RATE";
    pub const VOLATILITY: &str = "GREEKS_VOLATILITY";
}

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json, csv")]
    InvalidFormat(String),

    #[error("Invalid precision: {0}. Must be an integer between 0 and 17")]
    InvalidPrecision(String),

    #[error("Invalid number for {key}: {value}")]
    InvalidNumber { key: String, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
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

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Output formats for evaluation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => f.write_str("table"),
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Csv => f.write_str("csv"),
        }
    }
}

/// Optional overrides for the pricing inputs.
///
/// Missing fields fall back to the reference inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputsSection {
    pub spot: Option<f64>,
    pub strike: Option<f64>,
    pub expiry: Option<f64>,
    pub rate: Option<f64>,
    pub volatility: Option<f64>,
}

impl InputsSection {
    /// Returns the slot for `field`.
    pub fn slot_mut(&mut self, field: InputField) -> &mut Option<f64> {
        match field {
            InputField::Spot => &mut self.spot,
            InputField::Strike => &mut self.strike,
            InputField::Expiry => &mut self.expiry,
            InputField::Rate => &mut self.rate,
            InputField::Volatility => &mut self.volatility,
        }
    }

    /// Overlays every value set in `other`.
    pub fn overlay(&mut self, other: &InputsSection) {
        for field in InputField::ALL {
            if let Some(value) = other.value(field) {
                *self.slot_mut(field) = Some(value);
            }
        }
    }

    /// Returns the configured value for `field`, if any.
    pub fn value(&self, field: InputField) -> Option<f64> {
        match field {
            InputField::Spot => self.spot,
            InputField::Strike => self.strike,
            InputField::Expiry => self.expiry,
            InputField::Rate => self.rate,
            InputField::Volatility => self.volatility,
        }
    }

    /// Builds validated pricing inputs, filling gaps from the reference inputs.
    pub fn resolve(&self) -> PricingResult<PricingInputs<f64>> {
        PricingInputs::new(
            self.spot.unwrap_or(REFERENCE_SPOT),
            self.strike.unwrap_or(REFERENCE_STRIKE),
            self.expiry.unwrap_or(REFERENCE_EXPIRY),
            self.rate.unwrap_or(REFERENCE_RATE),
            self.volatility.unwrap_or(REFERENCE_VOLATILITY),
        )
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Decimal places in table and CSV output
    pub precision: usize,
    /// Pricing input overrides
    pub inputs: InputsSection,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
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
            log_level: LogLevel::Info,
            format: OutputFormat::Table,
            precision: greeks_models::presentation::DEFAULT_PRECISION,
            inputs: InputsSection::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Overlay values from an environment lookup
    ///
    /// Only variables that are present override the current values.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup(env::LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&log_level)?;
        }

        if let Some(format) = lookup(env::FORMAT) {
            self.format = OutputFormat::from_str(&format)?;
        }

        if let Some(precision) = lookup(env::PRECISION) {
            self.precision = parse_precision(&precision)?;
        }

        for (key, field) in [
            (env::SPOT, InputField::Spot),
            (env::STRIKE, InputField::Strike),
            (env::EXPIRY, InputField::Expiry),
            (env::RATE, InputField::Rate),
            (env::VOLATILITY, InputField::Volatility),
        ] {
            if let Some(value) = lookup(key) {
                *self.inputs.slot_mut(field) = Some(parse_number(key, &value)?);
            }
        }

        self.validate()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision(self.precision.to_string()));
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        } else if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        if let Some(precision) = cli.precision {
            self.precision = precision;
        }
        self.inputs.overlay(&cli.inputs);

        self.validate()
    }

    /// Builds validated pricing inputs from the configured overrides.
    pub fn pricing_inputs(&self) -> PricingResult<PricingInputs<f64>> {
        self.inputs.resolve()
    }
}

fn parse_precision(value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPrecision(value.to_string()))
}

fn parse_number(key: &str, value: &str) -> Result<f64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Raise the log level to debug unless one is given explicitly
    pub verbose: bool,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub format: Option<String>,
    /// Precision override
    pub precision: Option<usize>,
    /// Pricing input overrides
    pub inputs: InputsSection,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// Build configuration with an explicit environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // Start with defaults or file config
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    // Override with environment variables
    config.apply_env_with(lookup)?;

    // Override with CLI arguments
    config.merge_with_cli(cli)?;

    Ok(config)
}
