//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line arguments.

use curve_core::math::interpolators::SplineBoundary;
use curve_core::types::Date;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "zerocurve.toml";

/// Prefix of every environment variable read by [`CliConfig::apply_env`].
pub const ENV_PREFIX: &str = "ZEROCURVE_";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, csv, json")]
    InvalidFormat(String),

    #[error("Invalid spline boundary: {0}. Must be one of: not-a-knot, natural")]
    InvalidBoundary(String),

    #[error("Invalid reference date: {0}. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

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

/// Output format for the dense curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Uniform query grid in years
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// First query offset
    pub start: f64,
    /// Last query offset
    pub end: f64,
    /// Number of query offsets, both ends included
    pub points: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 30.0,
            points: 1001,
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Reference date for tenor conversion; today when absent
    pub reference_date: Option<Date>,
    /// Dense query grid
    pub grid: GridConfig,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Spline end condition
    pub boundary: SplineBoundary,
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
            log_level: LogLevel::Warn,
            reference_date: None,
            grid: GridConfig::default(),
            format: OutputFormat::Table,
            boundary: SplineBoundary::NotAKnot,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields from `ZEROCURVE_*` variables returned by `lookup`.
    ///
    /// `lookup` receives the full variable name. [`build_config`] passes
    /// `std::env::var`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(level) = var("LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(date) = var("REFERENCE_DATE") {
            self.reference_date = Some(parse_date(&date)?);
        }
        if let Some(start) = var("GRID_START") {
            self.grid.start = parse_env_number("GRID_START", &start)?;
        }
        if let Some(end) = var("GRID_END") {
            self.grid.end = parse_env_number("GRID_END", &end)?;
        }
        if let Some(points) = var("GRID_POINTS") {
            self.grid.points = parse_env_number("GRID_POINTS", &points)?;
        }
        if let Some(format) = var("FORMAT") {
            self.format = OutputFormat::from_str(&format)?;
        }
        if let Some(boundary) = var("BOUNDARY") {
            self.boundary = parse_boundary(&boundary)?;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let GridConfig { start, end, points } = self.grid;
        if !start.is_finite() || !end.is_finite() {
            return Err(ConfigError::InvalidGrid(format!(
                "bounds must be finite, got [{}, {}]",
                start, end
            )));
        }
        if points < 2 {
            return Err(ConfigError::InvalidGrid(format!(
                "need at least 2 points, got {}",
                points
            )));
        }
        if end <= start {
            return Err(ConfigError::InvalidGrid(format!(
                "end {} must be after start {}",
                end, start
            )));
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(date) = &cli.reference_date {
            self.reference_date = Some(parse_date(date)?);
        }
        if let Some(start) = cli.grid_start {
            self.grid.start = start;
        }
        if let Some(end) = cli.grid_end {
            self.grid.end = end;
        }
        if let Some(points) = cli.grid_points {
            self.grid.points = points;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        if let Some(boundary) = &cli.boundary {
            self.boundary = parse_boundary(boundary)?;
        }
        Ok(())
    }

    /// Reference date to convert tenors against, falling back to today.
    pub fn reference_date_or_today(&self) -> Date {
        self.reference_date.unwrap_or_else(Date::today)
    }
}

fn parse_date(s: &str) -> Result<Date, ConfigError> {
    Date::parse(s).map_err(|_| ConfigError::InvalidDate(s.to_string()))
}

fn parse_boundary(s: &str) -> Result<SplineBoundary, ConfigError> {
    SplineBoundary::from_str(s).map_err(|_| ConfigError::InvalidBoundary(s.to_string()))
}

fn parse_env_number<N: FromStr>(name: &str, value: &str) -> Result<N, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}{}={}", ENV_PREFIX, name, value)))
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Reference date override (YYYY-MM-DD)
    pub reference_date: Option<String>,
    /// Grid start override
    pub grid_start: Option<f64>,
    /// Grid end override
    pub grid_end: Option<f64>,
    /// Grid size override
    pub grid_points: Option<usize>,
    /// Output format override
    pub format: Option<String>,
    /// Spline boundary override
    pub boundary: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (`--config`, else `zerocurve.toml` if present)
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |name| std::env::var(name).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if fallback.exists() {
                CliConfig::from_file(fallback)?
            } else {
                CliConfig::default()
            }
        }
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
    use std::io::Write;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.reference_date, None);
        assert_eq!(config.grid, GridConfig::default());
        assert_eq!(config.grid.points, 1001);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.boundary, SplineBoundary::NotAKnot);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);
        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_format_parsing_and_display() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert!(OutputFormat::from_str("xml").is_err());
        assert_eq!(OutputFormat::Table.to_string(), "table");
    }

    #[test]
    fn test_validate_grid() {
        let mut config = CliConfig::default();
        config.grid.points = 1;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidGrid(_))));

        config.grid = GridConfig {
            start: 5.0,
            end: 5.0,
            points: 10,
        };
        assert!(config.validate().is_err());

        config.grid.end = f64::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"
            reference_date = "2025-02-25"
            format = "json"
            boundary = "natural"

            [grid]
            start = 0.5
            end = 40.0
            points = 51
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(
            config.reference_date,
            Some(Date::from_ymd(2025, 2, 25).unwrap())
        );
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.boundary, SplineBoundary::Natural);
        assert_eq!(
            config.grid,
            GridConfig {
                start: 0.5,
                end: 40.0,
                points: 51
            }
        );
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let toml_str = r#"
            [grid]
            points = 301
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.grid.points, 301);
        assert_eq!(config.grid.end, 30.0);
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_toml_rejects_bad_log_level() {
        assert!(toml::from_str::<CliConfig>(r#"log_level = "loud""#).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("ZEROCURVE_LOG_LEVEL", "info"),
            ("ZEROCURVE_REFERENCE_DATE", "2024-12-31"),
            ("ZEROCURVE_GRID_POINTS", "11"),
            ("ZEROCURVE_FORMAT", "csv"),
            ("ZEROCURVE_BOUNDARY", "natural"),
        ]
        .into_iter()
        .collect();

        let mut config = CliConfig::default();
        config
            .apply_env(|name| env.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(
            config.reference_date,
            Some(Date::from_ymd(2024, 12, 31).unwrap())
        );
        assert_eq!(config.grid.points, 11);
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.boundary, SplineBoundary::Natural);
    }

    #[test]
    fn test_env_bad_number() {
        let mut config = CliConfig::default();
        let result = config.apply_env(|name| {
            (name == "ZEROCURVE_GRID_END").then(|| "thirty".to_string())
        });
        match result {
            Err(ConfigError::EnvError(msg)) => assert!(msg.contains("ZEROCURVE_GRID_END")),
            other => panic!("Expected EnvError, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            log_level: Some("trace".to_string()),
            reference_date: Some("2025-01-02".to_string()),
            grid_points: Some(7),
            format: Some("json".to_string()),
            ..Default::default()
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.reference_date_or_today(), Date::from_ymd(2025, 1, 2).unwrap());
        assert_eq!(config.grid.points, 7);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_args_bad_date() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            reference_date: Some("02/01/2025".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.merge_with_cli(&cli),
            Err(ConfigError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_build_config_priority() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format = \"json\"\nboundary = \"natural\"\n[grid]\npoints = 21").unwrap();

        let cli = CliArgs {
            config_file: Some(file.path().to_path_buf()),
            format: Some("csv".to_string()),
            ..Default::default()
        };
        let config = build_config_with(&cli, |name| {
            (name == "ZEROCURVE_GRID_POINTS").then(|| "31".to_string())
        })
        .unwrap();

        // CLI beats file, env beats file, file beats default
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.grid.points, 31);
        assert_eq!(config.boundary, SplineBoundary::Natural);
    }

    #[test]
    fn test_build_config_missing_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/zerocurve.toml")),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with(&cli, no_env),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidLogLevel("bad".to_string());
        assert!(err.to_string().contains("Invalid log level"));

        let err = ConfigError::InvalidBoundary("clamped".to_string());
        assert!(err.to_string().contains("not-a-knot"));
    }
}
