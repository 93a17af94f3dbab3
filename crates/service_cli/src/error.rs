//! CLI error types.

use curve_core::types::CurveError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `zerocurve` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Malformed command-line value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Tenor parsing or curve construction failed
    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),

    /// Configuration could not be loaded or validated
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading or writing a file or stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Table CSV could not be read or written
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output could not be written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_error_converts() {
        let err: CliError = CurveError::InvalidTenorFormat("5X".to_string()).into();
        assert_eq!(err.to_string(), "Curve error: Invalid tenor format: 5X");
    }

    #[test]
    fn test_config_error_converts() {
        let err: CliError = ConfigError::InvalidFormat("xml".to_string()).into();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error: Invalid output format"));
    }
}
