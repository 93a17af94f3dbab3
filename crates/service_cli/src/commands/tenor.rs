//! Tenor command implementation
//!
//! Converts tenor labels into year offsets from the reference date.

use std::io::Write;

use curve_core::types::tenor_to_years;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::output::{write_offsets, TenorOffset};
use crate::{CliError, Result};

/// Run the tenor command
pub fn run<W: Write>(config: &CliConfig, labels: &[String], writer: W) -> Result<()> {
    if labels.is_empty() {
        return Err(CliError::InvalidArgument(
            "At least one tenor label is required".to_string(),
        ));
    }

    let reference = config.reference_date_or_today();
    info!("Converting {} tenors as of {}", labels.len(), reference);

    let offsets = labels
        .iter()
        .map(|label| {
            let years = tenor_to_years(label, reference)?;
            debug!("{} -> {}", label, years);
            Ok::<_, CliError>(TenorOffset {
                tenor: label.clone(),
                years,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    write_offsets(&offsets, config.format, writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use approx::assert_relative_eq;
    use curve_core::types::{CurveError, Date};

    fn config() -> CliConfig {
        CliConfig {
            reference_date: Some(Date::from_ymd(2025, 2, 25).unwrap()),
            format: OutputFormat::Json,
            ..Default::default()
        }
    }

    #[test]
    fn test_offsets_for_labels() {
        let mut buf = Vec::new();
        run(&config(), &["ON".to_string(), "1Y".to_string()], &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["tenor"], "ON");
        assert_relative_eq!(value[0]["years"].as_f64().unwrap(), 1.0 / 365.25, epsilon = 1e-12);
        assert_relative_eq!(value[1]["years"].as_f64().unwrap(), 365.0 / 365.25, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_label() {
        let result = run(&config(), &["5X".to_string()], Vec::new());
        assert!(matches!(
            result,
            Err(CliError::Curve(CurveError::InvalidTenorFormat(_)))
        ));
    }

    #[test]
    fn test_no_labels() {
        assert!(matches!(
            run(&config(), &[], Vec::new()),
            Err(CliError::InvalidArgument(_))
        ));
    }
}
