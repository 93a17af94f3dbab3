//! Curve command implementation
//!
//! Loads the zero-rate table, applies edits, fits the spline and renders the
//! dense curve with its pillars.

use std::io::Write;
use std::path::Path;

use curve_core::curves::ZeroCurve;
use curve_core::math::grid::linspace;
use curve_core::types::time::DAYS_PER_YEAR;
use tracing::{debug, info, warn};

use crate::config::CliConfig;
use crate::output::CurveReport;
use crate::table::{RateEdit, ZeroRateTable};
use crate::Result;

/// Whether `end` reaches more than a day past the last pillar at `hi`.
///
/// A 30Y pillar lands within a day of 30.0 depending on leap days.
fn past_last_pillar(end: f64, hi: f64) -> bool {
    end - hi > 1.0 / DAYS_PER_YEAR
}

/// Build the curve report for `table` under `config`.
pub fn build_report(config: &CliConfig, table: &ZeroRateTable) -> Result<CurveReport> {
    let reference = config.reference_date_or_today();
    info!(
        "Building {} curve from {} rows as of {}",
        config.boundary,
        table.len(),
        reference
    );

    let curve = ZeroCurve::from_tenors(&table.as_pairs(), reference, config.boundary)?;
    let (lo, hi) = curve.domain();
    debug!("Pillar domain [{:.6}, {:.6}]", lo, hi);

    let grid = &config.grid;
    if past_last_pillar(grid.end, hi) {
        warn!(
            "Grid end {} is past the last pillar {:.6}; rates there are extrapolated",
            grid.end, hi
        );
    }
    if grid.start < lo {
        info!(
            "Grid start {} is before the first pillar {:.6}; rates there are extrapolated",
            grid.start, lo
        );
    }

    let queries = linspace(grid.start, grid.end, grid.points);
    let points = curve.evaluate(&queries)?;
    debug!("Evaluated {} grid points", points.len());

    Ok(CurveReport::new(reference, &curve, points))
}

/// Run the curve command
pub fn run<W: Write>(
    config: &CliConfig,
    table_path: Option<&Path>,
    edits: &[String],
    writer: W,
) -> Result<()> {
    let mut table = match table_path {
        Some(path) => {
            info!("Loading table from {}", path.display());
            ZeroRateTable::from_path(path)?
        }
        None => ZeroRateTable::default(),
    };

    let reference = config.reference_date_or_today();
    for edit in edits {
        let edit: RateEdit = edit.parse()?;
        table.apply_edit(&edit, reference)?;
    }

    let report = build_report(config, &table)?;
    report.write(config.format, writer)?;

    info!("Curve complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GridConfig, OutputFormat};
    use crate::table::ZeroRateRow;
    use crate::CliError;
    use approx::assert_relative_eq;
    use curve_core::types::{tenor_to_years, CurveError, Date};

    fn config() -> CliConfig {
        CliConfig {
            reference_date: Some(Date::from_ymd(2025, 2, 25).unwrap()),
            grid: GridConfig {
                start: 0.0,
                end: 30.0,
                points: 61,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_default_table_report() {
        let report = build_report(&config(), &ZeroRateTable::default()).unwrap();
        assert_eq!(report.pillars.len(), 13);
        assert_eq!(report.curve.len(), 61);
        assert_eq!(report.curve[60].t, 30.0);
        assert!(report.curve.iter().all(|p| p.rate.is_finite()));
    }

    #[test]
    fn test_default_grid_stays_within_last_pillar() {
        let table = ZeroRateTable::default();
        let end = GridConfig::default().end;
        for (y, m, d) in [(2025, 1, 1), (2025, 2, 25), (2026, 3, 1), (2028, 2, 29)] {
            let reference = Date::from_ymd(y, m, d).unwrap();
            let curve =
                ZeroCurve::from_tenors(&table.as_pairs(), reference, Default::default()).unwrap();
            assert!(!past_last_pillar(end, curve.domain().1), "reference {}", reference);
        }
        assert!(past_last_pillar(40.0, 30.0));
    }

    #[test]
    fn test_pillars_lie_on_curve() {
        let config = config();
        let table = ZeroRateTable::default();
        let report = build_report(&config, &table).unwrap();
        let reference = config.reference_date_or_today();
        let curve = ZeroCurve::from_tenors(&table.as_pairs(), reference, config.boundary).unwrap();

        for marker in &report.pillars {
            assert_relative_eq!(
                marker.t,
                tenor_to_years(&marker.tenor, reference).unwrap(),
                epsilon = 1e-15
            );
            assert_relative_eq!(curve.rate(marker.t), marker.rate, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_edit_changes_pillar() {
        let mut buf = Vec::new();
        let config = CliConfig {
            format: OutputFormat::Json,
            ..config()
        };
        run(&config, None, &["10Y=6.0".to_string()], &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let pillars = value["pillars"].as_array().unwrap();
        let ten = pillars.iter().find(|p| p["tenor"] == "10Y").unwrap();
        assert_eq!(ten["rate"], 6.0);
    }

    #[test]
    fn test_equivalent_edits_keep_curve_buildable() {
        let mut buf = Vec::new();
        let edits = ["1D=4.5".to_string(), "12M=3.9".to_string()];
        run(&config(), None, &edits, &mut buf).unwrap();
        assert!(!buf.is_empty());
    }

    #[test]
    fn test_equivalent_rows_surface_curve_error() {
        let table = ZeroRateTable::new(vec![
            ZeroRateRow {
                tenor: "1Y".to_string(),
                rate: 4.0,
            },
            ZeroRateRow {
                tenor: "12M".to_string(),
                rate: 4.1,
            },
        ]);

        assert!(matches!(
            build_report(&config(), &table),
            Err(CliError::Curve(CurveError::DuplicateOrUnsortedAbscissa { .. }))
        ));
    }

    #[test]
    fn test_single_row_is_insufficient() {
        let table = ZeroRateTable::new(vec![ZeroRateRow {
            tenor: "1Y".to_string(),
            rate: 4.0,
        }]);
        assert!(matches!(
            build_report(&config(), &table),
            Err(CliError::Curve(CurveError::InsufficientPoints { got: 1, .. }))
        ));
    }
}
