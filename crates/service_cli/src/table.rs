//! Editable zero-rate table.
//!
//! Holds the rows fed into curve construction: the built-in USD table, a CSV
//! file with `Tenor,Zero Rate` headers, and `TENOR=RATE` edits on top.

use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use curve_core::types::{Date, Tenor};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CliError, Result};

/// Built-in USD zero table, `ON` to `30Y`, rates in percent.
pub const DEFAULT_ROWS: [(&str, f64); 13] = [
    ("ON", 4.43),
    ("1M", 4.496),
    ("3M", 4.448),
    ("6M", 4.442),
    ("1Y", 4.087),
    ("2Y", 4.328),
    ("3Y", 4.321),
    ("5Y", 4.419),
    ("7Y", 4.502),
    ("10Y", 4.778),
    ("15Y", 5.085),
    ("20Y", 5.287),
    ("30Y", 4.589),
];

/// One table row as read from and written to CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroRateRow {
    /// Tenor label as entered
    #[serde(rename = "Tenor")]
    pub tenor: String,
    /// Zero rate in percent
    #[serde(rename = "Zero Rate")]
    pub rate: f64,
}

/// A single `TENOR=RATE` override.
#[derive(Debug, Clone, PartialEq)]
pub struct RateEdit {
    pub tenor: Tenor,
    pub rate: f64,
}

impl FromStr for RateEdit {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        let (label, rate) = s.split_once('=').ok_or_else(|| {
            CliError::InvalidArgument(format!("Edit '{}' must look like TENOR=RATE", s))
        })?;

        let tenor: Tenor = label.trim().parse()?;
        let rate: f64 = rate
            .trim()
            .parse()
            .map_err(|_| CliError::InvalidArgument(format!("Rate '{}' is not a number", rate)))?;
        if !rate.is_finite() {
            return Err(CliError::InvalidArgument(format!(
                "Rate for {} must be finite, got {}",
                tenor, rate
            )));
        }

        Ok(Self { tenor, rate })
    }
}

/// Ordered (tenor, rate) rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroRateTable {
    rows: Vec<ZeroRateRow>,
}

impl Default for ZeroRateTable {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS
                .iter()
                .map(|&(tenor, rate)| ZeroRateRow {
                    tenor: tenor.to_string(),
                    rate,
                })
                .collect(),
        }
    }
}

impl ZeroRateTable {
    /// Table from explicit rows, in the order given.
    pub fn new(rows: Vec<ZeroRateRow>) -> Self {
        Self { rows }
    }

    /// Read a table from CSV with `Tenor,Zero Rate` headers.
    ///
    /// Rates must parse as finite numbers. Tenor labels are kept verbatim and
    /// only validated when the curve is built.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.deserialize() {
            let row: ZeroRateRow = record?;
            if !row.rate.is_finite() {
                return Err(CliError::InvalidArgument(format!(
                    "Rate for {} must be finite, got {}",
                    row.tenor, row.rate
                )));
            }
            rows.push(row);
        }

        debug!("Read {} table rows", rows.len());
        Ok(Self { rows })
    }

    /// Read a table from a CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Apply an edit.
    ///
    /// Overwrites the first row whose tenor lands on the same date from
    /// `reference` (so `1D` edits `ON` and `12M` edits `1Y`), or appends a row
    /// when none does. Rows with unparsable labels never match.
    pub fn apply_edit(&mut self, edit: &RateEdit, reference: Date) -> Result<()> {
        let target = edit.tenor.add_to(reference)?;
        let existing = self.rows.iter_mut().find(|row| {
            row.tenor
                .parse::<Tenor>()
                .and_then(|tenor| tenor.add_to(reference))
                .is_ok_and(|date| date == target)
        });

        match existing {
            Some(row) => {
                debug!("Set {} from {} to {}", row.tenor, row.rate, edit.rate);
                row.rate = edit.rate;
            }
            None => {
                debug!("Append {} at {}", edit.tenor, edit.rate);
                self.rows.push(ZeroRateRow {
                    tenor: edit.tenor.to_string(),
                    rate: edit.rate,
                });
            }
        }
        Ok(())
    }

    /// Write the table as CSV with headers.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn rows(&self) -> &[ZeroRateRow] {
        &self.rows
    }

    /// Rows as (label, rate) pairs for curve construction.
    pub fn as_pairs(&self) -> Vec<(&str, f64)> {
        self.rows.iter().map(|row| (row.tenor.as_str(), row.rate)).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Date {
        Date::from_ymd(2025, 2, 25).unwrap()
    }

    #[test]
    fn test_default_table() {
        let table = ZeroRateTable::default();
        assert_eq!(table.len(), 13);
        assert_eq!(table.rows()[0].tenor, "ON");
        assert_eq!(table.rows()[12].tenor, "30Y");
        assert_eq!(table.rows()[12].rate, 4.589);
    }

    #[test]
    fn test_parse_edit() {
        let edit: RateEdit = "10Y=5.1".parse().unwrap();
        assert_eq!(edit.tenor, "10Y".parse::<Tenor>().unwrap());
        assert_eq!(edit.rate, 5.1);

        let edit: RateEdit = " 3m = 4.2 ".parse().unwrap();
        assert_eq!(edit.tenor.to_string(), "3M");
    }

    #[test]
    fn test_parse_edit_errors() {
        assert!(matches!(
            "10Y".parse::<RateEdit>(),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            "10Y=abc".parse::<RateEdit>(),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            "10Y=NaN".parse::<RateEdit>(),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!("5X=4.0".parse::<RateEdit>(), Err(CliError::Curve(_))));
    }

    #[test]
    fn test_edit_overwrites_matching_tenor() {
        let mut table = ZeroRateTable::default();
        table.apply_edit(&"1y=3.9".parse().unwrap(), reference()).unwrap();
        assert_eq!(table.len(), 13);
        assert_eq!(table.rows()[4].tenor, "1Y");
        assert_eq!(table.rows()[4].rate, 3.9);
    }

    #[test]
    fn test_edit_matches_equivalent_tenor() {
        let mut table = ZeroRateTable::default();
        table.apply_edit(&"1D=4.5".parse().unwrap(), reference()).unwrap();
        table.apply_edit(&"12M=3.8".parse().unwrap(), reference()).unwrap();

        assert_eq!(table.len(), 13);
        assert_eq!(table.rows()[0].tenor, "ON");
        assert_eq!(table.rows()[0].rate, 4.5);
        assert_eq!(table.rows()[4].tenor, "1Y");
        assert_eq!(table.rows()[4].rate, 3.8);
    }

    #[test]
    fn test_edit_skips_unparsable_rows() {
        let mut table = ZeroRateTable::new(vec![ZeroRateRow {
            tenor: "bad".to_string(),
            rate: 1.0,
        }]);
        table.apply_edit(&"1Y=4.0".parse().unwrap(), reference()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].rate, 1.0);
    }

    #[test]
    fn test_edit_appends_missing_tenor() {
        let mut table = ZeroRateTable::default();
        table.apply_edit(&"4Y=4.4".parse().unwrap(), reference()).unwrap();
        assert_eq!(table.len(), 14);
        assert_eq!(
            table.rows().last(),
            Some(&ZeroRateRow {
                tenor: "4Y".to_string(),
                rate: 4.4
            })
        );
    }

    #[test]
    fn test_csv_roundtrip_keeps_headers() {
        let mut buf = Vec::new();
        ZeroRateTable::default().write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Tenor,Zero Rate\n"));
        assert!(text.contains("ON,4.43\n"));

        let parsed = ZeroRateTable::from_reader(text.as_bytes()).unwrap();
        assert_eq!(parsed, ZeroRateTable::default());
    }

    #[test]
    fn test_csv_trims_fields() {
        let table = ZeroRateTable::from_reader("Tenor, Zero Rate\n 1Y , 4.0\n2Y,4.5\n".as_bytes())
            .unwrap();
        assert_eq!(table.as_pairs(), vec![("1Y", 4.0), ("2Y", 4.5)]);
    }

    #[test]
    fn test_csv_rejects_bad_rate() {
        let result = ZeroRateTable::from_reader("Tenor,Zero Rate\n1Y,four\n".as_bytes());
        assert!(matches!(result, Err(CliError::Csv(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = ZeroRateTable::from_path(Path::new("/nonexistent/table.csv"));
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }
}
