//! Rendering of curve results.

use std::io::Write;

use curve_core::curves::{CurvePoint, Pillar, ZeroCurve};
use curve_core::types::Date;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// Pillar marker for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarMarker {
    /// Canonical tenor label
    pub tenor: String,
    pub t: f64,
    pub rate: f64,
}

impl From<&Pillar> for PillarMarker {
    fn from(pillar: &Pillar) -> Self {
        Self {
            tenor: pillar
                .tenor
                .map(|tenor| tenor.to_string())
                .unwrap_or_default(),
            t: pillar.t,
            rate: pillar.rate,
        }
    }
}

/// Dense curve plus the pillars it was fitted to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveReport {
    pub reference_date: Date,
    /// Spline end condition name
    pub boundary: String,
    pub pillars: Vec<PillarMarker>,
    pub curve: Vec<CurvePoint>,
}

impl CurveReport {
    pub fn new(reference_date: Date, curve: &ZeroCurve, points: Vec<CurvePoint>) -> Self {
        Self {
            reference_date,
            boundary: curve.boundary().to_string(),
            pillars: curve.pillars().iter().map(PillarMarker::from).collect(),
            curve: points,
        }
    }

    /// Write the report in `format`.
    pub fn write<W: Write>(&self, format: OutputFormat, writer: W) -> Result<()> {
        match format {
            OutputFormat::Table => self.write_table(writer),
            OutputFormat::Csv => self.write_csv(writer),
            OutputFormat::Json => self.write_json(writer),
        }
    }

    fn write_table<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(
            writer,
            "Zero curve as of {} ({} spline)",
            self.reference_date, self.boundary
        )?;
        writeln!(writer)?;
        writeln!(writer, "{:<8} {:>12} {:>12}", "Tenor", "Years", "Rate (%)")?;
        writeln!(writer, "{}", "-".repeat(34))?;
        for pillar in &self.pillars {
            writeln!(
                writer,
                "{:<8} {:>12.6} {:>12.6}",
                pillar.tenor, pillar.t, pillar.rate
            )?;
        }
        writeln!(writer)?;
        writeln!(writer, "{:>12} {:>12}", "Years", "Rate (%)")?;
        writeln!(writer, "{}", "-".repeat(25))?;
        for point in &self.curve {
            writeln!(writer, "{:>12.6} {:>12.6}", point.t, point.rate)?;
        }
        Ok(())
    }

    /// One row per point: `series,tenor,t,rate` with series `pillar` or `curve`.
    fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["series", "tenor", "t", "rate"])?;
        for pillar in &self.pillars {
            csv_writer.write_record([
                "pillar",
                pillar.tenor.as_str(),
                &pillar.t.to_string(),
                &pillar.rate.to_string(),
            ])?;
        }
        for point in &self.curve {
            csv_writer.write_record(["curve", "", &point.t.to_string(), &point.rate.to_string()])?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        Ok(())
    }
}

/// Time offsets of individual tenor labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TenorOffset {
    pub tenor: String,
    pub years: f64,
}

/// Write tenor offsets in `format`.
pub fn write_offsets<W: Write>(
    offsets: &[TenorOffset],
    format: OutputFormat,
    mut writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(writer, "{:<8} {:>14}", "Tenor", "Years")?;
            writeln!(writer, "{}", "-".repeat(23))?;
            for offset in offsets {
                writeln!(writer, "{:<8} {:>14.10}", offset.tenor, offset.years)?;
            }
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for offset in offsets {
                csv_writer.serialize(offset)?;
            }
            csv_writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, offsets)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
