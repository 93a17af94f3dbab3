//! Table command implementation
//!
//! Prints the built-in zero-rate table as CSV, the starting point for a
//! hand-edited `--table` file.

use std::io::Write;

use tracing::info;

use crate::table::ZeroRateTable;
use crate::Result;

/// Run the table command
pub fn run<W: Write>(writer: W) -> Result<()> {
    let table = ZeroRateTable::default();
    info!("Writing default table ({} rows)", table.len());
    table.write_csv(writer)
}
