//! Zerocurve CLI library
//!
//! Host layer around `curve_core`: configuration, the editable zero-rate
//! table, command implementations and output rendering. The `zerocurve`
//! binary in `main.rs` is a thin clap front end over these modules.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod table;

pub use config::{build_config, CliArgs, CliConfig};
pub use error::{CliError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
