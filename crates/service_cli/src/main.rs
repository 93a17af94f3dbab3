//! Zerocurve CLI - Zero-Rate Curve Interpolation
//!
//! # Commands
//!
//! - `zerocurve curve` - Fit the spline to a zero-rate table and print the dense curve
//! - `zerocurve tenor <LABEL>...` - Print the year offset of tenor labels
//! - `zerocurve table` - Print the built-in zero-rate table as CSV

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use service_cli::commands;
use service_cli::config::{build_config, CliArgs, CliConfig};
use service_cli::Result;

/// Zero-rate curve interpolation CLI
#[derive(Parser)]
#[command(name = "zerocurve")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (default: ./zerocurve.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Reference date for tenor conversion (YYYY-MM-DD, default: today)
    #[arg(short, long, global = true)]
    reference_date: Option<String>,

    /// Output format (table, csv, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit the zero curve and print it on a uniform grid
    Curve {
        /// CSV table with `Tenor,Zero Rate` headers (default: built-in USD table)
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Rate override as TENOR=RATE; repeatable
        #[arg(short, long = "set", value_name = "TENOR=RATE")]
        set: Vec<String>,

        /// First grid offset in years
        #[arg(long)]
        start: Option<f64>,

        /// Last grid offset in years
        #[arg(long)]
        end: Option<f64>,

        /// Number of grid points
        #[arg(short = 'n', long)]
        points: Option<usize>,

        /// Spline end condition (not-a-knot, natural)
        #[arg(short, long)]
        boundary: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the year offset of each tenor label
    Tenor {
        /// Tenor labels such as ON, 1W, 3M, 10Y
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// Print the built-in zero-rate table as CSV
    Table {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Initialise tracing; `RUST_LOG` wins over the configured level.
fn init_tracing(config: &CliConfig, verbose: bool) {
    let default_level = if verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut args = CliArgs {
        config_file: cli.config.clone(),
        log_level: cli.log_level.clone(),
        reference_date: cli.reference_date.clone(),
        format: cli.format.clone(),
        ..Default::default()
    };
    if let Commands::Curve {
        start,
        end,
        points,
        boundary,
        ..
    } = &cli.command
    {
        args.grid_start = *start;
        args.grid_end = *end;
        args.grid_points = *points;
        args.boundary = boundary.clone();
    }

    let config = build_config(&args)?;
    init_tracing(&config, cli.verbose);

    info!("zerocurve v{}", service_cli::VERSION);
    debug!("Configuration: {:?}", config);

    match cli.command {
        Commands::Curve {
            table, set, output, ..
        } => {
            let mut writer = open_output(output.as_ref())?;
            commands::curve::run(&config, table.as_deref(), &set, &mut writer)?;
            writer.flush()?;
        }
        Commands::Tenor { labels } => {
            commands::tenor::run(&config, &labels, io::stdout().lock())?;
        }
        Commands::Table { output } => {
            let mut writer = open_output(output.as_ref())?;
            commands::table::run(&mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}
