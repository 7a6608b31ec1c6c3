use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Spindrift station time-series tool.
#[derive(Parser)]
#[command(
    name = "spindrift",
    version,
    about = "Inspect, sample, smooth, and convert station wind and current time files"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file with defaults.
    #[arg(short, long, global = true, default_value = "spindrift.toml")]
    pub config: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Summarise a station time file.
    Inspect(InspectArgs),
    /// Query interpolated values at given timestamps.
    Sample(SampleArgs),
    /// Apply a trailing running average and write the result.
    Smooth(SmoothArgs),
    /// Convert a time file to other units or another layout.
    Convert(ConvertArgs),
}

/// Arguments for the `inspect` subcommand.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the station time file.
    pub file: PathBuf,

    /// Format selector for the file's value columns (uv, r-theta, theta-r).
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `sample` subcommand.
#[derive(clap::Args)]
pub struct SampleArgs {
    /// Path to the station time file.
    pub file: PathBuf,

    /// Format selector for the file's value columns.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Query timestamps in epoch seconds (repeatable).
    #[arg(long = "at", required = true)]
    pub at: Vec<i64>,

    /// Scale factor applied to every queried value.
    #[arg(long)]
    pub scale: Option<f64>,
}

/// Arguments for the `smooth` subcommand.
#[derive(clap::Args)]
pub struct SmoothArgs {
    /// Path to the station time file.
    pub file: PathBuf,

    /// Format selector for the file's value columns.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Trailing window size in hours.
    #[arg(long)]
    pub window_hours: Option<f64>,

    /// Path for the smoothed output file.
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Path to the station time file.
    pub file: PathBuf,

    /// Format selector for the input file's value columns.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Path for the converted output file.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Target units (knots, m/s, mph).
    #[arg(long)]
    pub to_units: String,

    /// Target layout for the output value columns.
    #[arg(long, default_value = "r-theta")]
    pub to_format: String,
}
