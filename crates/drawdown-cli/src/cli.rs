//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AssessArgs, SimulateArgs};

/// Drawdown - Monte Carlo portfolio stress testing CLI
#[derive(Parser)]
#[command(name = "drawdown")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// TOML configuration file
    #[arg(short, long, global = true, env = "DRAWDOWN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base seed for reproducible runs
    #[arg(short, long, global = true, env = "DRAWDOWN_SEED")]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Value the portfolio on the base market
    Value,

    /// List the instruments of the base market
    Market,

    /// Run a single Monte Carlo drawdown simulation
    Simulate(SimulateArgs),

    /// Compare normal and stress scenarios and classify the risk
    Assess(AssessArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Minimal output (just the headline value)
    Minimal,
}
