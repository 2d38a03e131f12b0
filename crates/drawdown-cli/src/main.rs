//! Drawdown CLI - Monte Carlo stress testing for equity portfolios.
//!
//! # Usage
//!
//! ```bash
//! # Value the reference portfolio
//! drawdown value
//!
//! # One simulation at 5% volatility, reproducible
//! drawdown --seed 42 simulate --volatility 0.05 --simulations 1000
//!
//! # Normal versus stress assessment from a config file
//! drawdown --config risk.toml assess
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod error;
mod output;
mod sink;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so table/JSON output stays clean
    let default_filter = if cli.verbose {
        "info,drawdown=debug,drawdown_risk=debug,drawdown_core=debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("Drawdown CLI v{}", env!("CARGO_PKG_VERSION"));

    let context = Context::load(&cli)?;
    let format = cli.format;

    // Execute command
    match cli.command {
        Commands::Value => commands::value::execute(&context, format)?,
        Commands::Market => commands::market::execute(&context, format)?,
        Commands::Simulate(args) => commands::simulate::execute(args, &context, format)?,
        Commands::Assess(args) => commands::assess::execute(args, &context, format)?,
    }

    Ok(())
}
