//! CLI command implementations.

pub mod assess;
pub mod market;
pub mod simulate;
pub mod value;

pub use assess::AssessArgs;
pub use simulate::SimulateArgs;

use std::sync::Arc;

use drawdown_core::{Market, Portfolio};
use drawdown_risk::RiskEngine;

use crate::cli::Cli;
use crate::config::RiskConfig;
use crate::error::CliResult;
use crate::sink::TracingSink;

/// Inputs shared by every command.
pub struct Context {
    /// Loaded configuration.
    pub config: RiskConfig,
    /// Base market; never mutated by a run.
    pub market: Market,
    /// Portfolio under test.
    pub portfolio: Portfolio,
    /// Engine with the effective seed applied.
    pub engine: RiskEngine,
    /// Skip headers.
    pub quiet: bool,
}

impl Context {
    /// Loads the configuration named on the command line (or the defaults)
    /// and builds the market, portfolio and engine from it.
    pub fn load(cli: &Cli) -> CliResult<Self> {
        let config = match &cli.config {
            Some(path) => RiskConfig::from_file(path)?,
            None => RiskConfig::default(),
        };
        Self::from_config(config, cli.seed, cli.quiet)
    }

    /// Builds the context from an already-loaded configuration.
    pub fn from_config(config: RiskConfig, seed: Option<u64>, quiet: bool) -> CliResult<Self> {
        let engine_config = config.engine_config(seed);
        let market = config.build_market(engine_config.seed)?;
        let portfolio = config.build_portfolio()?;
        let engine = RiskEngine::new(engine_config).with_sink(Arc::new(TracingSink));
        Ok(Self {
            config,
            market,
            portfolio,
            engine,
            quiet,
        })
    }

    /// Prints a section header unless quiet.
    pub fn header(&self, title: &str) {
        if !self.quiet {
            crate::output::print_header(title);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_flag_reaches_engine() {
        let context = Context::from_config(RiskConfig::default(), Some(9), true).unwrap();
        assert_eq!(context.engine.config().seed, Some(9));
        assert_eq!(context.portfolio.len(), 3);
    }
}
