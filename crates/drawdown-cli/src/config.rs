//! Run configuration loaded from TOML.
//!
//! ```toml
//! [market]
//! prices = { AAPL = 190.0 }
//! instruments = [{ symbol = "MSFT", price = 410.0, category = "technology" }]
//!
//! [portfolio]
//! holdings = { AAPL = 50, GOOG = 10, TSLA = 20 }
//!
//! [simulation]
//! simulations = 1000
//! steps = 10
//! normal_volatility = 0.02
//! stress_volatility = 0.05
//! seed = 42
//!
//! [engine]
//! parallel = true
//! parallel_threshold = 64
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use drawdown_core::types::InstrumentCategory;
use drawdown_core::{Instrument, Market, Portfolio};
use drawdown_risk::params::{DEFAULT_SIMULATIONS, DEFAULT_STEPS};
use drawdown_risk::scenario::{NORMAL_VOLATILITY, STRESS_VOLATILITY};
use drawdown_risk::{AssessmentPlan, EngineConfig};

use crate::error::{CliError, CliResult};

/// Full run configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RiskConfig {
    /// Market adjustments on top of the default fixture.
    pub market: MarketSection,
    /// Portfolio holdings.
    pub portfolio: PortfolioSection,
    /// Simulation parameters.
    pub simulation: SimulationSection,
    /// Engine execution settings.
    pub engine: EngineConfig,
}

/// Market adjustments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarketSection {
    /// Price overrides for fixture symbols.
    pub prices: BTreeMap<String, f64>,
    /// Additional instruments.
    pub instruments: Vec<InstrumentEntry>,
}

/// An additional instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstrumentEntry {
    /// Ticker symbol.
    pub symbol: String,
    /// Baseline price.
    pub price: f64,
    /// Category tag.
    #[serde(default)]
    pub category: InstrumentCategory,
}

/// Portfolio holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortfolioSection {
    /// Symbol → quantity.
    pub holdings: BTreeMap<String, u64>,
}

impl Default for PortfolioSection {
    fn default() -> Self {
        Self {
            holdings: BTreeMap::from([
                ("AAPL".to_string(), 50),
                ("GOOG".to_string(), 10),
                ("TSLA".to_string(), 20),
            ]),
        }
    }
}

/// Simulation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationSection {
    /// Trials per scenario.
    pub simulations: usize,
    /// Stress steps per trial.
    pub steps: usize,
    /// Normal scenario volatility.
    pub normal_volatility: f64,
    /// Stress scenario volatility.
    pub stress_volatility: f64,
    /// Base seed.
    pub seed: Option<u64>,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            simulations: DEFAULT_SIMULATIONS,
            steps: DEFAULT_STEPS,
            normal_volatility: NORMAL_VOLATILITY,
            stress_volatility: STRESS_VOLATILITY,
            seed: None,
        }
    }
}

impl RiskConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            CliError::Config(reason) => CliError::ConfigParse {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> CliResult<Self> {
        toml::from_str(content).map_err(|e| CliError::Config(e.message().to_string()))
    }

    /// Builds the base market: the default fixture, price overrides, then
    /// additional instruments. A seed makes the market's own random source
    /// reproducible.
    pub fn build_market(&self, seed: Option<u64>) -> CliResult<Market> {
        let mut market = Market::default_fixture(seed);
        for (symbol, price) in &self.market.prices {
            market.set_price(symbol, *price)?;
        }
        for entry in &self.market.instruments {
            let instrument =
                Instrument::new(&entry.symbol, entry.price)?.with_category(entry.category);
            market.insert(instrument)?;
        }
        Ok(market)
    }

    /// Builds the portfolio.
    pub fn build_portfolio(&self) -> CliResult<Portfolio> {
        let builder = self
            .portfolio
            .holdings
            .iter()
            .fold(Portfolio::builder(), |builder, (symbol, quantity)| {
                builder.holding(symbol.clone(), *quantity)
            });
        Ok(builder.build()?)
    }

    /// Engine configuration with the effective seed applied.
    pub fn engine_config(&self, seed_override: Option<u64>) -> EngineConfig {
        let mut config = self.engine.clone();
        if let Some(seed) = seed_override.or(self.simulation.seed) {
            config.seed = Some(seed);
        }
        config
    }

    /// Assessment plan from the simulation section.
    pub fn assessment_plan(&self) -> AssessmentPlan {
        AssessmentPlan::default()
            .with_simulations(self.simulation.simulations)
            .with_steps(self.simulation.steps)
            .with_volatilities(
                self.simulation.normal_volatility,
                self.simulation.stress_volatility,
            )
    }
}
