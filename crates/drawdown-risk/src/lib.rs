//! # drawdown-risk
//!
//! Monte Carlo drawdown analytics for equity portfolios.
//!
//! This crate provides:
//!
//! - **Valuation**: portfolio value against a market snapshot
//! - **Monte Carlo**: independent stress trials over forked markets, reduced
//!   into a max drawdown percentage
//! - **Scenarios**: normal and stress volatility assumptions with a binary
//!   risk classification
//!
//! Trials run in parallel with rayon above a configurable threshold. Each
//! trial is seeded from the run's base seed and its index, so a seeded run is
//! reproducible regardless of thread scheduling.
//!
//! ## Example
//!
//! ```rust
//! use drawdown_core::{Market, Portfolio};
//! use drawdown_risk::prelude::*;
//!
//! let market = Market::default_fixture(None);
//! let portfolio = Portfolio::builder().holding("TSLA", 20).build()?;
//!
//! let engine = RiskEngine::new(EngineConfig::default().with_seed(7));
//! let plan = AssessmentPlan::default().with_simulations(100);
//! let assessment = engine.assess(&portfolio, &market, &plan)?;
//! println!("{}", assessment.risk_level);
//! # Ok::<(), drawdown_core::DrawdownError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]

pub mod config;
pub mod engine;
pub mod params;
pub mod scenario;
pub mod simulation;
pub mod valuation;

pub use config::EngineConfig;
pub use engine::RiskEngine;
pub use params::MonteCarloParams;
pub use scenario::{AssessmentPlan, RiskAssessment, RiskLevel, StressScenario};
pub use simulation::DrawdownReport;
pub use valuation::portfolio_value;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::engine::RiskEngine;
    pub use crate::params::{MonteCarloParams, DEFAULT_SIMULATIONS, DEFAULT_STEPS};
    pub use crate::scenario::{
        AssessmentPlan, RiskAssessment, RiskLevel, StressScenario, HIGH_RISK_THRESHOLD_PCT,
    };
    pub use crate::simulation::DrawdownReport;
    pub use crate::valuation::portfolio_value;
}
