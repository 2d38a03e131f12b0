//! Monte Carlo risk engine.
//!
//! # Example
//!
//! ```rust
//! use drawdown_core::{Market, Portfolio};
//! use drawdown_risk::{EngineConfig, MonteCarloParams, RiskEngine};
//!
//! let market = Market::default_fixture(None);
//! let portfolio = Portfolio::builder()
//!     .holding("AAPL", 50)
//!     .holding("GOOG", 10)
//!     .holding("TSLA", 20)
//!     .build()?;
//!
//! let engine = RiskEngine::new(EngineConfig::default().with_seed(42));
//! assert_eq!(engine.value(&portfolio, &market)?, 15_400.0);
//!
//! let drawdown = engine.monte_carlo(&portfolio, &market, &MonteCarloParams::new(500, 0.05))?;
//! assert!(drawdown > 0.0);
//! # Ok::<(), drawdown_core::DrawdownError>(())
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use drawdown_core::{DrawdownError, DrawdownResult, Market, Portfolio};
use drawdown_traits::{EmptyEventSink, RiskEvent, RiskEventSink};

use crate::config::EngineConfig;
use crate::params::MonteCarloParams;
use crate::scenario::{AssessmentPlan, RiskAssessment, RiskLevel};
use crate::simulation::{run_trials, summarize, trial_seed, DrawdownReport};
use crate::valuation::portfolio_value;

/// Engine computing portfolio value and Monte Carlo drawdown.
///
/// Stateless across calls: every run forks the base market per trial and
/// never mutates its inputs.
#[derive(Clone)]
pub struct RiskEngine {
    config: EngineConfig,
    sink: Arc<dyn RiskEventSink>,
}

impl RiskEngine {
    /// Creates an engine reporting to the no-op sink.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            sink: Arc::new(EmptyEventSink),
        }
    }

    /// Replaces the event sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn RiskEventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes the portfolio value on `market`.
    ///
    /// # Errors
    ///
    /// Returns `DrawdownError::NotFound` if a held symbol is missing.
    pub fn value(&self, portfolio: &Portfolio, market: &Market) -> DrawdownResult<f64> {
        portfolio_value(portfolio, market)
    }

    /// Runs a Monte Carlo simulation and returns the max drawdown in percent.
    ///
    /// # Errors
    ///
    /// See [`RiskEngine::simulate`].
    pub fn monte_carlo(
        &self,
        portfolio: &Portfolio,
        base_market: &Market,
        params: &MonteCarloParams,
    ) -> DrawdownResult<f64> {
        self.simulate(portfolio, base_market, params)
            .map(|report| report.max_drawdown_pct)
    }

    /// Runs a Monte Carlo simulation and returns the full report.
    ///
    /// The initial value is computed once on the unmutated base market. Each
    /// trial forks the base market, applies `params.steps` stress steps and
    /// tracks its worst loss against that initial value.
    ///
    /// # Errors
    ///
    /// - `DrawdownError::InvalidArgument` for invalid parameters
    /// - `DrawdownError::NotFound` if a held symbol is missing
    /// - `DrawdownError::DivisionByZero` if the initial value is not positive
    pub fn simulate(
        &self,
        portfolio: &Portfolio,
        base_market: &Market,
        params: &MonteCarloParams,
    ) -> DrawdownResult<DrawdownReport> {
        self.simulate_with_seed(portfolio, base_market, params, self.config.seed)
    }

    fn simulate_with_seed(
        &self,
        portfolio: &Portfolio,
        base_market: &Market,
        params: &MonteCarloParams,
        seed: Option<u64>,
    ) -> DrawdownResult<DrawdownReport> {
        params.validate()?;

        let initial = portfolio_value(portfolio, base_market)?;
        if !initial.is_finite() {
            return Err(DrawdownError::invalid_argument(format!(
                "initial portfolio value is not finite: {initial}"
            )));
        }
        if initial <= 0.0 {
            return Err(DrawdownError::division_by_zero(format!(
                "drawdown normalization (initial value {initial})"
            )));
        }

        let seed = seed.unwrap_or_else(rand::random);
        debug!(
            simulations = params.simulations,
            steps = params.steps,
            volatility = params.volatility,
            seed,
            parallel = self.config.should_parallelize(params.simulations),
            "starting Monte Carlo run"
        );
        self.publish(&RiskEvent::SimulationStarted {
            simulations: params.simulations,
            steps: params.steps,
            volatility: params.volatility,
            seed,
        });

        let started = Instant::now();
        let losses = run_trials(portfolio, base_market, params, initial, seed, &self.config)?;
        let report = summarize(&losses, initial, params, seed);
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        info!(
            volatility = params.volatility,
            max_drawdown_pct = report.max_drawdown_pct,
            elapsed_ms,
            "Monte Carlo run complete"
        );
        self.publish(&RiskEvent::SimulationCompleted {
            initial_value: report.initial_value,
            max_drawdown_pct: report.max_drawdown_pct,
            elapsed_ms,
        });

        Ok(report)
    }

    /// Runs the normal and stress scenarios and classifies the result.
    ///
    /// The classification uses the stress scenario drawdown. With a configured
    /// seed `s`, the normal scenario runs from `s` and the stress scenario from
    /// `s + simulations`, so no trial seed is shared between the two.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`RiskEngine::simulate`].
    pub fn assess(
        &self,
        portfolio: &Portfolio,
        base_market: &Market,
        plan: &AssessmentPlan,
    ) -> DrawdownResult<RiskAssessment> {
        let run = |volatility: f64, seed: Option<u64>| {
            let params = MonteCarloParams::new(plan.simulations, volatility).with_steps(plan.steps);
            self.simulate_with_seed(portfolio, base_market, &params, seed)
        };

        let stress_seed = self.config.seed.map(|s| trial_seed(s, plan.simulations));
        let normal = run(plan.normal.volatility, self.config.seed)?;
        let stress = run(plan.stress.volatility, stress_seed)?;
        let risk_level = RiskLevel::classify(stress.max_drawdown_pct);

        self.publish(&RiskEvent::AssessmentCompleted {
            stress_drawdown_pct: stress.max_drawdown_pct,
            high_risk: risk_level.is_high(),
        });

        Ok(RiskAssessment {
            initial_value: normal.initial_value,
            normal_drawdown_pct: normal.max_drawdown_pct,
            stress_drawdown_pct: stress.max_drawdown_pct,
            risk_level,
        })
    }

    fn publish(&self, event: &RiskEvent) {
        if let Err(e) = self.sink.publish(event) {
            warn!(event = event.name(), error = %e, "risk event sink failed");
        }
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl fmt::Debug for RiskEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiskEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
