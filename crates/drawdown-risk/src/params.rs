//! Monte Carlo run parameters.

use serde::{Deserialize, Serialize};

use drawdown_core::{DrawdownError, DrawdownResult};

/// Default number of stress steps (simulated days) per trial.
pub const DEFAULT_STEPS: usize = 10;

/// Default number of trials.
pub const DEFAULT_SIMULATIONS: usize = 1000;

/// Parameters of one Monte Carlo run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloParams {
    /// Number of independent trials.
    pub simulations: usize,
    /// Volatility applied at every stress step.
    pub volatility: f64,
    /// Stress steps per trial.
    pub steps: usize,
}

impl MonteCarloParams {
    /// Creates parameters with the default step count.
    #[must_use]
    pub fn new(simulations: usize, volatility: f64) -> Self {
        Self {
            simulations,
            volatility,
            steps: DEFAULT_STEPS,
        }
    }

    /// Sets the number of stress steps per trial.
    #[must_use]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Checks the parameter domain.
    ///
    /// # Errors
    ///
    /// Returns `DrawdownError::InvalidArgument` if `simulations` or `steps`
    /// is zero, or `volatility` is negative or not finite.
    pub fn validate(&self) -> DrawdownResult<()> {
        if self.simulations == 0 {
            return Err(DrawdownError::invalid_argument(
                "simulations must be positive",
            ));
        }
        if self.steps == 0 {
            return Err(DrawdownError::invalid_argument("steps must be positive"));
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(DrawdownError::invalid_argument(format!(
                "volatility must be a finite non-negative number, got {}",
                self.volatility
            )));
        }
        Ok(())
    }
}
