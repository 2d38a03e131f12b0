//! Monte Carlo trial execution.
//!
//! Each trial forks the base market with its own seed, runs the stress steps
//! and reports its worst loss against the initial value. Trials are mapped
//! independently and reduced afterwards, so the parallel and sequential paths
//! produce identical results for the same base seed.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use drawdown_core::{DrawdownResult, Market, Portfolio};

use crate::config::EngineConfig;
use crate::params::MonteCarloParams;
use crate::valuation::portfolio_value;

/// Outcome of a Monte Carlo run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawdownReport {
    /// Portfolio value on the unmutated base market.
    pub initial_value: f64,
    /// Largest loss observed in any trial, in currency units.
    pub max_loss: f64,
    /// `max_loss / initial_value * 100`.
    pub max_drawdown_pct: f64,
    /// Average of the per-trial worst drawdowns, in percent.
    pub mean_drawdown_pct: f64,
    /// 95th percentile of the per-trial worst drawdowns, in percent.
    pub p95_drawdown_pct: f64,
    /// Number of trials.
    pub simulations: usize,
    /// Stress steps per trial.
    pub steps: usize,
    /// Volatility applied at each step.
    pub volatility: f64,
    /// Base seed of the run.
    pub seed: u64,
}

/// Seed of trial `index` for a run seeded with `base_seed`.
#[must_use]
pub fn trial_seed(base_seed: u64, index: usize) -> u64 {
    base_seed.wrapping_add(index as u64)
}

/// Runs one trial and returns its worst loss (never negative).
///
/// The loss is measured against `initial`, the value on the base market, not
/// against the trial's own starting value.
pub fn run_trial(
    portfolio: &Portfolio,
    base: &Market,
    params: &MonteCarloParams,
    initial: f64,
    seed: u64,
) -> DrawdownResult<f64> {
    let mut market = base.fork(seed);
    let mut worst_loss = 0.0_f64;
    for _ in 0..params.steps {
        market.apply_stress(params.volatility);
        let current = portfolio_value(portfolio, &market)?;
        worst_loss = worst_loss.max(initial - current);
    }
    Ok(worst_loss)
}

/// Runs all trials and returns the per-trial worst losses in trial order.
pub(crate) fn run_trials(
    portfolio: &Portfolio,
    base: &Market,
    params: &MonteCarloParams,
    initial: f64,
    base_seed: u64,
    config: &EngineConfig,
) -> DrawdownResult<Vec<f64>> {
    let trial = |index: usize| {
        run_trial(portfolio, base, params, initial, trial_seed(base_seed, index))
    };

    if config.should_parallelize(params.simulations) {
        (0..params.simulations).into_par_iter().map(trial).collect()
    } else {
        (0..params.simulations).map(trial).collect()
    }
}

/// Aggregates per-trial worst losses into a report.
pub(crate) fn summarize(
    losses: &[f64],
    initial: f64,
    params: &MonteCarloParams,
    seed: u64,
) -> DrawdownReport {
    let max_loss = losses.iter().copied().fold(0.0_f64, f64::max);
    let mean_loss = if losses.is_empty() {
        0.0
    } else {
        losses.iter().sum::<f64>() / losses.len() as f64
    };

    DrawdownReport {
        initial_value: initial,
        max_loss,
        max_drawdown_pct: to_pct(max_loss, initial),
        mean_drawdown_pct: to_pct(mean_loss, initial),
        p95_drawdown_pct: to_pct(percentile(losses, 0.95), initial),
        simulations: params.simulations,
        steps: params.steps,
        volatility: params.volatility,
        seed,
    }
}

fn to_pct(loss: f64, initial: f64) -> f64 {
    (loss / initial) * 100.0
}

/// Nearest-rank percentile of `values` (`q` in `[0, 1]`).
fn percentile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let rank = (q * sorted.len() as f64).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}
