//! Simulate command implementation.
//!
//! Runs one Monte Carlo drawdown simulation at a given volatility.

use anyhow::Result;
use clap::Args;

use drawdown_risk::MonteCarloParams;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{format_percent, print_output, KeyValue};

/// Arguments for the simulate command.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Per-step volatility (e.g., 0.05 for 5%). Defaults to the stress volatility.
    #[arg(long)]
    pub volatility: Option<f64>,

    /// Number of trials. Defaults to the configured count.
    #[arg(short = 'n', long)]
    pub simulations: Option<usize>,

    /// Stress steps per trial. Defaults to the configured count.
    #[arg(long)]
    pub steps: Option<usize>,
}

impl SimulateArgs {
    /// Resolves the run parameters; flags win over the configuration file.
    pub fn params(&self, context: &Context) -> MonteCarloParams {
        let simulation = &context.config.simulation;
        MonteCarloParams::new(
            self.simulations.unwrap_or(simulation.simulations),
            self.volatility.unwrap_or(simulation.stress_volatility),
        )
        .with_steps(self.steps.unwrap_or(simulation.steps))
    }
}

/// Execute the simulate command.
pub fn execute(args: SimulateArgs, context: &Context, format: OutputFormat) -> Result<()> {
    let params = args.params(context);
    let report = context
        .engine
        .simulate(&context.portfolio, &context.market, &params)?;

    let rows = vec![
        KeyValue::new("Simulations", report.simulations.to_string()),
        KeyValue::new("Steps", report.steps.to_string()),
        KeyValue::new("Volatility", format!("{}", report.volatility)),
        KeyValue::new("Seed", report.seed.to_string()),
        KeyValue::from_money("Initial Value", report.initial_value),
        KeyValue::from_money("Max Loss", report.max_loss),
        KeyValue::from_percent("Max Drawdown", report.max_drawdown_pct),
        KeyValue::from_percent("Mean Drawdown", report.mean_drawdown_pct),
        KeyValue::from_percent("95th Percentile Drawdown", report.p95_drawdown_pct),
    ];

    match format {
        OutputFormat::Minimal => println!("{}", format_percent(report.max_drawdown_pct)),
        OutputFormat::Table => {
            context.header("Monte Carlo Drawdown");
            print_output(&rows, &report, format)?;
        }
        OutputFormat::Json => print_output(&rows, &report, format)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RiskConfig;

    #[test]
    fn test_flags_override_config() {
        let mut config = RiskConfig::default();
        config.simulation.simulations = 200;
        let context = Context::from_config(config, Some(1), true).unwrap();

        let defaults = SimulateArgs {
            volatility: None,
            simulations: None,
            steps: None,
        };
        let params = defaults.params(&context);
        assert_eq!(params.simulations, 200);
        assert_eq!(params.volatility, 0.05);
        assert_eq!(params.steps, 10);

        let explicit = SimulateArgs {
            volatility: Some(0.2),
            simulations: Some(5),
            steps: Some(3),
        };
        assert_eq!(explicit.params(&context), MonteCarloParams::new(5, 0.2).with_steps(3));
    }
}
