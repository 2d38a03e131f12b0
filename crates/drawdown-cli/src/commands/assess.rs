//! Assess command implementation.
//!
//! Runs the normal and stress scenarios and classifies the portfolio by its
//! stress drawdown.

use anyhow::Result;
use clap::Args;

use drawdown_risk::AssessmentPlan;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_output, risk_label, KeyValue};

/// Arguments for the assess command.
#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Trials per scenario
    #[arg(short = 'n', long)]
    pub simulations: Option<usize>,

    /// Stress steps per trial
    #[arg(long)]
    pub steps: Option<usize>,

    /// Normal scenario volatility
    #[arg(long)]
    pub normal_vol: Option<f64>,

    /// Stress scenario volatility
    #[arg(long)]
    pub stress_vol: Option<f64>,
}

impl AssessArgs {
    /// Resolves the plan; flags win over the configuration file.
    pub fn plan(&self, context: &Context) -> AssessmentPlan {
        let base = context.config.assessment_plan();
        let normal = self.normal_vol.unwrap_or(base.normal.volatility);
        let stress = self.stress_vol.unwrap_or(base.stress.volatility);
        let simulations = self.simulations.unwrap_or(base.simulations);
        let steps = self.steps.unwrap_or(base.steps);
        base.with_simulations(simulations)
            .with_steps(steps)
            .with_volatilities(normal, stress)
    }
}

/// Execute the assess command.
pub fn execute(args: AssessArgs, context: &Context, format: OutputFormat) -> Result<()> {
    let plan = args.plan(context);
    let assessment = context
        .engine
        .assess(&context.portfolio, &context.market, &plan)?;

    let rows = vec![
        KeyValue::from_money("Initial Value", assessment.initial_value),
        KeyValue::from_percent(
            format!("Max Drawdown (Normal, vol {})", plan.normal.volatility),
            assessment.normal_drawdown_pct,
        ),
        KeyValue::from_percent(
            format!("Max Drawdown (Stress, vol {})", plan.stress.volatility),
            assessment.stress_drawdown_pct,
        ),
        KeyValue::new("Assessment", risk_label(assessment.risk_level)),
    ];

    match format {
        OutputFormat::Minimal => println!("{}", assessment.risk_level),
        OutputFormat::Table => {
            context.header("Risk Assessment");
            print_output(&rows, &assessment, format)?;
        }
        OutputFormat::Json => print_output(&rows, &assessment, format)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RiskConfig;

    #[test]
    fn test_plan_merges_flags() {
        let context = Context::from_config(RiskConfig::default(), Some(1), true).unwrap();
        let args = AssessArgs {
            simulations: Some(10),
            steps: None,
            normal_vol: None,
            stress_vol: Some(0.3),
        };
        let plan = args.plan(&context);
        assert_eq!(plan.simulations, 10);
        assert_eq!(plan.steps, 10);
        assert_eq!(plan.normal.volatility, 0.02);
        assert_eq!(plan.stress.volatility, 0.3);
    }
}
