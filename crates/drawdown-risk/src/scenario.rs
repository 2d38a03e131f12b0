//! Stress scenarios and risk classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::params::{DEFAULT_SIMULATIONS, DEFAULT_STEPS};

/// Stress drawdown (in percent) above which a portfolio is high risk.
pub const HIGH_RISK_THRESHOLD_PCT: f64 = 15.0;

/// Volatility of the normal market scenario.
pub const NORMAL_VOLATILITY: f64 = 0.02;

/// Volatility of the stressed market scenario.
pub const STRESS_VOLATILITY: f64 = 0.05;

/// A named volatility assumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressScenario {
    /// Scenario name.
    pub name: String,
    /// Volatility applied at every stress step.
    pub volatility: f64,
}

impl StressScenario {
    /// Creates a scenario.
    #[must_use]
    pub fn new(name: impl Into<String>, volatility: f64) -> Self {
        Self {
            name: name.into(),
            volatility,
        }
    }

    /// Normal market conditions.
    #[must_use]
    pub fn normal() -> Self {
        Self::new("normal", NORMAL_VOLATILITY)
    }

    /// Stressed market conditions.
    #[must_use]
    pub fn stress() -> Self {
        Self::new("stress", STRESS_VOLATILITY)
    }
}

/// Binary risk classification of a stress drawdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Stress drawdown at or below the threshold.
    Acceptable,
    /// Stress drawdown above the threshold.
    High,
}

impl RiskLevel {
    /// Classifies a stress drawdown percentage.
    ///
    /// ```rust
    /// use drawdown_risk::RiskLevel;
    ///
    /// assert_eq!(RiskLevel::classify(15.0), RiskLevel::Acceptable);
    /// assert_eq!(RiskLevel::classify(15.01), RiskLevel::High);
    /// ```
    #[must_use]
    pub fn classify(stress_drawdown_pct: f64) -> Self {
        if stress_drawdown_pct > HIGH_RISK_THRESHOLD_PCT {
            Self::High
        } else {
            Self::Acceptable
        }
    }

    /// Returns true for [`RiskLevel::High`].
    #[must_use]
    pub fn is_high(self) -> bool {
        self == Self::High
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Acceptable => write!(f, "Risk Acceptable"),
            Self::High => write!(f, "High Risk"),
        }
    }
}

/// Plan for a normal-versus-stress assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentPlan {
    /// Trials per scenario.
    pub simulations: usize,
    /// Stress steps per trial.
    pub steps: usize,
    /// Normal scenario.
    pub normal: StressScenario,
    /// Stress scenario; its drawdown drives the classification.
    pub stress: StressScenario,
}

impl Default for AssessmentPlan {
    fn default() -> Self {
        Self {
            simulations: DEFAULT_SIMULATIONS,
            steps: DEFAULT_STEPS,
            normal: StressScenario::normal(),
            stress: StressScenario::stress(),
        }
    }
}

impl AssessmentPlan {
    /// Sets the trial count.
    #[must_use]
    pub fn with_simulations(mut self, simulations: usize) -> Self {
        self.simulations = simulations;
        self
    }

    /// Sets the steps per trial.
    #[must_use]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Replaces both scenario volatilities.
    #[must_use]
    pub fn with_volatilities(mut self, normal: f64, stress: f64) -> Self {
        self.normal.volatility = normal;
        self.stress.volatility = stress;
        self
    }
}

/// Result of a normal-versus-stress assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Portfolio value on the base market.
    pub initial_value: f64,
    /// Max drawdown under the normal scenario, in percent.
    pub normal_drawdown_pct: f64,
    /// Max drawdown under the stress scenario, in percent.
    pub stress_drawdown_pct: f64,
    /// Classification of the stress drawdown.
    pub risk_level: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(RiskLevel::classify(0.0), RiskLevel::Acceptable);
        assert_eq!(RiskLevel::classify(HIGH_RISK_THRESHOLD_PCT), RiskLevel::Acceptable);
        assert_eq!(RiskLevel::classify(15.000_001), RiskLevel::High);
        assert!(RiskLevel::classify(40.0).is_high());
    }

    #[test]
    fn test_display() {
        assert_eq!(RiskLevel::High.to_string(), "High Risk");
        assert_eq!(RiskLevel::Acceptable.to_string(), "Risk Acceptable");
    }

    #[test]
    fn test_default_plan() {
        let plan = AssessmentPlan::default();
        assert_eq!(plan.simulations, 1000);
        assert_eq!(plan.steps, 10);
        assert!((plan.normal.volatility - 0.02).abs() < f64::EPSILON);
        assert!((plan.stress.volatility - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn test_plan_builder() {
        let plan = AssessmentPlan::default()
            .with_simulations(50)
            .with_steps(5)
            .with_volatilities(0.01, 0.2);
        assert_eq!(plan.simulations, 50);
        assert_eq!(plan.steps, 5);
        assert_eq!(plan.normal.name, "normal");
        assert!((plan.stress.volatility - 0.2).abs() < f64::EPSILON);
    }
}
