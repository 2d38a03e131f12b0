//! Event sink traits.
//!
//! A sink receives progress and completion events from the risk engine. It is
//! an optional collaborator: publish failures are reported back to the engine,
//! which logs them and carries on.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::SinkError;

// =============================================================================
// EVENTS
// =============================================================================

/// Event emitted by the risk engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RiskEvent {
    /// A Monte Carlo run is about to start.
    SimulationStarted {
        /// Number of trials
        simulations: usize,
        /// Stress steps per trial
        steps: usize,
        /// Volatility applied at every step
        volatility: f64,
        /// Base seed; trial `i` uses `seed + i`
        seed: u64,
    },

    /// A Monte Carlo run finished.
    SimulationCompleted {
        /// Portfolio value on the base market
        initial_value: f64,
        /// Worst drawdown across all trials, in percent
        max_drawdown_pct: f64,
        /// Wall-clock duration in milliseconds
        elapsed_ms: u64,
    },

    /// A normal/stress assessment finished.
    AssessmentCompleted {
        /// Drawdown under the stress scenario, in percent
        stress_drawdown_pct: f64,
        /// Whether the stress drawdown crossed the high-risk threshold
        high_risk: bool,
    },
}

impl RiskEvent {
    /// Short event name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SimulationStarted { .. } => "simulation_started",
            Self::SimulationCompleted { .. } => "simulation_completed",
            Self::AssessmentCompleted { .. } => "assessment_completed",
        }
    }
}

// =============================================================================
// SINK TRAIT
// =============================================================================

/// Trait for risk event publishing.
pub trait RiskEventSink: Send + Sync {
    /// Publish one event.
    fn publish(&self, event: &RiskEvent) -> Result<(), SinkError>;
}

// =============================================================================
// BUILT-IN SINKS
// =============================================================================

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyEventSink;

impl RiskEventSink for EmptyEventSink {
    fn publish(&self, _event: &RiskEvent) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Sink that keeps events in memory.
#[derive(Debug, Default)]
pub struct MemoryEventSink {
    events: Mutex<Vec<RiskEvent>>,
}

impl MemoryEventSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<RiskEvent> {
        self.events.lock().clone()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl RiskEventSink for MemoryEventSink {
    fn publish(&self, event: &RiskEvent) -> Result<(), SinkError> {
        self.events.lock().push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> RiskEvent {
        RiskEvent::SimulationStarted {
            simulations: 10,
            steps: 10,
            volatility: 0.02,
            seed: 7,
        }
    }

    #[test]
    fn test_empty_sink_accepts_everything() {
        assert!(EmptyEventSink.publish(&started()).is_ok());
    }

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemoryEventSink::new();
        assert!(sink.is_empty());
        sink.publish(&started()).unwrap();
        sink.publish(&RiskEvent::AssessmentCompleted {
            stress_drawdown_pct: 12.0,
            high_risk: false,
        })
        .unwrap();

        let names: Vec<_> = sink.events().iter().map(RiskEvent::name).collect();
        assert_eq!(names, vec!["simulation_started", "assessment_completed"]);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_event_serialization() {
        let json = serde_json::to_string(&started()).unwrap();
        assert!(json.contains(r#""event":"simulation_started""#));
        let parsed: RiskEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, started());
    }

    #[test]
    fn test_sink_is_object_safe() {
        let sinks: Vec<Box<dyn RiskEventSink>> =
            vec![Box::new(EmptyEventSink), Box::new(MemoryEventSink::new())];
        for sink in &sinks {
            assert!(sink.publish(&started()).is_ok());
        }
    }
}
