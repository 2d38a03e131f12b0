//! Event sink that forwards engine events to the tracing subscriber.

use tracing::info;

use drawdown_traits::{RiskEvent, RiskEventSink, SinkError};

/// Logs every risk event at info level as a JSON payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl RiskEventSink for TracingSink {
    fn publish(&self, event: &RiskEvent) -> Result<(), SinkError> {
        let payload = serde_json::to_string(event)
            .map_err(|e| SinkError::SerializationError(e.to_string()))?;
        info!(target: "drawdown::events", event = event.name(), %payload);
        Ok(())
    }
}
