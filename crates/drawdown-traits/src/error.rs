//! Error types for sink operations.

use thiserror::Error;

/// Error returned by an event sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Sink is not reachable
    #[error("sink unavailable: {0}")]
    Unavailable(String),

    /// Event could not be encoded
    #[error("serialization error: {0}")]
    SerializationError(String),
}
