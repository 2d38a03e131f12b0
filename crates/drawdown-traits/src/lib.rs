//! # Drawdown Traits
//!
//! Capability traits the risk engine reports through.
//!
//! The engine depends only on [`sink::RiskEventSink`]. It works unchanged
//! when the sink is the no-op [`sink::EmptyEventSink`] or when a sink fails.
//!
//! ```ignore
//! RiskEngine::new(EngineConfig::default())
//!     .with_sink(Arc::new(MyAuditSink::connect()?))
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod sink;

pub use error::SinkError;
pub use sink::{EmptyEventSink, MemoryEventSink, RiskEvent, RiskEventSink};
