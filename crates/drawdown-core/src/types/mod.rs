//! Domain types for portfolio stress simulation.
//!
//! - [`Symbol`]: Normalized ticker symbol
//! - [`Instrument`]: Tradable instrument and its price model
//! - [`InstrumentCategory`]: Marker tag for an instrument

mod instrument;
mod symbol;

pub use instrument::{round_to_cents, Instrument, InstrumentCategory, PRICE_FLOOR};
pub use symbol::Symbol;
pub(crate) use symbol::lookup_key;
