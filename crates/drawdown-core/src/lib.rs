//! # Drawdown Core
//!
//! Core types for the Drawdown portfolio stress engine.
//!
//! This crate provides the building blocks the risk engine evaluates:
//!
//! - **Types**: [`Symbol`](types::Symbol) and the [`Instrument`](types::Instrument) price model
//! - **Market**: instruments keyed by symbol with a market-local random source
//! - **Portfolio**: immutable symbol → quantity holdings
//! - **Errors**: [`DrawdownError`] with `NotFound`, `InvalidArgument` and `DivisionByZero` kinds
//!
//! ## Example
//!
//! ```rust
//! use drawdown_core::prelude::*;
//!
//! let mut market = Market::default_fixture(Some(42));
//! market.apply_stress(0.05);
//!
//! let price = market.price("AAPL")?;
//! assert!(price >= PRICE_FLOOR);
//! # Ok::<(), DrawdownError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod market;
pub mod portfolio;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{DrawdownError, DrawdownResult};
    pub use crate::market::{Market, MarketBuilder, DEFAULT_FIXTURE};
    pub use crate::portfolio::{Portfolio, PortfolioBuilder, DEFAULT_REFERENCE_CAPITAL};
    pub use crate::types::{Instrument, InstrumentCategory, Symbol, PRICE_FLOOR};
}

// Re-export commonly used types at crate root
pub use error::{DrawdownError, DrawdownResult};
pub use market::Market;
pub use portfolio::Portfolio;
pub use types::{Instrument, Symbol};
