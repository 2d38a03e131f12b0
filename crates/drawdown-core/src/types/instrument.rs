//! Instrument price model.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Symbol;
use crate::error::{DrawdownError, DrawdownResult};

/// Lowest price a stress update can produce.
pub const PRICE_FLOOR: f64 = 0.01;

/// Marker classification for an instrument.
///
/// Carries no behavioral difference; every category follows the same price
/// model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentCategory {
    /// Generic listed equity.
    #[default]
    Equity,
    /// Technology sector equity.
    Technology,
}

impl fmt::Display for InstrumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equity => write!(f, "Equity"),
            Self::Technology => write!(f, "Technology"),
        }
    }
}

/// A tradable instrument with its current price.
///
/// The price is only changed through a stress update (or an explicit,
/// validated override). After every stress update the price is at least
/// [`PRICE_FLOOR`] and carries at most two decimal places.
///
/// # Example
///
/// ```rust
/// use drawdown_core::types::Instrument;
///
/// let mut aapl = Instrument::new("AAPL", 185.0).unwrap();
/// aapl.apply_shock(-0.5, 0.1);
/// assert_eq!(aapl.price(), 175.75);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "InstrumentData")]
pub struct Instrument {
    symbol: Symbol,
    price: f64,
    #[serde(default)]
    category: InstrumentCategory,
}

/// Serialized form; deserialization goes through [`Instrument::new`].
#[derive(Deserialize)]
struct InstrumentData {
    symbol: String,
    price: f64,
    #[serde(default)]
    category: InstrumentCategory,
}

impl TryFrom<InstrumentData> for Instrument {
    type Error = DrawdownError;

    fn try_from(data: InstrumentData) -> Result<Self, Self::Error> {
        Ok(Instrument::new(data.symbol, data.price)?.with_category(data.category))
    }
}

impl Instrument {
    /// Creates a new instrument.
    ///
    /// # Errors
    ///
    /// Returns `DrawdownError::InvalidArgument` if the symbol is invalid or
    /// the price is not a finite positive number.
    pub fn new(symbol: impl AsRef<str>, price: f64) -> DrawdownResult<Self> {
        let symbol = Symbol::new(symbol)?;
        validate_price(&symbol, price)?;
        Ok(Self {
            symbol,
            price,
            category: InstrumentCategory::default(),
        })
    }

    /// Builds an instrument from a fixture value known to be valid.
    pub(crate) fn fixture(
        symbol: &'static str,
        price: f64,
        category: InstrumentCategory,
    ) -> Self {
        Self {
            symbol: Symbol::from_static(symbol),
            price,
            category,
        }
    }

    /// Sets the category tag.
    #[must_use]
    pub fn with_category(mut self, category: InstrumentCategory) -> Self {
        self.category = category;
        self
    }

    /// Returns the symbol.
    #[must_use]
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Returns the current price.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns the category tag.
    #[must_use]
    pub fn category(&self) -> InstrumentCategory {
        self.category
    }

    /// Returns true for technology-tagged instruments.
    #[must_use]
    pub fn is_technology(&self) -> bool {
        self.category == InstrumentCategory::Technology
    }

    /// Replaces the price with a validated value.
    ///
    /// # Errors
    ///
    /// Returns `DrawdownError::InvalidArgument` if the price is not a finite
    /// positive number.
    pub fn set_price(&mut self, price: f64) -> DrawdownResult<()> {
        validate_price(&self.symbol, price)?;
        self.price = price;
        Ok(())
    }

    /// Applies one stress update using a standard normal draw from `rng`.
    ///
    /// Returns the new price.
    pub fn apply_stress<R: Rng + ?Sized>(&mut self, volatility: f64, rng: &mut R) -> f64 {
        let sample: f64 = StandardNormal.sample(rng);
        self.apply_shock(sample, volatility)
    }

    /// Applies one stress update for a given standard normal `sample`.
    ///
    /// `new = price * (1 + sample * volatility)`, floored at [`PRICE_FLOOR`]
    /// and then rounded to cents. Returns the new price.
    pub fn apply_shock(&mut self, sample: f64, volatility: f64) -> f64 {
        let shocked = self.price * (1.0 + sample * volatility);
        self.price = round_to_cents(shocked.max(PRICE_FLOOR));
        self.price
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {:.2}", self.symbol, self.price)
    }
}

/// Rounds a price to two decimal places.
#[must_use]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn validate_price(symbol: &Symbol, price: f64) -> DrawdownResult<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(DrawdownError::invalid_argument(format!(
            "price for {symbol} must be positive and finite, got {price}"
        )));
    }
    Ok(())
}
