//! Market of instruments and stress application.
//!
//! A [`Market`] owns its instruments and a market-local random source. Each
//! call to [`Market::apply_stress`] is one simulated day: every instrument is
//! updated before the call returns, so any valuation sees a consistent state.
//!
//! Simulation trials must not share price state or random streams. Use
//! [`Market::fork`] for a deterministic, independently seeded copy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use crate::error::{DrawdownError, DrawdownResult};
use crate::types::{lookup_key, Instrument, InstrumentCategory, Symbol};

/// Baseline prices of the default market fixture.
pub const DEFAULT_FIXTURE: [(&str, f64, InstrumentCategory); 4] = [
    ("AAPL", 185.0, InstrumentCategory::Technology),
    ("GOOG", 135.0, InstrumentCategory::Technology),
    ("TSLA", 240.0, InstrumentCategory::Equity),
    ("AMZN", 145.0, InstrumentCategory::Equity),
];

/// A collection of instruments keyed by symbol.
///
/// Instruments are kept in symbol order so that a seeded market draws its
/// random samples in a reproducible sequence.
pub struct Market {
    instruments: BTreeMap<Symbol, Instrument>,
    rng: StdRng,
}

impl Market {
    /// Creates a market from a set of instruments.
    ///
    /// `seed` fixes the market-local random source; `None` seeds from OS
    /// entropy.
    ///
    /// # Errors
    ///
    /// Returns `DrawdownError::InvalidArgument` if a symbol appears twice.
    pub fn new(
        instruments: impl IntoIterator<Item = Instrument>,
        seed: Option<u64>,
    ) -> DrawdownResult<Self> {
        let mut map = BTreeMap::new();
        for instrument in instruments {
            let symbol = instrument.symbol().clone();
            if map.insert(symbol.clone(), instrument).is_some() {
                return Err(DrawdownError::invalid_argument(format!(
                    "duplicate instrument {symbol}"
                )));
            }
        }
        debug!(instruments = map.len(), seeded = seed.is_some(), "market created");
        Ok(Self {
            instruments: map,
            rng: rng_from(seed),
        })
    }

    /// Creates the default fixture market (AAPL, GOOG, TSLA, AMZN).
    #[must_use]
    pub fn default_fixture(seed: Option<u64>) -> Self {
        let instruments = DEFAULT_FIXTURE
            .iter()
            .map(|&(symbol, price, category)| {
                let instrument = Instrument::fixture(symbol, price, category);
                (instrument.symbol().clone(), instrument)
            })
            .collect();
        Self {
            instruments,
            rng: rng_from(seed),
        }
    }

    /// Returns a builder for a custom market.
    #[must_use]
    pub fn builder() -> MarketBuilder {
        MarketBuilder::new()
    }

    /// Looks up an instrument by symbol. The key is normalized like
    /// [`Symbol::new`], so `"aapl"` finds `AAPL`.
    ///
    /// # Errors
    ///
    /// Returns `DrawdownError::NotFound` if the symbol is not in the market.
    pub fn get(&self, symbol: &str) -> DrawdownResult<&Instrument> {
        self.instruments
            .get(&*lookup_key(symbol))
            .ok_or_else(|| DrawdownError::not_found(symbol))
    }

    /// Returns the current price of a symbol.
    ///
    /// # Errors
    ///
    /// Returns `DrawdownError::NotFound` if the symbol is not in the market.
    pub fn price(&self, symbol: &str) -> DrawdownResult<f64> {
        self.get(symbol).map(Instrument::price)
    }

    /// Overrides the price of an existing instrument.
    ///
    /// # Errors
    ///
    /// Returns `DrawdownError::NotFound` for an unknown symbol and
    /// `DrawdownError::InvalidArgument` for a non-positive price.
    pub fn set_price(&mut self, symbol: &str, price: f64) -> DrawdownResult<()> {
        self.instruments
            .get_mut(&*lookup_key(symbol))
            .ok_or_else(|| DrawdownError::not_found(symbol))?
            .set_price(price)
    }

    /// Adds an instrument to the market.
    ///
    /// # Errors
    ///
    /// Returns `DrawdownError::InvalidArgument` if the symbol already exists.
    pub fn insert(&mut self, instrument: Instrument) -> DrawdownResult<()> {
        if self.instruments.contains_key(instrument.symbol().as_str()) {
            return Err(DrawdownError::invalid_argument(format!(
                "duplicate instrument {}",
                instrument.symbol()
            )));
        }
        self.instruments
            .insert(instrument.symbol().clone(), instrument);
        Ok(())
    }

    /// Applies one stress step to every instrument using the market's own
    /// random source.
    pub fn apply_stress(&mut self, volatility: f64) {
        let Self { instruments, rng } = self;
        for instrument in instruments.values_mut() {
            instrument.apply_stress(volatility, rng);
        }
    }

    /// Applies one stress step to every instrument using an injected random
    /// source.
    pub fn apply_stress_with<R: Rng + ?Sized>(&mut self, volatility: f64, rng: &mut R) {
        for instrument in self.instruments.values_mut() {
            instrument.apply_stress(volatility, rng);
        }
    }

    /// Returns a deep copy of this market with its own seeded random source.
    #[must_use]
    pub fn fork(&self, seed: u64) -> Self {
        Self {
            instruments: self.instruments.clone(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Iterates over instruments in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = &Instrument> {
        self.instruments.values()
    }

    /// Iterates over symbols in order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.instruments.keys()
    }

    /// Returns true if the symbol is listed.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.instruments.contains_key(&*lookup_key(symbol))
    }

    /// Number of instruments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    /// Returns true if the market holds no instruments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

/// Clones instrument state and draws a fresh entropy-seeded random source.
///
/// A clone never replays its parent's random stream. For reproducible copies
/// use [`Market::fork`].
impl Clone for Market {
    fn clone(&self) -> Self {
        Self {
            instruments: self.instruments.clone(),
            rng: StdRng::from_entropy(),
        }
    }
}

impl fmt::Debug for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Market")
            .field("instruments", &self.instruments)
            .finish_non_exhaustive()
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Builder for constructing a [`Market`].
///
/// # Example
///
/// ```rust
/// use drawdown_core::Market;
///
/// let market = Market::builder()
///     .instrument("AAPL", 185.0)
///     .instrument("GOOG", 135.0)
///     .seed(42)
///     .build()
///     .unwrap();
/// assert_eq!(market.price("GOOG").unwrap(), 135.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarketBuilder {
    entries: Vec<(String, f64, InstrumentCategory)>,
    seed: Option<u64>,
}

impl MarketBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an instrument.
    #[must_use]
    pub fn instrument(self, symbol: impl Into<String>, price: f64) -> Self {
        self.categorized(symbol, price, InstrumentCategory::default())
    }

    /// Adds an instrument with a category tag.
    #[must_use]
    pub fn categorized(
        mut self,
        symbol: impl Into<String>,
        price: f64,
        category: InstrumentCategory,
    ) -> Self {
        self.entries.push((symbol.into(), price, category));
        self
    }

    /// Fixes the random seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the market.
    ///
    /// # Errors
    ///
    /// Returns `DrawdownError::InvalidArgument` for an invalid symbol or
    /// price, or a duplicate symbol.
    pub fn build(self) -> DrawdownResult<Market> {
        let instruments = self
            .entries
            .into_iter()
            .map(|(symbol, price, category)| {
                Instrument::new(symbol, price).map(|i| i.with_category(category))
            })
            .collect::<DrawdownResult<Vec<_>>>()?;
        Market::new(instruments, self.seed)
    }
}
