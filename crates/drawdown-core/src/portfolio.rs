//! Portfolio holdings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{DrawdownError, DrawdownResult};
use crate::types::{lookup_key, Symbol};

/// Reference capital carried by every portfolio.
pub const DEFAULT_REFERENCE_CAPITAL: f64 = 100_000.0;

/// An immutable set of symbol → quantity holdings.
///
/// # Example
///
/// ```rust
/// use drawdown_core::Portfolio;
///
/// let portfolio = Portfolio::builder()
///     .holding("AAPL", 50)
///     .holding("GOOG", 10)
///     .build()
///     .unwrap();
/// assert_eq!(portfolio.quantity("AAPL"), Some(50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PortfolioData")]
pub struct Portfolio {
    holdings: BTreeMap<Symbol, u64>,
}

/// Serialized form; deserialization re-runs the builder's validation.
#[derive(Deserialize)]
struct PortfolioData {
    holdings: BTreeMap<String, u64>,
}

impl TryFrom<PortfolioData> for Portfolio {
    type Error = DrawdownError;

    fn try_from(data: PortfolioData) -> Result<Self, Self::Error> {
        data.holdings
            .into_iter()
            .fold(Portfolio::builder(), |builder, (symbol, quantity)| {
                builder.holding(symbol, quantity)
            })
            .build()
    }
}

impl Portfolio {
    /// Creates a portfolio from symbol/quantity pairs.
    ///
    /// # Errors
    ///
    /// Returns `DrawdownError::InvalidArgument` if a symbol appears twice.
    pub fn new(holdings: impl IntoIterator<Item = (Symbol, u64)>) -> DrawdownResult<Self> {
        let mut map = BTreeMap::new();
        for (symbol, quantity) in holdings {
            if map.contains_key(&symbol) {
                return Err(DrawdownError::invalid_argument(format!(
                    "duplicate holding {symbol}"
                )));
            }
            map.insert(symbol, quantity);
        }
        Ok(Self { holdings: map })
    }

    /// Returns a builder.
    #[must_use]
    pub fn builder() -> PortfolioBuilder {
        PortfolioBuilder::default()
    }

    /// Returns the holdings in symbol order.
    #[must_use]
    pub fn holdings(&self) -> &BTreeMap<Symbol, u64> {
        &self.holdings
    }

    /// Returns the quantity held for a symbol, normalizing the key like
    /// [`Symbol::new`].
    #[must_use]
    pub fn quantity(&self, symbol: &str) -> Option<u64> {
        self.holdings.get(&*lookup_key(symbol)).copied()
    }

    /// Iterates over held symbols.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.holdings.keys()
    }

    /// Reference capital for normalization. Not used by the drawdown metric.
    #[must_use]
    pub fn reference_capital(&self) -> f64 {
        DEFAULT_REFERENCE_CAPITAL
    }

    /// Number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// Returns true if there are no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}

/// Builder for a [`Portfolio`].
#[derive(Debug, Clone, Default)]
pub struct PortfolioBuilder {
    holdings: Vec<(String, u64)>,
}

impl PortfolioBuilder {
    /// Adds a holding.
    #[must_use]
    pub fn holding(mut self, symbol: impl Into<String>, quantity: u64) -> Self {
        self.holdings.push((symbol.into(), quantity));
        self
    }

    /// Builds the portfolio.
    ///
    /// # Errors
    ///
    /// Returns `DrawdownError::InvalidArgument` for an invalid or duplicate
    /// symbol.
    pub fn build(self) -> DrawdownResult<Portfolio> {
        let holdings = self
            .holdings
            .into_iter()
            .map(|(symbol, quantity)| Symbol::new(symbol).map(|s| (s, quantity)))
            .collect::<DrawdownResult<Vec<_>>>()?;
        Portfolio::new(holdings)
    }
}
