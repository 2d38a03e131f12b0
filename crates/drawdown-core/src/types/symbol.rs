//! Ticker symbol type.

use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;
use std::str::FromStr;

use crate::error::{DrawdownError, DrawdownResult};

/// A ticker symbol identifying an instrument.
///
/// Symbols are trimmed and normalized to upper case on construction, so
/// `"aapl"` and `" AAPL "` name the same instrument.
///
/// # Example
///
/// ```rust
/// use drawdown_core::types::Symbol;
///
/// let sym = Symbol::new("aapl").unwrap();
/// assert_eq!(sym.as_str(), "AAPL");
/// assert!(Symbol::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Creates a new symbol, normalizing to upper case.
    ///
    /// # Errors
    ///
    /// Returns `DrawdownError::InvalidArgument` if the symbol is empty or
    /// contains whitespace.
    pub fn new(symbol: impl AsRef<str>) -> DrawdownResult<Self> {
        let trimmed = symbol.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DrawdownError::invalid_argument("symbol must not be empty"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(DrawdownError::invalid_argument(format!(
                "symbol '{trimmed}' must not contain whitespace"
            )));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Builds a symbol from a literal known to be valid.
    pub(crate) fn from_static(symbol: &'static str) -> Self {
        Self(symbol.to_string())
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Normalizes a lookup key the way [`Symbol::new`] does, borrowing when the
/// key is already in canonical form.
pub(crate) fn lookup_key(symbol: &str) -> Cow<'_, str> {
    let trimmed = symbol.trim();
    if trimmed.bytes().any(|b| b.is_ascii_lowercase()) {
        Cow::Owned(trimmed.to_ascii_uppercase())
    } else {
        Cow::Borrowed(trimmed)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Symbol {
    type Err = DrawdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = DrawdownError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = DrawdownError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}
