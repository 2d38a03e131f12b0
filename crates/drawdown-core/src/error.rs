//! Error types for the Drawdown library.
//!
//! All errors are local computation errors. They are propagated to the caller
//! and never recovered silently (a missing symbol is never valued at zero).

use thiserror::Error;

/// A specialized Result type for Drawdown operations.
pub type DrawdownResult<T> = Result<T, DrawdownError>;

/// The main error type for Drawdown operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrawdownError {
    /// Symbol is not present in the market.
    #[error("Symbol not found: {symbol}")]
    NotFound {
        /// The missing symbol.
        symbol: String,
    },

    /// An argument is outside its valid domain.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of what's invalid.
        reason: String,
    },

    /// A normalization divided by a zero or negative quantity.
    #[error("Division by zero in {context}")]
    DivisionByZero {
        /// The operation that failed.
        context: String,
    },
}

impl DrawdownError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(symbol: impl Into<String>) -> Self {
        Self::NotFound {
            symbol: symbol.into(),
        }
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero {
            context: context.into(),
        }
    }

    /// Returns true if this is a [`DrawdownError::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DrawdownError::not_found("MSFT");
        assert_eq!(err.to_string(), "Symbol not found: MSFT");

        let err = DrawdownError::invalid_argument("steps must be positive");
        assert!(err.to_string().contains("steps must be positive"));

        let err = DrawdownError::division_by_zero("drawdown normalization");
        assert!(err.to_string().contains("drawdown normalization"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(DrawdownError::not_found("X").is_not_found());
        assert!(!DrawdownError::invalid_argument("x").is_not_found());
    }
}
