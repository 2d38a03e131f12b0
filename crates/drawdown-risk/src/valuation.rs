//! Portfolio valuation against a market snapshot.

use drawdown_core::{DrawdownResult, Market, Portfolio};

/// Computes the market value of a portfolio.
///
/// Sums `price × quantity` over every holding.
///
/// # Errors
///
/// Returns `DrawdownError::NotFound` if a held symbol is not in the market.
/// A missing symbol is never valued at zero.
pub fn portfolio_value(portfolio: &Portfolio, market: &Market) -> DrawdownResult<f64> {
    portfolio
        .holdings()
        .iter()
        .try_fold(0.0, |total, (symbol, &quantity)| {
            let price = market.price(symbol.as_str())?;
            Ok(total + price * quantity as f64)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use drawdown_core::DrawdownError;

    #[test]
    fn test_reference_value() {
        let market = Market::builder()
            .instrument("AAPL", 185.0)
            .instrument("GOOG", 135.0)
            .instrument("TSLA", 240.0)
            .build()
            .unwrap();
        let portfolio = Portfolio::builder()
            .holding("AAPL", 50)
            .holding("GOOG", 10)
            .holding("TSLA", 20)
            .build()
            .unwrap();

        // 50*185 + 10*135 + 20*240
        assert_relative_eq!(portfolio_value(&portfolio, &market).unwrap(), 15_400.0);
    }

    #[test]
    fn test_unheld_instruments_ignored() {
        let market = Market::default_fixture(None);
        let portfolio = Portfolio::builder().holding("AMZN", 3).build().unwrap();
        assert_relative_eq!(portfolio_value(&portfolio, &market).unwrap(), 435.0);
    }

    #[test]
    fn test_missing_symbol() {
        let market = Market::default_fixture(None);
        let portfolio = Portfolio::builder()
            .holding("AAPL", 1)
            .holding("NVDA", 1)
            .build()
            .unwrap();
        assert_eq!(
            portfolio_value(&portfolio, &market),
            Err(DrawdownError::not_found("NVDA"))
        );
    }

    #[test]
    fn test_missing_symbol_with_zero_quantity() {
        let market = Market::default_fixture(None);
        let portfolio = Portfolio::builder().holding("NVDA", 0).build().unwrap();
        assert!(portfolio_value(&portfolio, &market).unwrap_err().is_not_found());
    }

    #[test]
    fn test_empty_portfolio() {
        let market = Market::default_fixture(None);
        let portfolio = Portfolio::builder().build().unwrap();
        assert_relative_eq!(portfolio_value(&portfolio, &market).unwrap(), 0.0);
    }
}
