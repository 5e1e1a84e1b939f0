//! Spot sources and quote assembly.

use chrono::{Days, Utc};

use crate::error::FeedError;
use crate::quote::{ChainTerms, OptionQuote};

/// Boundary to the market-data provider: supplies the most recent
/// observed price of an underlying.
///
/// Implementations may fail; the substitution policy on failure belongs
/// to [`FallbackSpot`], never to the pricer downstream.
pub trait SpotSource {
    /// Returns the most recent observed price for `symbol`.
    fn spot(&self, symbol: &str) -> Result<f64, FeedError>;
}

/// Fixed-value source.
///
/// Deterministic stand-in for a live provider, used by the demo pipeline
/// and in tests.
#[derive(Debug, Clone)]
pub struct StaticSpotSource {
    spot: f64,
}

impl StaticSpotSource {
    /// Creates a source that always reports `spot`.
    pub fn new(spot: f64) -> Self {
        Self { spot }
    }
}

impl SpotSource for StaticSpotSource {
    fn spot(&self, _symbol: &str) -> Result<f64, FeedError> {
        Ok(self.spot)
    }
}

/// Decorator that substitutes a configured fallback value when the inner
/// source fails.
///
/// The substitution is logged at `warn` level; the failure never reaches
/// the pricer.
#[derive(Debug, Clone)]
pub struct FallbackSpot<S> {
    inner: S,
    fallback: f64,
}

impl<S> FallbackSpot<S> {
    /// Wraps `inner`, substituting `fallback` on failure.
    pub fn new(inner: S, fallback: f64) -> Self {
        Self { inner, fallback }
    }
}

impl<S: SpotSource> SpotSource for FallbackSpot<S> {
    fn spot(&self, symbol: &str) -> Result<f64, FeedError> {
        match self.inner.spot(symbol) {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::warn!(
                    "Spot fetch for {} failed ({}), substituting fallback {}",
                    symbol,
                    err,
                    self.fallback
                );
                Ok(self.fallback)
            }
        }
    }
}

/// Assembles [`OptionQuote`]s from a spot source and chain terms.
///
/// The expiry date is derived from the maturity relative to the retrieval
/// day (`today + round(maturity * 365)` days), and every quote carries
/// its UTC retrieval timestamp.
#[derive(Debug, Clone)]
pub struct QuoteService<S> {
    source: S,
    terms: ChainTerms,
}

impl<S: SpotSource> QuoteService<S> {
    /// Creates a quote service over a spot source and fixed chain terms.
    pub fn new(source: S, terms: ChainTerms) -> Self {
        Self { source, terms }
    }

    /// Returns the chain terms this service attaches to quotes.
    pub fn terms(&self) -> &ChainTerms {
        &self.terms
    }

    /// Fetches the spot and assembles a timestamped quote.
    pub fn latest(&self, symbol: &str) -> Result<OptionQuote, FeedError> {
        let spot = self.source.spot(symbol)?;
        let now = Utc::now();
        let expiry_days = (self.terms.maturity * 365.0).round().max(0.0) as u64;
        let expiry_date = now
            .date_naive()
            .checked_add_days(Days::new(expiry_days))
            .ok_or_else(|| FeedError::malformed("expiry date out of range"))?;

        Ok(OptionQuote {
            symbol: symbol.to_string(),
            spot,
            strike: self.terms.strike,
            maturity: self.terms.maturity,
            option_type: self.terms.option_type,
            market_price: self.terms.market_price,
            expiry_date,
            timestamp: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use pricer_core::types::OptionType;

    struct FailingSource;

    impl SpotSource for FailingSource {
        fn spot(&self, _symbol: &str) -> Result<f64, FeedError> {
            Err(FeedError::unavailable("provider down"))
        }
    }

    fn terms() -> ChainTerms {
        ChainTerms {
            strike: 100.0,
            maturity: 1.0,
            option_type: OptionType::Call,
            market_price: 5.0,
        }
    }

    #[test]
    fn test_static_source_reports_value() {
        let source = StaticSpotSource::new(101.25);
        assert_eq!(source.spot("SPY").unwrap(), 101.25);
    }

    #[test]
    fn test_fallback_passes_through_success() {
        let source = FallbackSpot::new(StaticSpotSource::new(101.25), 100.0);
        assert_eq!(source.spot("SPY").unwrap(), 101.25);
    }

    #[test]
    fn test_fallback_substitutes_on_failure() {
        let source = FallbackSpot::new(FailingSource, 100.0);
        assert_eq!(source.spot("SPY").unwrap(), 100.0);
    }

    #[test]
    fn test_latest_assembles_quote() {
        let service = QuoteService::new(StaticSpotSource::new(102.5), terms());
        let quote = service.latest("SPY").unwrap();

        assert_eq!(quote.symbol, "SPY");
        assert_eq!(quote.spot, 102.5);
        assert_eq!(quote.strike, 100.0);
        assert_eq!(quote.option_type, OptionType::Call);
        assert_eq!(quote.market_price, 5.0);

        // One-year maturity: expiry sits 365 days past the retrieval day.
        let expected = quote
            .timestamp
            .date_naive()
            .checked_add_days(Days::new(365))
            .unwrap();
        assert_eq!(quote.expiry_date, expected);
    }

    #[test]
    fn test_latest_rounds_partial_year_maturity() {
        let service = QuoteService::new(
            StaticSpotSource::new(100.0),
            ChainTerms {
                maturity: 0.5,
                ..terms()
            },
        );
        let quote = service.latest("SPY").unwrap();
        let expected = quote
            .timestamp
            .date_naive()
            .checked_add_days(Days::new(183))
            .unwrap();
        assert_eq!(quote.expiry_date, expected);
    }

    #[test]
    fn test_latest_propagates_unwrapped_failure() {
        let service = QuoteService::new(FailingSource, terms());
        assert!(matches!(
            service.latest("SPY"),
            Err(FeedError::Unavailable(_))
        ));
    }
}
