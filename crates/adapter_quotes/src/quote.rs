//! Quote data carried into the pricing pipeline.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use pricer_core::types::OptionType;

/// Contract terms a feed attaches to an underlying quote.
///
/// These are the fields of the option chain entry the pipeline prices;
/// they typically come from configuration or from the provider's chain
/// lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChainTerms {
    /// Strike price (K).
    pub strike: f64,
    /// Time to maturity in years (T).
    pub maturity: f64,
    /// Call or put.
    pub option_type: OptionType,
    /// Observed market price of the option, kept for comparison against
    /// the computed fair value.
    pub market_price: f64,
}

/// Demo chain terms: a one-year at-the-money call quoted at 5.0.
impl Default for ChainTerms {
    fn default() -> Self {
        Self {
            strike: 100.0,
            maturity: 1.0,
            option_type: OptionType::Call,
            market_price: 5.0,
        }
    }
}

/// A fully assembled quote: underlying spot plus contract terms, stamped
/// with the retrieval time and the implied expiry date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionQuote {
    /// Underlying symbol (e.g. `SPY`).
    pub symbol: String,
    /// Most recent observed underlying price (S0).
    pub spot: f64,
    /// Strike price (K).
    pub strike: f64,
    /// Time to maturity in years (T).
    pub maturity: f64,
    /// Call or put.
    pub option_type: OptionType,
    /// Observed option market price.
    pub market_price: f64,
    /// Expiry date implied by the maturity, relative to the retrieval day.
    pub expiry_date: NaiveDate,
    /// Retrieval timestamp (UTC).
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_terms_roundtrip() {
        let terms = ChainTerms {
            strike: 100.0,
            maturity: 1.0,
            option_type: OptionType::Call,
            market_price: 5.0,
        };
        let json = serde_json::to_string(&terms).unwrap();
        let back: ChainTerms = serde_json::from_str(&json).unwrap();
        assert_eq!(terms, back);
    }

    #[test]
    fn test_chain_terms_deserializes_lowercase_option_type() {
        let terms: ChainTerms = serde_json::from_str(
            r#"{"strike": 100.0, "maturity": 1.0, "option_type": "put", "market_price": 5.0}"#,
        )
        .unwrap();
        assert_eq!(terms.option_type, OptionType::Put);
    }
}
