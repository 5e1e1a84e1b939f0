//! The flat pricing-run record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One row per pricing run.
///
/// Column order and names follow the flat-file schema:
/// `S0, K, T, opttype, market_price, expiry_date, timestamp, fair_price`.
/// The option type is stored as its flat-file token (`C` or `P`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRecord {
    /// Underlying price at pricing time.
    #[serde(rename = "S0")]
    pub s0: f64,
    /// Strike price.
    #[serde(rename = "K")]
    pub k: f64,
    /// Time to maturity in years.
    #[serde(rename = "T")]
    pub t: f64,
    /// Option type token, `C` or `P`.
    pub opttype: String,
    /// Observed option market price.
    pub market_price: f64,
    /// Contract expiry date.
    pub expiry_date: NaiveDate,
    /// Quote retrieval timestamp (UTC).
    pub timestamp: DateTime<Utc>,
    /// Computed fair value.
    pub fair_price: f64,
}
