//! Error types for the quote adapter.

use thiserror::Error;

/// Quote feed errors.
///
/// # Variants
/// - `Unavailable`: The provider could not be reached or had no data
/// - `Malformed`: The provider answered with data that does not parse
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FeedError {
    /// Provider could not be reached or returned no data.
    #[error("Quote source unavailable: {0}")]
    Unavailable(String),

    /// Provider data failed to parse or was internally inconsistent.
    #[error("Malformed quote data: {0}")]
    Malformed(String),
}

impl FeedError {
    /// Create an unavailable-provider error.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create a malformed-data error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}
