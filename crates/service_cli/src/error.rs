//! Error types for the CLI.

use thiserror::Error;

use adapter_quotes::FeedError;
use infra_store::StoreError;
use pricer_core::types::{ParameterError, PricingError};

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error type aggregating every layer the service orchestrates.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Input parameter error
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// Pricing kernel error
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Quote feed error
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    /// Persistence sink error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// JSON serialisation error
    #[error("Serialisation error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
