//! Error types for the persistence sink.

use thiserror::Error;

/// Persistence sink errors.
///
/// # Variants
/// - `Io`: Underlying filesystem operation failed
/// - `Csv`: CSV serialisation or write failed
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying filesystem operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialisation or write failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
