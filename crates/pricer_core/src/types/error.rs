//! Error types for structured error handling.
//!
//! This module provides:
//! - `ParameterError`: Precondition violations on pricing inputs
//! - `PricingError`: Errors raised by pricing operations
//!
//! Both error kinds are raised immediately to the caller with the offending
//! field and its value embedded; nothing is clamped or substituted, and no
//! failure here is transient, so callers fix inputs rather than retry.

use thiserror::Error;

/// Input parameter precondition violations.
///
/// Each variant names the offending field and carries the rejected value
/// so callers can fix the call site without re-deriving what went wrong.
///
/// # Variants
/// - `InvalidSpot`: Spot price is non-positive
/// - `InvalidStrike`: Strike price is non-positive
/// - `InvalidMaturity`: Time to maturity is non-positive
/// - `InvalidSteps`: Step count below the pricer minimum of 1
/// - `InvalidUpFactor`: Up factor is non-positive
/// - `InvalidDownFactor`: Down factor is non-positive
/// - `FactorOrdering`: Up factor does not exceed the down factor
/// - `UnknownOptionType`: Option type token failed to parse
///
/// # Examples
/// ```
/// use pricer_core::types::ParameterError;
///
/// let err = ParameterError::InvalidStrike { strike: -100.0 };
/// assert_eq!(format!("{}", err), "Invalid strike: K = -100, must be positive");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterError {
    /// Spot price is non-positive.
    #[error("Invalid spot: S = {spot}, must be positive")]
    InvalidSpot {
        /// The rejected spot value
        spot: f64,
    },

    /// Strike price is non-positive.
    #[error("Invalid strike: K = {strike}, must be positive")]
    InvalidStrike {
        /// The rejected strike value
        strike: f64,
    },

    /// Time to maturity is non-positive.
    #[error("Invalid maturity: T = {maturity}, must be positive")]
    InvalidMaturity {
        /// The rejected maturity value
        maturity: f64,
    },

    /// Step count is below the pricer minimum.
    #[error("Invalid step count: steps must be >= 1, got {steps}")]
    InvalidSteps {
        /// The rejected step count
        steps: usize,
    },

    /// Up factor is non-positive.
    #[error("Invalid up factor: u = {up}, must be positive")]
    InvalidUpFactor {
        /// The rejected up factor
        up: f64,
    },

    /// Down factor is non-positive.
    #[error("Invalid down factor: d = {down}, must be positive")]
    InvalidDownFactor {
        /// The rejected down factor
        down: f64,
    },

    /// Up factor does not strictly exceed the down factor.
    #[error("Invalid factors: up = {up} must exceed down = {down}")]
    FactorOrdering {
        /// The rejected up factor
        up: f64,
        /// The rejected down factor
        down: f64,
    },

    /// Option type token failed to parse.
    #[error("Unknown option type: {token}, expected C or P")]
    UnknownOptionType {
        /// The token that failed to parse
        token: String,
    },
}

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations. Both kinds
/// are detected before any backward induction begins; there are no partial
/// results.
///
/// # Variants
/// - `InvalidParameter`: A precondition on inputs is violated
/// - `ArithmeticDomain`: The derived risk-neutral probability escaped
///   `[0, 1]`, indicating an arbitrage-inconsistent parameter set (for
///   example `up <= exp(rate * dt)`)
///
/// # Examples
/// ```
/// use pricer_core::types::{ParameterError, PricingError};
///
/// let err: PricingError = ParameterError::InvalidSteps { steps: 0 }.into();
/// assert!(err.is_invalid_parameter());
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// A precondition on inputs is violated.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),

    /// The derived risk-neutral probability fell outside `[0, 1]`.
    #[error("Arithmetic domain error: risk-neutral probability q = {q} outside [0, 1]")]
    ArithmeticDomain {
        /// The out-of-range probability
        q: f64,
    },
}

impl PricingError {
    /// Check if the error is a parameter precondition violation.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, PricingError::InvalidParameter(_))
    }

    /// Check if the error is an arithmetic domain violation.
    pub fn is_arithmetic_domain(&self) -> bool {
        matches!(self, PricingError::ArithmeticDomain { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_spot_display() {
        let err = ParameterError::InvalidSpot { spot: -50.0 };
        assert_eq!(format!("{}", err), "Invalid spot: S = -50, must be positive");
    }

    #[test]
    fn test_invalid_strike_display() {
        let err = ParameterError::InvalidStrike { strike: 0.0 };
        assert_eq!(format!("{}", err), "Invalid strike: K = 0, must be positive");
    }

    #[test]
    fn test_invalid_maturity_display() {
        let err = ParameterError::InvalidMaturity { maturity: -0.5 };
        assert_eq!(
            format!("{}", err),
            "Invalid maturity: T = -0.5, must be positive"
        );
    }

    #[test]
    fn test_invalid_steps_display() {
        let err = ParameterError::InvalidSteps { steps: 0 };
        assert_eq!(
            format!("{}", err),
            "Invalid step count: steps must be >= 1, got 0"
        );
    }

    #[test]
    fn test_factor_ordering_display() {
        let err = ParameterError::FactorOrdering { up: 0.9, down: 1.0 };
        assert_eq!(
            format!("{}", err),
            "Invalid factors: up = 0.9 must exceed down = 1"
        );
    }

    #[test]
    fn test_unknown_option_type_display() {
        let err = ParameterError::UnknownOptionType {
            token: "straddle".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Unknown option type: straddle, expected C or P"
        );
    }

    #[test]
    fn test_arithmetic_domain_display() {
        let err = PricingError::ArithmeticDomain { q: 1.5 };
        assert_eq!(
            format!("{}", err),
            "Arithmetic domain error: risk-neutral probability q = 1.5 outside [0, 1]"
        );
    }

    #[test]
    fn test_from_parameter_error() {
        let err: PricingError = ParameterError::InvalidSpot { spot: -1.0 }.into();
        match err {
            PricingError::InvalidParameter(inner) => {
                assert!(matches!(inner, ParameterError::InvalidSpot { .. }));
            }
            _ => panic!("Expected InvalidParameter variant"),
        }
    }

    #[test]
    fn test_is_invalid_parameter() {
        let err: PricingError = ParameterError::InvalidSteps { steps: 0 }.into();
        assert!(err.is_invalid_parameter());
        assert!(!err.is_arithmetic_domain());
    }

    #[test]
    fn test_is_arithmetic_domain() {
        let err = PricingError::ArithmeticDomain { q: -0.2 };
        assert!(err.is_arithmetic_domain());
        assert!(!err.is_invalid_parameter());
    }

    #[test]
    fn test_invalid_parameter_display_includes_field() {
        let err: PricingError = ParameterError::FactorOrdering { up: 0.9, down: 1.0 }.into();
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid parameter"));
        assert!(msg.contains("up = 0.9"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::ArithmeticDomain { q: 2.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = ParameterError::InvalidUpFactor { up: -1.1 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
