//! Option payoff type definitions.
//!
//! This module provides the Call/Put payoff selection with exact
//! intrinsic-value evaluation.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::ParameterError;

/// Type of option payoff.
///
/// The payoff is evaluated exactly (`max` against zero, no smoothing):
/// the backward-induction pricer compares continuation values against
/// intrinsic values and must not bias the comparison near the strike.
///
/// # Variants
/// - `Call`: max(S - K, 0)
/// - `Put`: max(K - S, 0)
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// let call = OptionType::Call;
/// assert_eq!(call.payoff(110.0_f64, 100.0), 10.0);
/// assert_eq!(call.payoff(90.0_f64, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Evaluate the intrinsic payoff for given spot and strike.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (S)
    /// * `strike` - Strike price (K)
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionType;
    ///
    /// let put = OptionType::Put;
    /// assert_eq!(put.payoff(90.0_f64, 100.0), 10.0);
    /// assert_eq!(put.payoff(110.0_f64, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn payoff<T: Float>(&self, spot: T, strike: T) -> T {
        let zero = T::zero();
        match self {
            OptionType::Call => (spot - strike).max(zero),
            OptionType::Put => (strike - spot).max(zero),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }
}

/// Renders the flat-file token: `C` for calls, `P` for puts.
impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "C"),
            OptionType::Put => write!(f, "P"),
        }
    }
}

/// Parses `C`, `P`, `call`, or `put`, case-insensitively.
impl FromStr for OptionType {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "call" => Ok(OptionType::Call),
            "p" | "put" => Ok(OptionType::Put),
            _ => Err(ParameterError::UnknownOptionType {
                token: s.to_string(),
            }),
        }
    }
}
