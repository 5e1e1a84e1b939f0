//! Validated parameter packs for lattice pricing.
//!
//! This module provides the two immutable inputs to every pricing run:
//! the lattice geometry ([`LatticeParams`]) and the contract terms
//! ([`ContractParams`]). Both validate on construction and are never
//! mutated afterwards.

use num_traits::Float;

use super::error::ParameterError;
use super::option_type::OptionType;

/// Recombining binomial lattice geometry.
///
/// Holds the spot price, the per-step up/down factors, and the number of
/// discrete time increments. A recombining tree conventionally uses
/// `down = 1/up`, but that relation is a caller responsibility and is
/// never silently enforced here; [`LatticeParams::recombining`] is the
/// explicit opt-in.
///
/// `steps = 0` is accepted: the tree builder legitimately produces a
/// single-leaf lattice. The pricer enforces its stricter `steps >= 1`
/// precondition itself.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_core::types::LatticeParams;
///
/// let lattice = LatticeParams::new(100.0_f64, 1.1, 0.9, 3).unwrap();
/// assert_eq!(lattice.steps(), 3);
///
/// // Non-positive factors are rejected
/// assert!(LatticeParams::new(100.0_f64, 0.0, 0.9, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeParams<T: Float> {
    spot: T,
    up: T,
    down: T,
    steps: usize,
}

impl<T: Float> LatticeParams<T> {
    /// Creates new lattice geometry with validation.
    ///
    /// # Arguments
    /// * `spot` - Underlying price at time 0 (must be positive)
    /// * `up` - Up factor per step (must be positive)
    /// * `down` - Down factor per step (must be positive)
    /// * `steps` - Number of discrete time increments (0 allowed)
    ///
    /// # Errors
    /// - `ParameterError::InvalidSpot` if `spot <= 0`
    /// - `ParameterError::InvalidUpFactor` if `up <= 0`
    /// - `ParameterError::InvalidDownFactor` if `down <= 0`
    pub fn new(spot: T, up: T, down: T, steps: usize) -> Result<Self, ParameterError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(ParameterError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if up <= zero {
            return Err(ParameterError::InvalidUpFactor {
                up: up.to_f64().unwrap_or(f64::NAN),
            });
        }

        if down <= zero {
            return Err(ParameterError::InvalidDownFactor {
                down: down.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            up,
            down,
            steps,
        })
    }

    /// Creates geometry with `down = 1/up`, the standard recombining
    /// parameterisation.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::LatticeParams;
    ///
    /// let lattice = LatticeParams::recombining(100.0_f64, 1.1, 3).unwrap();
    /// assert!((lattice.down() - 1.0 / 1.1).abs() < 1e-12);
    /// ```
    pub fn recombining(spot: T, up: T, steps: usize) -> Result<Self, ParameterError> {
        let zero = T::zero();
        if up <= zero {
            return Err(ParameterError::InvalidUpFactor {
                up: up.to_f64().unwrap_or(f64::NAN),
            });
        }
        Self::new(spot, up, T::one() / up, steps)
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the up factor.
    #[inline]
    pub fn up(&self) -> T {
        self.up
    }

    /// Returns the down factor.
    #[inline]
    pub fn down(&self) -> T {
        self.down
    }

    /// Returns the number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Price of the node at `(time_step, level)`.
    ///
    /// This is the node-price invariant, `spot * up^level *
    /// down^(time_step - level)`, and the only place in the workspace
    /// where it is computed.
    ///
    /// # Panics
    /// Debug builds assert `level <= time_step`.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::LatticeParams;
    ///
    /// let lattice = LatticeParams::recombining(100.0_f64, 1.1, 2).unwrap();
    /// // One up-move, one down-move recombine to the spot
    /// assert!((lattice.node_price(2, 1) - 100.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn node_price(&self, time_step: usize, level: usize) -> T {
        debug_assert!(level <= time_step);
        self.spot * self.up.powi(level as i32) * self.down.powi((time_step - level) as i32)
    }
}

/// Option contract terms.
///
/// Strike, time to maturity (in years), continuously-compounded annual
/// risk-free rate, and the payoff direction.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_core::types::{ContractParams, OptionType};
///
/// let contract = ContractParams::new(100.0_f64, 1.0, 0.06, OptionType::Put).unwrap();
/// assert_eq!(contract.payoff(90.0), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContractParams<T: Float> {
    strike: T,
    maturity: T,
    rate: T,
    option_type: OptionType,
}

impl<T: Float> ContractParams<T> {
    /// Creates new contract terms with validation.
    ///
    /// # Arguments
    /// * `strike` - Strike price (must be positive)
    /// * `maturity` - Time to maturity in years (must be positive)
    /// * `rate` - Continuously-compounded annual risk-free rate (any real)
    /// * `option_type` - Call or Put
    ///
    /// # Errors
    /// - `ParameterError::InvalidStrike` if `strike <= 0`
    /// - `ParameterError::InvalidMaturity` if `maturity <= 0`
    pub fn new(
        strike: T,
        maturity: T,
        rate: T,
        option_type: OptionType,
    ) -> Result<Self, ParameterError> {
        let zero = T::zero();

        if strike <= zero {
            return Err(ParameterError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if maturity <= zero {
            return Err(ParameterError::InvalidMaturity {
                maturity: maturity.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            strike,
            maturity,
            rate,
            option_type,
        })
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn maturity(&self) -> T {
        self.maturity
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Intrinsic payoff of this contract at the given spot.
    #[inline]
    pub fn payoff(&self, spot: T) -> T {
        self.option_type.payoff(spot, self.strike)
    }
}
