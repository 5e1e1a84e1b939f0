//! American option pricing by backward induction.
//!
//! This module provides the Cox-Ross-Rubinstein backward-induction pricer
//! with an early-exercise comparison at every node, plus the European
//! (continuation-only) variant used to measure the early-exercise premium.

use num_traits::Float;

use pricer_core::types::{ContractParams, LatticeParams, ParameterError, PricingError};

use crate::geometry::RiskNeutral;

/// Cox-Ross-Rubinstein backward-induction pricer.
///
/// Values an option on the recombining lattice implied by the supplied
/// geometry. Time is walked backward from maturity; at each node the value
/// is the discounted risk-neutral expectation of the two successor values,
/// and for American exercise it is floored by the node's intrinsic payoff.
///
/// The recursion works on a single O(N) buffer updated in place; the full
/// O(N²) lattice is never materialised for valuation (that is the tree
/// builder's job, with storage it owns separately).
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_core::types::{ContractParams, LatticeParams, OptionType};
/// use pricer_lattice::american::CrrPricer;
///
/// let contract = ContractParams::new(100.0_f64, 1.0, 0.06, OptionType::Put).unwrap();
/// let lattice = LatticeParams::recombining(100.0_f64, 1.1, 50).unwrap();
///
/// let pricer = CrrPricer::new(contract, lattice).unwrap();
/// let american = pricer.price().unwrap();
/// let european = pricer.price_european().unwrap();
/// assert!(american >= european);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CrrPricer<T: Float> {
    contract: ContractParams<T>,
    lattice: LatticeParams<T>,
}

impl<T: Float> CrrPricer<T> {
    /// Creates a pricer, enforcing the pricer preconditions on top of the
    /// validation the two parameter packs already carry.
    ///
    /// # Errors
    /// - `InvalidSteps` when `steps = 0` (valuation needs at least one
    ///   time increment)
    /// - `FactorOrdering` when `up <= down` (degenerate risk-neutral
    ///   probability)
    pub fn new(contract: ContractParams<T>, lattice: LatticeParams<T>) -> Result<Self, PricingError> {
        if lattice.steps() == 0 {
            return Err(ParameterError::InvalidSteps {
                steps: lattice.steps(),
            }
            .into());
        }

        if lattice.up() <= lattice.down() {
            return Err(ParameterError::FactorOrdering {
                up: lattice.up().to_f64().unwrap_or(f64::NAN),
                down: lattice.down().to_f64().unwrap_or(f64::NAN),
            }
            .into());
        }

        Ok(Self { contract, lattice })
    }

    /// Returns the contract terms.
    #[inline]
    pub fn contract(&self) -> &ContractParams<T> {
        &self.contract
    }

    /// Returns the lattice geometry.
    #[inline]
    pub fn lattice(&self) -> &LatticeParams<T> {
        &self.lattice
    }

    /// Fair value with early exercise allowed at every node.
    ///
    /// # Errors
    /// `PricingError::ArithmeticDomain` when the risk-neutral probability
    /// falls outside `[0, 1]`; detected before induction starts, so there
    /// are no partial results.
    pub fn price(&self) -> Result<T, PricingError> {
        self.induct(true)
    }

    /// Fair value with the early-exercise comparison disabled
    /// (continuation values only).
    ///
    /// Useful as a diagnostic: the difference `price() - price_european()`
    /// is the early-exercise premium, and the American value can never be
    /// below this one.
    pub fn price_european(&self) -> Result<T, PricingError> {
        self.induct(false)
    }

    fn induct(&self, early_exercise: bool) -> Result<T, PricingError> {
        let rn = RiskNeutral::derive(&self.contract, &self.lattice)?;
        let n = self.lattice.steps();

        // Terminal payoffs at time step N, levels 0..=N.
        let mut values: Vec<T> = (0..=n)
            .map(|j| self.contract.payoff(self.lattice.node_price(n, j)))
            .collect();

        // Walk time backward. values[j] still holds the later-time value
        // at level j when it is read, and is overwritten with the value at
        // (i, j) in place; each time step must fully complete before the
        // previous one starts.
        for i in (0..n).rev() {
            for j in 0..=i {
                let continuation =
                    rn.discount() * (rn.prob_up() * values[j + 1] + rn.prob_down() * values[j]);
                values[j] = if early_exercise {
                    continuation.max(self.contract.payoff(self.lattice.node_price(i, j)))
                } else {
                    continuation
                };
            }
        }

        Ok(values[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::OptionType;

    fn pricer(
        strike: f64,
        maturity: f64,
        rate: f64,
        option_type: OptionType,
        spot: f64,
        up: f64,
        steps: usize,
    ) -> CrrPricer<f64> {
        let contract = ContractParams::new(strike, maturity, rate, option_type).unwrap();
        let lattice = LatticeParams::recombining(spot, up, steps).unwrap();
        CrrPricer::new(contract, lattice).unwrap()
    }

    #[test]
    fn test_zero_steps_rejected() {
        let contract = ContractParams::new(100.0, 1.0, 0.06, OptionType::Call).unwrap();
        let lattice = LatticeParams::recombining(100.0, 1.1, 0).unwrap();
        let err = CrrPricer::new(contract, lattice).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_down_above_up_rejected() {
        let contract = ContractParams::new(100.0, 1.0, 0.06, OptionType::Call).unwrap();
        let lattice = LatticeParams::new(100.0, 0.9, 1.0, 3).unwrap();
        let err = CrrPricer::new(contract, lattice).unwrap_err();
        assert!(matches!(
            err,
            PricingError::InvalidParameter(ParameterError::FactorOrdering { .. })
        ));
    }

    #[test]
    fn test_arbitrage_inconsistent_rate_rejected() {
        // exp(r * dt) = exp(0.5) exceeds up = 1.1, pushing q above 1
        let p = pricer(100.0, 1.0, 0.5, OptionType::Call, 100.0, 1.1, 1);
        assert!(p.price().unwrap_err().is_arithmetic_domain());
    }

    #[test]
    fn test_price_is_deterministic() {
        let p = pricer(100.0, 1.0, 0.06, OptionType::Call, 100.0, 1.1, 3);
        let first = p.price().unwrap();
        let second = p.price().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_american_put_carries_early_exercise_premium() {
        // Deep in-the-money put: immediate exercise dominates waiting, so
        // the American value must strictly exceed the European one.
        let p = pricer(150.0, 1.0, 0.06, OptionType::Put, 100.0, 1.1, 50);
        let american = p.price().unwrap();
        let european = p.price_european().unwrap();
        assert!(american > european);
        // And never below intrinsic value at the root.
        assert!(american >= 50.0 - 1e-9);
    }

    #[test]
    fn test_american_call_matches_european_without_dividends() {
        // On a non-dividend-paying underlying, early exercise of a call is
        // never optimal; both inductions agree.
        let p = pricer(100.0, 1.0, 0.06, OptionType::Call, 100.0, 1.1, 50);
        assert_relative_eq!(
            p.price().unwrap(),
            p.price_european().unwrap(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_near_zero_strike_call_is_worth_spot() {
        // With a vanishing strike the call pays ~S everywhere; its value
        // collapses to the spot price.
        let p = pricer(1e-10, 1.0, 0.06, OptionType::Call, 100.0, 1.1, 20);
        assert_relative_eq!(p.price().unwrap(), 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_value_never_below_intrinsic() {
        let p = pricer(110.0, 1.0, 0.06, OptionType::Put, 100.0, 1.1, 30);
        assert!(p.price().unwrap() >= 10.0 - 1e-12);
    }
}
