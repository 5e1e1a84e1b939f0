//! Risk-neutral step quantities for the binomial lattice.
//!
//! This module derives the per-step time increment, discount factor, and
//! risk-neutral up-move probability from a `(ContractParams, LatticeParams)`
//! pair, validating the probability domain before any induction starts.

use num_traits::Float;

use pricer_core::types::{ContractParams, LatticeParams, ParameterError, PricingError};

/// Per-step risk-neutral quantities.
///
/// For step size `dt = maturity / steps`:
/// - `discount = exp(-rate * dt)`
/// - `q = (exp(rate * dt) - down) / (up - down)`
///
/// `q` is the probability under which the discounted expected stock price
/// grows at the risk-free rate; a `q` outside `[0, 1]` signals an
/// arbitrage-inconsistent parameter set and is rejected here, before any
/// backward induction begins.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_core::types::{ContractParams, LatticeParams, OptionType};
/// use pricer_lattice::geometry::RiskNeutral;
///
/// let contract = ContractParams::new(100.0_f64, 1.0, 0.06, OptionType::Call).unwrap();
/// let lattice = LatticeParams::recombining(100.0_f64, 1.1, 3).unwrap();
///
/// let rn = RiskNeutral::derive(&contract, &lattice).unwrap();
/// assert!(rn.prob_up() > 0.0 && rn.prob_up() < 1.0);
/// assert!((rn.prob_up() + rn.prob_down() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskNeutral<T: Float> {
    dt: T,
    discount: T,
    prob_up: T,
}

impl<T: Float> RiskNeutral<T> {
    /// Derives the step quantities, validating the pricer preconditions.
    ///
    /// # Errors
    /// - `PricingError::InvalidParameter` with `InvalidSteps` when
    ///   `steps = 0` (the step size `dt` would be undefined)
    /// - `PricingError::InvalidParameter` with `FactorOrdering` when
    ///   `up <= down` (the probability denominator would be degenerate)
    /// - `PricingError::ArithmeticDomain` when the derived `q` falls
    ///   outside `[0, 1]`
    pub fn derive(
        contract: &ContractParams<T>,
        lattice: &LatticeParams<T>,
    ) -> Result<Self, PricingError> {
        let steps = lattice.steps();
        if steps == 0 {
            return Err(ParameterError::InvalidSteps { steps }.into());
        }

        if lattice.up() <= lattice.down() {
            return Err(ParameterError::FactorOrdering {
                up: lattice.up().to_f64().unwrap_or(f64::NAN),
                down: lattice.down().to_f64().unwrap_or(f64::NAN),
            }
            .into());
        }

        let n = T::from(steps).unwrap();
        let dt = contract.maturity() / n;
        let growth = (contract.rate() * dt).exp();
        let q = (growth - lattice.down()) / (lattice.up() - lattice.down());

        if !q.is_finite() || q < T::zero() || q > T::one() {
            return Err(PricingError::ArithmeticDomain {
                q: q.to_f64().unwrap_or(f64::NAN),
            });
        }

        let discount = (-contract.rate() * dt).exp();

        Ok(Self {
            dt,
            discount,
            prob_up: q,
        })
    }

    /// Returns the step size in years.
    #[inline]
    pub fn dt(&self) -> T {
        self.dt
    }

    /// Returns the one-step discount factor.
    #[inline]
    pub fn discount(&self) -> T {
        self.discount
    }

    /// Returns the risk-neutral up-move probability.
    #[inline]
    pub fn prob_up(&self) -> T {
        self.prob_up
    }

    /// Returns the risk-neutral down-move probability, `1 - q`.
    #[inline]
    pub fn prob_down(&self) -> T {
        T::one() - self.prob_up
    }
}
