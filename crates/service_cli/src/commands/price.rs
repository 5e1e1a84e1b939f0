//! `lattice price` - price a single American-style option.

use clap::Args;
use tracing::info;

use pricer_core::types::{ContractParams, LatticeParams, OptionType};
use pricer_lattice::american::CrrPricer;
use pricer_lattice::instrument::timed;

use crate::error::Result;

/// Arguments for the `price` subcommand.
#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Underlying spot price (S0)
    #[arg(long)]
    pub spot: f64,

    /// Strike price (K)
    #[arg(long)]
    pub strike: f64,

    /// Time to maturity in years (T)
    #[arg(long)]
    pub maturity: f64,

    /// Continuously-compounded annual risk-free rate
    #[arg(long, default_value_t = 0.06)]
    pub rate: f64,

    /// Number of lattice time steps
    #[arg(long, default_value_t = 3)]
    pub steps: usize,

    /// Up factor per step
    #[arg(long, default_value_t = 1.1)]
    pub up: f64,

    /// Down factor per step (defaults to 1/up)
    #[arg(long)]
    pub down: Option<f64>,

    /// Option type: C or P
    #[arg(long, default_value = "C")]
    pub option_type: String,
}

/// Prices the contract described by `args` and reports the fair value,
/// its European counterpart, and the early-exercise premium.
pub fn execute(args: &PriceArgs) -> Result<()> {
    let option_type: OptionType = args.option_type.parse()?;
    let down = args.down.unwrap_or(1.0 / args.up);

    let lattice = LatticeParams::new(args.spot, args.up, down, args.steps)?;
    let contract = ContractParams::new(args.strike, args.maturity, args.rate, option_type)?;
    let pricer = CrrPricer::new(contract, lattice)?;

    let (fair, elapsed) = timed(|| pricer.price());
    let fair = fair?;
    let european = pricer.price_european()?;

    info!(
        "Priced {} option at spot {} on a {}-step lattice in {:?}",
        option_type, args.spot, args.steps, elapsed
    );

    println!("fair price:             {:.6}", fair);
    println!("european counterpart:   {:.6}", european);
    println!("early-exercise premium: {:.6}", fair - european);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> PriceArgs {
        PriceArgs {
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.06,
            steps: 3,
            up: 1.1,
            down: None,
            option_type: "C".to_string(),
        }
    }

    #[test]
    fn test_execute_demo_contract() {
        assert!(execute(&args()).is_ok());
    }

    #[test]
    fn test_execute_rejects_unknown_option_type() {
        let bad = PriceArgs {
            option_type: "straddle".to_string(),
            ..args()
        };
        assert!(execute(&bad).is_err());
    }

    #[test]
    fn test_execute_rejects_zero_steps() {
        let bad = PriceArgs { steps: 0, ..args() };
        assert!(execute(&bad).is_err());
    }
}
