//! `lattice run` - the scheduled fetch-price-persist pipeline.
//!
//! Each cycle fetches a quote through the fallback-wrapped source, prices
//! it on the configured lattice, and appends the flat record to the CSV
//! store. The cadence comes from the runtime's timer; a failed cycle is
//! logged and the schedule keeps ticking.

use std::path::Path;
use std::time::Duration;

use clap::Args;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

use adapter_quotes::{FallbackSpot, QuoteService, SpotSource, StaticSpotSource};
use infra_store::{CsvStore, PriceSink, PricingRecord};
use pricer_core::types::{ContractParams, LatticeParams};
use pricer_lattice::american::CrrPricer;
use pricer_lattice::instrument::timed;

use crate::config::RunConfig;
use crate::error::Result;

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "lattice.toml")]
    pub config: String,

    /// Number of pricing cycles to run (runs until interrupted when omitted)
    #[arg(long)]
    pub iterations: Option<u64>,
}

/// Runs the pipeline on its configured cadence.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let config = RunConfig::load_or_default(Path::new(&args.config))?.with_env_override();
    config.validate()?;

    info!(
        "Starting pipeline for {} every {}s, writing to {}",
        config.symbol,
        config.interval_secs,
        config.output.display()
    );

    let source = FallbackSpot::new(StaticSpotSource::new(config.spot), config.fallback_spot);
    let service = QuoteService::new(source, config.chain);
    let mut store = CsvStore::new(&config.output);

    let mut ticker = tokio::time::interval(Duration::from_secs(config.interval_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut completed = 0_u64;
    loop {
        ticker.tick().await;

        match pricing_cycle(&config, &service, &mut store) {
            Ok(record) => info!(
                "{}: fair {:.6} vs market {:.2}",
                record.opttype, record.fair_price, record.market_price
            ),
            Err(err) => error!("Pricing cycle failed: {}", err),
        }

        completed += 1;
        if let Some(limit) = args.iterations {
            if completed >= limit {
                break;
            }
        }
    }

    info!("Pipeline stopped after {} cycle(s)", completed);
    Ok(())
}

/// One pipeline cycle: fetch a quote, price it, persist the record.
///
/// Factored out of the scheduler loop so the pipeline is testable against
/// any source/sink pair.
pub(crate) fn pricing_cycle<S: SpotSource, K: PriceSink>(
    config: &RunConfig,
    service: &QuoteService<S>,
    sink: &mut K,
) -> Result<PricingRecord> {
    let quote = service.latest(&config.symbol)?;

    let lattice = LatticeParams::recombining(quote.spot, config.up, config.steps)?;
    let contract = ContractParams::new(quote.strike, quote.maturity, config.rate, quote.option_type)?;
    let pricer = CrrPricer::new(contract, lattice)?;

    let (result, elapsed) = timed(|| pricer.price());
    let fair_price = result?;
    debug!("Backward induction took {:?}", elapsed);

    let record = PricingRecord {
        s0: quote.spot,
        k: quote.strike,
        t: quote.maturity,
        opttype: quote.option_type.to_string(),
        market_price: quote.market_price,
        expiry_date: quote.expiry_date,
        timestamp: quote.timestamp,
        fair_price,
    };
    sink.append(&record)?;

    Ok(record)
}
