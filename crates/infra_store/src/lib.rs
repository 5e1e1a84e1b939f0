//! # infra_store: Flat-File Persistence for Pricing Runs
//!
//! Part of the **I**nfra layer: receives the pipeline's output value plus
//! the original inputs as a flat tabular record and appends it to a file,
//! one row per pricing run. The pricer layer knows nothing about this
//! crate; persistence is wired up by the service layer.
//!
//! The sink seam is the [`PriceSink`] trait; [`CsvStore`] is the shipped
//! file-backed implementation and [`MemorySink`] the in-memory double for
//! pipeline tests.

pub mod csv_store;
pub mod error;
pub mod record;

pub use csv_store::{CsvStore, MemorySink, PriceSink};
pub use error::StoreError;
pub use record::PricingRecord;
