//! # adapter_quotes: Quote Acquisition Boundary
//!
//! Part of the **A**dapter layer: supplies the spot price and contract
//! terms the pricing pipeline runs on, behind a trait seam so the actual
//! market-data provider stays swappable.
//!
//! The pricer layer never fetches, retries, or falls back on its own;
//! provider failures are absorbed here, before parameters reach the
//! kernel. [`FallbackSpot`] implements the substitution policy: on a
//! failed fetch it logs a warning and supplies a configured fallback
//! value.
//!
//! This crate ships deterministic sources only; brokerage connectivity,
//! credentials, and network retry policy live outside the workspace.

pub mod error;
pub mod quote;
pub mod source;

pub use error::FeedError;
pub use quote::{ChainTerms, OptionQuote};
pub use source::{FallbackSpot, QuoteService, SpotSource, StaticSpotSource};
