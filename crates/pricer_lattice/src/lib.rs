//! # pricer_lattice: Binomial Lattice Pricing Kernel
//!
//! Backward-induction pricing of American-style options on a recombining
//! Cox-Ross-Rubinstein lattice, plus materialisation of the lattice as an
//! addressable node structure for export and inspection.
//!
//! This crate provides:
//! - Risk-neutral step quantities (`geometry::RiskNeutral`)
//! - American/European backward induction (`american::CrrPricer`)
//! - Lattice materialisation (`tree::LatticeBuilder`, `tree::BinomialLattice`)
//! - Caller-side timing hook (`instrument::timed`)
//!
//! ## Design Principles
//!
//! - **Pure kernel**: every function here is a pure computation over its
//!   inputs; no I/O, no logging, no shared state between calls.
//! - **One node-price formula**: node prices come from
//!   `LatticeParams::node_price` in `pricer_core`, never recomputed locally.
//! - **Valuation and presentation stay separate**: the pricer works on a
//!   single O(N) buffer; the builder materialises the O(N²) node set. The
//!   two never share state.
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{ContractParams, LatticeParams, OptionType};
//! use pricer_lattice::american::CrrPricer;
//!
//! let contract = ContractParams::new(100.0_f64, 1.0, 0.06, OptionType::Call).unwrap();
//! let lattice = LatticeParams::recombining(100.0_f64, 1.1, 3).unwrap();
//!
//! let pricer = CrrPricer::new(contract, lattice).unwrap();
//! let fair = pricer.price().unwrap();
//! assert!(fair > 10.0 && fair < 11.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod american;
pub mod geometry;
pub mod instrument;
pub mod tree;
