//! # pricer_core: Foundation Types for Lattice Pricing
//!
//! ## Layer Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Option payoff types: `OptionType` (`types::option_type`)
//! - Validated parameter packs: `LatticeParams`, `ContractParams` (`types::params`)
//! - Error types: `ParameterError`, `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! This layer has no dependencies on other workspace crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## The Node-Price Invariant
//!
//! A node at time step `i` and level `j` of a recombining binomial lattice
//! has price `spot * up^j * down^(i-j)`. That formula lives in exactly one
//! place, [`LatticeParams::node_price`](types::LatticeParams::node_price);
//! every consumer in the workspace (the backward-induction pricer and the
//! tree builder alike) derives node prices from it.
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{ContractParams, LatticeParams, OptionType};
//!
//! let lattice = LatticeParams::recombining(100.0_f64, 1.1, 3).unwrap();
//! let contract = ContractParams::new(100.0_f64, 1.0, 0.06, OptionType::Call).unwrap();
//!
//! // Terminal node at the top of a 3-step tree: 100 * 1.1^3
//! let price = lattice.node_price(3, 3);
//! assert!((price - 133.1).abs() < 1e-9);
//!
//! // Intrinsic value at that node
//! let payoff = contract.payoff(price);
//! assert!((payoff - 33.1).abs() < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
