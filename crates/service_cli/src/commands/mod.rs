//! CLI subcommand implementations.

pub mod price;
pub mod run;
pub mod tree;
