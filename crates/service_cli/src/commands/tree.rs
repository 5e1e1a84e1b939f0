//! `lattice tree` - export the binomial lattice as JSON.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use pricer_core::types::LatticeParams;
use pricer_lattice::tree::LatticeBuilder;

use crate::error::Result;

/// Arguments for the `tree` subcommand.
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Underlying spot price (S0)
    #[arg(long)]
    pub spot: f64,

    /// Number of lattice time steps
    #[arg(long, default_value_t = 3)]
    pub steps: usize,

    /// Up factor per step
    #[arg(long, default_value_t = 1.1)]
    pub up: f64,

    /// Down factor per step (defaults to 1/up)
    #[arg(long)]
    pub down: Option<f64>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Materialises the lattice for the supplied geometry and writes the JSON
/// export.
pub fn execute(args: &TreeArgs) -> Result<()> {
    let down = args.down.unwrap_or(1.0 / args.up);
    let params = LatticeParams::new(args.spot, args.up, down, args.steps)?;

    let lattice = LatticeBuilder::new(params).build();
    let json = serde_json::to_string_pretty(&lattice)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!(
                "Exported {}-step lattice ({} nodes) to {}",
                lattice.steps(),
                lattice.node_count(),
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.json");
        let args = TreeArgs {
            spot: 100.0,
            steps: 2,
            up: 1.1,
            down: None,
            output: Some(path.clone()),
        };

        execute(&args).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["steps"], 2);
        assert_eq!(json["levels"][0][0]["id"], "n0_0");
    }

    #[test]
    fn test_execute_rejects_invalid_spot() {
        let args = TreeArgs {
            spot: -1.0,
            steps: 2,
            up: 1.1,
            down: None,
            output: None,
        };
        assert!(execute(&args).is_err());
    }
}
