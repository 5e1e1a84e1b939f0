//! Pipeline configuration management.
//!
//! Handles loading the `run` pipeline configuration from a TOML file with
//! environment variable override support. There is no process-wide mutable
//! configuration: the loaded struct is passed explicitly into each call.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use adapter_quotes::ChainTerms;

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config: {0}")]
    Io(String),

    /// Failed to parse the configuration file.
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// Configuration values failed validation.
    #[error("Invalid config: {0}")]
    Validation(String),
}

/// Scheduled pipeline configuration.
///
/// Defaults reproduce the demo job: SPY, one-year at-the-money call,
/// 3-step lattice with `u = 1.1`, 6% risk-free rate, appending to
/// `option_data.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Underlying symbol to quote.
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Spot price reported by the static demo source.
    #[serde(default = "default_spot")]
    pub spot: f64,

    /// Spot substituted when the source fails.
    #[serde(default = "default_spot")]
    pub fallback_spot: f64,

    /// Continuously-compounded annual risk-free rate.
    #[serde(default = "default_rate")]
    pub rate: f64,

    /// Number of lattice time steps.
    #[serde(default = "default_steps")]
    pub steps: usize,

    /// Up factor per step; the pipeline uses `down = 1/up`.
    #[serde(default = "default_up")]
    pub up: f64,

    /// Seconds between pricing cycles.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// CSV output path.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Option chain terms attached to each quote.
    #[serde(default)]
    pub chain: ChainTerms,

    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_symbol() -> String {
    "SPY".to_string()
}

fn default_spot() -> f64 {
    100.0
}

fn default_rate() -> f64 {
    0.06
}

fn default_steps() -> usize {
    3
}

fn default_up() -> f64 {
    1.1
}

fn default_interval_secs() -> u64 {
    60
}

fn default_output() -> PathBuf {
    PathBuf::from("option_data.csv")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            spot: default_spot(),
            fallback_spot: default_spot(),
            rate: default_rate(),
            steps: default_steps(),
            up: default_up(),
            interval_secs: default_interval_secs(),
            output: default_output(),
            chain: ChainTerms::default(),
            log_level: default_log_level(),
        }
    }
}

impl RunConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides.
    pub fn with_env_override(mut self) -> Self {
        if let Ok(symbol) = std::env::var("LATTICE_SYMBOL") {
            self.symbol = symbol;
        }

        if let Ok(rate) = std::env::var("LATTICE_RATE") {
            if let Ok(parsed) = rate.parse() {
                self.rate = parsed;
            }
        }

        if let Ok(steps) = std::env::var("LATTICE_STEPS") {
            if let Ok(parsed) = steps.parse() {
                self.steps = parsed;
            }
        }

        if let Ok(interval) = std::env::var("LATTICE_INTERVAL_SECS") {
            if let Ok(parsed) = interval.parse() {
                self.interval_secs = parsed;
            }
        }

        if let Ok(output) = std::env::var("LATTICE_OUTPUT") {
            self.output = PathBuf::from(output);
        }

        if let Ok(log_level) = std::env::var("LATTICE_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.steps == 0 {
            errors.push("steps must be at least 1".to_string());
        }

        if self.up <= 1.0 {
            errors.push(format!(
                "up factor {} must exceed 1 for a recombining lattice",
                self.up
            ));
        }

        if self.spot <= 0.0 {
            errors.push(format!("spot {} must be positive", self.spot));
        }

        if self.fallback_spot <= 0.0 {
            errors.push(format!(
                "fallback_spot {} must be positive",
                self.fallback_spot
            ));
        }

        if self.chain.strike <= 0.0 {
            errors.push(format!("chain strike {} must be positive", self.chain.strike));
        }

        if self.chain.maturity <= 0.0 {
            errors.push(format!(
                "chain maturity {} must be positive",
                self.chain.maturity
            ));
        }

        if self.interval_secs == 0 {
            errors.push("interval_secs must be greater than 0".to_string());
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }
}
