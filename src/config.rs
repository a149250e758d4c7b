//! Run parameters for a batch of simulated games.
//!
//! Defaults can be overridden from `MONOSIM_TURNS_PER_RUN`, `MONOSIM_RUNS`,
//! `MONOSIM_SEED` and `MONOSIM_PARALLEL`, or read from JSON.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

pub const TURNS_PER_RUN_VAR: &str = "MONOSIM_TURNS_PER_RUN";
pub const RUNS_VAR: &str = "MONOSIM_RUNS";
pub const SEED_VAR: &str = "MONOSIM_SEED";
pub const PARALLEL_VAR: &str = "MONOSIM_PARALLEL";

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub turns_per_run: u32,
    pub number_of_runs: u32,
    /// Base seed; run `i` is seeded with `seed + i`. Random when unset.
    pub seed: Option<u64>,
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            turns_per_run: 100,
            number_of_runs: 100,
            seed: None,
            parallel: true,
        }
    }
}

impl SimulationConfig {
    pub fn new(turns_per_run: u32, number_of_runs: u32) -> Self {
        SimulationConfig {
            turns_per_run,
            number_of_runs,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Defaults overridden by whichever environment variables are set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = SimulationConfig::default();
        if let Some(value) = lookup(TURNS_PER_RUN_VAR) {
            config.turns_per_run = parse_var(TURNS_PER_RUN_VAR, &value)?;
        }
        if let Some(value) = lookup(RUNS_VAR) {
            config.number_of_runs = parse_var(RUNS_VAR, &value)?;
        }
        if let Some(value) = lookup(SEED_VAR) {
            config.seed = Some(parse_var(SEED_VAR, &value)?);
        }
        if let Some(value) = lookup(PARALLEL_VAR) {
            config.parallel = parse_var(PARALLEL_VAR, &value)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(json)
            .map_err(|e| SimulationError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.turns_per_run == 0 {
            return Err(SimulationError::InvalidConfig(
                "turns_per_run must be positive".to_string(),
            ));
        }
        if self.number_of_runs == 0 {
            return Err(SimulationError::InvalidConfig(
                "number_of_runs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| SimulationError::InvalidConfig(format!("{key}={value} cannot be parsed")))
}
