//! Simulation configuration.

use crate::error::{BlackBoxError, Result};
use crate::stabilizer::DEVICES_PER_COMBINATION;
use crate::strategy::StrategyKind;

/// Configuration for a simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Strategy to run
    pub strategy: StrategyKind,

    /// Stabilizer level looked up in the registry
    pub stabilizer_level: u32,

    /// Devices the strategy starts with
    pub starting_devices: usize,

    /// Number of independent runs
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::BtoS,
            stabilizer_level: 0,
            starting_devices: 100_000,
            num_runs: 1,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Single B to S run.
    pub fn btos(stabilizer_level: u32, starting_devices: usize) -> Self {
        Self {
            strategy: StrategyKind::BtoS,
            stabilizer_level,
            starting_devices,
            ..Default::default()
        }
    }

    /// Many small runs, for a quick look at the spread of results.
    pub fn quick() -> Self {
        Self {
            starting_devices: 10_000,
            num_runs: 20,
            ..Default::default()
        }
    }

    /// Reject configurations that cannot complete a single combination.
    pub fn validate(&self) -> Result<()> {
        if self.num_runs == 0 {
            return Err(BlackBoxError::EmptyRun);
        }
        if self.starting_devices < DEVICES_PER_COMBINATION {
            return Err(BlackBoxError::InsufficientStock {
                needed: DEVICES_PER_COMBINATION,
                available: self.starting_devices,
            });
        }
        Ok(())
    }
}
