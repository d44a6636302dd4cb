//! Runs a configured strategy repeatedly.

use super::config::SimConfig;
use super::report::SimReport;
use crate::error::Result;
use crate::stabilizer::{Stabilizer, StabilizerRegistry};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Run the simulation with the built-in stabilizer for the configured level.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport> {
    let registry = StabilizerRegistry::standard();
    let stabilizer = registry.get(config.stabilizer_level)?;
    run_simulation_with(config, stabilizer)
}

/// Run the simulation against an explicit stabilizer. The configured level
/// is ignored.
pub fn run_simulation_with(config: &SimConfig, stabilizer: &Stabilizer) -> Result<SimReport> {
    config.validate()?;

    let mut runs = Vec::with_capacity(config.num_runs as usize);
    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = config
            .strategy
            .run(stabilizer, config.starting_devices, &mut rng)?;

        tracing::debug!(
            run = run_idx + 1,
            of = config.num_runs,
            combinations = run.combinations,
            s_rank = run.s_total(),
            efficiency = ?run.efficiency,
            "run complete"
        );
        runs.push(run);
    }

    Ok(SimReport::from_runs(config, stabilizer, runs))
}
