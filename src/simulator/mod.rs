//! Monte Carlo driver: runs a strategy many times and aggregates yields.
//!
//! Each run gets its own generator, seeded from the configured seed plus the
//! run index, so a seeded simulation is reproducible run by run.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, run_simulation_with};
