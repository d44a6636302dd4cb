//! Strategies: depletion policies that drive the combiner over a stock.

pub mod btos;
pub mod report;

pub use btos::BtoS;
pub use report::{PhaseYield, RunReport};

use crate::error::{BlackBoxError, Result};
use crate::stabilizer::Stabilizer;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Registered strategies, selectable by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    BtoS,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 1] = [StrategyKind::BtoS];

    /// Short identifier used on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            StrategyKind::BtoS => "BtoS",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::BtoS => btos::NAME,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StrategyKind::BtoS => btos::DESCRIPTION,
        }
    }

    /// Run the strategy once against `stabilizer`.
    pub fn run<R: Rng>(
        &self,
        stabilizer: &Stabilizer,
        starting_devices: usize,
        rng: &mut R,
    ) -> Result<RunReport> {
        match self {
            StrategyKind::BtoS => BtoS::new(starting_devices).run(stabilizer, rng),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for StrategyKind {
    type Err = BlackBoxError;

    fn from_str(s: &str) -> Result<Self> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| BlackBoxError::UnknownStrategy(s.to_string()))
    }
}
