//! Error type shared by every layer of the simulator.

use crate::stabilizer::CompositionKey;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlackBoxError {
    /// The roll is above the last cumulative threshold of a probability
    /// table. Only happens when the table weights sum to less than the roll.
    #[error("roll {roll} is out of range (table only covers 1..={max})")]
    OutOfRange { roll: u32, max: u32 },

    #[error("stabilizer level {level} has no probability table for composition {key}")]
    MissingConfiguration { level: u32, key: CompositionKey },

    #[error("the stabilizer level {0} is not yet available")]
    UnavailableStabilizer(u32),

    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),

    #[error("not enough devices to start: need {needed}, have {available}")]
    InsufficientStock { needed: usize, available: usize },

    #[error("a simulation needs at least one run")]
    EmptyRun,
}

pub type Result<T> = std::result::Result<T, BlackBoxError>;
