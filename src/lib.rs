//! Hawk Black Box - device combination simulator
//!
//! Four devices go into the black box and one comes out. The output rank is
//! drawn from the stabilizer's probability table for the inputs' rank
//! composition; stars build up on the best input until they roll over into
//! the next rank. Strategies run the box over a large stock to estimate
//! how many devices it takes to reach S rank.

pub mod combiner;
pub mod device;
pub mod error;
pub mod simulator;
pub mod stabilizer;
pub mod stock;
pub mod strategy;

pub use combiner::{combine, Combiner};
pub use device::{Device, DeviceType, Rank};
pub use error::{BlackBoxError, Result};
pub use stabilizer::{CompositionKey, Probability, Stabilizer, StabilizerRegistry};
pub use stock::Stock;
pub use strategy::{RunReport, StrategyKind};
