use super::probability::Probability;
use crate::device::{Device, Rank};
use crate::error::{BlackBoxError, Result};
use std::collections::HashMap;
use std::fmt;

/// Number of devices fed into every combination.
pub const DEVICES_PER_COMBINATION: usize = 4;

/// Count of each rank among the four combined devices, in C, B, A, S order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompositionKey([u8; 4]);

impl CompositionKey {
    pub const fn new(c: u8, b: u8, a: u8, s: u8) -> Self {
        Self([c, b, a, s])
    }

    pub fn from_devices(devices: &[Device; DEVICES_PER_COMBINATION]) -> Self {
        let mut counts = [0u8; 4];
        for device in devices {
            counts[device.rank.index()] += 1;
        }
        Self(counts)
    }

    pub fn count(&self, rank: Rank) -> u8 {
        self.0[rank.index()]
    }

    pub fn counts(&self) -> [u8; 4] {
        self.0
    }

    pub fn total(&self) -> u32 {
        self.0.iter().map(|&n| n as u32).sum()
    }
}

impl fmt::Display for CompositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c, b, a, s] = self.0;
        write!(f, "({}, {}, {}, {})", c, b, a, s)
    }
}

/// Named set of probability tables used for one simulation level.
#[derive(Debug, Clone, PartialEq)]
pub struct Stabilizer {
    level: u32,
    tables: HashMap<CompositionKey, Probability>,
}

impl Stabilizer {
    pub fn new(level: u32, tables: HashMap<CompositionKey, Probability>) -> Self {
        Self { level, tables }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn table(&self, key: &CompositionKey) -> Option<&Probability> {
        self.tables.get(key)
    }

    /// Replace (or add) the table for one composition. Returns the table it
    /// replaced. Must not be called while a simulation is using this
    /// stabilizer.
    pub fn set_table(&mut self, key: CompositionKey, table: Probability) -> Option<Probability> {
        self.tables.insert(key, table)
    }

    /// Builder form of [`Stabilizer::set_table`].
    pub fn with_table(mut self, key: CompositionKey, table: Probability) -> Self {
        self.set_table(key, table);
        self
    }

    pub fn lookup_key(&self, key: &CompositionKey) -> Result<&Probability> {
        self.tables
            .get(key)
            .ok_or(BlackBoxError::MissingConfiguration {
                level: self.level,
                key: *key,
            })
    }

    /// Probability table for the rank composition of `devices`.
    pub fn lookup(&self, devices: &[Device; DEVICES_PER_COMBINATION]) -> Result<&Probability> {
        self.lookup_key(&CompositionKey::from_devices(devices))
    }

    /// Composition keys whose weights do not add up to exactly 100.
    pub fn irregular_tables(&self) -> Vec<(CompositionKey, u32)> {
        let mut irregular: Vec<_> = self
            .tables
            .iter()
            .filter(|(_, p)| p.total() != super::probability::ROLL_MAX)
            .map(|(k, p)| (*k, p.total()))
            .collect();
        irregular.sort_by_key(|(k, _)| std::cmp::Reverse(k.counts()));
        irregular
    }
}

impl fmt::Display for Stabilizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stabilizer level {}", self.level)
    }
}
