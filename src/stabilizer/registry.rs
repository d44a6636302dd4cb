use super::data::{TableRow, LEVEL_0};
use super::probability::Probability;
use super::types::{CompositionKey, Stabilizer};
use crate::error::{BlackBoxError, Result};
use std::collections::BTreeMap;

/// Every stabilizer level the simulator knows about.
#[derive(Debug, Clone)]
pub struct StabilizerRegistry {
    stabilizers: BTreeMap<u32, Stabilizer>,
}

impl Default for StabilizerRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl StabilizerRegistry {
    pub fn empty() -> Self {
        Self {
            stabilizers: BTreeMap::new(),
        }
    }

    /// Registry with the built-in levels.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(stabilizer_from_rows(0, &LEVEL_0));
        registry
    }

    /// Add or replace the stabilizer for its level.
    pub fn register(&mut self, stabilizer: Stabilizer) {
        for (key, total) in stabilizer.irregular_tables() {
            tracing::debug!(
                level = stabilizer.level(),
                %key,
                total,
                "probability table does not sum to 100"
            );
        }
        self.stabilizers.insert(stabilizer.level(), stabilizer);
    }

    pub fn get(&self, level: u32) -> Result<&Stabilizer> {
        self.stabilizers
            .get(&level)
            .ok_or(BlackBoxError::UnavailableStabilizer(level))
    }

    /// Registered levels in ascending order.
    pub fn levels(&self) -> Vec<u32> {
        self.stabilizers.keys().copied().collect()
    }
}

/// Build a stabilizer from static table rows.
pub fn stabilizer_from_rows(level: u32, rows: &[TableRow]) -> Stabilizer {
    let tables = rows
        .iter()
        .map(|&([c, b, a, s], weights)| {
            (
                CompositionKey::new(c, b, a, s),
                Probability::from_weights(weights),
            )
        })
        .collect();
    Stabilizer::new(level, tables)
}

/// Built-in stabilizer for `level`.
pub fn stabilizer_for_level(level: u32) -> Result<Stabilizer> {
    StabilizerRegistry::standard().get(level).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Rank;

    #[test]
    fn test_standard_has_level_0() {
        let registry = StabilizerRegistry::standard();
        assert_eq!(registry.levels(), vec![0]);
        let stabilizer = registry.get(0).unwrap();
        assert_eq!(stabilizer.level(), 0);
        assert_eq!(stabilizer.len(), 35);
        assert_eq!(
            stabilizer.table(&CompositionKey::new(0, 4, 0, 0)),
            Some(&Probability::new(0, 60, 38, 2))
        );
    }

    #[test]
    fn test_unavailable_level() {
        let registry = StabilizerRegistry::standard();
        assert_eq!(
            registry.get(1).unwrap_err(),
            BlackBoxError::UnavailableStabilizer(1)
        );
        assert_eq!(
            stabilizer_for_level(7).unwrap_err().to_string(),
            "the stabilizer level 7 is not yet available"
        );
    }

    #[test]
    fn test_register_custom_level() {
        let mut registry = StabilizerRegistry::standard();
        let custom = Stabilizer::new(4, Default::default())
            .with_table(CompositionKey::new(0, 4, 0, 0), Probability::always(Rank::S));
        registry.register(custom);
        assert_eq!(registry.levels(), vec![0, 4]);
        assert_eq!(registry.get(4).unwrap().len(), 1);
    }

    #[test]
    fn test_level_0_irregular_tables() {
        let stabilizer = stabilizer_for_level(0).unwrap();
        let irregular = stabilizer.irregular_tables();
        assert_eq!(
            irregular,
            vec![
                (CompositionKey::new(3, 1, 0, 0), 99),
                (CompositionKey::new(2, 0, 0, 2), 99),
                (CompositionKey::new(0, 2, 1, 1), 101),
            ]
        );
    }
}
