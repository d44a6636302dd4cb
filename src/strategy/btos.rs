//! "B to S": always combine devices of the same rank, starting from a pile
//! of B-rank devices and working up to S.

use super::report::{efficiency, PhaseYield, RunReport};
use crate::combiner::Combiner;
use crate::device::{Device, Rank};
use crate::error::{BlackBoxError, Result};
use crate::stabilizer::{Stabilizer, DEVICES_PER_COMBINATION};
use crate::stock::Stock;
use rand::Rng;

pub const NAME: &str = "B to S, Same Rank / Random Type combinations";

pub const DESCRIPTION: &str = "\
Always combines devices of the same rank: 4xB or 4xA. Device types are
ignored (they are picked randomly). Starts at Rank B and goes up to Rank S,
using every device to maximize the number of stars of the final S-rank
devices.";

/// Piles that results are sorted into, by rank and whether they have stars.
#[derive(Debug, Default)]
struct Piles {
    a0: Stock,
    a1: Stock,
    s0: Stock,
    s1: Stock,
}

#[derive(Debug, Clone, Copy)]
enum Feed {
    A0,
    A1,
}

impl Piles {
    /// Sort a result above B into its pile.
    fn bank(&mut self, device: Device) {
        let pile = match (device.rank, device.stars == 0) {
            (Rank::S, true) => &mut self.s0,
            (Rank::S, false) => &mut self.s1,
            (_, true) => &mut self.a0,
            (_, false) => &mut self.a1,
        };
        pile.push(device);
    }

    fn feed(&mut self, feed: Feed) -> &mut Stock {
        match feed {
            Feed::A0 => &mut self.a0,
            Feed::A1 => &mut self.a1,
        }
    }

    /// Next A-rank base: starred devices first.
    fn next_a_base(&mut self) -> Option<Device> {
        self.a1.pop().or_else(|| self.a0.pop())
    }

    fn snapshot(&self) -> PhaseYield {
        PhaseYield {
            a0: self.a0.len(),
            a1: self.a1.len(),
            s0: self.s0.len(),
            s1: self.s1.len(),
        }
    }
}

/// B to S strategy parameters.
#[derive(Debug, Clone, Copy)]
pub struct BtoS {
    pub starting_devices: usize,
}

impl BtoS {
    pub fn new(starting_devices: usize) -> Self {
        Self { starting_devices }
    }

    pub fn run<R: Rng>(&self, stabilizer: &Stabilizer, rng: &mut R) -> Result<RunReport> {
        if self.starting_devices < DEVICES_PER_COMBINATION {
            return Err(BlackBoxError::InsufficientStock {
                needed: DEVICES_PER_COMBINATION,
                available: self.starting_devices,
            });
        }

        tracing::info!(
            strategy = NAME,
            level = stabilizer.level(),
            devices = self.starting_devices,
            "running strategy"
        );

        let combiner = Combiner::new(stabilizer);
        let mut b_stock: Stock = (0..self.starting_devices)
            .map(|_| Device::with_rank(Rank::B, rng))
            .collect();
        let mut piles = Piles::default();
        let mut combinations = 0;

        // Phase 1: feed B devices into a single base until it leaves rank B.
        let mut base = b_stock.pop();
        while let Some(current) = base {
            let Some([d2, d3, d4]) = b_stock.pop_many::<3>() else {
                break;
            };
            let result = combiner.combine(&[current, d2, d3, d4], rng)?;
            combinations += 1;

            if result.rank > Rank::B {
                piles.bank(result);
                base = b_stock.pop();
            } else {
                base = Some(result);
            }
        }
        let phase1 = piles.snapshot();
        let phase1_unfinished = base;
        tracing::debug!(combinations, ?phase1, "phase 1 complete");

        // Phase 2: feed 0-star A devices, then starred ones, into an A base.
        let mut base = piles.next_a_base();
        for feed in [Feed::A0, Feed::A1] {
            base = refine(&combiner, base, feed, &mut piles, &mut combinations, rng)?;
        }
        let phase2_unfinished = base;
        tracing::debug!(combinations, "phase 2 complete");

        let a_left: Stock = piles.a0.iter().chain(piles.a1.iter()).copied().collect();
        let s_obtained: Stock = piles.s0.iter().chain(piles.s1.iter()).copied().collect();

        let final_yield = piles.snapshot();
        let b_used = self.starting_devices - b_stock.len();
        let report = RunReport {
            strategy: NAME,
            stabilizer_level: stabilizer.level(),
            starting_devices: self.starting_devices,
            phase1,
            final_yield,
            b_left: b_stock,
            a_left,
            s_obtained,
            phase1_unfinished,
            phase2_unfinished,
            b_used,
            combinations,
            efficiency: efficiency(b_used, final_yield.s0 + final_yield.s1),
        };
        tracing::info!(
            combinations,
            s_rank = report.s_total(),
            "strategy finished"
        );
        Ok(report)
    }
}

/// Combine `base` with devices drawn three at a time from `feed` until the
/// feed runs dry. S-rank results are banked and replaced by a fresh A base.
fn refine<R: Rng>(
    combiner: &Combiner<'_>,
    mut base: Option<Device>,
    feed: Feed,
    piles: &mut Piles,
    combinations: &mut usize,
    rng: &mut R,
) -> Result<Option<Device>> {
    while let Some(current) = base {
        let Some([d2, d3, d4]) = piles.feed(feed).pop_many::<3>() else {
            break;
        };
        let result = combiner.combine(&[current, d2, d3, d4], rng)?;
        *combinations += 1;

        if result.rank == Rank::S {
            piles.bank(result);
            base = piles.next_a_base();
        } else {
            base = Some(result);
        }
    }
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DeviceType;
    use crate::stabilizer::{stabilizer_for_level, CompositionKey, Probability};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_too_few_devices() {
        let stabilizer = stabilizer_for_level(0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            BtoS::new(3).run(&stabilizer, &mut rng).unwrap_err(),
            BlackBoxError::InsufficientStock {
                needed: 4,
                available: 3
            }
        );
    }

    #[test]
    fn test_forced_b_rolls_climb_by_stars() {
        // Every B combination stays B, so a base needs 5 combinations to
        // reach a 0-star A. 16 devices: base + 15 fed = 5 combinations.
        let stabilizer = stabilizer_for_level(0)
            .unwrap()
            .with_table(CompositionKey::new(0, 4, 0, 0), Probability::always(Rank::B));
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let report = BtoS::new(16).run(&stabilizer, &mut rng).unwrap();

        assert_eq!(report.combinations, 5);
        assert_eq!(report.phase1, PhaseYield { a0: 1, a1: 0, s0: 0, s1: 0 });
        assert!(report.b_left.is_empty());
        assert_eq!(report.phase1_unfinished, None);
        assert_eq!(report.b_used, 16);
        // A single A device cannot be combined further.
        let unfinished = report.phase2_unfinished.unwrap();
        assert_eq!((unfinished.rank, unfinished.stars), (Rank::A, 0));
        assert_eq!(report.s_total(), 0);
        assert_eq!(report.efficiency, None);
    }

    #[test]
    fn test_forced_upgrades_bank_every_result() {
        // Every B combination rolls A (1 star); every A combination rolls S.
        let stabilizer = stabilizer_for_level(0)
            .unwrap()
            .with_table(CompositionKey::new(0, 4, 0, 0), Probability::always(Rank::A))
            .with_table(CompositionKey::new(0, 0, 4, 0), Probability::always(Rank::S));
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        // 32 B devices: 8 combinations, 8 A1 devices.
        let report = BtoS::new(32).run(&stabilizer, &mut rng).unwrap();

        assert_eq!(report.phase1, PhaseYield { a0: 0, a1: 8, s0: 0, s1: 0 });
        // Phase 2 uses one A1 as base and feeds 3 at a time: 8 = 4 + 4,
        // producing two S1 devices.
        assert_eq!(report.final_yield.s1, 2);
        assert_eq!(report.s1_phase2(), 2);
        assert_eq!(report.combinations, 10);
        assert!(report.a_left.is_empty());
        assert_eq!(report.phase2_unfinished, None);
        assert_eq!(report.efficiency, Some(16.0));
        assert_eq!(report.s_obtained.len(), 2);
        assert!(report
            .s_obtained
            .iter()
            .all(|d| d.rank == Rank::S && d.stars == 1));
    }

    #[test]
    fn test_bank_sorts_by_rank_and_stars() {
        let mut piles = Piles::default();
        let results = [(Rank::A, 0), (Rank::A, 2), (Rank::S, 0), (Rank::S, 1), (Rank::S, 3)];
        for (rank, stars) in results {
            piles.bank(Device::new(rank, stars, DeviceType::Scope));
        }
        assert_eq!(piles.snapshot(), PhaseYield { a0: 1, a1: 1, s0: 1, s1: 2 });
        assert!(piles.s0.iter().all(|d| d.rank == Rank::S && d.stars == 0));
        assert!(piles.s1.iter().all(|d| d.rank == Rank::S && d.stars > 0));
        // Starred A bases come first; S piles are never drawn from.
        assert_eq!(piles.next_a_base().map(|d| d.stars), Some(2));
        assert_eq!(piles.next_a_base().map(|d| d.stars), Some(0));
        assert_eq!(piles.next_a_base(), None);
        assert_eq!(piles.snapshot().s1, 2);
    }
}
